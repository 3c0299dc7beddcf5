// ABOUTME: Frame (ordered association list) and lookup/bind/assign over it

use crate::error::InterpError;
use crate::memory::Memory;
use crate::value::{FrameId, ValueId};

/// One activation record: an ordered list of (symbol, value) pairs plus an
/// optional outer frame. The global environment is the frame with no outer.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub bindings: Vec<(ValueId, ValueId)>,
    pub outer: Option<FrameId>,
}

/// Scans `frame`'s bindings for a pair whose key's symbol text equals
/// `name`, then its outer frame, and so on. Returns the first match.
pub fn lookup(memory: &Memory, frame: FrameId, name: &str) -> Option<ValueId> {
    let mut current = Some(frame);
    while let Some(id) = current {
        let f = memory.get_frame(id);
        for (key, value) in &f.bindings {
            if memory.symbol_text(*key) == Some(name) {
                return Some(*value);
            }
        }
        current = f.outer;
    }
    None
}

/// Creates or updates a binding in `frame` itself. Never walks the outer
/// chain — this is what `define` uses.
pub fn bind(memory: &mut Memory, frame: FrameId, sym: ValueId, value: ValueId) {
    let name = memory.symbol_text(sym).unwrap_or("").to_string();
    let existing = memory
        .get_frame(frame)
        .bindings
        .iter()
        .position(|(key, _)| memory.symbol_text(*key) == Some(name.as_str()));

    let f = memory.get_frame_mut(frame);
    match existing {
        Some(i) => f.bindings[i].1 = value,
        None => f.bindings.push((sym, value)),
    }
}

/// Walks the frame chain outward for an existing binding and updates it in
/// place. Fails with `Unbound` if no frame in the chain holds it. This is
/// what `set!` uses; unlike `bind` it never creates a new binding.
pub fn assign(memory: &mut Memory, frame: FrameId, sym: ValueId, value: ValueId) -> Result<(), InterpError> {
    let name = memory.symbol_text(sym).unwrap_or("").to_string();
    let mut current = Some(frame);
    while let Some(id) = current {
        let position = memory
            .get_frame(id)
            .bindings
            .iter()
            .position(|(key, _)| memory.symbol_text(*key) == Some(name.as_str()));
        if let Some(i) = position {
            memory.get_frame_mut(id).bindings[i].1 = value;
            return Ok(());
        }
        current = memory.get_frame(id).outer;
    }
    Err(InterpError::Unbound(name))
}
