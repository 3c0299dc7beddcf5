// ABOUTME: Arena-backed value/frame registries and the mark-and-sweep collector

use crate::env::Frame;
use crate::value::{Expr, FrameId, ValueId};

#[derive(Debug)]
struct Slot<T> {
    data: Option<T>,
    marked: bool,
}

/// Append-only registries for values and frames, indexed by `ValueId`/
/// `FrameId`. Slots freed by a collection cycle are reused by later
/// allocations via the free lists.
#[derive(Debug, Default)]
pub struct Memory {
    values: Vec<Slot<Expr>>,
    value_free: Vec<ValueId>,
    frames: Vec<Slot<Frame>>,
    frame_free: Vec<FrameId>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_value(&mut self, expr: Expr) -> ValueId {
        if let Some(id) = self.value_free.pop() {
            self.values[id] = Slot {
                data: Some(expr),
                marked: false,
            };
            id
        } else {
            self.values.push(Slot {
                data: Some(expr),
                marked: false,
            });
            self.values.len() - 1
        }
    }

    pub fn alloc_frame(&mut self, outer: Option<FrameId>) -> FrameId {
        let frame = Frame {
            bindings: Vec::new(),
            outer,
        };
        if let Some(id) = self.frame_free.pop() {
            self.frames[id] = Slot {
                data: Some(frame),
                marked: false,
            };
            id
        } else {
            self.frames.push(Slot {
                data: Some(frame),
                marked: false,
            });
            self.frames.len() - 1
        }
    }

    pub fn get_value(&self, id: ValueId) -> &Expr {
        self.values[id]
            .data
            .as_ref()
            .expect("dangling ValueId: value already collected")
    }

    pub fn get_frame(&self, id: FrameId) -> &Frame {
        self.frames[id]
            .data
            .as_ref()
            .expect("dangling FrameId: frame already collected")
    }

    pub fn get_frame_mut(&mut self, id: FrameId) -> &mut Frame {
        self.frames[id]
            .data
            .as_mut()
            .expect("dangling FrameId: frame already collected")
    }

    pub fn symbol_text(&self, id: ValueId) -> Option<&str> {
        match self.get_value(id) {
            Expr::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn value_count(&self) -> usize {
        self.values.iter().filter(|s| s.data.is_some()).count()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.iter().filter(|s| s.data.is_some()).count()
    }

    /// Runs one mark-and-sweep cycle: clears all marks, marks everything
    /// reachable from `current_frame`'s outer chain plus `extra_roots`, then
    /// frees every unmarked slot in both arenas.
    pub fn collect(&mut self, current_frame: FrameId, extra_roots: &[ValueId]) {
        for slot in &mut self.values {
            slot.marked = false;
        }
        for slot in &mut self.frames {
            slot.marked = false;
        }

        let mut frame_cursor = Some(current_frame);
        while let Some(id) = frame_cursor {
            if self.frames[id].marked {
                break;
            }
            self.frames[id].marked = true;
            let outer = self.frames[id].data.as_ref().and_then(|f| f.outer);
            let pairs: Vec<(ValueId, ValueId)> = self.frames[id]
                .data
                .as_ref()
                .map(|f| f.bindings.clone())
                .unwrap_or_default();
            for (key, value) in pairs {
                self.mark_value(key);
                self.mark_value(value);
            }
            frame_cursor = outer;
        }

        for &root in extra_roots {
            self.mark_value(root);
        }

        for slot in &mut self.values {
            if !slot.marked {
                slot.data = None;
            }
        }
        self.value_free = self
            .values
            .iter()
            .enumerate()
            .filter(|(_, s)| s.data.is_none())
            .map(|(i, _)| i)
            .collect();

        for slot in &mut self.frames {
            if !slot.marked {
                slot.data = None;
            }
        }
        self.frame_free = self
            .frames
            .iter()
            .enumerate()
            .filter(|(_, s)| s.data.is_none())
            .map(|(i, _)| i)
            .collect();
    }

    fn mark_value(&mut self, id: ValueId) {
        if self.values[id].marked {
            return;
        }
        self.values[id].marked = true;
        let children: Vec<ValueId> = match self.values[id].data.as_ref() {
            Some(Expr::List(items)) => items.clone(),
            Some(Expr::Lambda(l)) => vec![l.params, l.body],
            _ => Vec::new(),
        };
        for child in children {
            self.mark_value(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_value_survives_collect() {
        let mut mem = Memory::new();
        let v = mem.alloc_value(Expr::Integer(42));
        let root = mem.alloc_frame(None);
        let sym = mem.alloc_value(Expr::Symbol("x".into()));
        mem.get_frame_mut(root).bindings.push((sym, v));

        mem.collect(root, &[]);

        assert!(matches!(mem.get_value(v), Expr::Integer(42)));
    }

    #[test]
    fn unreachable_value_is_swept() {
        let mut mem = Memory::new();
        let root = mem.alloc_frame(None);
        let garbage = mem.alloc_value(Expr::Integer(7));

        mem.collect(root, &[]);

        let reused = mem.alloc_value(Expr::Integer(99));
        assert_eq!(reused, garbage, "freed slot should be reused");
    }

    #[test]
    fn extra_root_keeps_nested_list_structure_reachable() {
        let mut mem = Memory::new();
        let root = mem.alloc_frame(None);
        let inner = mem.alloc_value(Expr::Integer(5));
        let outer = mem.alloc_value(Expr::List(vec![inner]));

        // `outer` is rooted only via `extra_roots`, not through any frame
        // binding -- this is the shape of an in-flight `body_copy` that a
        // nested `(gc)` call must not sweep out from under its caller.
        mem.collect(root, &[outer]);

        assert!(matches!(mem.get_value(outer), Expr::List(_)));
        assert!(matches!(mem.get_value(inner), Expr::Integer(5)));
    }

    #[test]
    fn repeated_collect_does_not_double_free() {
        let mut mem = Memory::new();
        let root = mem.alloc_frame(None);
        mem.collect(root, &[]);
        mem.collect(root, &[]);
        assert_eq!(mem.frame_count(), 1);
    }

    #[test]
    fn independent_memories_do_not_interfere() {
        let mut a = Memory::new();
        let mut b = Memory::new();
        let va = a.alloc_value(Expr::Integer(1));
        let vb = b.alloc_value(Expr::Integer(2));
        assert_eq!(va, vb); // same index, different arenas
        assert!(matches!(a.get_value(va), Expr::Integer(1)));
        assert!(matches!(b.get_value(vb), Expr::Integer(2)));
    }
}
