// ABOUTME: The explicit handle owning both arenas and the active frame chain

use crate::builtins;
use crate::env;
use crate::error::InterpError;
use crate::eval;
use crate::memory::Memory;
use crate::reader;
use crate::value::{Expr, FrameId, Lambda, ValueId};

/// Owns the value and frame arenas, the global frame, and the frame the
/// collector roots its mark phase from. Constructed explicitly rather than
/// kept behind process-wide statics, so two interpreters can coexist.
pub struct Interpreter {
    pub(crate) memory: Memory,
    global: FrameId,
    pub(crate) current_frame: FrameId,
    /// Stack of value ids currently being evaluated, pushed/popped around
    /// every `eval::eval` call. A collection triggered deep in a call chain
    /// (e.g. by `(gc)` in a recursive lambda body) roots every in-flight
    /// `body_copy` and combination alongside the live frame chain, so it
    /// never sweeps structure an outer stack frame is still holding.
    pub(crate) roots: Vec<ValueId>,
    no_value: ValueId,
    pub trace: bool,
}

impl Interpreter {
    pub fn new() -> Self {
        let mut memory = Memory::new();
        let global = memory.alloc_frame(None);
        let no_value = memory.alloc_value(Expr::Empty);
        let mut interp = Interpreter {
            memory,
            global,
            current_frame: global,
            roots: Vec::new(),
            no_value,
            trace: false,
        };
        builtins::register(&mut interp);
        interp
    }

    pub fn global_frame(&self) -> FrameId {
        self.global
    }

    pub fn current_frame(&self) -> FrameId {
        self.current_frame
    }

    /// The sentinel `define`/`set!`/`gc`/empty-`begin` return. Identity, not
    /// type, marks it: it happens to be an `Expr::Empty` but is allocated
    /// once and compared by id, so it never collides with a reader-produced
    /// `'()` value.
    pub fn no_value(&self) -> ValueId {
        self.no_value
    }

    pub fn get(&self, id: ValueId) -> &Expr {
        self.memory.get_value(id)
    }

    pub(crate) fn alloc_value(&mut self, expr: Expr) -> ValueId {
        self.memory.alloc_value(expr)
    }

    pub(crate) fn alloc_integer(&mut self, n: i64) -> ValueId {
        self.alloc_value(Expr::Integer(n))
    }

    pub(crate) fn alloc_symbol(&mut self, s: &str) -> ValueId {
        self.alloc_value(Expr::Symbol(s.into()))
    }

    pub(crate) fn alloc_bool(&mut self, b: bool) -> ValueId {
        self.alloc_symbol(if b { "#t" } else { "#f" })
    }

    pub(crate) fn alloc_empty(&mut self) -> ValueId {
        self.alloc_value(Expr::Empty)
    }

    pub(crate) fn alloc_list(&mut self, items: Vec<ValueId>) -> ValueId {
        self.alloc_value(Expr::List(items))
    }

    pub(crate) fn alloc_lambda(&mut self, params: ValueId, body: ValueId) -> ValueId {
        self.alloc_value(Expr::Lambda(Lambda { params, body }))
    }

    pub(crate) fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub(crate) fn bind_global(&mut self, name: &str, value: ValueId) {
        let sym = self.alloc_symbol(name);
        let global = self.global;
        env::bind(&mut self.memory, global, sym, value);
    }

    /// Reads one expression from `source` and evaluates it in the global
    /// environment. The entry point the REPL harness and tests drive.
    pub fn read_eval(&mut self, source: &str) -> Result<ValueId, InterpError> {
        let (expr, _rest) = reader::read(self, source.as_bytes())?;
        let global = self.global;
        eval::eval(self, expr, global)
    }

    /// Runs one mark-and-sweep cycle rooted at the current frame chain plus
    /// every value id any still-active `eval` call on the Rust stack is
    /// holding onto.
    pub fn collect(&mut self) {
        let current = self.current_frame;
        let mut roots = self.roots.clone();
        roots.push(self.no_value);
        self.memory.collect(current, &roots);
    }

    pub fn value_count(&self) -> usize {
        self.memory.value_count()
    }

    pub fn frame_count(&self) -> usize {
        self.memory.frame_count()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
