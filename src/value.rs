// ABOUTME: The tagged Expr value type the reader, evaluator, and printer share

use crate::error::InterpError;
use crate::interpreter::Interpreter;

/// Index into the interpreter's value arena.
pub type ValueId = usize;

/// Index into the interpreter's frame arena.
pub type FrameId = usize;

/// A host-provided procedure. Receives the already-evaluated argument list
/// and allocates its own result through the interpreter handle.
pub type Builtin = fn(&mut Interpreter, &[ValueId]) -> Result<ValueId, InterpError>;

#[derive(Debug, Clone, Copy)]
pub struct Lambda {
    /// A List of Symbol ValueIds.
    pub params: ValueId,
    pub body: ValueId,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Integer(i64),
    Symbol(Box<str>),
    List(Vec<ValueId>),
    /// The distinguished empty-list literal produced by the surface form `'()`.
    /// Distinct from `List(vec![])`, which the reader produces for a literal `()`.
    Empty,
    Procedure(Builtin),
    Lambda(Lambda),
}

impl Expr {
    pub fn type_name(&self) -> &'static str {
        match self {
            Expr::Integer(_) => "Integer",
            Expr::Symbol(_) => "Symbol",
            Expr::List(_) => "List",
            Expr::Empty => "Empty",
            Expr::Procedure(_) => "Procedure",
            Expr::Lambda(_) => "Lambda",
        }
    }
}
