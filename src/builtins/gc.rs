// ABOUTME: The `gc` builtin: runs one mark-and-sweep collection cycle

use crate::error::InterpError;
use crate::interpreter::Interpreter;
use crate::value::ValueId;

pub fn gc(interp: &mut Interpreter, args: &[ValueId]) -> Result<ValueId, InterpError> {
    if !args.is_empty() {
        return Err(InterpError::arity("gc", 0, args.len()));
    }
    interp.collect();
    Ok(interp.no_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Expr;

    #[test]
    fn gc_reclaims_unreachable_garbage() {
        let mut interp = Interpreter::new();
        interp.read_eval("(+ 1 2)").unwrap(); // garbage: result never bound
        let before = interp.value_count();
        interp.read_eval("(gc)").unwrap();
        assert!(interp.value_count() < before);
    }

    #[test]
    fn gc_keeps_reachable_bindings_intact() {
        let mut interp = Interpreter::new();
        interp.read_eval("(define x 7)").unwrap();
        interp.read_eval("(gc)").unwrap();
        let id = interp.read_eval("x").unwrap();
        assert!(matches!(interp.get(id), Expr::Integer(7)));
    }

    #[test]
    fn gc_with_arguments_is_an_arity_error() {
        let mut interp = Interpreter::new();
        let err = interp.read_eval("(gc 1)").unwrap_err();
        assert!(matches!(err, InterpError::ArityMismatch { .. }));
    }
}
