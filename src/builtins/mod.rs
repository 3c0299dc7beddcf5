// ABOUTME: Registers the global environment's built-in bindings

pub mod arithmetic;
pub mod comparison;
pub mod gc;

use crate::interpreter::Interpreter;
use crate::value::Builtin;

pub fn register(interp: &mut Interpreter) {
    let true_sym = interp.alloc_bool(true);
    let false_sym = interp.alloc_bool(false);
    interp.bind_global("#t", true_sym);
    interp.bind_global("#f", false_sym);

    define_procedure(interp, "+", arithmetic::add);
    define_procedure(interp, "-", arithmetic::sub);
    define_procedure(interp, "*", arithmetic::mul);
    define_procedure(interp, "<", comparison::lt);
    define_procedure(interp, ">", comparison::gt);
    define_procedure(interp, "gc", gc::gc);
}

fn define_procedure(interp: &mut Interpreter, name: &str, proc: Builtin) {
    let value = interp.alloc_value(crate::value::Expr::Procedure(proc));
    interp.bind_global(name, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Expr;

    #[test]
    fn booleans_and_procedures_are_bound_in_global() {
        let mut interp = Interpreter::new();
        for name in ["#t", "#f", "+", "-", "*", "<", ">", "gc"] {
            let id = interp.read_eval(name).unwrap();
            let _ = interp.get(id);
        }
    }

    #[test]
    fn boolean_symbols_render_as_t_and_f() {
        let mut interp = Interpreter::new();
        let t = interp.read_eval("#t").unwrap();
        let f = interp.read_eval("#f").unwrap();
        assert!(matches!(interp.get(t), Expr::Symbol(s) if s.as_ref() == "#t"));
        assert!(matches!(interp.get(f), Expr::Symbol(s) if s.as_ref() == "#f"));
    }
}
