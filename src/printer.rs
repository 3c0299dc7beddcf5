// ABOUTME: Renders a value tree in verbose (debug) or surface (REPL) form

use crate::interpreter::Interpreter;
use crate::value::{Expr, ValueId};

/// Verbose form: `EXPRLIST[...]`, `INT: n`, `SYM:'s'`, matching the internal
/// tracing style the original interpreter used for every evaluated node.
/// Returns `None` for the "no value" sentinel, which callers should not
/// print at all.
pub fn render_verbose(interp: &Interpreter, id: ValueId) -> Option<String> {
    if id == interp.no_value() {
        return None;
    }
    let mut out = String::new();
    write_verbose(interp, id, &mut out);
    Some(out)
}

/// Surface form: bare `( ... )`, digits, unadorned symbols — the form the
/// reader would accept back as input. Also suppresses the sentinel.
pub fn render_surface(interp: &Interpreter, id: ValueId) -> Option<String> {
    if id == interp.no_value() {
        return None;
    }
    let mut out = String::new();
    write_surface(interp, id, &mut out);
    Some(out)
}

fn write_verbose(interp: &Interpreter, id: ValueId, out: &mut String) {
    match interp.get(id) {
        Expr::Integer(n) => out.push_str(&format!(" INT: {} ", n)),
        Expr::Symbol(s) => out.push_str(&format!(" SYM:'{}' ", s)),
        Expr::Empty => out.push_str("()"),
        Expr::List(items) => {
            out.push_str(" EXPRLIST[");
            for &item in items {
                write_verbose(interp, item, out);
            }
            out.push(']');
        }
        Expr::Procedure(f) => out.push_str(&format!(" PROC: {:#x} ", *f as usize)),
        Expr::Lambda(l) => {
            let (params, body) = (l.params, l.body);
            out.push_str("[LAMBDA EXPR ARGS:");
            write_verbose(interp, params, out);
            out.push_str(" BODY ");
            write_verbose(interp, body, out);
            out.push(']');
        }
    }
}

fn write_surface(interp: &Interpreter, id: ValueId, out: &mut String) {
    match interp.get(id) {
        Expr::Integer(n) => out.push_str(&n.to_string()),
        Expr::Symbol(s) => out.push_str(s),
        Expr::Empty => out.push_str(" [] "),
        Expr::List(items) => {
            out.push('(');
            for (i, &item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_surface(interp, item, out);
            }
            out.push(')');
        }
        Expr::Procedure(f) => out.push_str(&format!("<proc {:#x}>", *f as usize)),
        Expr::Lambda(_) => out.push_str("<lambda>"),
    }
}
