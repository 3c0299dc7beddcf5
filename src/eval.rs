// ABOUTME: Recursive tree-walking evaluator: special forms plus application

use crate::error::InterpError;
use crate::interpreter::Interpreter;
use crate::value::{Expr, FrameId, Lambda, ValueId};

/// Evaluates `expr` in `frame`. Ordinary recursion, no trampoline: tail-call
/// optimization is out of scope, and `eval` mirrors the "single recursive
/// operation" the model describes.
///
/// Pushes `expr` onto `interp.roots` for the duration of the call so a
/// `(gc)` nested arbitrarily deep in the recursion sees every in-flight
/// body/combination an ancestor call is still holding, not just the
/// bindings reachable from the frame chain.
pub fn eval(interp: &mut Interpreter, expr: ValueId, frame: FrameId) -> Result<ValueId, InterpError> {
    let previous = interp.current_frame;
    interp.current_frame = frame;
    interp.roots.push(expr);
    let result = eval_inner(interp, expr, frame);
    interp.roots.pop();
    interp.current_frame = previous;
    result
}

fn eval_inner(interp: &mut Interpreter, expr: ValueId, frame: FrameId) -> Result<ValueId, InterpError> {
    if interp.trace {
        if let Some(rendered) = crate::printer::render_verbose(interp, expr) {
            eprintln!("[eval]{}", rendered);
        }
    }
    match interp.get(expr).clone() {
        Expr::Symbol(name) => {
            crate::env::lookup(&interp.memory, frame, &name).ok_or_else(|| InterpError::Unbound(name.to_string()))
        }
        Expr::Integer(_) | Expr::Empty | Expr::Procedure(_) | Expr::Lambda(_) => Ok(expr),
        Expr::List(items) => eval_list(interp, &items, frame),
    }
}

fn eval_list(interp: &mut Interpreter, items: &[ValueId], frame: FrameId) -> Result<ValueId, InterpError> {
    if items.is_empty() {
        return Err(InterpError::EmptyCombination);
    }
    let head = items[0];
    if let Expr::Symbol(name) = interp.get(head).clone() {
        match name.as_ref() {
            "define" => return eval_define(interp, &items[1..], frame),
            "set!" => return eval_set(interp, &items[1..], frame),
            "quote" => return eval_quote(&items[1..]),
            "if" => return eval_if(interp, &items[1..], frame),
            "begin" => return eval_begin(interp, &items[1..], frame),
            "lambda" => return eval_lambda(interp, &items[1..]),
            _ => {}
        }
    }
    eval_application(interp, items, frame)
}

fn eval_define(interp: &mut Interpreter, args: &[ValueId], frame: FrameId) -> Result<ValueId, InterpError> {
    if args.len() != 2 {
        return Err(InterpError::arity("define", 2, args.len()));
    }
    let sym = args[0];
    if !matches!(interp.get(sym), Expr::Symbol(_)) {
        return Err(InterpError::type_error("define", "first argument must be a Symbol"));
    }
    let value = eval(interp, args[1], frame)?;
    crate::env::bind(interp.memory_mut(), frame, sym, value);
    Ok(interp.no_value())
}

fn eval_set(interp: &mut Interpreter, args: &[ValueId], frame: FrameId) -> Result<ValueId, InterpError> {
    if args.len() != 2 {
        return Err(InterpError::arity("set!", 2, args.len()));
    }
    let sym = args[0];
    if !matches!(interp.get(sym), Expr::Symbol(_)) {
        return Err(InterpError::type_error("set!", "first argument must be a Symbol"));
    }
    let value = eval(interp, args[1], frame)?;
    crate::env::assign(interp.memory_mut(), frame, sym, value)?;
    Ok(interp.no_value())
}

fn eval_quote(args: &[ValueId]) -> Result<ValueId, InterpError> {
    if args.len() != 1 {
        return Err(InterpError::arity("quote", 1, args.len()));
    }
    Ok(args[0])
}

fn eval_if(interp: &mut Interpreter, args: &[ValueId], frame: FrameId) -> Result<ValueId, InterpError> {
    if args.len() != 3 {
        return Err(InterpError::arity("if", 3, args.len()));
    }
    let cond = eval(interp, args[0], frame)?;
    let take_then = match interp.get(cond) {
        // Integers are always truthy, regardless of value (0 included).
        Expr::Integer(_) => true,
        Expr::Symbol(s) if s.as_ref() == "#t" => true,
        Expr::Symbol(s) if s.as_ref() == "#f" => false,
        other => return Err(InterpError::IfConditionType(other.type_name().to_string())),
    };
    eval(interp, if take_then { args[1] } else { args[2] }, frame)
}

fn eval_begin(interp: &mut Interpreter, args: &[ValueId], frame: FrameId) -> Result<ValueId, InterpError> {
    let mut result = interp.no_value();
    for &item in args {
        result = eval(interp, item, frame)?;
    }
    Ok(result)
}

fn eval_lambda(interp: &mut Interpreter, args: &[ValueId]) -> Result<ValueId, InterpError> {
    if args.len() != 2 {
        return Err(InterpError::arity("lambda", 2, args.len()));
    }
    let params = args[0];
    match interp.get(params) {
        Expr::List(items) => {
            for &item in items {
                if !matches!(interp.get(item), Expr::Symbol(_)) {
                    return Err(InterpError::type_error("lambda", "parameter list must contain only Symbols"));
                }
            }
        }
        _ => return Err(InterpError::type_error("lambda", "parameter list must be a List")),
    }
    let body = args[1];
    Ok(interp.alloc_lambda(params, body))
}

fn eval_application(interp: &mut Interpreter, items: &[ValueId], frame: FrameId) -> Result<ValueId, InterpError> {
    let mut evaluated = Vec::with_capacity(items.len());
    for &item in items {
        evaluated.push(eval(interp, item, frame)?);
    }
    let head = evaluated[0];
    let args = &evaluated[1..];
    match interp.get(head).clone() {
        Expr::Procedure(f) => f(interp, args),
        Expr::Lambda(lambda) => apply_lambda(interp, lambda, args, frame),
        other => Err(InterpError::NotApplicable(other.type_name().to_string())),
    }
}

/// Dynamic scope: the new activation frame's outer is the *calling* frame,
/// not a frame captured when the lambda was created.
fn apply_lambda(interp: &mut Interpreter, lambda: Lambda, args: &[ValueId], calling_frame: FrameId) -> Result<ValueId, InterpError> {
    let params = match interp.get(lambda.params).clone() {
        Expr::List(items) => items,
        _ => unreachable!("lambda params validated as List at creation"),
    };
    if params.len() != args.len() {
        return Err(InterpError::arity("lambda application", params.len(), args.len()));
    }
    let new_frame = interp.memory_mut().alloc_frame(Some(calling_frame));
    for (&param, &arg) in params.iter().zip(args.iter()) {
        crate::env::bind(interp.memory_mut(), new_frame, param, arg);
    }
    let body_copy = deep_copy(interp, lambda.body);
    eval(interp, body_copy, new_frame)
}

/// Structural copy of a value tree: Integers and Symbols copied as scalars,
/// Lists recursively; Procedures and Lambdas are shared, not copied.
pub fn deep_copy(interp: &mut Interpreter, id: ValueId) -> ValueId {
    match interp.get(id).clone() {
        Expr::Integer(n) => interp.alloc_integer(n),
        Expr::Symbol(s) => interp.alloc_symbol(&s),
        Expr::Empty => interp.alloc_empty(),
        Expr::List(items) => {
            let copied: Vec<ValueId> = items.iter().map(|&item| deep_copy(interp, item)).collect();
            interp.alloc_list(copied)
        }
        Expr::Procedure(_) | Expr::Lambda(_) => id,
    }
}
