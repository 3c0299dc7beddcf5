// ABOUTME: End-to-end scenarios and boundary tests driving Interpreter::read_eval

use minilisp::error::InterpError;
use minilisp::interpreter::Interpreter;
use minilisp::value::Expr;

fn eval_int(interp: &mut Interpreter, src: &str) -> i64 {
    let id = interp.read_eval(src).unwrap();
    match interp.get(id) {
        Expr::Integer(n) => *n,
        other => panic!("expected Integer evaluating `{}`, got {:?}", src, other),
    }
}

#[test]
fn scenario_simple_arithmetic() {
    let mut interp = Interpreter::new();
    assert_eq!(eval_int(&mut interp, "(+ 2 2)"), 4);
}

#[test]
fn scenario_nested_arithmetic() {
    let mut interp = Interpreter::new();
    assert_eq!(eval_int(&mut interp, "(* (+ 1 2) (+ 3 4))"), 21);
}

#[test]
fn scenario_define_and_reference() {
    let mut interp = Interpreter::new();
    interp.read_eval("(define a 10)").unwrap();
    assert_eq!(eval_int(&mut interp, "(+ a a)"), 20);
}

#[test]
fn scenario_set_mutates_binding() {
    let mut interp = Interpreter::new();
    interp.read_eval("(define a 1)").unwrap();
    assert_eq!(eval_int(&mut interp, "(begin (set! a (+ a a)) a)"), 2);
}

#[test]
fn scenario_if_conditional() {
    let mut interp = Interpreter::new();
    assert_eq!(eval_int(&mut interp, "(if (< 1 2) 10 20)"), 10);
    assert_eq!(eval_int(&mut interp, "(if (> 1 2) 10 20)"), 20);
}

#[test]
fn scenario_lambda_application() {
    let mut interp = Interpreter::new();
    assert_eq!(eval_int(&mut interp, "((lambda (x) (+ x x)) 5)"), 10);
}

#[test]
fn scenario_recursive_factorial() {
    let mut interp = Interpreter::new();
    interp
        .read_eval("(define fact (lambda (n) (if (< n 2) 1 (* n (fact (+ n -1))))))")
        .unwrap();
    assert_eq!(eval_int(&mut interp, "(fact 10)"), 3628800);
}

#[test]
fn scenario_quote_returns_datum_unevaluated() {
    let mut interp = Interpreter::new();
    let id = interp.read_eval("(quote (+ 1 2))").unwrap();
    match interp.get(id) {
        Expr::List(items) => assert_eq!(items.len(), 3),
        other => panic!("expected List, got {:?}", other),
    }
}

#[test]
fn boundary_token_of_32_bytes_is_accepted() {
    let mut interp = Interpreter::new();
    let token = "a".repeat(32);
    let id = interp.read_eval(&token).unwrap();
    assert!(matches!(interp.get(id), Expr::Symbol(_)));
}

#[test]
fn boundary_token_of_33_bytes_is_rejected() {
    let mut interp = Interpreter::new();
    let token = "a".repeat(33);
    let err = interp.read_eval(&token).unwrap_err();
    assert!(matches!(err, InterpError::TokenTooLong { length: 33 }));
}

#[test]
fn boundary_empty_literal_reads_as_empty_value() {
    let mut interp = Interpreter::new();
    let id = interp.read_eval("'()").unwrap();
    assert!(matches!(interp.get(id), Expr::Empty));
}

#[test]
fn boundary_unbalanced_close_paren_errors() {
    let mut interp = Interpreter::new();
    let err = interp.read_eval(")").unwrap_err();
    assert!(matches!(err, InterpError::UnbalancedParen));
}

#[test]
fn boundary_evaluating_empty_list_errors() {
    let mut interp = Interpreter::new();
    let err = interp.read_eval("()").unwrap_err();
    assert!(matches!(err, InterpError::EmptyCombination));
}

#[test]
fn boundary_unbound_symbol_errors() {
    let mut interp = Interpreter::new();
    let err = interp.read_eval("nope").unwrap_err();
    assert!(matches!(err, InterpError::Unbound(name) if name == "nope"));
}

#[test]
fn boundary_wrong_arity_lambda_application_errors() {
    let mut interp = Interpreter::new();
    interp.read_eval("(define f (lambda (a b) (+ a b)))").unwrap();
    let err = interp.read_eval("(f 1)").unwrap_err();
    assert!(matches!(err, InterpError::ArityMismatch { .. }));
}

#[test]
fn boundary_applying_a_non_procedure_errors() {
    let mut interp = Interpreter::new();
    let err = interp.read_eval("(1 2 3)").unwrap_err();
    assert!(matches!(err, InterpError::NotApplicable(_)));
}

#[test]
fn errors_do_not_poison_subsequent_evaluation() {
    let mut interp = Interpreter::new();
    assert!(interp.read_eval("nope").is_err());
    assert_eq!(eval_int(&mut interp, "(+ 1 1)"), 2);
}
