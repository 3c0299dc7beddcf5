//! Comparison operations: `<`, `>`.
//!
//! Each folds pairwise over its argument slice, threading the running
//! comparison accumulator through the previous raw argument (not the
//! boolean result), so `(< 1 2 3)` checks 1<2 and 2<3 rather than just the
//! first pair. The neutral element primes the first comparison: MIN for
//! `<`, MAX for `>`, so a single-argument call is trivially true.

use crate::error::InterpError;
use crate::interpreter::Interpreter;
use crate::value::{Expr, ValueId};

fn fold_compare(
    interp: &Interpreter,
    context: &str,
    args: &[ValueId],
    neutral: i64,
    cmp: impl Fn(i64, i64) -> bool,
) -> Result<bool, InterpError> {
    let mut acc = neutral;
    let mut ok = true;
    for &id in args {
        let n = match interp.get(id) {
            Expr::Integer(n) => *n,
            other => {
                return Err(InterpError::type_error(
                    context,
                    format!("expected Integer, got {}", other.type_name()),
                ))
            }
        };
        if !cmp(acc, n) {
            ok = false;
        }
        acc = n;
    }
    Ok(ok)
}

pub fn lt(interp: &mut Interpreter, args: &[ValueId]) -> Result<ValueId, InterpError> {
    let ok = fold_compare(interp, "<", args, i64::MIN, |a, b| a < b)?;
    Ok(interp.alloc_bool(ok))
}

pub fn gt(interp: &mut Interpreter, args: &[ValueId]) -> Result<ValueId, InterpError> {
    let ok = fold_compare(interp, ">", args, i64::MAX, |a, b| a > b)?;
    Ok(interp.alloc_bool(ok))
}
