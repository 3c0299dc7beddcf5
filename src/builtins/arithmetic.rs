//! Arithmetic operations: `+`, `-`, `*`.
//!
//! Each folds over its (already evaluated) argument slice starting from a
//! fixed neutral element, so a zero-argument call returns the neutral
//! element and a one-argument call returns that element combined with the
//! neutral (identity for `+`/`*`, negation for `-`).

use crate::error::InterpError;
use crate::interpreter::Interpreter;
use crate::value::{Expr, ValueId};

fn fold_ints(
    interp: &Interpreter,
    context: &str,
    args: &[ValueId],
    neutral: i64,
    op: impl Fn(i64, i64) -> i64,
) -> Result<i64, InterpError> {
    let mut acc = neutral;
    for &id in args {
        match interp.get(id) {
            Expr::Integer(n) => acc = op(acc, *n),
            other => {
                return Err(InterpError::type_error(
                    context,
                    format!("expected Integer, got {}", other.type_name()),
                ))
            }
        }
    }
    Ok(acc)
}

pub fn add(interp: &mut Interpreter, args: &[ValueId]) -> Result<ValueId, InterpError> {
    let sum = fold_ints(interp, "+", args, 0, i64::wrapping_add)?;
    Ok(interp.alloc_integer(sum))
}

/// Neutral 0, folded left-to-right: `(- 10 3 2)` is `0 - 10 - 3 - 2`, and a
/// single argument negates it (`(- 5)` is `-5`).
pub fn sub(interp: &mut Interpreter, args: &[ValueId]) -> Result<ValueId, InterpError> {
    let diff = fold_ints(interp, "-", args, 0, i64::wrapping_sub)?;
    Ok(interp.alloc_integer(diff))
}

pub fn mul(interp: &mut Interpreter, args: &[ValueId]) -> Result<ValueId, InterpError> {
    let product = fold_ints(interp, "*", args, 1, i64::wrapping_mul)?;
    Ok(interp.alloc_integer(product))
}
