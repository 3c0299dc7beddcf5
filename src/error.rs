// ABOUTME: Error types shared by the reader, environment, and evaluator

use thiserror::Error;

/// Every failure kind the interpreter core can produce.
///
/// A single flat enum rather than per-phase types: the reader, environment,
/// and evaluator all abort the same top-level expression the same way, so
/// callers (the REPL, tests) only ever need to match on one error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpError {
    #[error("unexpected end of input")]
    UnexpectedEOF,

    #[error("unbalanced parenthesis")]
    UnbalancedParen,

    #[error("token too long: {length} bytes (max 32)")]
    TokenTooLong { length: usize },

    #[error("cannot evaluate an empty combination: ()")]
    EmptyCombination,

    #[error("unbound symbol: {0}")]
    Unbound(String),

    #[error("arity mismatch in {context}: expected {expected}, got {actual}")]
    ArityMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("type error in {context}: {message}")]
    TypeError { context: String, message: String },

    #[error("if condition must be an Integer or a boolean symbol, got {0}")]
    IfConditionType(String),

    #[error("value is not applicable: {0}")]
    NotApplicable(String),
}

impl InterpError {
    pub fn arity(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        InterpError::ArityMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    pub fn type_error(context: impl Into<String>, message: impl Into<String>) -> Self {
        InterpError::TypeError {
            context: context.into(),
            message: message.into(),
        }
    }
}
