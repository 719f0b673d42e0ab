//! Failures raised by operator transforms.

use thiserror::Error;

/// Error returned by an operator's transform.
///
/// The evaluator never inspects or recovers from these; it wraps them with
/// the offending token and hands them back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Result does not fit in the decimal representation.
    #[error("arithmetic overflow")]
    Overflow,

    /// Operation is not defined for the given operands
    /// (e.g. a fractional exponent).
    #[error("undefined operation: {reason}")]
    Undefined { reason: String },
}

impl ArithmeticError {
    pub fn undefined(reason: impl Into<String>) -> Self {
        ArithmeticError::Undefined {
            reason: reason.into(),
        }
    }
}
