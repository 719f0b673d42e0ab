//! Evaluation errors.
//!
//! Every failure aborts the current `evaluate` call; nothing is recovered
//! internally. Errors tied to a token carry its text and [`Span`] so callers
//! can point at the offending part of the expression.
//!
//! # Error Categories
//!
//! - **Malformed input**: `Parse`, `UnknownSymbol`.
//! - **Stack shape**: `StackUnderflow`, `ResultAmbiguity`, `NoResult`.
//! - **Operator failure**: `Arithmetic`, wrapping the transform's error unchanged.
//! - **Resource limits**: `StackOverflow`.

use crate::operators::{ArithmeticError, Arity};
use crate::parser::{LiteralError, Span};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A numeric-looking token does not match the literal grammar.
    #[error("invalid number '{token}': {reason}")]
    Parse {
        token: String,
        reason: LiteralError,
        span: Span,
    },

    /// An operator was applied with fewer operands than its arity needs.
    #[error(
        "operator imbalance: {arity} operator '{symbol}' needs {needed} operand(s), found {found}"
    )]
    StackUnderflow {
        symbol: char,
        arity: Arity,
        needed: usize,
        found: usize,
        span: Span,
    },

    /// Token is neither a registered operator nor a numeric literal.
    #[error("unknown symbol '{token}'")]
    UnknownSymbol { token: String, span: Span },

    /// Input was consumed but several values are left.
    #[error("more than one result remains on the stack ({remaining} values)")]
    ResultAmbiguity { remaining: usize },

    /// Input was consumed and nothing is left (e.g. empty expression).
    #[error("no result on the stack")]
    NoResult,

    /// The operator's transform failed.
    #[error("operator '{symbol}' failed: {source}")]
    Arithmetic {
        symbol: char,
        source: ArithmeticError,
        span: Span,
    },

    /// Operand stack limit exceeded.
    #[error("operand stack overflow: limit of {max_depth} values exceeded")]
    StackOverflow { max_depth: usize, span: Span },
}

/// Discriminant of [`EvalError`], for callers that only care about the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Parse,
    StackUnderflow,
    UnknownSymbol,
    ResultAmbiguity,
    NoResult,
    Arithmetic,
    StackOverflow,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Parse { .. } => ErrorKind::Parse,
            EvalError::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            EvalError::UnknownSymbol { .. } => ErrorKind::UnknownSymbol,
            EvalError::ResultAmbiguity { .. } => ErrorKind::ResultAmbiguity,
            EvalError::NoResult => ErrorKind::NoResult,
            EvalError::Arithmetic { .. } => ErrorKind::Arithmetic,
            EvalError::StackOverflow { .. } => ErrorKind::StackOverflow,
        }
    }

    /// Location of the offending token, if the error is tied to one.
    pub fn span(&self) -> Option<&Span> {
        match self {
            EvalError::Parse { span, .. }
            | EvalError::StackUnderflow { span, .. }
            | EvalError::UnknownSymbol { span, .. }
            | EvalError::Arithmetic { span, .. }
            | EvalError::StackOverflow { span, .. } => Some(span),
            EvalError::ResultAmbiguity { .. } | EvalError::NoResult => None,
        }
    }

    /// The transform's own error, for `Arithmetic` failures.
    pub fn arithmetic(&self) -> Option<&ArithmeticError> {
        match self {
            EvalError::Arithmetic { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Whether a resource limit, rather than the expression itself, caused the failure.
    pub fn is_resource_exceeded(&self) -> bool {
        matches!(self, EvalError::StackOverflow { .. })
    }
}
