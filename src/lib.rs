//! RPN - A postfix (Reverse Polish Notation) decimal calculator
//!
//! # Overview
//!
//! Expressions are whitespace-separated tokens where operators follow their
//! operands: `3 4 +` is `7`, `5 1 2 + 4 * + 3 -` is `14`. Operators are
//! single characters looked up in a caller-supplied, ordered registry, and all
//! arithmetic is done in fixed-precision decimal.
//!
//! # Quick Start
//!
//! ```
//! use rpn::{Decimal, Evaluator};
//!
//! let evaluator = Evaluator::standard();
//! assert_eq!(evaluator.evaluate("3 4 +").unwrap(), Decimal::from(7));
//! ```
//!
//! # Custom Operators
//!
//! ```
//! use rpn::{ArithmeticError, Decimal, Evaluator, OperatorRegistry};
//!
//! let registry = OperatorRegistry::builder()
//!     .extend(&OperatorRegistry::standard())
//!     .binary('>', |a, b| Ok(a.max(b)))
//!     .unary('!', |x| {
//!         if x.is_sign_negative() {
//!             return Err(ArithmeticError::undefined("negative input"));
//!         }
//!         Ok(x.floor())
//!     })
//!     .build();
//!
//! let evaluator = Evaluator::new(registry);
//! assert_eq!(evaluator.evaluate("3 8.5 > !").unwrap(), Decimal::from(8));
//! ```
//!
//! # Errors
//!
//! Failures are returned as [`EvalError`]; use [`render_error`] to print them
//! with the offending token highlighted.

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from rpn_core
pub use rpn_core::evaluator::{
    ErrorKind, EvalError, Evaluator, EvaluatorOptions, SymbolMatching, evaluate,
};
pub use rpn_core::operators::{ArithmeticError, Arity, Operator, OperatorRegistry};
pub use rpn_core::parser::Span;

pub use rpn_core::Decimal;
