//! Stack-based postfix evaluator.
//!
//! The evaluator splits an expression on whitespace, classifies each token as
//! a numeric literal or an operator reference, and runs it through an operand
//! stack. Exactly one value must remain at the end.
//!
//! ## Design Principles
//!
//! - **Never panic**: malformed input and failing operators become [`EvalError`]s
//! - **Stateless**: stack and token queue live only for the duration of one call
//! - **Decimal arithmetic**: values are [`Decimal`], never binary floating point
//!
//! ## Example
//!
//! ```
//! use rpn_core::evaluator::Evaluator;
//! use rpn_core::Decimal;
//!
//! let evaluator = Evaluator::standard();
//! let result = evaluator.evaluate("5 1 2 + 4 * + 3 -").unwrap();
//! assert_eq!(result, Decimal::from(14));
//! ```

mod error;
mod eval;
mod options;
mod stack;


pub use error::{ErrorKind, EvalError};
pub use eval::Evaluator;
pub use options::{EvaluatorOptions, SymbolMatching};

use crate::operators::OperatorRegistry;
use rust_decimal::Decimal;

/// Evaluate `expression` with the standard operator table and default options.
///
/// Builds a fresh [`Evaluator`] per call; keep one around when evaluating
/// many expressions.
pub fn evaluate(expression: &str) -> Result<Decimal, EvalError> {
    Evaluator::new(OperatorRegistry::standard()).evaluate(expression)
}
