//! Core of the RPN postfix evaluator.
//!
//! - [`parser`]: whitespace tokenizer and fixed-format decimal literals
//! - [`operators`]: operator definitions and the ordered registry
//! - [`evaluator`]: the stack machine turning tokens into a single result

pub mod evaluator;
pub mod operators;
pub mod parser;

pub use rust_decimal::Decimal;
