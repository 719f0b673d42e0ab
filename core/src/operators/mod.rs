//! Operator definitions and the ordered registry the evaluator dispatches on.
//!
//! An [`Operator`] pairs a single symbol character with a transform. The
//! transform is a tagged variant, so arity is never stored separately from
//! the function that implements it:
//!
//! ```
//! use rpn_core::operators::{Arity, Operator};
//! use rpn_core::Decimal;
//!
//! let neg = Operator::unary('~', |x| Ok(-x));
//! assert_eq!(neg.arity(), Arity::Unary);
//! assert_eq!(neg.apply(&[Decimal::ONE]), Ok(Decimal::NEGATIVE_ONE));
//! ```

mod error;
mod registry;
mod standard;

pub use error::ArithmeticError;
pub use registry::{OperatorRegistry, RegistryBuilder};

use core::fmt;
use rust_decimal::Decimal;
use std::sync::Arc;

pub type UnaryFn = dyn Fn(Decimal) -> Result<Decimal, ArithmeticError> + Send + Sync;
pub type BinaryFn = dyn Fn(Decimal, Decimal) -> Result<Decimal, ArithmeticError> + Send + Sync;

/// Number of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    pub fn operand_count(self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Unary => write!(f, "unary"),
            Arity::Binary => write!(f, "binary"),
        }
    }
}

/// The numeric function behind an operator.
#[derive(Clone)]
pub enum Transform {
    Unary(Arc<UnaryFn>),
    Binary(Arc<BinaryFn>),
}

/// A registered operator: symbol plus transform. Immutable once built.
#[derive(Clone)]
pub struct Operator {
    symbol: char,
    transform: Transform,
}

impl Operator {
    pub fn unary<F>(symbol: char, f: F) -> Self
    where
        F: Fn(Decimal) -> Result<Decimal, ArithmeticError> + Send + Sync + 'static,
    {
        Self {
            symbol,
            transform: Transform::Unary(Arc::new(f)),
        }
    }

    pub fn binary<F>(symbol: char, f: F) -> Self
    where
        F: Fn(Decimal, Decimal) -> Result<Decimal, ArithmeticError> + Send + Sync + 'static,
    {
        Self {
            symbol,
            transform: Transform::Binary(Arc::new(f)),
        }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn arity(&self) -> Arity {
        match self.transform {
            Transform::Unary(_) => Arity::Unary,
            Transform::Binary(_) => Arity::Binary,
        }
    }

    /// Apply the transform to operands given in push order.
    ///
    /// For binary operators `operands` is `[left, right]`.
    pub fn apply(&self, operands: &[Decimal]) -> Result<Decimal, ArithmeticError> {
        match (&self.transform, operands) {
            (Transform::Unary(f), [x]) => f(*x),
            (Transform::Binary(f), [left, right]) => f(*left, *right),
            _ => Err(ArithmeticError::undefined(format!(
                "'{}' takes {} operand(s), got {}",
                self.symbol,
                self.arity().operand_count(),
                operands.len()
            ))),
        }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("symbol", &self.symbol)
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}
