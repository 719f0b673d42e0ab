//! The standard arithmetic operator table.

use super::{ArithmeticError, OperatorRegistry};
use rust_decimal::{Decimal, MathematicalOps, prelude::ToPrimitive};

impl OperatorRegistry {
    /// Registry with the usual arithmetic operators.
    ///
    /// | symbol | arity  | meaning                      |
    /// |--------|--------|------------------------------|
    /// | `+`    | binary | addition                     |
    /// | `-`    | binary | subtraction                  |
    /// | `*`    | binary | multiplication               |
    /// | `/`    | binary | division                     |
    /// | `%`    | binary | remainder (sign of dividend) |
    /// | `^`    | binary | integral power               |
    /// | `~`    | unary  | negation                     |
    /// | `\|`   | unary  | absolute value               |
    ///
    /// All operators are checked: overflow and division by zero are reported
    /// as [`ArithmeticError`] instead of panicking.
    pub fn standard() -> Self {
        OperatorRegistry::builder()
            .binary('+', |a, b| a.checked_add(b).ok_or(ArithmeticError::Overflow))
            .binary('-', |a, b| a.checked_sub(b).ok_or(ArithmeticError::Overflow))
            .binary('*', |a, b| a.checked_mul(b).ok_or(ArithmeticError::Overflow))
            .binary('/', divide)
            .binary('%', remainder)
            .binary('^', power)
            .unary('~', |x| Ok(-x))
            .unary('|', |x| Ok(x.abs()))
            .build()
    }
}

fn divide(left: Decimal, right: Decimal) -> Result<Decimal, ArithmeticError> {
    if right.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    left.checked_div(right).ok_or(ArithmeticError::Overflow)
}

fn remainder(left: Decimal, right: Decimal) -> Result<Decimal, ArithmeticError> {
    if right.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    left.checked_rem(right).ok_or(ArithmeticError::Overflow)
}

fn power(base: Decimal, exponent: Decimal) -> Result<Decimal, ArithmeticError> {
    if !exponent.fract().is_zero() {
        return Err(ArithmeticError::undefined(format!(
            "exponent {exponent} is not an integer"
        )));
    }
    let exponent = exponent.to_i64().ok_or(ArithmeticError::Overflow)?;
    let magnitude = base
        .checked_powu(exponent.unsigned_abs())
        .ok_or(ArithmeticError::Overflow)?;
    if exponent >= 0 {
        return Ok(magnitude);
    }
    if magnitude.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    Decimal::ONE
        .checked_div(magnitude)
        .ok_or(ArithmeticError::Overflow)
}
