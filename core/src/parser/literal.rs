//! Fixed-format decimal literals.
//!
//! Literals always use `.` as the decimal separator, whatever the host locale.
//! Accepted grammar: `[+-]?digits[.digits]`, plus the shorthands `digits.`
//! and `.digits`. Exponents, group separators and embedded whitespace are
//! rejected.

use rust_decimal::Decimal;
use thiserror::Error;

/// Why a numeric literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("expected digits with '.' as the decimal separator")]
    Malformed,

    #[error("value does not fit in a 96-bit decimal")]
    OutOfRange,
}

/// Whether `text` starts like a numeric literal.
///
/// Tokens that are neither operators nor numeric-looking are reported as
/// unknown symbols rather than malformed numbers.
/// A token looks numeric when it matches `[+-]?\.?[0-9]` at its start.
pub fn looks_numeric(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let digits = unsigned.strip_prefix('.').unwrap_or(unsigned);
    digits.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

/// Parse a literal token into a decimal.
pub fn parse_decimal(text: &str) -> Result<Decimal, LiteralError> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !all_digits(int_part) || !all_digits(frac_part)
    {
        return Err(LiteralError::Malformed);
    }

    let mut canonical = String::with_capacity(text.len() + 1);
    if negative {
        canonical.push('-');
    }
    canonical.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        canonical.push('.');
        canonical.push_str(frac_part);
    }

    Decimal::from_str_exact(&canonical).map_err(|_| LiteralError::OutOfRange)
}
