//! Ordered operator registry.

use super::{ArithmeticError, Arity, Operator};
use rust_decimal::Decimal;

/// Ordered, read-only collection of operators.
///
/// Lookups are linear scans in registration order. When several operators
/// share a symbol and arity, the first one registered wins and the rest are
/// silently shadowed. A symbol may be registered once per arity to overload
/// it (e.g. unary and binary minus).
///
/// Symbols should not be ASCII digits, `.`, `+` or `-` if literals starting
/// with that character must still parse: classification only inspects the
/// first character of a token.
///
/// # Example
///
/// ```
/// use rpn_core::operators::{Arity, OperatorRegistry};
///
/// let registry = OperatorRegistry::builder()
///     .binary('+', |a, b| Ok(a + b))
///     .unary('~', |x| Ok(-x))
///     .build();
///
/// assert!(registry.has('+', Arity::Binary));
/// assert!(!registry.has('+', Arity::Unary));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    operators: Vec<Operator>,
}

impl OperatorRegistry {
    pub fn new(operators: Vec<Operator>) -> Self {
        Self { operators }
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// First operator with this symbol and arity, in registration order.
    pub fn find(&self, symbol: char, arity: Arity) -> Option<&Operator> {
        self.operators
            .iter()
            .find(|op| op.symbol() == symbol && op.arity() == arity)
    }

    pub fn has(&self, symbol: char, arity: Arity) -> bool {
        self.find(symbol, arity).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        self.operators.iter()
    }

    /// Distinct symbols in first-registration order.
    pub fn symbols(&self) -> Vec<char> {
        let mut symbols: Vec<char> = Vec::new();
        for op in &self.operators {
            if !symbols.contains(&op.symbol()) {
                symbols.push(op.symbol());
            }
        }
        symbols
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl FromIterator<Operator> for OperatorRegistry {
    fn from_iter<I: IntoIterator<Item = Operator>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OperatorRegistry {
    type Item = &'a Operator;
    type IntoIter = core::slice::Iter<'a, Operator>;

    fn into_iter(self) -> Self::IntoIter {
        self.operators.iter()
    }
}

/// Builder for assembling a registry in order.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    operators: Vec<Operator>,
}

impl RegistryBuilder {
    /// Append an already-built operator.
    pub fn register(mut self, operator: Operator) -> Self {
        self.operators.push(operator);
        self
    }

    pub fn unary<F>(self, symbol: char, f: F) -> Self
    where
        F: Fn(Decimal) -> Result<Decimal, ArithmeticError> + Send + Sync + 'static,
    {
        self.register(Operator::unary(symbol, f))
    }

    pub fn binary<F>(self, symbol: char, f: F) -> Self
    where
        F: Fn(Decimal, Decimal) -> Result<Decimal, ArithmeticError> + Send + Sync + 'static,
    {
        self.register(Operator::binary(symbol, f))
    }

    /// Append every operator of an existing registry, keeping its order.
    pub fn extend(mut self, registry: &OperatorRegistry) -> Self {
        self.operators.extend(registry.iter().cloned());
        self
    }

    pub fn build(self) -> OperatorRegistry {
        OperatorRegistry::new(self.operators)
    }
}
