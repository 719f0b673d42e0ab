//! Configuration options for the evaluator.

/// How a token is recognised as an operator reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolMatching {
    /// Only the first character is compared against registered symbols;
    /// anything after it is ignored (`+foo` applies `+`).
    #[default]
    FirstChar,

    /// The token must be exactly one registered symbol character.
    ///
    /// With this mode `-5` is a negative literal even when `-` is registered.
    Exact,
}

/// Configuration options for expression evaluation.
///
/// # Example
///
/// ```
/// use rpn_core::evaluator::{EvaluatorOptions, SymbolMatching};
///
/// let options = EvaluatorOptions {
///     symbol_matching: SymbolMatching::Exact,
///     ..EvaluatorOptions::default()
/// };
/// assert_eq!(options.max_stack_depth, 1024);
/// ```
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Token classification mode.
    ///
    /// Default: `SymbolMatching::FirstChar`
    pub symbol_matching: SymbolMatching,

    /// Maximum number of values the operand stack may hold.
    ///
    /// Default: 1024
    pub max_stack_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            symbol_matching: SymbolMatching::default(),
            max_stack_depth: 1024,
        }
    }
}
