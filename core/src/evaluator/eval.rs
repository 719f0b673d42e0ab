//! Core evaluation logic.

use super::{
    EvalError, EvaluatorOptions, SymbolMatching,
    stack::{Stack, StackFull},
};
use crate::{
    operators::{Arity, OperatorRegistry},
    parser::{self, Token},
};
use rust_decimal::Decimal;
use tracing::{debug, trace};

/// How a single token is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Classification {
    Operator(char, Arity),
    Literal,
    Unknown,
}

/// Postfix evaluator over a fixed operator registry.
///
/// The evaluator holds no per-call state: each [`evaluate`](Self::evaluate)
/// call builds its own token queue and operand stack, so one instance can be
/// reused sequentially or shared across threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    registry: OperatorRegistry,
    options: EvaluatorOptions,
}

impl Evaluator {
    pub fn new(registry: OperatorRegistry) -> Self {
        Self::with_options(registry, EvaluatorOptions::default())
    }

    pub fn with_options(registry: OperatorRegistry, options: EvaluatorOptions) -> Self {
        Self { registry, options }
    }

    /// Evaluator over [`OperatorRegistry::standard`].
    pub fn standard() -> Self {
        Self::new(OperatorRegistry::standard())
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Evaluate a whitespace-separated postfix expression.
    pub fn evaluate(&self, expression: &str) -> Result<Decimal, EvalError> {
        let mut queue = parser::tokenize(expression);
        let mut stack = Stack::new(self.options.max_stack_depth);
        let token_count = queue.len();

        while let Some(token) = queue.pop_front() {
            if token.is_empty() {
                continue;
            }

            match self.classify(&token) {
                Classification::Literal => {
                    let value =
                        parser::parse_decimal(token.text).map_err(|reason| EvalError::Parse {
                            token: token.text.to_string(),
                            reason,
                            span: token.span.clone(),
                        })?;
                    trace!(token = token.text, %value, "push literal");
                    push(&mut stack, value, &token)?;
                }
                Classification::Operator(symbol, arity) => {
                    let value = self.apply(&mut stack, symbol, arity, &token)?;
                    trace!(token = token.text, %arity, %value, "apply operator");
                    push(&mut stack, value, &token)?;
                }
                Classification::Unknown => {
                    return Err(EvalError::UnknownSymbol {
                        token: token.text.to_string(),
                        span: token.span.clone(),
                    });
                }
            }
        }

        match stack.len() {
            0 => Err(EvalError::NoResult),
            1 => {
                let result = stack.pop().ok_or(EvalError::NoResult)?;
                debug!(tokens = token_count, %result, "evaluated expression");
                Ok(result)
            }
            remaining => Err(EvalError::ResultAmbiguity { remaining }),
        }
    }

    /// Decide what a token is before any operator lookup.
    ///
    /// Unary capability is checked before binary, so a symbol registered
    /// under both arities always dispatches as unary.
    pub(super) fn classify(&self, token: &Token<'_>) -> Classification {
        let symbol = match (self.options.symbol_matching, token.first_char()) {
            (_, None) => return Classification::Unknown,
            (SymbolMatching::FirstChar, Some(c)) => Some(c),
            (SymbolMatching::Exact, Some(c)) if token.text.len() == c.len_utf8() => Some(c),
            (SymbolMatching::Exact, Some(_)) => None,
        };

        if let Some(symbol) = symbol {
            for arity in [Arity::Unary, Arity::Binary] {
                if self.registry.has(symbol, arity) {
                    return Classification::Operator(symbol, arity);
                }
            }
        }

        if parser::looks_numeric(token.text) {
            Classification::Literal
        } else {
            Classification::Unknown
        }
    }

    fn apply(
        &self,
        stack: &mut Stack<Decimal>,
        symbol: char,
        arity: Arity,
        token: &Token<'_>,
    ) -> Result<Decimal, EvalError> {
        let needed = arity.operand_count();
        let found = stack.len();
        let operands = stack.pop_n(needed).ok_or_else(|| EvalError::StackUnderflow {
            symbol,
            arity,
            needed,
            found,
            span: token.span.clone(),
        })?;

        // Classification only succeeds for registered (symbol, arity) pairs.
        let operator = self
            .registry
            .find(symbol, arity)
            .ok_or_else(|| EvalError::UnknownSymbol {
                token: token.text.to_string(),
                span: token.span.clone(),
            })?;

        operator
            .apply(&operands)
            .map_err(|source| EvalError::Arithmetic {
                symbol,
                source,
                span: token.span.clone(),
            })
    }
}

fn push(stack: &mut Stack<Decimal>, value: Decimal, token: &Token<'_>) -> Result<(), EvalError> {
    stack
        .push(value)
        .map_err(|StackFull { max_size }| EvalError::StackOverflow {
            max_depth: max_size,
            span: token.span.clone(),
        })
}
