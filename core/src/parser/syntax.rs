// Syntax structures shared by the tokenizer and the evaluator.

use core::{fmt, ops::Range};

/// Byte range of a token within the evaluated expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.0.start, self.0.end)
    }
}

/// A whitespace-delimited fragment of the input.
///
/// Tokens borrow from the expression and only live for one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, start: usize) -> Self {
        Self {
            text,
            span: Span::new(start, start + text.len()),
        }
    }

    /// The character operator classification looks at.
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
