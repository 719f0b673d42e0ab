//! Splits an expression into whitespace-delimited tokens.

use super::Token;
use std::collections::VecDeque;

/// Split `source` on runs of whitespace, discarding empty fragments.
///
/// Any Unicode whitespace separates tokens, not only spaces: tabs and
/// newlines split `"3\t4\n+"` into `3`, `4` and `+`.
///
/// The returned queue preserves input order; every token records the byte
/// span it came from so errors can point back into the expression.
pub fn tokenize(source: &str) -> VecDeque<Token<'_>> {
    let mut queue = VecDeque::new();
    let mut start = None;

    for (i, c) in source.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                queue.push_back(Token::new(&source[s..i], s));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }

    if let Some(s) = start {
        queue.push_back(Token::new(&source[s..], s));
    }

    queue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Span;
    use pretty_assertions::assert_eq;

    fn texts(source: &str) -> Vec<&str> {
        tokenize(source).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(texts("3 4 +"), vec!["3", "4", "+"]);
    }

    #[test]
    fn test_runs_of_whitespace_are_collapsed() {
        assert_eq!(texts("  3    4\t+\n"), vec!["3", "4", "+"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }

    #[test]
    fn test_spans_point_into_source() {
        let source = " 12  3.5 *";
        let tokens = tokenize(source);
        let spans: Vec<Span> = tokens.iter().map(|t| t.span.clone()).collect();
        assert_eq!(
            spans,
            vec![Span::new(1, 3), Span::new(5, 8), Span::new(9, 10)]
        );
        for token in &tokens {
            assert_eq!(token.span.str_of(source), token.text);
        }
    }

    #[test]
    fn test_multibyte_symbols_keep_byte_spans() {
        let source = "2 √ 1";
        let tokens = tokenize(source);
        assert_eq!(tokens[1].text, "√");
        assert_eq!(tokens[1].span, Span::new(2, 5));
        assert_eq!(tokens[2].span, Span::new(6, 7));
    }
}
