mod literal;
mod syntax;
mod tokenizer;

pub use literal::{LiteralError, looks_numeric, parse_decimal};
pub use syntax::{Span, Token};
pub use tokenizer::tokenize;
