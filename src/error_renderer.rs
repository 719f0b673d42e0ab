//! Error rendering using ariadne
//!
//! Errors tied to a token are drawn as a report over the expression with the
//! token labelled; errors about the final stack state are printed as a
//! single line.

use crate::{ErrorKind, EvalError};
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expr>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use rpn::{Evaluator, render_error};
///
/// let source = "1 0 /";
/// if let Err(e) = Evaluator::standard().evaluate(source) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &EvalError, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(
    error: &EvalError,
    source: &str,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(error: &EvalError, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &EvalError, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn help_for(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::Parse => Some("numbers use '.' as the decimal separator, e.g. 3.14"),
        ErrorKind::StackUnderflow => Some("push enough operands before applying the operator"),
        ErrorKind::UnknownSymbol => Some("tokens must be numbers or registered operator symbols"),
        ErrorKind::ResultAmbiguity => Some("combine the remaining values with an operator"),
        ErrorKind::NoResult => Some("the expression must contain at least one number"),
        ErrorKind::Arithmetic | ErrorKind::StackOverflow => None,
    }
}

fn render_error_to_writer(
    error: &EvalError,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let Some(span) = error.span() else {
        writeln!(writer, "Error: {}", error)?;
        if let Some(help) = help_for(error.kind()) {
            writeln!(writer, "Help: {}", help)?;
        }
        return Ok(());
    };

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.0.clone()))
        .with_message(error.to_string())
        .with_config(ariadne::Config::default().with_color(use_color));

    let label_message = match error {
        EvalError::Arithmetic { source, .. } => source.to_string(),
        EvalError::StackUnderflow { found, .. } => format!("only {} operand(s) available", found),
        EvalError::Parse { reason, .. } => reason.to_string(),
        EvalError::StackOverflow { .. } => "pushed here".to_string(),
        _ => "here".to_string(),
    };
    report = report.with_label(
        Label::new((SOURCE_ID, span.0.clone()))
            .with_message(label_message)
            .with_color(Color::Red),
    );

    if let Some(help) = help_for(error.kind()) {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}
