use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rpn::{
    Evaluator, EvaluatorOptions, OperatorRegistry, SymbolMatching, render_error,
    render_error_to_string_no_color,
};
use std::io::BufRead;
use std::process::ExitCode;
use tracing::debug;

/// RPN - evaluate postfix decimal expressions
#[derive(Parser, Debug)]
#[command(name = "rpn")]
#[command(about = "Evaluate postfix (Reverse Polish Notation) expressions", long_about = None)]
struct Args {
    /// Only treat single-character tokens as operators (allows `-5` literals)
    #[arg(long, env = "RPN_STRICT_SYMBOLS")]
    strict_symbols: bool,

    /// Maximum number of values on the operand stack
    #[arg(long, env = "RPN_MAX_STACK_DEPTH", default_value_t = EvaluatorOptions::default().max_stack_depth)]
    max_stack_depth: usize,

    /// Render errors without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Expression to evaluate (if not provided, reads one expression per line from stdin)
    expression: Option<String>,
}

impl Args {
    fn evaluator_options(&self) -> EvaluatorOptions {
        EvaluatorOptions {
            symbol_matching: if self.strict_symbols {
                SymbolMatching::Exact
            } else {
                SymbolMatching::FirstChar
            },
            max_stack_depth: self.max_stack_depth,
        }
    }
}

/// Evaluate one expression, printing the result or the rendered error.
///
/// Returns whether evaluation succeeded.
fn interpret_input(evaluator: &Evaluator, input: &str, no_color: bool) -> bool {
    match evaluator.evaluate(input) {
        Ok(value) => {
            println!("{}", value.normalize());
            true
        }
        Err(e) => {
            debug!(kind = ?e.kind(), "evaluation failed");
            if no_color {
                eprint!("{}", render_error_to_string_no_color(&e, input));
            } else {
                render_error(&e, input);
            }
            false
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RPN_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("RPN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let evaluator = Evaluator::with_options(OperatorRegistry::standard(), args.evaluator_options());
    debug!(options = ?evaluator.options(), "evaluator ready");

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        let ok = interpret_input(&evaluator, expr, args.no_color);
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    // Otherwise evaluate stdin line by line
    let stdin = std::io::stdin();
    let mut all_ok = true;
    for line in stdin.lock().lines() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= interpret_input(&evaluator, &line, args.no_color);
    }

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
