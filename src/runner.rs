use crate::error::{ErrorKind, LoxError};
use crate::evaluator::Evaluator;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::printer::{AstPrinter, RpnPrinter};
use crate::value::Value;

/// Exit code for lexical and parse errors.
pub const EXIT_STATIC_ERROR: i32 = 65;
/// Exit code for runtime errors.
pub const EXIT_RUNTIME_ERROR: i32 = 70;

/// What the pipeline prints when it succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emit {
    #[default]
    Value,
    Tokens,
    Ast,
    Rpn,
}

impl Emit {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "value" => Some(Emit::Value),
            "tokens" => Some(Emit::Tokens),
            "ast" => Some(Emit::Ast),
            "rpn" => Some(Emit::Rpn),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub filename: Option<String>,
    pub emit: Emit,
}

pub fn exit_code(error: &LoxError) -> i32 {
    match error.kind {
        ErrorKind::LexError | ErrorKind::ParseError => EXIT_STATIC_ERROR,
        ErrorKind::RuntimeError => EXIT_RUNTIME_ERROR,
    }
}

/// Scans, parses and evaluates `source` as a single expression, stopping at
/// the first stage that fails.
pub fn run_source(source: &str) -> Result<Value, LoxError> {
    let tokens = Lexer::new(source).scan_tokens()?;
    let expr = Parser::new(tokens).parse()?;
    Evaluator::new().evaluate(&expr)
}

/// Runs the pipeline as far as `emit` needs and returns the text to show.
pub fn render(source: &str, emit: Emit) -> Result<String, LoxError> {
    let tokens = Lexer::new(source).scan_tokens()?;
    if emit == Emit::Tokens {
        let lines: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        return Ok(lines.join("\n"));
    }

    let expr = Parser::new(tokens).parse()?;
    match emit {
        Emit::Ast => Ok(AstPrinter::print(&expr)),
        Emit::Rpn => Ok(RpnPrinter::print(&expr)),
        _ => Evaluator::new().evaluate(&expr).map(|value| value.to_string()),
    }
}

/// Runs one input unit, prints the result or a diagnostic, and returns the
/// process exit code.
pub fn run(source: &str, options: &RunOptions) -> i32 {
    match render(source, options.emit) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(error) => {
            error.report(source, options.filename.as_deref());
            exit_code(&error)
        }
    }
}
