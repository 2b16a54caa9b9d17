use crate::lexer::Token;
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::fmt;

/// Half-open range of char offsets into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LexError,
    ParseError,
    RuntimeError,
}

impl ErrorKind {
    fn label(self) -> &'static str {
        match self {
            ErrorKind::LexError => "Lexical Error",
            ErrorKind::ParseError => "Parse Error",
            ErrorKind::RuntimeError => "Runtime Error",
        }
    }

    fn color(self) -> Color {
        match self {
            ErrorKind::LexError => Color::Red,
            ErrorKind::ParseError => Color::Yellow,
            ErrorKind::RuntimeError => Color::Magenta,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoxError {
    pub kind: ErrorKind,
    pub line: usize,
    pub span: Span,
    pub message: String,
    pub help: Option<String>,
    /// Operator that a runtime error was raised on.
    pub token: Option<Token>,
}

impl LoxError {
    pub fn new(kind: ErrorKind, line: usize, span: Span, message: String) -> Self {
        Self {
            kind,
            line,
            span,
            message,
            help: None,
            token: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn lex_error(line: usize, span: Span, message: String) -> Self {
        Self::new(ErrorKind::LexError, line, span, message)
    }

    pub fn parse_error(token: &Token, message: String) -> Self {
        Self::new(ErrorKind::ParseError, token.line, token.span, message)
    }

    pub fn parse_error_with_help(token: &Token, message: String, help: String) -> Self {
        Self::parse_error(token, message).with_help(help)
    }

    pub fn runtime_error(token: &Token, message: String) -> Self {
        let mut error = Self::new(ErrorKind::RuntimeError, token.line, token.span, message);
        error.token = Some(token.clone());
        error
    }

    pub fn runtime_error_with_help(token: &Token, message: String, help: String) -> Self {
        Self::runtime_error(token, message).with_help(help)
    }

    /// Renders the error as a diagnostic on stderr.
    pub fn report(&self, source: &str, filename: Option<&str>) {
        let filename = filename.unwrap_or("<repl>");
        let color = self.kind.color();

        let mut report_builder = Report::build(ReportKind::Error, filename, self.span.start)
            .with_message(format!(
                "{} on line {}: {}",
                self.kind.label().fg(color),
                self.line,
                self.message
            ))
            .with_label(
                Label::new((filename, self.span.start..self.span.end))
                    .with_message(&self.message)
                    .with_color(color),
            );

        if let Some(ref help_text) = self.help {
            report_builder =
                report_builder.with_note(format!("{}: {}", "help".fg(Color::Cyan), help_text));
        }

        if report_builder
            .finish()
            .eprint((filename, Source::from(source)))
            .is_err()
        {
            eprintln!("{}", self);
        }
    }
}

impl fmt::Display for LoxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[line {}] {}: {}", self.line, self.kind.label(), self.message)
    }
}

impl std::error::Error for LoxError {}
