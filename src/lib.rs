// Lox expression interpreter library
//
// Source text flows through three stages, each returning a Result:
// lexer (text -> tokens), parser (tokens -> expression tree) and
// evaluator (tree -> value).

// Public modules
pub mod ast;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod repl;
pub mod runner;
pub mod value;

// Re-export commonly used items
pub use ast::Expr;
pub use error::{ErrorKind, LoxError, Span};
pub use evaluator::{evaluate, Evaluator};
pub use lexer::{scan, Lexer, Literal, Token, TokenType};
pub use parser::{parse, Parser};
pub use printer::{AstPrinter, RpnPrinter};
pub use value::Value;

// Re-export main functions
pub use repl::start as start_repl;
pub use runner::{run, run_source};
