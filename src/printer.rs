//! Debug renderings of an expression tree. Neither form affects evaluation.

use crate::ast::Expr;
use crate::lexer::TokenType;
use crate::value::Value;

/// Fully parenthesized prefix form, e.g. `(* (- 123) (group 45.67))`.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(expr: &Expr) -> String {
        match expr {
            Expr::Literal { value, .. } => literal(value),
            Expr::Grouping { expr, .. } => parenthesize("group", &[expr.as_ref()]),
            Expr::Unary {
                operator, operand, ..
            } => parenthesize(&operator.lexeme, &[operand.as_ref()]),
            Expr::Binary {
                left,
                operator,
                right,
                ..
            } => parenthesize(&operator.lexeme, &[left.as_ref(), right.as_ref()]),
        }
    }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let mut out = format!("({}", name);
    for expr in exprs {
        out.push(' ');
        out.push_str(&AstPrinter::print(expr));
    }
    out.push(')');
    out
}

/// Reverse Polish notation, e.g. `1 2 + 4 3 - *`. Groupings vanish and
/// unary minus is written `neg` so it cannot be confused with subtraction.
pub struct RpnPrinter;

impl RpnPrinter {
    pub fn print(expr: &Expr) -> String {
        match expr {
            Expr::Literal { value, .. } => literal(value),
            Expr::Grouping { expr, .. } => Self::print(expr),
            Expr::Unary {
                operator, operand, ..
            } => {
                let name = match operator.token_type {
                    TokenType::Minus => "neg",
                    _ => operator.lexeme.as_str(),
                };
                format!("{} {}", Self::print(operand), name)
            }
            Expr::Binary {
                left,
                operator,
                right,
                ..
            } => format!(
                "{} {} {}",
                Self::print(left),
                Self::print(right),
                operator.lexeme
            ),
        }
    }
}

fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}
