use crate::error::Span;
use crate::lexer::Token;
use crate::value::Value;

/// Expression tree produced by the parser. Each node owns its children and
/// is never modified once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal {
        value: Value,
        span: Span,
    },
    Grouping {
        expr: Box<Expr>,
        span: Span,
    },
    Unary {
        operator: Token,
        operand: Box<Expr>,
        span: Span,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal { span, .. } => *span,
            Expr::Grouping { span, .. } => *span,
            Expr::Unary { span, .. } => *span,
            Expr::Binary { span, .. } => *span,
        }
    }

    /// Number of nodes on the longest root-to-leaf path. Recursive, so only
    /// meant for trees the parser has already kept within its limits.
    pub fn height(&self) -> usize {
        match self {
            Expr::Literal { .. } => 1,
            Expr::Grouping { expr, .. } => 1 + expr.height(),
            Expr::Unary { operand, .. } => 1 + operand.height(),
            Expr::Binary { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}
