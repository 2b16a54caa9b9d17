use crate::ast::Expr;
use crate::error::LoxError;
use crate::lexer::{Token, TokenType};
use crate::value::Value;

/// Convenience wrapper around [`Evaluator::evaluate`].
pub fn evaluate(expr: &Expr) -> Result<Value, LoxError> {
    Evaluator::new().evaluate(expr)
}

/// Tree-walking evaluator. Holds no state, so one instance can evaluate any
/// number of trees.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, expr: &Expr) -> Result<Value, LoxError> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.clone()),
            Expr::Grouping { expr, .. } => self.evaluate(expr),
            Expr::Unary {
                operator, operand, ..
            } => {
                let operand_val = self.evaluate(operand)?;
                self.evaluate_unary_op(operator, operand_val)
            }
            Expr::Binary {
                left,
                operator,
                right,
                ..
            } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                self.evaluate_binary_op(operator, left_val, right_val)
            }
        }
    }

    fn evaluate_unary_op(&self, operator: &Token, operand: Value) -> Result<Value, LoxError> {
        match operator.token_type {
            TokenType::Minus => match operand {
                Value::Number(n) => Ok(Value::Number(-n)),
                other => Err(LoxError::runtime_error_with_help(
                    operator,
                    "Operand must be a number.".to_string(),
                    format!("Cannot negate a value of type {}.", other.type_name()),
                )),
            },
            TokenType::Bang => Ok(Value::Bool(!operand.is_truthy())),
            _ => Err(unknown_operator(operator)),
        }
    }

    fn evaluate_binary_op(
        &self,
        operator: &Token,
        left: Value,
        right: Value,
    ) -> Result<Value, LoxError> {
        match operator.token_type {
            TokenType::Plus => match (left, right) {
                (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
                (Value::String(l), Value::String(r)) => Ok(Value::String(l + &r)),
                (l, r) => Err(LoxError::runtime_error_with_help(
                    operator,
                    "Operands must be two numbers or two strings.".to_string(),
                    format!("Cannot add {} and {}.", l.type_name(), r.type_name()),
                )),
            },
            TokenType::Minus => numbers(operator, &left, &right).map(|(l, r)| Value::Number(l - r)),
            TokenType::Star => numbers(operator, &left, &right).map(|(l, r)| Value::Number(l * r)),
            // IEEE-754: dividing by zero yields inf or NaN
            TokenType::Slash => numbers(operator, &left, &right).map(|(l, r)| Value::Number(l / r)),
            TokenType::Greater => numbers(operator, &left, &right).map(|(l, r)| Value::Bool(l > r)),
            TokenType::GreaterEqual => {
                numbers(operator, &left, &right).map(|(l, r)| Value::Bool(l >= r))
            }
            TokenType::Less => numbers(operator, &left, &right).map(|(l, r)| Value::Bool(l < r)),
            TokenType::LessEqual => numbers(operator, &left, &right).map(|(l, r)| Value::Bool(l <= r)),
            TokenType::EqualEqual => Ok(Value::Bool(is_equal(&left, &right))),
            TokenType::BangEqual => Ok(Value::Bool(!is_equal(&left, &right))),
            _ => Err(unknown_operator(operator)),
        }
    }
}

fn numbers(operator: &Token, left: &Value, right: &Value) -> Result<(f64, f64), LoxError> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok((*l, *r)),
        (l, r) => Err(LoxError::runtime_error_with_help(
            operator,
            "Operands must be numbers.".to_string(),
            format!(
                "'{}' cannot be applied to {} and {}.",
                operator.lexeme,
                l.type_name(),
                r.type_name()
            ),
        )),
    }
}

/// Values of different kinds are never equal.
fn is_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::Number(l), Value::Number(r)) => l == r,
        (Value::String(l), Value::String(r)) => l == r,
        _ => false,
    }
}

fn unknown_operator(operator: &Token) -> LoxError {
    LoxError::runtime_error(
        operator,
        format!("Unsupported operator '{}'", operator.lexeme),
    )
}
