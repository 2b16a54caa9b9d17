use crate::ast::Expr;
use crate::error::{LoxError, Span};
use crate::lexer::{Token, TokenType};
use crate::value::Value;

/// Convenience wrapper around [`Parser::parse`].
pub fn parse(tokens: Vec<Token>) -> Result<Expr, LoxError> {
    Parser::new(tokens).parse()
}

/// Deepest chain of groupings and unary operators the parser accepts. Each
/// level costs several stack frames here and in every later tree walk.
pub const MAX_NESTING: usize = 128;

/// Tallest tree the parser builds. Operator chains such as `1 + 1 + ...` are
/// parsed in a loop but still grow the tree one level per operator.
pub const MAX_HEIGHT: usize = 512;

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        // Every stream handed over by the lexer ends in EOF; keep that true
        // for hand-built streams as well so peek() never runs off the end.
        if tokens.last().map(|t| t.token_type) != Some(TokenType::Eof) {
            let (line, span) = match tokens.last() {
                Some(last) => (last.line, Span::new(last.span.end, last.span.end)),
                None => (1, Span::new(0, 0)),
            };
            tokens.push(Token::new(TokenType::Eof, String::new(), None, line, span));
        }

        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parses the whole token stream as exactly one expression.
    pub fn parse(&mut self) -> Result<Expr, LoxError> {
        let expr = self.expression()?;

        if !self.is_at_end() {
            let token = self.peek();
            return Err(LoxError::parse_error_with_help(
                token,
                format!("Expected end of expression, found '{}'", token.lexeme),
                "Each input is a single expression. Combine terms with an operator or wrap them in parentheses.".to_string(),
            ));
        }

        Ok(expr)
    }

    fn expression(&mut self) -> Result<Expr, LoxError> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Expr, LoxError> {
        let mut expr = self.comparison()?;

        while self.match_types(&[TokenType::BangEqual, TokenType::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.operand_after(&operator, Self::comparison)?;
            expr = fold(expr, operator, right)?;
        }

        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, LoxError> {
        let mut expr = self.term()?;

        while self.match_types(&[
            TokenType::Greater,
            TokenType::GreaterEqual,
            TokenType::Less,
            TokenType::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.operand_after(&operator, Self::term)?;
            expr = fold(expr, operator, right)?;
        }

        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, LoxError> {
        let mut expr = self.factor()?;

        while self.match_types(&[TokenType::Minus, TokenType::Plus]) {
            let operator = self.previous().clone();
            let right = self.operand_after(&operator, Self::factor)?;
            expr = fold(expr, operator, right)?;
        }

        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, LoxError> {
        let mut expr = self.unary()?;

        while self.match_types(&[TokenType::Star, TokenType::Slash]) {
            let operator = self.previous().clone();
            let right = self.operand_after(&operator, Self::unary)?;
            expr = fold(expr, operator, right)?;
        }

        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, LoxError> {
        if self.match_types(&[TokenType::Bang, TokenType::Minus]) {
            let operator = self.previous().clone();
            self.enter(&operator)?;
            let operand = self.operand_after(&operator, Self::unary);
            self.depth -= 1;
            let operand = operand?;
            let span = operator.span.to(operand.span());

            return Ok(Expr::Unary {
                operator,
                operand: Box::new(operand),
                span,
            });
        }

        self.primary()
    }

    /// Parses the operand that must follow `operator`, with a pointed message
    /// when the input stops right after it.
    fn operand_after(
        &mut self,
        operator: &Token,
        rule: fn(&mut Self) -> Result<Expr, LoxError>,
    ) -> Result<Expr, LoxError> {
        if self.is_at_end() {
            return Err(LoxError::parse_error_with_help(
                operator,
                format!("Expected expression after '{}'", operator.lexeme),
                format!("The '{}' operator needs an operand on its right-hand side.", operator.lexeme),
            ));
        }

        rule(self)
    }

    fn primary(&mut self) -> Result<Expr, LoxError> {
        let token = self.peek().clone();

        let value = match token.token_type {
            TokenType::False => Value::Bool(false),
            TokenType::True => Value::Bool(true),
            TokenType::Nil => Value::Nil,
            TokenType::Number | TokenType::String => match token.literal.clone() {
                Some(literal) => Value::from(literal),
                None => {
                    return Err(LoxError::parse_error(
                        &token,
                        format!("Literal token '{}' carries no value", token.lexeme),
                    ))
                }
            },
            TokenType::LeftParen => return self.grouping(),
            _ => return Err(self.expected_expression(&token)),
        };

        self.advance();
        Ok(Expr::Literal {
            value,
            span: token.span,
        })
    }

    fn grouping(&mut self) -> Result<Expr, LoxError> {
        let open = self.advance().clone();

        if self.check(&TokenType::RightParen) {
            return Err(LoxError::parse_error_with_help(
                self.peek(),
                "Empty parentheses are not allowed".to_string(),
                "Parentheses must contain an expression. Use 'nil' for a null value: (nil)".to_string(),
            ));
        }

        self.enter(&open)?;
        let expr = self.expression();
        self.depth -= 1;
        let expr = expr?;
        let close = self.consume_with_help(
            TokenType::RightParen,
            "Expected ')' after expression",
            "Every opening parenthesis '(' must have a matching closing parenthesis ')'.".to_string(),
        )?;

        Ok(Expr::Grouping {
            expr: Box::new(expr),
            span: open.span.to(close.span),
        })
    }

    fn enter(&mut self, at: &Token) -> Result<(), LoxError> {
        if self.depth >= MAX_NESTING {
            return Err(LoxError::parse_error_with_help(
                at,
                format!("Expression nests too deeply (more than {} levels)", MAX_NESTING),
                "Split the expression or remove redundant parentheses and unary operators.".to_string(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    fn expected_expression(&self, token: &Token) -> LoxError {
        let found = if token.token_type == TokenType::Eof {
            "end of input".to_string()
        } else {
            format!("'{}'", token.lexeme)
        };

        let help_msg = match token.token_type {
            TokenType::RightParen => "Found ')' without matching '('. Check for unbalanced parentheses.",
            TokenType::Eof => "Reached end of input while expecting an expression.",
            TokenType::Identifier => "Variables are not supported; only literal values can be used in expressions.",
            TokenType::PlusPlus | TokenType::MinusMinus => {
                "Increment and decrement operators are not supported in expressions."
            }
            _ => "Expected a number, string, 'true', 'false', 'nil', or a parenthesized expression here.",
        };

        LoxError::parse_error_with_help(
            token,
            format!("Expected expression, found {}", found),
            help_msg.to_string(),
        )
    }

    fn match_types(&mut self, types: &[TokenType]) -> bool {
        for token_type in types {
            if self.check(token_type) {
                self.advance();
                return true;
            }
        }
        false
    }

    fn check(&self, token_type: &TokenType) -> bool {
        if self.is_at_end() {
            false
        } else {
            &self.peek().token_type == token_type
        }
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::Eof
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    fn consume_with_help(
        &mut self,
        token_type: TokenType,
        message: &str,
        help: String,
    ) -> Result<Token, LoxError> {
        if self.check(&token_type) {
            return Ok(self.advance().clone());
        }

        // At EOF, point at the last real token instead of past the input
        let at = if self.is_at_end() && self.current > 0 {
            self.previous()
        } else {
            self.peek()
        };

        Err(LoxError::parse_error_with_help(at, message.to_string(), help))
    }
}

fn fold(left: Expr, operator: Token, right: Expr) -> Result<Expr, LoxError> {
    if 1 + left.height().max(right.height()) > MAX_HEIGHT {
        return Err(LoxError::parse_error_with_help(
            &operator,
            format!("Expression nests too deeply (more than {} levels)", MAX_HEIGHT),
            "Split the expression into smaller parts.".to_string(),
        ));
    }

    let span = left.span().to(right.span());
    Ok(Expr::Binary {
        left: Box::new(left),
        operator,
        right: Box::new(right),
        span,
    })
}
