//! Expression parsing.
//!
//! Each precedence level is one method, from loosest (`assignment`) to
//! tightest (`primary`). Binary operators at the same level are parsed in a
//! loop, which makes them left-associative; assignment recurses on its
//! right-hand side, which makes it right-associative.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, LiteralValue};
use crate::token::{Literal, TokenKind};

impl Parser {
    /// Parses an expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expression → assignment
    /// ```
    pub(super) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// Parses an assignment or anything looser.
    ///
    /// The left-hand side is parsed as a general expression first; only
    /// when an `=` follows is it checked to be a valid assignment target.
    /// An invalid target records "Invalid assignment target." at the `=`
    /// and the left-hand side is returned as an ordinary value, keeping
    /// the parse going without a cascade.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.or()?;

        if self.match_kind(TokenKind::Equal) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            if let Expr::Variable(name) = expr {
                return Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                });
            }

            self.report(ParseError::at_token(&equals, "Invalid assignment target."));
        }

        Ok(expr)
    }

    /// Parses an `or` chain.
    fn or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.and()?;

        while self.match_kind(TokenKind::Or) {
            let operator = self.previous().clone();
            let right = self.and()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parses an `and` chain.
    fn and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;

        while self.match_kind(TokenKind::And) {
            let operator = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parses an equality chain: `!=` and `==`.
    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;

        while self.match_kinds(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parses a comparison chain: `>`, `>=`, `<`, `<=`.
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;

        while self.match_kinds(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parses an additive chain: `-` and `+`.
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;

        while self.match_kinds(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parses a multiplicative chain: `/` and `*`.
    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;

        while self.match_kinds(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parses a unary operation: `!` or `-`, right-associative.
    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kinds(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let operand = self.unary()?;
            return Ok(Expr::Unary {
                operator,
                operand: Box::new(operand),
            });
        }

        self.call()
    }

    /// Parses a call chain: a primary followed by any number of argument
    /// lists, so `f(1)(2)` calls the result of `f(1)`.
    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        while self.match_kind(TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    /// Parses an argument list. The `(` has been consumed.
    ///
    /// At most 255 arguments are accepted; exceeding the limit records an
    /// error but parsing continues.
    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut arguments = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                if arguments.len() >= 255 {
                    let error = ParseError::at_token(
                        self.current(),
                        "Cannot have more than 255 arguments.",
                    );
                    self.report(error);
                }

                arguments.push(self.expression()?);

                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    /// Parses a primary expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// primary → "true" | "false" | "nil" | NUMBER | STRING
    ///         | IDENT | "(" expression ")"
    /// ```
    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kind(TokenKind::False) {
            return Ok(Expr::Literal(LiteralValue::Bool(false)));
        }
        if self.match_kind(TokenKind::True) {
            return Ok(Expr::Literal(LiteralValue::Bool(true)));
        }
        if self.match_kind(TokenKind::Nil) {
            return Ok(Expr::Literal(LiteralValue::Nil));
        }

        if self.match_kind(TokenKind::Number) {
            let token = self.previous();
            return match token.literal {
                Some(Literal::Number(value)) => Ok(Expr::Literal(LiteralValue::Number(value))),
                _ => Err(ParseError::internal(
                    token,
                    "number token has no literal value",
                )),
            };
        }

        if self.match_kind(TokenKind::String) {
            let token = self.previous();
            return match token.literal {
                Some(Literal::Str(ref value)) => {
                    Ok(Expr::Literal(LiteralValue::Str(value.clone())))
                }
                _ => Err(ParseError::internal(
                    token,
                    "string token has no literal value",
                )),
            };
        }

        if self.match_kind(TokenKind::Identifier) {
            return Ok(Expr::Variable(self.previous().clone()));
        }

        if self.match_kind(TokenKind::LeftParen) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        Err(ParseError::at_token(self.current(), "Expect expression."))
    }
}
