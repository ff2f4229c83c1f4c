//! Statement and declaration parsing.

use std::rc::Rc;

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, FunctionDecl, LiteralValue, Stmt};
use crate::token::TokenKind;

impl Parser {
    /// Parses a single declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// declaration → funDecl | varDecl | statement
    /// ```
    pub(super) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.match_kind(TokenKind::Fun) {
            self.function_declaration()
        } else if self.match_kind(TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        }
    }

    /// Parses a function declaration. The `fun` keyword has been consumed.
    ///
    /// At most 255 parameters are accepted; exceeding the limit records an
    /// error but parsing continues. The loop depth is reset around the body
    /// so a `break` inside the function cannot target a loop outside it.
    ///
    /// # Grammar
    ///
    /// ```text
    /// funDecl    → "fun" IDENT "(" parameters? ")" block
    /// parameters → IDENT ( "," IDENT )*
    /// ```
    fn function_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::Identifier, "Expect function name.")?;
        self.consume(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if params.len() >= 255 {
                    let error = ParseError::at_token(
                        self.current(),
                        "Cannot have more than 255 parameters.",
                    );
                    self.report(error);
                }

                params.push(self.consume(TokenKind::Identifier, "Expect parameter name.")?);

                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before function body.")?;

        let enclosing_loop_depth = std::mem::replace(&mut self.loop_depth, 0);
        self.fun_depth += 1;
        let body = self.block_statements();
        self.fun_depth -= 1;
        self.loop_depth = enclosing_loop_depth;

        Ok(Stmt::Function(Rc::new(FunctionDecl {
            name,
            params,
            body: body?,
        })))
    }

    /// Parses a variable declaration. The `var` keyword has been consumed.
    ///
    /// # Grammar
    ///
    /// ```text
    /// varDecl → "var" IDENT ( "=" expression )? ";"
    /// ```
    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_kind(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;
        Ok(Stmt::Var { name, initializer })
    }

    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// statement → printStmt | ifStmt | whileStmt | forStmt
    ///           | returnStmt | breakStmt | block | exprStmt
    /// ```
    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_kind(TokenKind::Print) {
            self.print_statement()
        } else if self.match_kind(TokenKind::If) {
            self.if_statement()
        } else if self.match_kind(TokenKind::While) {
            self.while_statement()
        } else if self.match_kind(TokenKind::For) {
            self.for_statement()
        } else if self.match_kind(TokenKind::Return) {
            self.return_statement()
        } else if self.match_kind(TokenKind::Break) {
            self.break_statement()
        } else if self.match_kind(TokenKind::LeftBrace) {
            Ok(Stmt::Block(self.block_statements()?))
        } else {
            self.expression_statement()
        }
    }

    /// Parses the statements of a block. The `{` has been consumed.
    ///
    /// Errors inside the block recover at statement boundaries within it,
    /// so one bad statement does not abandon the rest of the block.
    fn block_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    /// Parses a print statement. The `print` keyword has been consumed.
    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    /// Parses an expression statement.
    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    /// Parses an if statement. The `if` keyword has been consumed.
    ///
    /// The `else` binds to the nearest `if`, which falls out of parsing it
    /// eagerly here.
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_kind(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// Parses a while statement. The `while` keyword has been consumed.
    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;

        self.loop_depth += 1;
        let body = self.statement();
        self.loop_depth -= 1;

        Ok(Stmt::While {
            condition,
            body: Box::new(body?),
        })
    }

    /// Parses a for statement and desugars it. The `for` keyword has been
    /// consumed.
    ///
    /// `for (init; cond; incr) body` becomes:
    ///
    /// ```text
    /// { init; while (cond) { body; incr; } }
    /// ```
    ///
    /// with each layer omitted when the corresponding clause is absent. A
    /// missing condition defaults to `true`.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_kind(TokenKind::Semicolon) {
            None
        } else if self.match_kind(TokenKind::Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if !self.check(TokenKind::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if !self.check(TokenKind::RightParen) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        self.loop_depth += 1;
        let body = self.statement();
        self.loop_depth -= 1;
        let mut body = body?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let condition = condition.unwrap_or(Expr::Literal(LiteralValue::Bool(true)));
        body = Stmt::While {
            condition,
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    /// Parses a return statement. The `return` keyword has been consumed.
    ///
    /// A `return` outside any function records an error but still yields a
    /// statement, so parsing continues in place.
    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.previous().clone();

        if self.fun_depth == 0 {
            let error =
                ParseError::at_token(&keyword, "Cannot use 'return' outside of a function.");
            self.report(error);
        }

        let value = if !self.check(TokenKind::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return { keyword, value })
    }

    /// Parses a break statement. The `break` keyword has been consumed.
    ///
    /// A `break` outside any loop records an error but still yields a
    /// statement, so parsing continues in place.
    fn break_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.previous().clone();

        if self.loop_depth == 0 {
            let error = ParseError::at_token(&keyword, "Cannot use 'break' outside of a loop.");
            self.report(error);
        }

        self.consume(TokenKind::Semicolon, "Expect ';' after 'break'.")?;
        Ok(Stmt::Break(keyword))
    }
}
