//! Statement execution.

use std::cell::RefCell;
use std::rc::Rc;

use super::callable::LoxFunction;
use super::env::Environment;
use super::error::RuntimeError;
use super::value::Value;
use super::{Flow, Interpreter};
use crate::ast::Stmt;

impl Interpreter {
    /// Executes a single statement, producing a control-flow signal.
    pub(crate) fn execute(&mut self, statement: &Stmt) -> Result<Flow, RuntimeError> {
        match statement {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            }

            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                println!("{value}");
                Ok(Flow::Normal)
            }

            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment
                    .borrow_mut()
                    .define(name.lexeme.clone(), value);
                Ok(Flow::Normal)
            }

            Stmt::Block(statements) => {
                let inner = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, Rc::new(RefCell::new(inner)))
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }

            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    match self.execute(body)? {
                        Flow::Normal => {}
                        // A break terminates this loop only.
                        Flow::Break(_) => break,
                        ret @ Flow::Return(..) => return Ok(ret),
                    }
                }
                Ok(Flow::Normal)
            }

            Stmt::Break(keyword) => Ok(Flow::Break(keyword.clone())),

            Stmt::Function(declaration) => {
                // The closure is the environment at the declaration site.
                // The binding added below lives in that same shared
                // environment, which is what lets the function call itself.
                let function =
                    LoxFunction::new(Rc::clone(declaration), Rc::clone(&self.environment));
                self.environment.borrow_mut().define(
                    declaration.name.lexeme.clone(),
                    Value::Function(Rc::new(function)),
                );
                Ok(Flow::Normal)
            }

            Stmt::Return { keyword, value } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return(keyword.clone(), value))
            }
        }
    }
}
