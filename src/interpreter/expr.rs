//! Expression evaluation.

use std::rc::Rc;

use super::callable::Callable;
use super::error::RuntimeError;
use super::value::Value;
use super::Interpreter;
use crate::ast::Expr;
use crate::token::{Token, TokenKind};

/// Requires the operand of a unary operator to be a number.
fn check_number_operand(operator: &Token, operand: &Value) -> Result<f64, RuntimeError> {
    match operand {
        Value::Number(n) => Ok(*n),
        _ => Err(RuntimeError::new(operator, "Operand must be a number.")),
    }
}

/// Requires both operands of a binary operator to be numbers.
fn check_number_operands(
    operator: &Token,
    left: &Value,
    right: &Value,
) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok((*l, *r)),
        _ => Err(RuntimeError::new(operator, "Operands must be numbers.")),
    }
}

impl Interpreter {
    /// Evaluates an expression to a value.
    pub(crate) fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),

            Expr::Grouping(inner) => self.evaluate(inner),

            Expr::Variable(name) => self.environment.borrow().get(name),

            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment
                    .borrow_mut()
                    .assign(name, value.clone())?;
                Ok(value)
            }

            Expr::Unary { operator, operand } => {
                let operand = self.evaluate(operand)?;
                match operator.kind {
                    TokenKind::Minus => {
                        let n = check_number_operand(operator, &operand)?;
                        Ok(Value::Number(-n))
                    }
                    TokenKind::Bang => Ok(Value::Bool(!operand.is_truthy())),
                    _ => Err(RuntimeError::internal(
                        operator,
                        "unary expression with a non-unary operator",
                    )),
                }
            }

            Expr::Binary {
                left,
                operator,
                right,
            } => {
                // Both operands are evaluated, left first, before any check.
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                self.binary(operator, left, right)
            }

            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let short_circuits = match operator.kind {
                    TokenKind::Or => left.is_truthy(),
                    TokenKind::And => !left.is_truthy(),
                    _ => {
                        return Err(RuntimeError::internal(
                            operator,
                            "logical expression with a non-logical operator",
                        ));
                    }
                };

                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }

            Expr::Call {
                callee,
                paren,
                arguments,
            } => {
                let callee = self.evaluate(callee)?;

                let mut args = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    args.push(self.evaluate(argument)?);
                }

                let callable: Rc<dyn Callable> = match callee {
                    Value::Function(function) => function,
                    Value::Native(native) => native,
                    _ => {
                        return Err(RuntimeError::new(
                            paren,
                            "Can only call functions and classes.",
                        ));
                    }
                };

                if args.len() != callable.arity() {
                    return Err(RuntimeError::new(
                        paren,
                        format!(
                            "Expected {} arguments but got {}.",
                            callable.arity(),
                            args.len()
                        ),
                    ));
                }

                callable.call(self, args)
            }
        }
    }

    /// Applies a binary operator to fully evaluated operands.
    fn binary(
        &self,
        operator: &Token,
        left: Value,
        right: Value,
    ) -> Result<Value, RuntimeError> {
        match operator.kind {
            TokenKind::Plus => match (&left, &right) {
                (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
                (Value::Str(l), Value::Str(r)) => Ok(Value::Str(format!("{l}{r}"))),
                _ => Err(RuntimeError::new(
                    operator,
                    "Operands must be two numbers or two strings.",
                )),
            },
            TokenKind::Minus => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Value::Number(l - r))
            }
            TokenKind::Star => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Value::Number(l * r))
            }
            // Division is IEEE-754: dividing by zero yields an infinity,
            // not a runtime error.
            TokenKind::Slash => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Value::Number(l / r))
            }
            TokenKind::Greater => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Value::Bool(l > r))
            }
            TokenKind::GreaterEqual => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Value::Bool(l >= r))
            }
            TokenKind::Less => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Value::Bool(l < r))
            }
            TokenKind::LessEqual => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Value::Bool(l <= r))
            }
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            TokenKind::BangEqual => Ok(Value::Bool(left != right)),
            _ => Err(RuntimeError::internal(
                operator,
                "binary expression with a non-binary operator",
            )),
        }
    }
}
