//! Fully-parenthesized printer for expressions.
//!
//! This module provides [`AstPrinter`], a debugging aid that renders an
//! expression tree with every operation explicitly parenthesized, making
//! the parsed structure visible: `1 + 2 * 3` renders as `(1 + (2 * 3))`.
//!
//! The rendered form is itself valid source. Grouping nodes print
//! transparently (the printer's own parentheses already fix the structure)
//! and string literals keep their quotes, so printing, re-parsing, and
//! printing again always yields the same string.

use crate::ast::{Expr, LiteralValue};

/// Renders expressions in fully-parenthesized form.
///
/// # Examples
///
/// ```
/// use golox::ast::{Expr, LiteralValue};
/// use golox::printer::AstPrinter;
///
/// let expr = Expr::Literal(LiteralValue::Number(7.0));
/// assert_eq!(AstPrinter.print(&expr), "7");
/// ```
pub struct AstPrinter;

impl AstPrinter {
    /// Renders the given expression.
    pub fn print(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(value) => self.literal(value),
            Expr::Variable(name) => name.lexeme.clone(),
            Expr::Assign { name, value } => {
                format!("({} = {})", name.lexeme, self.print(value))
            }
            Expr::Unary { operator, operand } => {
                format!("({}{})", operator.lexeme, self.print(operand))
            }
            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => format!(
                "({} {} {})",
                self.print(left),
                operator.lexeme,
                self.print(right)
            ),
            // The structure is already explicit; extra parentheses would
            // accumulate across print/parse round trips.
            Expr::Grouping(inner) => self.print(inner),
            Expr::Call {
                callee, arguments, ..
            } => {
                let arguments: Vec<String> =
                    arguments.iter().map(|arg| self.print(arg)).collect();
                format!("{}({})", self.print(callee), arguments.join(", "))
            }
        }
    }

    fn literal(&self, value: &LiteralValue) -> String {
        match value {
            LiteralValue::Nil => "nil".to_string(),
            LiteralValue::Bool(b) => b.to_string(),
            LiteralValue::Number(n) => n.to_string(),
            // Quoted so the rendered form scans back to a string literal.
            LiteralValue::Str(s) => format!("\"{s}\""),
        }
    }
}
