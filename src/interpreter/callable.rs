//! Callable values: user-defined functions and natives.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::env::Environment;
use super::error::RuntimeError;
use super::value::Value;
use super::{Flow, Interpreter};
use crate::ast::FunctionDecl;

/// The calling interface shared by user functions and natives.
///
/// The call site checks `arity()` against the argument count before
/// invoking `call`, so implementations may assume the lengths match.
pub trait Callable {
    /// The number of parameters this callable expects.
    fn arity(&self) -> usize;

    /// Invokes the callable with already-evaluated arguments.
    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
    ) -> Result<Value, RuntimeError>;
}

/// A user-defined function value.
///
/// The closure is the environment in effect when the `fun` declaration was
/// evaluated, not the caller's environment at call time. That single choice
/// is what makes closures close over their definition site.
pub struct LoxFunction {
    /// The function declaration, shared with the AST.
    declaration: Rc<FunctionDecl>,
    /// The environment captured at declaration time.
    closure: Rc<RefCell<Environment>>,
}

impl LoxFunction {
    /// Creates a function value capturing the given closure environment.
    pub fn new(declaration: Rc<FunctionDecl>, closure: Rc<RefCell<Environment>>) -> Self {
        LoxFunction {
            declaration,
            closure,
        }
    }

    /// The function's declared name.
    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }
}

impl Callable for LoxFunction {
    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
    ) -> Result<Value, RuntimeError> {
        let mut environment = Environment::with_enclosing(Rc::clone(&self.closure));
        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            environment.define(param.lexeme.clone(), argument);
        }

        let frame = Rc::new(RefCell::new(environment));
        match interpreter.execute_block(&self.declaration.body, frame)? {
            Flow::Return(_, value) => Ok(value),
            Flow::Normal => Ok(Value::Nil),
            // The parser resets the loop depth inside function bodies, so a
            // break can never legally cross a call frame.
            Flow::Break(token) => Err(RuntimeError::internal(
                &token,
                "'break' escaped its enclosing loop",
            )),
        }
    }
}

impl fmt::Display for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name())
    }
}

impl fmt::Debug for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The closure is omitted: a recursive function's closure contains
        // the function itself.
        write!(f, "<fn {}>", self.name())
    }
}

/// A built-in function implemented by the host.
pub struct NativeFunction {
    /// The name the native is bound to in the global environment.
    pub name: &'static str,
    /// The number of arguments the native expects.
    pub arity: usize,
    /// The host implementation.
    pub function: fn(&mut Interpreter, Vec<Value>) -> Result<Value, RuntimeError>,
}

impl Callable for NativeFunction {
    fn arity(&self) -> usize {
        self.arity
    }

    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
    ) -> Result<Value, RuntimeError> {
        (self.function)(interpreter, arguments)
    }
}

impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn>")
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}
