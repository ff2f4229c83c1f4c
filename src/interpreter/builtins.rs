//! Native functions installed in the global environment.

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use super::callable::NativeFunction;
use super::env::Environment;
use super::error::RuntimeError;
use super::value::Value;
use super::Interpreter;

/// Installs every native binding into the given environment.
pub(super) fn install(globals: &mut Environment) {
    globals.define(
        "clock",
        Value::Native(Rc::new(NativeFunction {
            name: "clock",
            arity: 0,
            function: clock,
        })),
    );
}

/// Returns wall-clock seconds since the Unix epoch as a double.
fn clock(_interpreter: &mut Interpreter, _arguments: Vec<Value>) -> Result<Value, RuntimeError> {
    // System clocks before the epoch read as zero.
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    Ok(Value::Number(elapsed.as_secs_f64()))
}
