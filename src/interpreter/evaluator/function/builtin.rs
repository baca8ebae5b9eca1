use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Writes the textual form of its single argument, followed by a newline.
///
/// The writer is flushed after every call so output appears in evaluation
/// order. Produces no value.
///
/// # Example
/// ```
/// use currenscript::interpreter::{evaluator::function::builtin::print, value::core::Value};
///
/// let mut out = Vec::new();
/// let result = print(&[Value::Float(1200.0)], &mut out).unwrap();
///
/// assert_eq!(result, None);
/// assert_eq!(String::from_utf8(out).unwrap(), "1200.0\n");
/// ```
pub fn print(args: &[Value], output: &mut dyn Write) -> EvalResult<Option<Value>> {
    for value in args {
        writeln!(output, "{value}").map_err(output_failed)?;
    }
    output.flush().map_err(output_failed)?;
    Ok(None)
}

/// Returns the runtime type name of its single argument as a string.
///
/// # Example
/// ```
/// use currenscript::interpreter::{evaluator::function::builtin::type_of, value::core::Value};
///
/// let mut out = Vec::new();
/// let name = type_of(&[Value::Bool(true)], &mut out).unwrap();
///
/// assert_eq!(name, Some(Value::from("bool")));
/// ```
pub fn type_of(args: &[Value], _output: &mut dyn Write) -> EvalResult<Option<Value>> {
    Ok(args.first().map(|value| Value::from(value.type_name())))
}

fn output_failed(error: std::io::Error) -> RuntimeError {
    RuntimeError::OutputFailed { reason: error.to_string() }
}
