use std::io::{self, Stdout, Write};

use crate::{
    ast::{Program, TypeKind},
    config::ExchangeRates,
    error::RuntimeError,
    interpreter::{evaluator::scope::FunctionCallContext, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The name of the function a program starts in.
pub const ENTRY_FUNCTION: &str = "main";

/// How execution continues after a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlFlow {
    /// Proceed with the next statement.
    Continue,
    /// A `return` was executed; enclosing blocks and loops stop advancing
    /// until the call that owns it is popped.
    Return(Option<Value>),
}

/// The tree-walking interpreter.
///
/// Holds the program being run, the exchange-rate table used by currency
/// casts, the call stack and the writer that built-ins print to.
///
/// ## Usage
///
/// An `Interpreter` is created once per program run and started with
/// [`Interpreter::execute_program`]. Every call pushes a
/// [`FunctionCallContext`] and pops it on return, so the call stack is empty
/// again once the entry function has finished.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use currenscript::{
///     interpreter::{evaluator::core::Interpreter, value::core::Value},
///     parse_program_str,
/// };
///
/// let program = parse_program_str("int main() { return 3 + 5; }", ["PLN"]).unwrap();
/// let rates = HashMap::new();
/// let mut interpreter = Interpreter::with_output(&program, &rates, Vec::new());
///
/// assert_eq!(interpreter.execute_program("main").unwrap(), Some(Value::Integer(8)));
/// ```
pub struct Interpreter<'a, W: Write = Stdout> {
    pub(in crate::interpreter::evaluator) program:        &'a Program,
    pub(in crate::interpreter::evaluator) exchange_rates: &'a ExchangeRates,
    pub(in crate::interpreter::evaluator) call_stack:     Vec<FunctionCallContext>,
    pub(in crate::interpreter::evaluator) output:         W,
}

impl<'a> Interpreter<'a, Stdout> {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new(program: &'a Program, exchange_rates: &'a ExchangeRates) -> Self {
        Self::with_output(program, exchange_rates, io::stdout())
    }
}

impl<'a, W: Write> Interpreter<'a, W> {
    /// Creates an interpreter that prints to `output`.
    #[must_use]
    pub const fn with_output(program: &'a Program,
                             exchange_rates: &'a ExchangeRates,
                             output: W)
                             -> Self {
        Self { program,
               exchange_rates,
               call_stack: Vec::new(),
               output }
    }

    /// Consumes the interpreter and returns its output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the program starting at the function named `entry_name`.
    ///
    /// The entry function is called without arguments.
    ///
    /// # Returns
    /// The value returned by the entry function, or `None` if it is declared
    /// `void`.
    ///
    /// # Errors
    /// - `MissingMainFunction` if no function named `entry_name` exists.
    /// - Any runtime error raised while executing the program.
    pub fn execute_program(&mut self, entry_name: &str) -> EvalResult<Option<Value>> {
        let program = self.program;
        let entry = program.functions
                           .get(entry_name)
                           .ok_or_else(|| RuntimeError::MissingMainFunction { name:
                                                                                  entry_name.to_string(), })?;

        let result = self.call_user_defined_function(entry, Vec::new())?;

        if entry.return_type.kind == TypeKind::Void {
            Ok(None)
        } else {
            Ok(result)
        }
    }

    /// Returns the context of the innermost active call.
    pub(in crate::interpreter::evaluator) fn context(&self) -> EvalResult<&FunctionCallContext> {
        self.call_stack.last().ok_or(RuntimeError::NoActiveCall)
    }

    /// Returns the context of the innermost active call, mutably.
    pub(in crate::interpreter::evaluator) fn context_mut(&mut self)
                                                         -> EvalResult<&mut FunctionCallContext> {
        self.call_stack.last_mut().ok_or(RuntimeError::NoActiveCall)
    }
}
