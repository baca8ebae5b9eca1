use std::io::Write;

use crate::{
    ast::{Function, FunctionCall},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::builtin,
            scope::{FunctionCallContext, Scope},
            validation::{check_argument_count, check_argument_type, check_return},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the writer the
/// program prints to. It returns the produced value, if any.
type BuiltinFn = fn(&[Value], &mut dyn Write) -> EvalResult<Option<Value>>;

/// The maximum number of user-defined calls active at once.
pub const MAX_CALL_DEPTH: usize = 1000;

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "print"  => { arity: 1, func: builtin::print },
    "typeof" => { arity: 1, func: builtin::type_of },
}

impl<W: Write> Interpreter<'_, W> {
    /// Evaluates a function call.
    ///
    /// The callee is looked up among the program's functions first, then
    /// among the builtins. Arguments are evaluated left to right in the
    /// caller's context before the callee is entered.
    ///
    /// # Returns
    /// The value produced by the callee, or `None` if it produces none.
    ///
    /// # Errors
    /// - `MissingFunction` if the name resolves to nothing.
    /// - `ArgumentCountMismatch` if the number of arguments is wrong.
    /// - Any error raised while evaluating the arguments or the callee.
    pub fn call_function(&mut self, call: &FunctionCall) -> EvalResult<Option<Value>> {
        let program = self.program;
        if let Some(function) = program.functions.get(&call.name) {
            check_argument_count(&function.name, function.parameters.len(), call.arguments.len())?;
            let arguments = self.evaluate_arguments(call)?;
            return self.call_user_defined_function(function, arguments);
        }

        let builtin =
            BUILTIN_TABLE.iter()
                         .find(|b| b.name == call.name)
                         .ok_or_else(|| RuntimeError::MissingFunction { name: call.name.clone() })?;
        check_argument_count(builtin.name, builtin.arity, call.arguments.len())?;
        let arguments = self.evaluate_arguments(call)?;
        (builtin.func)(&arguments, &mut self.output)
    }

    fn evaluate_arguments(&mut self, call: &FunctionCall) -> EvalResult<Vec<Value>> {
        call.arguments.iter().map(|arg| self.evaluate(arg)).collect()
    }

    /// Executes a user-defined function with already evaluated arguments.
    ///
    /// Arguments are checked against the declared parameter types and bound
    /// into a fresh call context, which is popped again once the body has
    /// finished, whatever the outcome.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the number of arguments is wrong.
    /// - `TypeMismatch` if an argument or the returned value has the wrong
    ///   type.
    /// - `NoValueReturned` if a non-`void` function returns nothing.
    /// - `CallDepthExceeded` if [`MAX_CALL_DEPTH`] calls are already active.
    pub(in crate::interpreter::evaluator) fn call_user_defined_function(&mut self,
                                                                        function: &Function,
                                                                        arguments: Vec<Value>)
                                                                        -> EvalResult<Option<Value>> {
        check_argument_count(&function.name, function.parameters.len(), arguments.len())?;
        if self.call_stack.len() >= MAX_CALL_DEPTH {
            return Err(RuntimeError::CallDepthExceeded { function: function.name.clone(),
                                                         limit:    MAX_CALL_DEPTH, });
        }

        let mut bindings = Scope::new();
        for (parameter, value) in function.parameters.iter().zip(arguments) {
            check_argument_type(parameter, &value)?;
            bindings.insert(parameter.name.clone(), value);
        }

        self.call_stack.push(FunctionCallContext::new(bindings));
        let result = self.execute_block(&function.body);
        self.call_stack.pop();

        check_return(function, result?)
    }
}
