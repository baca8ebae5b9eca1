use crate::{
    ast::{Function, Parameter, TypeKind, VariableType},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{ControlFlow, EvalResult},
        value::core::Value,
    },
};

/// Checks that a call supplies exactly as many arguments as declared.
///
/// # Example
/// ```
/// use currenscript::interpreter::evaluator::validation::check_argument_count;
///
/// assert!(check_argument_count("f", 2, 2).is_ok());
/// assert!(check_argument_count("f", 2, 1).is_err());
/// ```
pub fn check_argument_count(function: &str, expected: usize, found: usize) -> EvalResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { function: function.to_string(),
                                                  expected,
                                                  found })
    }
}

/// Checks an argument against its parameter's declared type.
///
/// Untyped parameters accept any value.
pub fn check_argument_type(parameter: &Parameter, value: &Value) -> EvalResult<()> {
    match &parameter.declared_type {
        Some(declared_type) => check_value_type(declared_type, value),
        None => Ok(()),
    }
}

/// Checks the initial value of a variable against its declared type.
///
/// Currency variables only accept currency values of the same id; numbers
/// must be cast explicitly.
pub fn check_init_type(declared_type: &VariableType, value: &Value) -> EvalResult<()> {
    check_value_type(declared_type, value)
}

fn check_value_type(declared_type: &VariableType, value: &Value) -> EvalResult<()> {
    if declared_type.accepts(value) {
        Ok(())
    } else {
        Err(RuntimeError::TypeMismatch { expected: declared_type.to_string(),
                                         found:    value.describe(), })
    }
}

/// Checks how a function body finished against the declared return type.
///
/// # Returns
/// The returned value, or `None` for a `void` function.
///
/// # Errors
/// - `TypeMismatch` if a `void` function returned a value, or a value of the
///   wrong type was returned.
/// - `NoValueReturned` if a non-`void` function finished without one.
pub fn check_return(function: &Function, flow: ControlFlow) -> EvalResult<Option<Value>> {
    let returned = match flow {
        ControlFlow::Return(value) => value,
        ControlFlow::Continue => None,
    };

    match (function.return_type.kind, returned) {
        (TypeKind::Void, None) => Ok(None),
        (TypeKind::Void, Some(value)) => {
            Err(RuntimeError::TypeMismatch { expected: function.return_type.to_string(),
                                             found:    value.describe(), })
        },
        (_, None) => Err(RuntimeError::NoValueReturned { function: function.name.clone(),
                                                         expected: function.return_type
                                                                           .to_string(), }),
        (_, Some(value)) => {
            check_value_type(&function.return_type, &value)?;
            Ok(Some(value))
        },
    }
}
