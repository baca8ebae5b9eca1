use std::ops::Neg;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Arithmetic negation.
///
/// Integers and floats are negated directly; a currency value keeps its id
/// and has its amount negated.
///
/// # Errors
/// - `Overflow` when negating `i64::MIN`.
/// - `UnsupportedValueType` for strings and booleans.
///
/// # Example
/// ```
/// use currenscript::interpreter::{evaluator::unary::negate, value::core::Value};
///
/// assert_eq!(negate(&Value::Integer(4)), Ok(Value::Integer(-4)));
/// assert!(negate(&Value::Bool(true)).is_err());
/// ```
pub fn negate(value: &Value) -> EvalResult<Value> {
    match value {
        Value::Integer(i) => {
            i.checked_neg()
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { operation: "negation" })
        },
        Value::Float(f) => Ok(Value::Float(-f)),
        Value::Currency(c) => Ok(Value::Currency(c.with_amount(c.amount.clone().neg()))),
        Value::String(_) | Value::Bool(_) => {
            Err(RuntimeError::UnsupportedValueType { type_name: value.type_name().to_string(),
                                                     operation: "negation", })
        },
    }
}
