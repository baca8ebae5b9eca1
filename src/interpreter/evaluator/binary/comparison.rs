use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{
    ast::ComparisonOperator,
    interpreter::{
        evaluator::{binary::arithmetic::different_types, core::EvalResult},
        value::core::Value,
    },
};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// Both operands must have the same type; two currencies must also share a
/// currency id. Integers and floats compare numerically, strings
/// lexicographically, booleans with `false < true`, and currencies by
/// amount.
///
/// # Errors
/// `DifferentTypes` if the operands differ in type or currency id.
///
/// # Example
/// ```
/// use currenscript::{
///     ast::ComparisonOperator,
///     interpreter::{evaluator::binary::comparison::compare, value::core::Value},
/// };
///
/// let less = compare(ComparisonOperator::Less, &Value::Integer(2), &Value::Integer(3));
/// assert_eq!(less, Ok(true));
///
/// let mixed = compare(ComparisonOperator::Equal, &Value::Integer(2), &Value::Float(2.0));
/// assert!(mixed.is_err());
/// ```
pub fn compare(op: ComparisonOperator, left: &Value, right: &Value) -> EvalResult<bool> {
    let ordering = match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
        (Value::Float(a), Value::Float(b)) => OrderedFloat(*a).cmp(&OrderedFloat(*b)),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Currency(a), Value::Currency(b)) if a.same_currency(b) => a.amount.cmp(&b.amount),
        _ => return Err(different_types(left, right)),
    };

    Ok(match op {
        ComparisonOperator::Equal => ordering == Ordering::Equal,
        ComparisonOperator::NotEqual => ordering != Ordering::Equal,
        ComparisonOperator::Greater => ordering == Ordering::Greater,
        ComparisonOperator::GreaterOrEqual => ordering != Ordering::Less,
        ComparisonOperator::Less => ordering == Ordering::Less,
        ComparisonOperator::LessOrEqual => ordering != Ordering::Greater,
    })
}
