/// Arithmetic operators.
///
/// Implements `+`, `-`, `*` and `/` over integers, floats, strings and
/// currencies, including the operand-combination rules and division by zero
/// checks.
pub mod arithmetic;

/// Comparison operators.
///
/// Implements equality and ordering for values of the same type.
pub mod comparison;
