use bigdecimal::BigDecimal;

use crate::{
    ast::ArithmeticOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{decimal_to_f64, f64_to_decimal, i64_to_f64_checked},
};

/// Dispatches an arithmetic operator to its implementation.
pub fn apply(op: ArithmeticOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match op {
        ArithmeticOperator::Add => add(left, right),
        ArithmeticOperator::Subtract => subtract(left, right),
        ArithmeticOperator::Multiply => multiply(left, right),
        ArithmeticOperator::Divide => divide(left, right),
    }
}

/// Adds two values of the same type.
///
/// Integers, floats and currencies of one id are summed; strings are
/// concatenated.
///
/// # Errors
/// - `DifferentTypes` if the operands differ in type or currency id.
/// - `UnsupportedCombination` for booleans.
/// - `Overflow` if an integer sum overflows.
///
/// # Example
/// ```
/// use currenscript::interpreter::{evaluator::binary::arithmetic::add, value::core::Value};
///
/// assert_eq!(add(&Value::Integer(3), &Value::Integer(5)), Ok(Value::Integer(8)));
/// assert_eq!(add(&Value::from("3"), &Value::from("5")), Ok(Value::from("35")));
/// assert!(add(&Value::Integer(1), &Value::Float(1.0)).is_err());
/// ```
pub fn add(left: &Value, right: &Value) -> EvalResult<Value> {
    check_same_type(left, right)?;

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_add(*b)
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { operation: "addition" })
        },
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
        (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
        (Value::Currency(a), Value::Currency(b)) => {
            Ok(Value::Currency(a.with_amount(&a.amount + &b.amount)))
        },
        _ => Err(unsupported(left, right, "addition")),
    }
}

/// Subtracts two values of the same numeric or currency type.
///
/// # Errors
/// - `DifferentTypes` if the operands differ in type or currency id.
/// - `UnsupportedCombination` for strings and booleans.
/// - `Overflow` if an integer difference overflows.
pub fn subtract(left: &Value, right: &Value) -> EvalResult<Value> {
    check_same_type(left, right)?;

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_sub(*b)
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { operation: "subtraction" })
        },
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a - b)),
        (Value::Currency(a), Value::Currency(b)) => {
            Ok(Value::Currency(a.with_amount(&a.amount - &b.amount)))
        },
        _ => Err(unsupported(left, right, "subtraction")),
    }
}

/// Multiplies two numbers, or scales a currency amount by a number.
///
/// Mixing an integer with a float yields a float. A currency may appear on
/// either side, but not on both.
///
/// # Errors
/// - `UnsupportedCombination` for strings, booleans and `currency *
///   currency`.
/// - `Overflow` if an integer product overflows.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use currenscript::interpreter::{
///     evaluator::binary::arithmetic::multiply,
///     value::{core::Value, currency::Currency},
/// };
///
/// let money = Value::from(Currency::new(BigDecimal::from(3), "PLN"));
/// let expected = Value::from(Currency::new(BigDecimal::from(15), "PLN"));
///
/// assert_eq!(multiply(&Value::Integer(5), &money), Ok(expected));
/// assert_eq!(multiply(&Value::Integer(3), &Value::Float(5.0)), Ok(Value::Float(15.0)));
/// ```
pub fn multiply(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_mul(*b)
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { operation: "multiplication" })
        },
        (Value::Integer(a), Value::Float(b)) => Ok(Value::Float(int_to_float(*a)? * b)),
        (Value::Float(a), Value::Integer(b)) => Ok(Value::Float(a * int_to_float(*b)?)),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a * b)),
        (Value::Currency(c), Value::Integer(n)) | (Value::Integer(n), Value::Currency(c)) => {
            Ok(Value::Currency(c.with_amount(&c.amount * &BigDecimal::from(*n))))
        },
        (Value::Currency(c), Value::Float(x)) | (Value::Float(x), Value::Currency(c)) => {
            Ok(Value::Currency(c.with_amount(&c.amount * &f64_to_decimal(*x)?)))
        },
        _ => Err(unsupported(left, right, "multiplication")),
    }
}

/// Divides two numbers, a currency by a number, or two currencies.
///
/// Integer division truncates. Dividing a currency by a number scales its
/// amount; dividing two amounts of one currency yields their ratio as a
/// float.
///
/// # Errors
/// - `DivisionByZero` if the divisor is zero (including a zero amount).
/// - `DifferentTypes` when dividing currencies with different ids.
/// - `UnsupportedCombination` for any other operand pair, including a number
///   divided by a currency.
///
/// # Example
/// ```
/// use currenscript::interpreter::{evaluator::binary::arithmetic::divide, value::core::Value};
///
/// assert_eq!(divide(&Value::Integer(3), &Value::Integer(5)), Ok(Value::Integer(0)));
/// assert_eq!(divide(&Value::Float(3.0), &Value::Float(5.0)), Ok(Value::Float(0.6)));
/// assert!(divide(&Value::Integer(1), &Value::Integer(0)).is_err());
/// ```
pub fn divide(left: &Value, right: &Value) -> EvalResult<Value> {
    if let (Value::Currency(a), Value::Currency(b)) = (left, right)
       && !a.same_currency(b)
    {
        return Err(different_types(left, right));
    }
    if is_zero_divisor(left, right) {
        return Err(RuntimeError::DivisionByZero);
    }

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_div(*b)
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { operation: "division" })
        },
        (Value::Integer(a), Value::Float(b)) => Ok(Value::Float(int_to_float(*a)? / b)),
        (Value::Float(a), Value::Integer(b)) => Ok(Value::Float(a / int_to_float(*b)?)),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a / b)),
        (Value::Currency(c), Value::Integer(n)) => {
            Ok(Value::Currency(c.with_amount(&c.amount / &BigDecimal::from(*n))))
        },
        (Value::Currency(c), Value::Float(x)) => {
            Ok(Value::Currency(c.with_amount(&c.amount / &f64_to_decimal(*x)?)))
        },
        (Value::Currency(a), Value::Currency(b)) => {
            decimal_to_f64(&(&a.amount / &b.amount)).map(Value::Float)
        },
        _ => Err(unsupported(left, right, "division")),
    }
}

/// Returns `true` if `right` is a zero divisor for a supported `left`.
fn is_zero_divisor(left: &Value, right: &Value) -> bool {
    let numeric_left = matches!(left, Value::Integer(_) | Value::Float(_) | Value::Currency(_));
    numeric_left
    && match right {
        Value::Integer(n) => *n == 0,
        Value::Float(x) => *x == 0.0,
        Value::Currency(c) => matches!(left, Value::Currency(_)) && c.is_zero(),
        _ => false,
    }
}

fn int_to_float(value: i64) -> EvalResult<f64> {
    i64_to_f64_checked(value,
                       RuntimeError::InvalidNumber { text:   value.to_string(),
                                                     target: "float", })
}

/// Fails with `DifferentTypes` unless both operands share a type, and for
/// currencies, a currency id.
fn check_same_type(left: &Value, right: &Value) -> EvalResult<()> {
    let same = match (left, right) {
        (Value::Currency(a), Value::Currency(b)) => a.same_currency(b),
        _ => left.same_variant(right),
    };
    if same { Ok(()) } else { Err(different_types(left, right)) }
}

pub(in crate::interpreter::evaluator) fn different_types(left: &Value,
                                                         right: &Value)
                                                         -> RuntimeError {
    RuntimeError::DifferentTypes { left:  left.describe(),
                                   right: right.describe(), }
}

fn unsupported(left: &Value, right: &Value, operation: &'static str) -> RuntimeError {
    RuntimeError::UnsupportedCombination { left: left.type_name().to_string(),
                                           right: right.type_name().to_string(),
                                           operation }
}
