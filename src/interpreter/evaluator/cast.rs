use bigdecimal::BigDecimal;

use crate::{
    ast::{TypeKind, VariableType},
    config::ExchangeRates,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, currency::Currency},
    },
    util::num::{
        decimal_to_f64, decimal_to_i64_truncated, f64_to_decimal, f64_to_i64_truncated,
        i64_to_f64_checked,
    },
};

/// Applies an `as` cast.
///
/// Allowed conversions, keyed by source type:
///
/// | from     | to                                                     |
/// |----------|--------------------------------------------------------|
/// | int      | int, float, string, currency                           |
/// | float    | int (truncating), float, string, currency              |
/// | string   | int (parsed), float (parsed), string                   |
/// | bool     | string, bool                                           |
/// | currency | int (truncating), float, string, currency (converted)  |
///
/// A currency is converted by multiplying its amount with the rate from the
/// source id to the target id. Casting to the same currency id is a no-op
/// and needs no rate.
///
/// # Errors
/// - `UnsupportedCast` for any pair not listed above.
/// - `MissingExchangeRate` if no rate exists for a currency conversion.
/// - `InvalidNumber` if a string does not parse, or a number is out of range.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use currenscript::{
///     ast::{TypeKind, VariableType},
///     interpreter::{evaluator::cast::cast, value::core::Value},
/// };
///
/// let rates = HashMap::new();
/// let target = VariableType::from_parts(TypeKind::Int, None::<String>);
///
/// assert_eq!(cast(Value::Float(12.9), &target, &rates), Ok(Value::Integer(12)));
/// assert_eq!(cast(Value::from("42"), &target, &rates), Ok(Value::Integer(42)));
/// assert!(cast(Value::Bool(true), &target, &rates).is_err());
/// ```
pub fn cast(value: Value, target: &VariableType, rates: &ExchangeRates) -> EvalResult<Value> {
    match (value, target.kind) {
        (value @ Value::Integer(_), TypeKind::Int)
        | (value @ Value::Float(_), TypeKind::Float)
        | (value @ Value::String(_), TypeKind::String)
        | (value @ Value::Bool(_), TypeKind::Bool) => Ok(value),

        (Value::Integer(i), TypeKind::Float) => {
            let invalid = RuntimeError::InvalidNumber { text:   i.to_string(),
                                                        target: "float", };
            i64_to_f64_checked(i, invalid).map(Value::Float)
        },
        (Value::Float(f), TypeKind::Int) => f64_to_i64_truncated(f).map(Value::Integer),
        (Value::Currency(c), TypeKind::Int) => decimal_to_i64_truncated(&c.amount).map(Value::Integer),
        (Value::Currency(c), TypeKind::Float) => decimal_to_f64(&c.amount).map(Value::Float),

        (Value::String(s), TypeKind::Int) => {
            s.parse().map(Value::Integer).map_err(|_| RuntimeError::InvalidNumber { text:   s,
                                                                                    target: "int", })
        },
        (Value::String(s), TypeKind::Float) => match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::Float(f)),
            _ => Err(RuntimeError::InvalidNumber { text:   s,
                                                   target: "float", }),
        },

        (value @ (Value::Integer(_) | Value::Float(_) | Value::Bool(_) | Value::Currency(_)),
         TypeKind::String) => Ok(Value::String(value.to_string())),

        (Value::Integer(i), TypeKind::Currency) => {
            let id = target_currency(target, "int")?;
            Ok(Value::Currency(Currency::new(BigDecimal::from(i), id)))
        },
        (Value::Float(f), TypeKind::Currency) => {
            let id = target_currency(target, "float")?;
            Ok(Value::Currency(Currency::new(f64_to_decimal(f)?, id)))
        },
        (Value::Currency(c), TypeKind::Currency) => {
            let id = target_currency(target, &c.currency_id)?;
            convert(c, id, rates).map(Value::Currency)
        },

        (value, _) => Err(RuntimeError::UnsupportedCast { from: value.type_name().to_string(),
                                                          to:   target.to_string(), }),
    }
}

fn target_currency<'t>(target: &'t VariableType, from: &str) -> EvalResult<&'t str> {
    target.currency_id
          .as_deref()
          .ok_or_else(|| RuntimeError::UnsupportedCast { from: from.to_string(),
                                                         to:   target.to_string(), })
}

/// Converts `currency` into the currency `to` using the rate table.
///
/// # Errors
/// `MissingExchangeRate` if the table has no rate from the source id to `to`.
pub fn convert(currency: Currency, to: &str, rates: &ExchangeRates) -> EvalResult<Currency> {
    if currency.currency_id == to {
        return Ok(currency);
    }

    let rate = rates.get(&currency.currency_id)
                    .and_then(|row| row.get(to))
                    .ok_or_else(|| RuntimeError::MissingExchangeRate { from: currency.currency_id
                                                                                     .clone(),
                                                                       to:   to.to_string(), })?;

    Ok(Currency::new(currency.amount * f64_to_decimal(*rate)?, to))
}
