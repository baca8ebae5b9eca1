use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest unsigned integer value exactly representable as an `f64`
/// (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use currenscript::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!"), Ok(42.0));
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts an `f64` to `i64`, discarding the fractional part.
///
/// ## Errors
/// Returns `InvalidNumber` for non-finite values and values outside the
/// `i64` range.
///
/// ## Example
/// ```
/// use currenscript::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(12.9), Ok(12));
/// assert_eq!(f64_to_i64_truncated(-12.9), Ok(-12));
/// assert!(f64_to_i64_truncated(f64::NAN).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64) -> EvalResult<i64> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::InvalidNumber { text:   value.to_string(),
                                                 target: "int", });
    }
    Ok(truncated as i64)
}

/// Converts an `f64` to an exact decimal.
///
/// The decimal is built from the shortest text that round-trips to `value`,
/// so `0.1` becomes exactly `0.1`, not the binary approximation.
///
/// ## Errors
/// Returns `InvalidNumber` for `NaN` and infinities.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use currenscript::util::num::f64_to_decimal;
///
/// assert_eq!(f64_to_decimal(0.23), Ok(BigDecimal::from_str("0.23").unwrap()));
/// assert!(f64_to_decimal(f64::INFINITY).is_err());
/// ```
pub fn f64_to_decimal(value: f64) -> EvalResult<BigDecimal> {
    let invalid = || RuntimeError::InvalidNumber { text:   value.to_string(),
                                                   target: "currency", };
    if !value.is_finite() {
        return Err(invalid());
    }
    BigDecimal::from_str(&value.to_string()).map_err(|_| invalid())
}

/// Converts a decimal to the nearest `f64`.
///
/// ## Errors
/// Returns `InvalidNumber` if the decimal is outside the `f64` range.
pub fn decimal_to_f64(value: &BigDecimal) -> EvalResult<f64> {
    value.to_f64()
         .filter(|f| f.is_finite())
         .ok_or_else(|| RuntimeError::InvalidNumber { text:   value.to_string(),
                                                      target: "float", })
}

/// Converts a decimal to `i64`, discarding the fractional part.
///
/// ## Errors
/// Returns `InvalidNumber` if the integral part does not fit into `i64`.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use currenscript::util::num::decimal_to_i64_truncated;
///
/// let amount = BigDecimal::from_str("-12.99").unwrap();
/// assert_eq!(decimal_to_i64_truncated(&amount), Ok(-12));
/// ```
pub fn decimal_to_i64_truncated(value: &BigDecimal) -> EvalResult<i64> {
    value.with_scale(0)
         .to_i64()
         .ok_or_else(|| RuntimeError::InvalidNumber { text:   value.to_string(),
                                                      target: "int", })
}
