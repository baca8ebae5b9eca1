use crate::{
    ast::Literal,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::currency::Currency},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value that can be bound to a variable, passed to a
/// function, returned from one, or produced by an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A UTF-8 string.
    String(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators, and required by `if` and
    /// `while` conditions.
    Bool(bool),
    /// An amount of money in a configured currency.
    Currency(Currency),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Currency> for Value {
    fn from(v: Currency) -> Self {
        Self::Currency(v)
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Integer(i) => Self::Integer(*i),
            Literal::Float(f) => Self::Float(*f),
            Literal::String(s) => Self::String(s.clone()),
            Literal::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Value {
    /// The name of the value's runtime type.
    ///
    /// Currency values report their currency id.
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use currenscript::interpreter::value::{core::Value, currency::Currency};
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "int");
    /// assert_eq!(Value::from(Currency::new(BigDecimal::from(1), "EUR")).type_name(), "EUR");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::Currency(c) => &c.currency_id,
        }
    }

    /// Returns `true` if both values belong to the same variant, ignoring
    /// currency ids.
    #[must_use]
    pub const fn same_variant(&self, other: &Self) -> bool {
        matches!((self, other),
                 (Self::Integer(_), Self::Integer(_))
                 | (Self::Float(_), Self::Float(_))
                 | (Self::String(_), Self::String(_))
                 | (Self::Bool(_), Self::Bool(_))
                 | (Self::Currency(_), Self::Currency(_)))
    }

    /// Extracts a boolean, or fails with `TypeMismatch`.
    ///
    /// # Example
    /// ```
    /// use currenscript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Ok(true));
    /// assert!(Value::Integer(1).as_bool().is_err());
    /// ```
    pub fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(RuntimeError::TypeMismatch { expected: "bool".to_string(),
                                                      found:    other.describe(), }),
        }
    }

    /// Renders the value together with its type for diagnostics, e.g.
    /// `'3' (int)`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("'{self}' ({})", self.type_name())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{r}.0"),
            Self::Float(r) => write!(f, "{r}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Currency(c) => write!(f, "{c}"),
        }
    }
}
