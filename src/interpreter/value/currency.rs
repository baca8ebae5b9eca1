use std::fmt;

use bigdecimal::BigDecimal;
use num_traits::Zero;

/// An amount of money in one configured currency.
///
/// The currency id never changes once the value exists; conversion to another
/// currency produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// The arbitrary-precision amount.
    pub amount:      BigDecimal,
    /// The configured currency id, e.g. `PLN`.
    pub currency_id: String,
}

impl Currency {
    /// Creates a currency value.
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use currenscript::interpreter::value::currency::Currency;
    ///
    /// let money = Currency::new(BigDecimal::from(15), "PLN");
    /// assert_eq!(money.to_string(), "15 PLN");
    /// ```
    #[must_use]
    pub fn new(amount: BigDecimal, currency_id: impl Into<String>) -> Self {
        Self { amount,
               currency_id: currency_id.into() }
    }

    /// Returns a value of the same currency with a new amount.
    #[must_use]
    pub fn with_amount(&self, amount: BigDecimal) -> Self {
        Self::new(amount, self.currency_id.clone())
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns `true` if both values are in the same currency.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency_id == other.currency_id
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_id)
    }
}
