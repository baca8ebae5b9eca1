/// Tokenizer for the configuration format.
///
/// Splits the configuration text into currency ids, rates and `;`, skipping
/// whitespace and `#` comments while counting lines.
pub mod lexer;
/// Parser for the configuration format.
///
/// Reads the currency id list followed by one rate row per currency and
/// builds the exchange-rate table.
pub mod parser;

use std::collections::HashMap;

pub use parser::parse_config;

/// Conversion multipliers, indexed by source and then target currency id.
///
/// `rates["PLN"]["EUR"]` is the number of euros one zloty buys.
pub type ExchangeRates = HashMap<String, HashMap<String, f64>>;

/// The currency configuration a program runs with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// The declared currency ids, in declaration order.
    pub currency_ids:   Vec<String>,
    /// The exchange-rate table. Currencies without a rate row are absent.
    pub exchange_rates: ExchangeRates,
}

impl Config {
    /// Returns the rate converting `from` into `to`, if one is configured.
    ///
    /// # Example
    /// ```
    /// use currenscript::config::parse_config;
    ///
    /// let config = parse_config("PLN EUR; PLN 1.0 0.23 EUR 4.64 1.0").unwrap();
    ///
    /// assert_eq!(config.rate("PLN", "EUR"), Some(0.23));
    /// assert_eq!(config.rate("PLN", "USD"), None);
    /// ```
    #[must_use]
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        self.exchange_rates.get(from)?.get(to).copied()
    }
}
