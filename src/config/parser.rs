use std::{collections::HashMap, iter::Peekable};

use crate::{
    config::{
        Config, ExchangeRates,
        lexer::{ConfigToken, tokenize},
    },
    error::ConfigError,
};

/// Parses the currency configuration.
///
/// The text starts with a `;`-terminated list of currency ids, followed by
/// rate rows. A row is a declared currency id and one rate per declared id,
/// in declaration order; the rate in column `j` converts the row's currency
/// into the `j`-th declared currency. Currencies may have no row at all.
///
/// # Errors
/// - `MissingCurrencyIds` if the text does not start with the id list.
/// - `DuplicatedCurrencyId` if an id is listed twice or has two rows.
/// - `UnknownCurrencyId` if a row names an undeclared currency.
/// - `WrongNumberOfExchangeRates` if a row has the wrong number of rates.
/// - `UnexpectedToken` for a missing `;` or a stray token.
/// - `InvalidToken` for unrecognised characters.
///
/// # Example
/// ```
/// use currenscript::config::parse_config;
///
/// let config = parse_config("PLN EUR; PLN 1.0 0.23 EUR 4.64 1.0").unwrap();
///
/// assert_eq!(config.currency_ids, vec!["PLN", "EUR"]);
/// assert_eq!(config.exchange_rates["PLN"]["EUR"], 0.23);
/// ```
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let tokens = tokenize(text)?;
    let mut iter = tokens.iter().peekable();

    let currency_ids = parse_currency_ids(&mut iter)?;
    let mut exchange_rates = ExchangeRates::new();

    while let Some((token, line)) = iter.next() {
        let ConfigToken::Identifier(currency_id) = token else {
            return Err(ConfigError::UnexpectedToken { expected: "currency id or end of input",
                                                      found:    token.to_string(),
                                                      line:     *line, });
        };
        let rates = parse_rates(&mut iter);

        if rates.len() != currency_ids.len() {
            return Err(ConfigError::WrongNumberOfExchangeRates { currency_id: currency_id.clone(),
                                                                 expected:    currency_ids.len(),
                                                                 provided:    rates.len(), });
        }
        if exchange_rates.contains_key(currency_id) {
            return Err(ConfigError::DuplicatedCurrencyId { currency_id: currency_id.clone() });
        }
        if !currency_ids.contains(currency_id) {
            return Err(ConfigError::UnknownCurrencyId { currency_id: currency_id.clone() });
        }

        let row: HashMap<String, f64> = currency_ids.iter().cloned().zip(rates).collect();
        exchange_rates.insert(currency_id.clone(), row);
    }

    Ok(Config { currency_ids,
                exchange_rates })
}

/// Parses `ID ID ... ;`. An empty list (a lone `;`) is allowed.
fn parse_currency_ids<'a, I>(tokens: &mut Peekable<I>) -> Result<Vec<String>, ConfigError>
    where I: Iterator<Item = &'a (ConfigToken, usize)>
{
    match tokens.peek() {
        Some((ConfigToken::Identifier(_) | ConfigToken::Semicolon, _)) => {},
        Some((_, line)) => return Err(ConfigError::MissingCurrencyIds { line: *line }),
        None => return Err(ConfigError::MissingCurrencyIds { line: 1 }),
    }

    let mut currency_ids = Vec::new();
    let mut last_line = 1;
    loop {
        match tokens.next() {
            Some((ConfigToken::Semicolon, _)) => return Ok(currency_ids),
            Some((ConfigToken::Identifier(id), line)) => {
                last_line = *line;
                if currency_ids.contains(id) {
                    return Err(ConfigError::DuplicatedCurrencyId { currency_id: id.clone() });
                }
                currency_ids.push(id.clone());
            },
            Some((token, line)) => {
                return Err(ConfigError::UnexpectedToken { expected: "currency id or ';'",
                                                          found:    token.to_string(),
                                                          line:     *line, });
            },
            None => {
                return Err(ConfigError::UnexpectedToken { expected: "';'",
                                                          found:    "end of input".to_string(),
                                                          line:     last_line, });
            },
        }
    }
}

fn parse_rates<'a, I>(tokens: &mut Peekable<I>) -> Vec<f64>
    where I: Iterator<Item = &'a (ConfigToken, usize)>
{
    let mut rates = Vec::new();
    while let Some((ConfigToken::Rate(rate), _)) = tokens.peek() {
        rates.push(*rate);
        tokens.next();
    }
    rates
}
