#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading the currency
/// configuration.
pub enum ConfigError {
    /// The file does not start with a currency id list.
    MissingCurrencyIds {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A currency id appears twice in the id list, or has two rate rows.
    DuplicatedCurrencyId {
        /// The repeated currency id.
        currency_id: String,
    },
    /// A rate row names a currency that is not in the id list.
    UnknownCurrencyId {
        /// The undeclared currency id.
        currency_id: String,
    },
    /// A rate row does not have exactly one rate per declared currency.
    WrongNumberOfExchangeRates {
        /// The currency the row belongs to.
        currency_id: String,
        /// The number of declared currencies.
        expected:    usize,
        /// The number of rates in the row.
        provided:    usize,
    },
    /// A required token was missing or of the wrong kind.
    UnexpectedToken {
        /// Description of what was expected.
        expected: &'static str,
        /// The token encountered, or `end of input`.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The tokenizer could not recognise the input.
    InvalidToken {
        /// The unrecognised text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCurrencyIds { line } => write!(f,
                                                        "Error on line {line}: Missing list of currency ids terminated by ';'."),
            Self::DuplicatedCurrencyId { currency_id } => {
                write!(f, "Duplicated currency entry for: {currency_id}.")
            },
            Self::UnknownCurrencyId { currency_id } => write!(f,
                                                              "Exchange rates provided for undeclared currency {currency_id}."),
            Self::WrongNumberOfExchangeRates { currency_id,
                                               expected,
                                               provided, } => write!(f,
                                                                     "Wrong number of exchange rates provided for currency {currency_id}. Expected: {expected}, Provided: {provided}."),
            Self::UnexpectedToken { expected, found, line } => write!(f,
                                                                      "Error on line {line}: Expected {expected}, found {found}."),
            Self::InvalidToken { token, line } => {
                write!(f, "Error on line {line}: Unrecognised token: {token}.")
            },
        }
    }
}

impl std::error::Error for ConfigError {}
