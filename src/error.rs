/// Configuration errors.
///
/// Errors raised while tokenizing and parsing the currency configuration file:
/// a missing id list, duplicated ids, malformed rate rows and stray tokens.
pub mod config_error;
/// Lexical errors.
///
/// Errors raised while classifying source characters into tokens, such as an
/// unterminated string or a character no token can start with. Every lexical
/// error carries the position it was detected at.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// unexpected tokens, missing constructs and duplicate definitions.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown variables, type mismatches, unsupported casts or division by zero.
pub mod runtime_error;

use std::{fmt, io, path::PathBuf};

pub use config_error::ConfigError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a pipeline run.
///
/// Every variant is terminal for the run that produced it. The top level
/// reports [`Error::category`] together with the message.
#[derive(Debug)]
pub enum Error {
    /// The lexer rejected the program text.
    Lex(LexError),
    /// The program text is not well formed.
    Parse(ParseError),
    /// The currency configuration is malformed.
    Config(ConfigError),
    /// Evaluation of the program failed.
    Runtime(RuntimeError),
    /// An input file could not be read.
    Io {
        /// The file that failed.
        path:   PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}

impl Error {
    /// The name of the error family, used by the command line report.
    ///
    /// Lexical failures surfaced through the parser are reported as
    /// `LexError`.
    ///
    /// # Example
    /// ```
    /// use currenscript::error::{Error, RuntimeError};
    ///
    /// let error = Error::from(RuntimeError::DivisionByZero);
    /// assert_eq!(error.category(), "RuntimeError");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Lex(_) | Self::Parse(ParseError::Lexical(_)) => "LexError",
            Self::Parse(_) => "ParseError",
            Self::Config(_) => "ConfigError",
            Self::Runtime(_) => "RuntimeError",
            Self::Io { .. } => "IoError",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Io { path, source } => {
                write!(f, "Failed to read '{}': {source}.", path.display())
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
