use logos::Logos;

use crate::error::ConfigError;

/// A lexical token of the configuration format.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = ConfigExtras)]
pub enum ConfigToken {
    /// A currency id such as `PLN`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// An exchange rate such as `0.23` or `1`.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Rate(f64),
    /// `;`
    #[token(";")]
    Semicolon,
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks; counted, never emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for ConfigToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Rate(rate) => write!(f, "rate {rate}"),
            Self::Semicolon => write!(f, "';'"),
            // skipped by the tokenizer
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}

/// Additional state carried by the configuration tokenizer.
#[derive(Default)]
pub struct ConfigExtras {
    /// The current line number, starting at 1.
    pub line: usize,
}

/// Splits configuration text into tokens paired with their line numbers.
///
/// # Errors
/// Returns `ConfigError::InvalidToken` for text no token matches.
///
/// # Example
/// ```
/// use currenscript::config::lexer::{ConfigToken, tokenize};
///
/// let tokens = tokenize("PLN;\nPLN 1.0").unwrap();
///
/// assert_eq!(tokens,
///            vec![(ConfigToken::Identifier("PLN".into()), 1),
///                 (ConfigToken::Semicolon, 1),
///                 (ConfigToken::Identifier("PLN".into()), 2),
///                 (ConfigToken::Rate(1.0), 2)]);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<(ConfigToken, usize)>, ConfigError> {
    let mut tokens = Vec::new();
    let mut lexer = ConfigToken::lexer_with_extras(text, ConfigExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                return Err(ConfigError::InvalidToken { token: lexer.slice().to_string(),
                                                       line:  lexer.extras.line, });
            },
        }
    }

    Ok(tokens)
}
