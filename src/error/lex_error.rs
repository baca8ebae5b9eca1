use crate::interpreter::token::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while classifying characters into
/// tokens.
pub enum LexError {
    /// No token class matches the input at this position.
    UnclassifiableToken {
        /// The character that could not start a token.
        character: char,
        /// Where the character was found.
        position:  Position,
    },
    /// End of text was reached inside a quoted string.
    UnterminatedString {
        /// Where the string literal started.
        position: Position,
    },
    /// A multi-digit number started with `0`.
    LeadingZero {
        /// Where the number literal started.
        position: Position,
    },
    /// An integer literal does not fit into 64 bits, or a float literal is
    /// beyond the `f64` range.
    LiteralTooLarge {
        /// Where the number literal started.
        position: Position,
    },
}

impl LexError {
    /// Returns the position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnclassifiableToken { position, .. }
            | Self::UnterminatedString { position }
            | Self::LeadingZero { position }
            | Self::LiteralTooLarge { position } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnclassifiableToken { character, position } => {
                write!(f, "Error at {position}: Cannot classify token starting with {character:?}.")
            },
            Self::UnterminatedString { position } => write!(f,
                                                            "Error at {position}: Unexpected ETX encountered inside a string literal."),
            Self::LeadingZero { position } => write!(f,
                                                     "Error at {position}: Number literals cannot start with a leading zero."),
            Self::LiteralTooLarge { position } => {
                write!(f, "Error at {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
