use crate::{
    error::LexError,
    interpreter::token::{Position, TokenKind},
};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while building the syntax tree.
pub enum ParseError {
    /// The lexer failed while the parser was pulling the next token.
    Lexical(LexError),
    /// A structural expectation was violated.
    UnexpectedToken {
        /// The parsing rule that was running.
        rule:     &'static str,
        /// The token kinds the rule would have accepted.
        expected: Vec<TokenKind>,
        /// The kind of the token actually found.
        found:    TokenKind,
        /// Where the offending token starts.
        position: Position,
    },
    /// A `while` loop has no body block.
    MissingBlock {
        /// The parsing rule that was running.
        rule:     &'static str,
        /// Where the block was expected.
        position: Position,
    },
    /// A function definition has no body block.
    MissingFunctionBlock {
        /// The name of the function.
        name:     String,
        /// Where the block was expected.
        position: Position,
    },
    /// A condition was required but not present.
    MissingCondition {
        /// The parsing rule that was running.
        rule:     &'static str,
        /// Where the condition was expected.
        position: Position,
    },
    /// An expression was required but not present.
    MissingExpression {
        /// The parsing rule that was running.
        rule:     &'static str,
        /// Where the expression was expected.
        position: Position,
    },
    /// A parameter was required after a comma.
    MissingParameter {
        /// Where the parameter was expected.
        position: Position,
    },
    /// A branch of an `if` statement has no instruction.
    MissingInstruction {
        /// The parsing rule that was running.
        rule:     &'static str,
        /// Where the instruction was expected.
        position: Position,
    },
    /// Two functions share one name.
    DuplicateFunction {
        /// The name of the function.
        name:     String,
        /// Where the second definition's name starts.
        position: Position,
    },
    /// Two parameters of one function share one name.
    DuplicateParameter {
        /// The name of the function.
        function:  String,
        /// The repeated parameter name.
        parameter: String,
    },
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lexical(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(error) => write!(f, "{error}"),
            Self::UnexpectedToken { rule,
                                    expected,
                                    found,
                                    position, } => {
                let expected = expected.iter()
                                       .map(|kind| kind.name())
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f,
                       "Error at {position}: Unexpected token found while performing {rule}. Expected: [{expected}]; Found: {found}.")
            },
            Self::MissingBlock { rule, position } => {
                write!(f, "Error at {position}: Missing block while performing {rule}.")
            },
            Self::MissingFunctionBlock { name, position } => {
                write!(f, "Error at {position}: Missing function block for function: {name}.")
            },
            Self::MissingCondition { rule, position } => {
                write!(f, "Error at {position}: Missing condition while performing {rule}.")
            },
            Self::MissingExpression { rule, position } => {
                write!(f, "Error at {position}: Missing expression while performing {rule}.")
            },
            Self::MissingParameter { position } => {
                write!(f, "Error at {position}: Missing function parameter after ','.")
            },
            Self::MissingInstruction { rule, position } => {
                write!(f, "Error at {position}: Missing instruction while performing {rule}.")
            },
            Self::DuplicateFunction { name, position } => {
                write!(f, "Error at {position}: Duplicate definition of function: {name}.")
            },
            Self::DuplicateParameter { function, parameter } => write!(f,
                                                                       "Duplicate parameter identifier '{parameter}' in the definition of function: {function}."),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(error) => Some(error),
            _ => None,
        }
    }
}
