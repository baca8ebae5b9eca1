use std::fmt;

/// A `(line, column)` location in the source text.
///
/// Lines and columns are both 1-based. The column advances with every
/// character read and resets to `1` after a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// The 1-based line number.
    pub line:   usize,
    /// The 1-based column number.
    pub column: usize,
}

impl Position {
    /// Creates a position from explicit coordinates.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Moves the position past `c`.
    pub const fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(line {}, column {})", self.line, self.column)
    }
}

/// The classification of a token.
///
/// Kinds carry no payload so they can be listed as the "accepted" set in
/// parse errors. The literal text or value of a token lives in
/// [`TokenValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal, e.g. `42`.
    IntValue,
    /// Float literal, e.g. `12.445`.
    FloatValue,
    /// Quoted string literal.
    StringValue,
    /// `true`
    True,
    /// `false`
    False,
    /// A plain identifier.
    Identifier,
    /// An identifier that names a configured currency, e.g. `PLN`.
    CurrencyId,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `string`
    String,
    /// `bool`
    Bool,
    /// `void`
    Void,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessOrEqual,
    /// `>=`
    GreaterOrEqual,
    /// `!`
    Not,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `=`
    Assign,
    /// `(`
    LeftBracket,
    /// `)`
    RightBracket,
    /// `{`
    LeftCurlyBracket,
    /// `}`
    RightCurlyBracket,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `as`
    Cast,
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `return`
    Return,
    /// `# line comment`
    Comment,
    /// End of text.
    Etx,
}

impl TokenKind {
    /// Looks up a reserved word.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        Some(match word {
            "if" => Self::If,
            "else" => Self::Else,
            "while" => Self::While,
            "as" => Self::Cast,
            "true" => Self::True,
            "false" => Self::False,
            "bool" => Self::Bool,
            "void" => Self::Void,
            "return" => Self::Return,
            "int" => Self::Int,
            "float" => Self::Float,
            "string" => Self::String,
            _ => return None,
        })
    }

    /// Looks up a one- or two-character operator or punctuation mark.
    #[must_use]
    pub fn operator(text: &str) -> Option<Self> {
        Some(match text {
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            "<=" => Self::LessOrEqual,
            ">=" => Self::GreaterOrEqual,
            "&&" => Self::And,
            "||" => Self::Or,
            "<" => Self::Less,
            ">" => Self::Greater,
            "!" => Self::Not,
            "+" => Self::Add,
            "-" => Self::Subtract,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "=" => Self::Assign,
            "(" => Self::LeftBracket,
            ")" => Self::RightBracket,
            "{" => Self::LeftCurlyBracket,
            "}" => Self::RightCurlyBracket,
            "," => Self::Comma,
            ";" => Self::Semicolon,
            _ => return None,
        })
    }

    /// Returns `true` for the kinds that may start a declared type.
    #[must_use]
    pub const fn is_type(self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::String | Self::Bool | Self::CurrencyId)
    }

    /// The upper-case name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IntValue => "INT_VAL",
            Self::FloatValue => "FLOAT_VAL",
            Self::StringValue => "STRING_VAL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Identifier => "IDENTIFIER",
            Self::CurrencyId => "CURRENCY_ID",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Bool => "BOOL",
            Self::Void => "VOID",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Less => "LESS",
            Self::Greater => "GREATER",
            Self::LessOrEqual => "LESS_OR_EQUAL",
            Self::GreaterOrEqual => "GREATER_OR_EQUAL",
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Assign => "ASSIGN",
            Self::LeftBracket => "LEFT_BRACKET",
            Self::RightBracket => "RIGHT_BRACKET",
            Self::LeftCurlyBracket => "LEFT_CURLY_BRACKET",
            Self::RightCurlyBracket => "RIGHT_CURLY_BRACKET",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Cast => "CAST",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::Return => "RETURN",
            Self::Comment => "COMMENT",
            Self::Etx => "ETX",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The typed payload attached to literal, identifier and comment tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Value of an `INT_VAL` token.
    Integer(i64),
    /// Value of a `FLOAT_VAL` token.
    Float(f64),
    /// Value of a `TRUE` or `FALSE` token.
    Bool(bool),
    /// Text of a string literal, identifier, currency id or comment.
    Text(String),
}

/// A classified lexical unit.
///
/// Tokens are immutable once produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// Where the token starts.
    pub position: Position,
    /// The literal payload, if the kind carries one.
    pub value:    Option<TokenValue>,
}

impl Token {
    /// Creates a token without a payload.
    #[must_use]
    pub const fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind,
               position,
               value: None }
    }

    /// Creates a token carrying `value`.
    #[must_use]
    pub const fn with_value(kind: TokenKind, position: Position, value: TokenValue) -> Self {
        Self { kind,
               position,
               value: Some(value) }
    }

    /// Returns the text payload of identifier-like tokens.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Text(s)) => Some(s),
            _ => None,
        }
    }
}
