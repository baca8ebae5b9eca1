use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        source::Source,
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Token kinds that may start a function definition.
const FUNCTION_START: &[TokenKind] = &[TokenKind::Int,
                                       TokenKind::Float,
                                       TokenKind::String,
                                       TokenKind::Bool,
                                       TokenKind::CurrencyId,
                                       TokenKind::Void];

/// A recursive-descent parser over a [`Lexer`] with one token of lookahead.
///
/// Every `try_parse_*` rule either consumes its construct and returns
/// `Some(node)`, or consumes nothing and returns `None`; the caller decides
/// whether absence is an error. Comment tokens are skipped transparently.
///
/// # Example
/// ```
/// use currenscript::interpreter::{lexer::Lexer, parser::core::Parser, source::StringSource};
///
/// let lexer = Lexer::new(StringSource::new("int main() { return 3 + 5; }"), ["PLN"]).unwrap();
/// let program = Parser::new(lexer).unwrap().parse_program().unwrap();
///
/// assert!(program.functions.contains_key("main"));
/// ```
pub struct Parser<S: Source> {
    lexer: Lexer<S>,
}

impl<S: Source> Parser<S> {
    /// Creates a parser positioned at the first non-comment token.
    ///
    /// # Errors
    /// Returns a lexical error if a leading token cannot be classified.
    pub fn new(lexer: Lexer<S>) -> ParseResult<Self> {
        let mut parser = Self { lexer };
        parser.skip_comments()?;
        Ok(parser)
    }

    /// Parses the whole input as a sequence of function definitions.
    ///
    /// Grammar: `program := function* ETX`
    ///
    /// # Errors
    /// - `UnexpectedToken` if a top-level token cannot start a function.
    /// - `DuplicateFunction` if two functions share a name.
    /// - Any error raised by the nested rules.
    pub fn parse_program(mut self) -> ParseResult<Program> {
        let mut program = Program::default();

        while !self.check(TokenKind::Etx) {
            let position = self.current().position;
            let Some(function) = self.try_parse_function()? else {
                let mut expected = FUNCTION_START.to_vec();
                expected.push(TokenKind::Etx);
                return Err(self.unexpected("parse_program", &expected));
            };

            if program.functions.contains_key(&function.name) {
                return Err(ParseError::DuplicateFunction { name: function.name,
                                                           position });
            }
            program.functions.insert(function.name.clone(), function);
        }

        Ok(program)
    }

    /// Returns the current token.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        self.lexer.current_token()
    }

    /// Consumes the current token and returns it.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let token = self.lexer.advance()?;
        self.skip_comments()?;
        Ok(token)
    }

    fn skip_comments(&mut self) -> ParseResult<()> {
        while self.lexer.current_token().kind == TokenKind::Comment {
            self.lexer.advance()?;
        }
        Ok(())
    }

    /// Returns `true` if the current token is of `kind`.
    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consumes the current token if it is of `kind`.
    pub(in crate::interpreter::parser) fn consume_if(&mut self,
                                                     kind: TokenKind)
                                                     -> ParseResult<Option<Token>> {
        if self.check(kind) {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Consumes a token of `kind` or fails with `UnexpectedToken`.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 kind: TokenKind,
                                                 rule: &'static str)
                                                 -> ParseResult<Token> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(rule, &[kind]))
        }
    }

    /// Consumes an identifier and returns its name.
    pub(in crate::interpreter::parser) fn expect_identifier(&mut self,
                                                            rule: &'static str)
                                                            -> ParseResult<String> {
        let token = self.expect(TokenKind::Identifier, rule)?;
        Ok(token.text().unwrap_or_default().to_string())
    }

    /// Builds an `UnexpectedToken` error for the current token.
    pub(in crate::interpreter::parser) fn unexpected(&self,
                                                     rule: &'static str,
                                                     expected: &[TokenKind])
                                                     -> ParseError {
        let found = self.current();
        ParseError::UnexpectedToken { rule,
                                      expected: expected.to_vec(),
                                      found: found.kind,
                                      position: found.position }
    }
}
