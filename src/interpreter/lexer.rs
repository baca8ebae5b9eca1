use std::collections::HashSet;

use crate::{
    error::LexError,
    interpreter::{
        source::Source,
        token::{Position, Token, TokenKind, TokenValue},
    },
};

/// Turns a character [`Source`] into a stream of [`Token`]s.
///
/// The lexer always holds exactly one classified token, the *current* one.
/// The first token is classified on construction, so
/// [`Lexer::current_token`] is valid immediately. Once the source is
/// exhausted the current token is `ETX` and stays `ETX`.
///
/// Identifiers that exactly match one of the configured currency ids are
/// emitted as `CURRENCY_ID` tokens.
///
/// # Example
/// ```
/// use currenscript::interpreter::{lexer::Lexer, source::StringSource, token::TokenKind};
///
/// let mut lexer = Lexer::new(StringSource::new("PLN money = 12.5;"), ["PLN"]).unwrap();
///
/// assert_eq!(lexer.advance().unwrap().kind, TokenKind::CurrencyId);
/// assert_eq!(lexer.advance().unwrap().kind, TokenKind::Identifier);
/// assert_eq!(lexer.advance().unwrap().kind, TokenKind::Assign);
/// assert_eq!(lexer.advance().unwrap().kind, TokenKind::FloatValue);
/// assert_eq!(lexer.advance().unwrap().kind, TokenKind::Semicolon);
/// assert_eq!(lexer.current_token().kind, TokenKind::Etx);
/// ```
pub struct Lexer<S: Source> {
    source:       S,
    currency_ids: HashSet<String>,
    /// The character under the cursor, `None` at end of input.
    character:    Option<char>,
    /// Where `character` sits in the text.
    position:     Position,
    current:      Token,
}

impl<S: Source> Lexer<S> {
    /// Creates a lexer and classifies the first token.
    ///
    /// # Parameters
    /// - `source`: The character stream to tokenize. It is owned by the lexer
    ///   and dropped with it.
    /// - `currency_ids`: The configured currency identifiers.
    ///
    /// # Errors
    /// Returns a [`LexError`] if the first token cannot be classified.
    pub fn new<I>(mut source: S, currency_ids: I) -> Result<Self, LexError>
        where I: IntoIterator,
              I::Item: Into<String>
    {
        let character = source.next_char();
        let mut lexer = Self { source,
                               currency_ids: currency_ids.into_iter().map(Into::into).collect(),
                               character,
                               position: Position::default(),
                               current: Token::new(TokenKind::Etx, Position::default()) };
        lexer.current = lexer.classify()?;
        Ok(lexer)
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub const fn current_token(&self) -> &Token {
        &self.current
    }

    /// Consumes the current token and classifies the next one.
    ///
    /// # Returns
    /// The token that was current before the call.
    ///
    /// # Errors
    /// Returns a [`LexError`] if the following token cannot be classified.
    pub fn advance(&mut self) -> Result<Token, LexError> {
        if self.current.kind == TokenKind::Etx {
            return Ok(self.current.clone());
        }
        let next = self.classify()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn bump(&mut self) {
        if let Some(c) = self.character {
            self.position.advance(c);
            self.character = self.source.next_char();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.character.is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Tries every token class in order; the first match wins.
    fn classify(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let Some(c) = self.character else {
            return Ok(Token::new(TokenKind::Etx, self.position));
        };

        if let Some(token) = self.try_string()? {
            return Ok(token);
        }
        if let Some(token) = self.try_operator()? {
            return Ok(token);
        }
        if let Some(token) = self.try_keyword_or_identifier() {
            return Ok(token);
        }
        if let Some(token) = self.try_number()? {
            return Ok(token);
        }
        if let Some(token) = self.try_comment() {
            return Ok(token);
        }

        Err(LexError::UnclassifiableToken { character: c,
                                            position:  self.position, })
    }

    fn try_string(&mut self) -> Result<Option<Token>, LexError> {
        if self.character != Some('"') {
            return Ok(None);
        }
        let start = self.position;
        self.bump();

        let mut text = String::new();
        loop {
            match self.character {
                None => return Err(LexError::UnterminatedString { position: start }),
                Some('"') => break,
                Some('\\') => {
                    self.bump();
                    let escaped =
                        self.character
                            .ok_or(LexError::UnterminatedString { position: start })?;
                    text.push(escaped);
                },
                Some(c) => text.push(c),
            }
            self.bump();
        }
        self.bump();

        Ok(Some(Token::with_value(TokenKind::StringValue, start, TokenValue::Text(text))))
    }

    fn try_operator(&mut self) -> Result<Option<Token>, LexError> {
        let Some(first) = self.character else {
            return Ok(None);
        };
        if !"=!<>&|+-*/(){},;".contains(first) {
            return Ok(None);
        }
        let start = self.position;
        self.bump();

        if let Some(second) = self.character {
            let pair: String = [first, second].iter().collect();
            if let Some(kind) = TokenKind::operator(&pair) {
                self.bump();
                return Ok(Some(Token::new(kind, start)));
            }
        }

        TokenKind::operator(first.encode_utf8(&mut [0; 4]))
            .map(|kind| Some(Token::new(kind, start)))
            .ok_or(LexError::UnclassifiableToken { character: first,
                                                   position:  start, })
    }

    fn try_keyword_or_identifier(&mut self) -> Option<Token> {
        if !self.character.is_some_and(|c| c.is_alphabetic() || c == '_') {
            return None;
        }
        let start = self.position;

        let mut word = String::new();
        while let Some(c) = self.character
              && (c.is_alphanumeric() || c == '_')
        {
            word.push(c);
            self.bump();
        }

        if let Some(kind) = TokenKind::keyword(&word) {
            return Some(match kind {
                TokenKind::True => Token::with_value(kind, start, TokenValue::Bool(true)),
                TokenKind::False => Token::with_value(kind, start, TokenValue::Bool(false)),
                _ => Token::new(kind, start),
            });
        }

        let kind = if self.currency_ids.contains(&word) {
            TokenKind::CurrencyId
        } else {
            TokenKind::Identifier
        };
        Some(Token::with_value(kind, start, TokenValue::Text(word)))
    }

    /// Reads an integer or a `digits.digits` float.
    ///
    /// Integers must fit an `i64`. A float is parsed from the literal text,
    /// so its integer part is not bound to that range.
    fn try_number(&mut self) -> Result<Option<Token>, LexError> {
        let Some(digit) = self.character.filter(char::is_ascii_digit) else {
            return Ok(None);
        };
        let start = self.position;
        self.bump();

        if digit == '0' && self.character.is_some_and(|c| c.is_ascii_digit()) {
            return Err(LexError::LeadingZero { position: start });
        }

        let mut text = String::from(digit);
        self.take_digits(&mut text);

        if self.character != Some('.') {
            let integer = text.parse::<i64>()
                              .map_err(|_| LexError::LiteralTooLarge { position: start })?;
            return Ok(Some(Token::with_value(TokenKind::IntValue,
                                             start,
                                             TokenValue::Integer(integer))));
        }
        self.bump();

        text.push('.');
        self.take_digits(&mut text);
        if text.ends_with('.') {
            text.push('0');
        }

        let value = text.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or(LexError::LiteralTooLarge { position: start })?;
        Ok(Some(Token::with_value(TokenKind::FloatValue, start, TokenValue::Float(value))))
    }

    fn take_digits(&mut self, text: &mut String) {
        while let Some(d) = self.character
              && d.is_ascii_digit()
        {
            text.push(d);
            self.bump();
        }
    }

    fn try_comment(&mut self) -> Option<Token> {
        if self.character != Some('#') {
            return None;
        }
        let start = self.position;
        self.bump();

        let mut text = String::new();
        while let Some(c) = self.character
              && c != '\n'
        {
            text.push(c);
            self.bump();
        }

        Some(Token::with_value(TokenKind::Comment, start, TokenValue::Text(text)))
    }
}
