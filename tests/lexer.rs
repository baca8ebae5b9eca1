use currenscript::{
    error::LexError,
    interpreter::{
        lexer::Lexer,
        source::StringSource,
        token::{Position, Token, TokenKind, TokenValue},
    },
};

fn first_token(text: &str) -> Token {
    Lexer::new(StringSource::new(text), ["PLN", "EUR"]).unwrap_or_else(|e| panic!("{text:?}: {e}"))
                                                       .current_token()
                                                       .clone()
}

fn all_tokens(text: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(StringSource::new(text), ["PLN", "EUR"])?;
    let mut tokens = Vec::new();
    while lexer.current_token().kind != TokenKind::Etx {
        tokens.push(lexer.advance()?);
    }
    Ok(tokens)
}

fn kinds(text: &str) -> Vec<TokenKind> {
    all_tokens(text).unwrap_or_else(|e| panic!("{text:?}: {e}"))
                    .into_iter()
                    .map(|token| token.kind)
                    .collect()
}

#[test]
fn builds_single_tokens() {
    let cases = [(" /", TokenKind::Divide, None),
                 ("!=", TokenKind::NotEqual, None),
                 ("&&", TokenKind::And, None),
                 ("||", TokenKind::Or, None),
                 ("return 345", TokenKind::Return, None),
                 ("return345", TokenKind::Identifier, Some(TokenValue::Text("return345".into()))),
                 ("0.45556", TokenKind::FloatValue, Some(TokenValue::Float(0.45556))),
                 ("0", TokenKind::IntValue, Some(TokenValue::Integer(0))),
                 ("12.445", TokenKind::FloatValue, Some(TokenValue::Float(12.445))),
                 ("123", TokenKind::IntValue, Some(TokenValue::Integer(123))),
                 ("     #blabla bla \n", TokenKind::Comment, Some(TokenValue::Text("blabla bla ".into()))),
                 ("==", TokenKind::Equal, None),
                 ("=", TokenKind::Assign, None),
                 ("\"a b\"", TokenKind::StringValue, Some(TokenValue::Text("a b".into()))),
                 ("true", TokenKind::True, Some(TokenValue::Bool(true))),
                 ("as", TokenKind::Cast, None),
                 ("", TokenKind::Etx, None)];

    for (text, kind, value) in cases {
        let token = first_token(text);
        assert_eq!(token.kind, kind, "kind of {text:?}");
        assert_eq!(token.value, value, "value of {text:?}");
    }
}

#[test]
fn configured_currency_ids_are_recognised() {
    let token = first_token("EUR");
    assert_eq!(token.kind, TokenKind::CurrencyId);
    assert_eq!(token.text(), Some("EUR"));

    assert_eq!(first_token("USD").kind, TokenKind::Identifier);
    assert_eq!(first_token("PLNs").kind, TokenKind::Identifier);
}

#[test]
fn tokenizes_a_declaration() {
    assert_eq!(kinds("PLN salary = 1200.0 as PLN;"),
               vec![TokenKind::CurrencyId,
                    TokenKind::Identifier,
                    TokenKind::Assign,
                    TokenKind::FloatValue,
                    TokenKind::Cast,
                    TokenKind::CurrencyId,
                    TokenKind::Semicolon]);
}

#[test]
fn tokenizes_a_function_header() {
    assert_eq!(kinds("void main(){print(typeof(x));}"),
               vec![TokenKind::Void,
                    TokenKind::Identifier,
                    TokenKind::LeftBracket,
                    TokenKind::RightBracket,
                    TokenKind::LeftCurlyBracket,
                    TokenKind::Identifier,
                    TokenKind::LeftBracket,
                    TokenKind::Identifier,
                    TokenKind::LeftBracket,
                    TokenKind::Identifier,
                    TokenKind::RightBracket,
                    TokenKind::RightBracket,
                    TokenKind::Semicolon,
                    TokenKind::RightCurlyBracket]);
}

#[test]
fn records_positions() {
    let tokens = all_tokens("int main\n  x").unwrap();

    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].position, Position::new(1, 5));
    assert_eq!(tokens[2].position, Position::new(2, 3));
}

#[test]
fn end_of_text_is_sticky() {
    let mut lexer = Lexer::new(StringSource::new("x"), Vec::<String>::new()).unwrap();

    assert_eq!(lexer.advance().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::Etx);
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::Etx);
    assert_eq!(lexer.current_token().kind, TokenKind::Etx);
}

#[test]
fn string_escapes() {
    assert_eq!(first_token(r#""say \"hi\"""#).text(), Some("say \"hi\""));
}

#[test]
fn unterminated_string() {
    let error = all_tokens("   \" ndhjavu ").unwrap_err();
    assert_eq!(error, LexError::UnterminatedString { position: Position::new(1, 4) });
    assert!(error.to_string().contains("Unexpected ETX"));
}

#[test]
fn rejects_malformed_input() {
    assert!(matches!(all_tokens("int x = 007;"), Err(LexError::LeadingZero { .. })));
    assert!(matches!(all_tokens("99999999999999999999"), Err(LexError::LiteralTooLarge { .. })));
    assert!(matches!(all_tokens("a & b"),
                     Err(LexError::UnclassifiableToken { character: '&', .. })));
    assert!(matches!(all_tokens("@"), Err(LexError::UnclassifiableToken { character: '@', .. })));
}

#[test]
fn float_literals_parse_from_text() {
    assert_eq!(first_token("99999999999999999999.5").value,
               Some(TokenValue::Float(99_999_999_999_999_999_999.5)));
    assert_eq!(first_token("0.1234567890123456789012345").value,
               Some(TokenValue::Float(0.123_456_789_012_345_678_901_234_5)));
    assert_eq!(first_token("12.").value, Some(TokenValue::Float(12.0)));

    let huge = format!("{}.0", "9".repeat(400));
    assert!(matches!(all_tokens(&huge), Err(LexError::LiteralTooLarge { .. })));
}
