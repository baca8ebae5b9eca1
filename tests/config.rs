use currenscript::{
    config::{
        lexer::{ConfigToken, tokenize},
        parse_config,
    },
    error::ConfigError,
};

#[test]
fn parses_config_file() {
    let input = "PLN EUR DOGECOIN; PLN 1.0 0.23 0.005 EUR 4.64 1.0 0.32 DOGECOIN 200.0 3.0 1.0";
    let config = parse_config(input).unwrap();

    assert_eq!(config.currency_ids, vec!["PLN", "EUR", "DOGECOIN"]);
    let expected = [("PLN", "PLN", 1.0),
                    ("PLN", "EUR", 0.23),
                    ("PLN", "DOGECOIN", 0.005),
                    ("EUR", "PLN", 4.64),
                    ("EUR", "EUR", 1.0),
                    ("EUR", "DOGECOIN", 0.32),
                    ("DOGECOIN", "PLN", 200.0),
                    ("DOGECOIN", "EUR", 3.0),
                    ("DOGECOIN", "DOGECOIN", 1.0)];
    for (from, to, rate) in expected {
        assert_eq!(config.rate(from, to), Some(rate), "{from} -> {to}");
    }
}

#[test]
fn parses_config_without_currencies() {
    let config = parse_config(";").unwrap();
    assert!(config.currency_ids.is_empty());
    assert!(config.exchange_rates.is_empty());
}

#[test]
fn rows_are_optional() {
    let config = parse_config("PLN EUR; PLN 1 0.23").unwrap();
    assert_eq!(config.rate("PLN", "EUR"), Some(0.23));
    assert!(!config.exchange_rates.contains_key("EUR"));
}

#[test]
fn comments_and_line_numbers() {
    let input = "# currencies\nPLN EUR;\n\n# rates\nPLN 1.0 0.23\nEUR 4.64 1.0 ;";
    assert_eq!(parse_config(input),
               Err(ConfigError::UnexpectedToken { expected: "currency id or end of input",
                                                  found:    "';'".into(),
                                                  line:     6, }));

    let tokens = tokenize("# only a comment\nPLN").unwrap();
    assert_eq!(tokens, vec![(ConfigToken::Identifier("PLN".into()), 2)]);
}

#[test]
fn missing_currency_ids() {
    assert_eq!(parse_config("10.0 20.0"), Err(ConfigError::MissingCurrencyIds { line: 1 }));
    assert_eq!(parse_config(""), Err(ConfigError::MissingCurrencyIds { line: 1 }));
}

#[test]
fn unterminated_currency_list() {
    let error = parse_config("PLN EUR").unwrap_err();
    assert!(matches!(error, ConfigError::UnexpectedToken { expected: "';'", .. }));

    let error = parse_config("PLN 1.0;").unwrap_err();
    assert!(matches!(error, ConfigError::UnexpectedToken { expected: "currency id or ';'", .. }));
}

#[test]
fn duplicated_currency_rows() {
    let error = parse_config("PLN EUR; PLN 1.0 0.23 PLN 2.0 0.22").unwrap_err();
    assert_eq!(error, ConfigError::DuplicatedCurrencyId { currency_id: "PLN".into() });
    assert!(error.to_string().contains("PLN"));
}

#[test]
fn duplicated_currency_ids() {
    let error = parse_config("PLN PLN EUR; PLN 1.0 0.23 EUR 4.6 1.0").unwrap_err();
    assert_eq!(error, ConfigError::DuplicatedCurrencyId { currency_id: "PLN".into() });
}

#[test]
fn wrong_number_of_exchange_rates() {
    let error = parse_config("PLN EUR; PLN 1.0 0.23 3.0 EUR 4.6 1.0").unwrap_err();
    assert_eq!(error,
               ConfigError::WrongNumberOfExchangeRates { currency_id: "PLN".into(),
                                                         expected:    2,
                                                         provided:    3, });
    let message = error.to_string();
    assert!(message.contains("PLN"));
    assert!(message.contains('3'));
    assert!(message.contains('2'));
}

#[test]
fn rows_for_undeclared_currencies() {
    let error = parse_config("PLN EUR; PLN 1.0 0.23 USD 4.2 0.92").unwrap_err();
    assert_eq!(error, ConfigError::UnknownCurrencyId { currency_id: "USD".into() });
}

#[test]
fn trailing_tokens() {
    let error = parse_config("PLN EUR; PLN 1.0 0.23 EUR 4.6 1.0 ;").unwrap_err();
    assert!(matches!(error, ConfigError::UnexpectedToken { .. }));
}

#[test]
fn unrecognised_characters() {
    assert_eq!(parse_config("PLN EUR;\nPLN 1.0 -0.23"),
               Err(ConfigError::InvalidToken { token: "-".into(),
                                               line:  2, }));
}

#[test]
fn only_value_tokens_are_emitted() {
    assert_eq!(tokenize("  # comment\n\t\r\n# another").unwrap(), vec![]);

    let tokens = tokenize("PLN 1.5 ;").unwrap();
    let rendered = tokens.iter().map(|(token, _)| token.to_string()).collect::<Vec<_>>();
    assert_eq!(rendered, vec!["identifier 'PLN'", "rate 1.5", "';'"]);
}
