use currenscript::{
    ast::{
        ArithmeticOperator, Block, ComparisonOperator, Expression, Factor, FactorValue,
        FunctionCall, Literal, LogicalOperator, Parameter, Program, Statement, TypeKind,
        VariableType,
    },
    error::{Error, ParseError},
    interpreter::token::{Position, TokenKind},
    parse_program_str,
};

fn parse(src: &str) -> Program {
    parse_program_str(src, ["PLN", "EUR"]).unwrap_or_else(|e| panic!("{src:?}: {e}"))
}

fn parse_error(src: &str) -> ParseError {
    match parse_program_str(src, ["PLN", "EUR"]) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error for {src:?}, got {other:?}"),
    }
}

/// Parses `src` as the body of `void main()` and returns its statements.
fn body(src: &str) -> Vec<Statement> {
    let program = parse(&format!("void main() {{ {src} }}"));
    program.functions["main"].body.items.clone()
}

fn literal(literal: Literal) -> Expression {
    Expression::Factor(Factor::plain(FactorValue::Literal(literal)))
}

fn identifier(name: &str) -> Expression {
    Expression::Factor(Factor::plain(FactorValue::Identifier(name.to_string())))
}

fn simple(kind: TypeKind) -> VariableType {
    VariableType::from_parts(kind, None::<String>)
}

#[test]
fn parses_function_returning_sum() {
    let program = parse("int main() { return 3 + 5; }");
    let main = &program.functions["main"];

    assert_eq!(main.return_type, simple(TypeKind::Int));
    assert!(main.parameters.is_empty());
    assert_eq!(main.body.items,
               vec![Statement::Return(Some(Expression::Arithmetic { left:  Box::new(literal(Literal::Integer(3))),
                                                                    op:    ArithmeticOperator::Add,
                                                                    right: Box::new(literal(Literal::Integer(5))), }))]);
}

#[test]
fn parses_typed_and_untyped_parameters() {
    let program = parse("PLN convert(EUR amount, rate, int days) { return amount as PLN; }");
    let function = &program.functions["convert"];

    assert_eq!(function.return_type, VariableType::from_parts(TypeKind::Currency, Some("PLN")));
    assert_eq!(function.parameters,
               vec![Parameter { declared_type: Some(VariableType::from_parts(TypeKind::Currency,
                                                                             Some("EUR"))),
                                name:          "amount".into(), },
                    Parameter { declared_type: None,
                                name:          "rate".into(), },
                    Parameter { declared_type: Some(simple(TypeKind::Int)),
                                name:          "days".into(), }]);
}

#[test]
fn parses_multiple_functions_and_skips_comments() {
    let program = parse("# helpers\nint one() { return 1; }\n# entry\nint main() { return one(); }");
    assert_eq!(program.functions.len(), 2);
    assert!(program.functions.contains_key("one"));
    assert!(program.functions.contains_key("main"));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let items = body("return 1 + 2 * 3;");
    let expected = Expression::Arithmetic { left:  Box::new(literal(Literal::Integer(1))),
                                            op:    ArithmeticOperator::Add,
                                            right: Box::new(Expression::Arithmetic { left:  Box::new(literal(Literal::Integer(2))),
                                                                                     op:    ArithmeticOperator::Multiply,
                                                                                     right: Box::new(literal(Literal::Integer(3))), }), };
    assert_eq!(items, vec![Statement::Return(Some(expected))]);
}

#[test]
fn and_binds_tighter_than_or() {
    let items = body("return a || b && c;");
    let expected = Expression::Logical { left:  Box::new(identifier("a")),
                                         op:    LogicalOperator::Or,
                                         right: Box::new(Expression::Logical { left:  Box::new(identifier("b")),
                                                                               op:    LogicalOperator::And,
                                                                               right: Box::new(identifier("c")), }), };
    assert_eq!(items, vec![Statement::Return(Some(expected))]);
}

#[test]
fn parses_comparison_and_not() {
    let items = body("return !(x >= 2);");
    let comparison = Expression::Comparison { left:  Box::new(identifier("x")),
                                              op:    ComparisonOperator::GreaterOrEqual,
                                              right: Box::new(literal(Literal::Integer(2))), };
    let expected =
        Expression::Not(Box::new(Expression::Factor(Factor::plain(FactorValue::Parenthesized(Box::new(comparison))))));
    assert_eq!(items, vec![Statement::Return(Some(expected))]);
}

#[test]
fn parses_negated_cast_factor() {
    let items = body("PLN money = -1200.0 as PLN;");
    let factor = Factor { negated: true,
                          value:   FactorValue::Literal(Literal::Float(1200.0)),
                          cast_to: Some(VariableType::from_parts(TypeKind::Currency, Some("PLN"))), };

    assert_eq!(items,
               vec![Statement::Init { declared_type: VariableType::from_parts(TypeKind::Currency,
                                                                              Some("PLN")),
                                      identifier:    "money".into(),
                                      expr:          Expression::Factor(factor), }]);
}

#[test]
fn parses_calls_assignments_and_returns() {
    let items = body("x = f(1, y); print(x); return;");
    assert_eq!(items,
               vec![Statement::Assign { identifier: "x".into(),
                                        expr:       Expression::Factor(Factor::plain(FactorValue::FunctionCall(FunctionCall { name:      "f".into(),
                                                                                                                                 arguments: vec![literal(Literal::Integer(1)),
                                                                                                                                                 identifier("y")], }))), },
                    Statement::FunctionCall(FunctionCall { name:      "print".into(),
                                                           arguments: vec![identifier("x")], }),
                    Statement::Return(None)]);
}

#[test]
fn parses_if_else_chains_and_while() {
    let items = body("if (a) { x = 1; } else if (b) x = 2; else { } while (c) { }");

    let assign = |value| Statement::Assign { identifier: "x".into(),
                                             expr:       literal(Literal::Integer(value)), };
    let inner_if = Statement::If { condition:   identifier("b"),
                                   then_branch: Box::new(assign(2)),
                                   else_branch: Some(Box::new(Statement::Block(Block::default()))), };

    assert_eq!(items,
               vec![Statement::If { condition:   identifier("a"),
                                    then_branch: Box::new(Statement::Block(Block { items: vec![assign(1)] })),
                                    else_branch: Some(Box::new(inner_if)), },
                    Statement::While { condition: identifier("c"),
                                       body:      Block::default(), }]);
}

#[test]
fn nested_blocks_need_no_semicolon() {
    let items = body("{ int x = 1; } { }");
    assert_eq!(items.len(), 2);
    assert!(matches!(items[0], Statement::Block(_)));
}

#[test]
fn missing_semicolon() {
    let error = parse_error("int main() { return 1 }");
    assert_eq!(error,
               ParseError::UnexpectedToken { rule:     "parse_block",
                                             expected: vec![TokenKind::Semicolon],
                                             found:    TokenKind::RightCurlyBracket,
                                             position: Position::new(1, 23), });
    let message = error.to_string();
    assert!(message.contains("parse_block"));
    assert!(message.contains("[SEMICOLON]"));
    assert!(message.contains("RIGHT_CURLY_BRACKET"));
}

#[test]
fn missing_function_name() {
    let message = parse_error("int () { return 1; }").to_string();
    assert!(message.contains("parse_function"));
    assert!(message.contains("[IDENTIFIER]"));
}

#[test]
fn missing_closing_bracket_in_parameters() {
    let message = parse_error("int main(a { return 1; }").to_string();
    assert!(message.contains("[RIGHT_BRACKET]"));
}

#[test]
fn assignment_or_call_expected() {
    let message = parse_error("void main() { x; }").to_string();
    assert!(message.contains("parse_assign_or_function_call"));
    assert!(message.contains("[LEFT_BRACKET, ASSIGN]"));
}

#[test]
fn stray_top_level_token() {
    let error = parse_error("int main() { return 1; } ;");
    assert!(matches!(error,
                     ParseError::UnexpectedToken { rule: "parse_program",
                                                   found: TokenKind::Semicolon,
                                                   .. }));
}

#[test]
fn missing_constructs() {
    assert!(matches!(parse_error("int main()"), ParseError::MissingFunctionBlock { .. }));
    assert!(matches!(parse_error("void main() { while (true) x = 1; }"),
                     ParseError::MissingBlock { .. }));
    assert!(matches!(parse_error("void main() { if () { } }"), ParseError::MissingCondition { .. }));
    assert!(matches!(parse_error("void main() { if (a) }"), ParseError::MissingInstruction { .. }));
    assert!(matches!(parse_error("void main() { int x = ; }"), ParseError::MissingExpression { .. }));
    assert!(matches!(parse_error("void main() { x = 1 + ; }"), ParseError::MissingExpression { .. }));
    assert!(matches!(parse_error("void f(a, ) { }"), ParseError::MissingParameter { .. }));
}

#[test]
fn trailing_comma_in_call_arguments() {
    assert_eq!(parse_error("void main() { f(1, ); }"),
               ParseError::MissingExpression { rule:     "parse_function_call_arguments",
                                               position: Position::new(1, 20), });
    assert!(matches!(parse_error("void main() { x = f(, 1); }"),
                     ParseError::UnexpectedToken { rule: "parse_function_call_arguments",
                                                   found: TokenKind::Comma,
                                                   .. }));
}

#[test]
fn invalid_cast_target() {
    let message = parse_error("void main() { x = 1 as main; }").to_string();
    assert!(message.contains("parse_cast"));
    assert!(message.contains("CURRENCY_ID"));
}

#[test]
fn duplicates_are_rejected() {
    assert_eq!(parse_error("void f() { } void f() { }"),
               ParseError::DuplicateFunction { name:     "f".into(),
                                               position: Position::new(1, 14), });
    assert_eq!(parse_error("void f(a, int a) { }"),
               ParseError::DuplicateParameter { function:  "f".into(),
                                                parameter: "a".into(), });
}

#[test]
fn lexical_errors_surface_through_the_parser() {
    let error = parse_program_str("void main() { x = 01; }", ["PLN"]).unwrap_err();
    assert_eq!(error.category(), "LexError");
}
