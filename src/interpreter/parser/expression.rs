use crate::{
    ast::{ArithmeticOperator, Expression, Factor, FactorValue, FunctionCall, Literal, VariableType},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        source::Source,
        token::{TokenKind, TokenValue},
    },
};

/// Token kinds accepted after `as`.
const CAST_TARGETS: &[TokenKind] = &[TokenKind::CurrencyId,
                                     TokenKind::Int,
                                     TokenKind::Float,
                                     TokenKind::String,
                                     TokenKind::Bool];

impl<S: Source> Parser<S> {
    /// Parses an additive expression.
    ///
    /// Grammar: `expression := mul_expr (('+' | '-') mul_expr)*`
    ///
    /// Operators at the same level associate to the left.
    pub(in crate::interpreter::parser) fn try_parse_expression(&mut self)
                                                               -> ParseResult<Option<Expression>> {
        let Some(mut left) = self.try_parse_mul_expression()? else {
            return Ok(None);
        };

        loop {
            let op = match self.current().kind {
                TokenKind::Add => ArithmeticOperator::Add,
                TokenKind::Subtract => ArithmeticOperator::Subtract,
                _ => return Ok(Some(left)),
            };
            self.advance()?;

            let position = self.current().position;
            let right = self.try_parse_mul_expression()?
                            .ok_or(ParseError::MissingExpression { rule: "parse_expression",
                                                                   position })?;
            left = Expression::Arithmetic { left: Box::new(left),
                                            op,
                                            right: Box::new(right) };
        }
    }

    /// Grammar: `mul_expr := cast_factor (('*' | '/') cast_factor)*`
    fn try_parse_mul_expression(&mut self) -> ParseResult<Option<Expression>> {
        let Some(mut left) = self.try_parse_cast_factor()? else {
            return Ok(None);
        };

        loop {
            let op = match self.current().kind {
                TokenKind::Multiply => ArithmeticOperator::Multiply,
                TokenKind::Divide => ArithmeticOperator::Divide,
                _ => return Ok(Some(left)),
            };
            self.advance()?;

            let position = self.current().position;
            let right = self.try_parse_cast_factor()?
                            .ok_or(ParseError::MissingExpression { rule: "parse_mul_expression",
                                                                   position })?;
            left = Expression::Arithmetic { left: Box::new(left),
                                            op,
                                            right: Box::new(right) };
        }
    }

    /// Grammar: `cast_factor := negated_factor ('as' Type)?`
    fn try_parse_cast_factor(&mut self) -> ParseResult<Option<Expression>> {
        let Some(mut factor) = self.try_parse_negated_factor()? else {
            return Ok(None);
        };

        if self.consume_if(TokenKind::Cast)?.is_some() {
            if !self.current().kind.is_type() {
                return Err(self.unexpected("parse_cast", CAST_TARGETS));
            }
            factor.cast_to = VariableType::from_token(&self.advance()?);
        }

        Ok(Some(Expression::Factor(factor)))
    }

    /// Grammar: `negated_factor := '-'? factor`
    fn try_parse_negated_factor(&mut self) -> ParseResult<Option<Factor>> {
        let negated = self.consume_if(TokenKind::Subtract)?.is_some();
        let position = self.current().position;

        match self.try_parse_factor()? {
            Some(value) => Ok(Some(Factor { negated,
                                            value,
                                            cast_to: None })),
            None if negated => Err(ParseError::MissingExpression { rule: "parse_negated_factor",
                                                                   position }),
            None => Ok(None),
        }
    }

    /// Grammar: `factor := '(' condition ')' | literal | IDENTIFIER | call`
    fn try_parse_factor(&mut self) -> ParseResult<Option<FactorValue>> {
        match self.current().kind {
            TokenKind::LeftBracket => {
                self.advance()?;
                let position = self.current().position;
                let inner = self.try_parse_condition()?
                                .ok_or(ParseError::MissingCondition { rule: "parse_factor",
                                                                      position })?;
                self.expect(TokenKind::RightBracket, "parse_factor")?;
                Ok(Some(FactorValue::Parenthesized(Box::new(inner))))
            },
            TokenKind::IntValue
            | TokenKind::FloatValue
            | TokenKind::StringValue
            | TokenKind::True
            | TokenKind::False => {
                let token = self.advance()?;
                let literal = match token.value {
                    Some(TokenValue::Integer(i)) => Literal::Integer(i),
                    Some(TokenValue::Float(f)) => Literal::Float(f),
                    Some(TokenValue::Bool(b)) => Literal::Bool(b),
                    Some(TokenValue::Text(s)) => Literal::String(s),
                    None => Literal::Bool(token.kind == TokenKind::True),
                };
                Ok(Some(FactorValue::Literal(literal)))
            },
            TokenKind::Identifier => {
                let name = self.expect_identifier("parse_factor")?;
                if self.check(TokenKind::LeftBracket) {
                    let arguments = self.parse_function_call_arguments()?;
                    Ok(Some(FactorValue::FunctionCall(FunctionCall { name, arguments })))
                } else {
                    Ok(Some(FactorValue::Identifier(name)))
                }
            },
            _ => Ok(None),
        }
    }

    /// Parses a bracketed argument list.
    ///
    /// Grammar: `arguments := '(' (condition (',' condition)*)? ')'`
    ///
    /// A comma must be followed by another argument.
    pub(in crate::interpreter::parser) fn parse_function_call_arguments(&mut self)
                                                                        -> ParseResult<Vec<Expression>> {
        const RULE: &str = "parse_function_call_arguments";

        self.expect(TokenKind::LeftBracket, RULE)?;

        let mut arguments = Vec::new();
        if let Some(first) = self.try_parse_condition()? {
            arguments.push(first);
            while self.consume_if(TokenKind::Comma)?.is_some() {
                let position = self.current().position;
                let argument = self.try_parse_condition()?
                                   .ok_or(ParseError::MissingExpression { rule: RULE,
                                                                          position })?;
                arguments.push(argument);
            }
        }

        self.expect(TokenKind::RightBracket, RULE)?;
        Ok(arguments)
    }
}
