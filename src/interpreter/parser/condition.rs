use crate::{
    ast::{ComparisonOperator, Expression, LogicalOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        source::Source,
        token::TokenKind,
    },
};

impl<S: Source> Parser<S> {
    /// Parses a full condition, the lowest-precedence level.
    ///
    /// Grammar: `condition := and_condition ('||' and_condition)*`
    ///
    /// # Returns
    /// `None` if no condition starts at the current token.
    pub(in crate::interpreter::parser) fn try_parse_condition(&mut self)
                                                              -> ParseResult<Option<Expression>> {
        let Some(mut left) = self.try_parse_and_condition()? else {
            return Ok(None);
        };

        while self.consume_if(TokenKind::Or)?.is_some() {
            let right = self.required(Self::try_parse_and_condition, "parse_condition")?;
            left = Expression::Logical { left:  Box::new(left),
                                         op:    LogicalOperator::Or,
                                         right: Box::new(right), };
        }

        Ok(Some(left))
    }

    /// Grammar: `and_condition := comparison ('&&' comparison)*`
    fn try_parse_and_condition(&mut self) -> ParseResult<Option<Expression>> {
        let Some(mut left) = self.try_parse_comparison()? else {
            return Ok(None);
        };

        while self.consume_if(TokenKind::And)?.is_some() {
            let right = self.required(Self::try_parse_comparison, "parse_and_condition")?;
            left = Expression::Logical { left:  Box::new(left),
                                         op:    LogicalOperator::And,
                                         right: Box::new(right), };
        }

        Ok(Some(left))
    }

    /// Grammar: `comparison := relational (('==' | '!=') relational)?`
    fn try_parse_comparison(&mut self) -> ParseResult<Option<Expression>> {
        let Some(left) = self.try_parse_relational()? else {
            return Ok(None);
        };

        let op = match self.current().kind {
            TokenKind::Equal => ComparisonOperator::Equal,
            TokenKind::NotEqual => ComparisonOperator::NotEqual,
            _ => return Ok(Some(left)),
        };
        self.advance()?;

        let right = self.required(Self::try_parse_relational, "parse_comparison")?;
        Ok(Some(Expression::Comparison { left: Box::new(left),
                                         op,
                                         right: Box::new(right) }))
    }

    /// Grammar: `relational := not_condition (('>' | '>=' | '<' | '<=')
    /// not_condition)?`
    fn try_parse_relational(&mut self) -> ParseResult<Option<Expression>> {
        let Some(left) = self.try_parse_not_condition()? else {
            return Ok(None);
        };

        let op = match self.current().kind {
            TokenKind::Greater => ComparisonOperator::Greater,
            TokenKind::GreaterOrEqual => ComparisonOperator::GreaterOrEqual,
            TokenKind::Less => ComparisonOperator::Less,
            TokenKind::LessOrEqual => ComparisonOperator::LessOrEqual,
            _ => return Ok(Some(left)),
        };
        self.advance()?;

        let right = self.required(Self::try_parse_not_condition, "parse_relational")?;
        Ok(Some(Expression::Comparison { left: Box::new(left),
                                         op,
                                         right: Box::new(right) }))
    }

    /// Grammar: `not_condition := '!'? expression`
    fn try_parse_not_condition(&mut self) -> ParseResult<Option<Expression>> {
        if self.consume_if(TokenKind::Not)?.is_none() {
            return self.try_parse_expression();
        }

        let operand = self.required(Self::try_parse_expression, "parse_not_condition")?;
        Ok(Some(Expression::Not(Box::new(operand))))
    }

    /// Grammar: `'(' condition ')'`
    pub(in crate::interpreter::parser) fn parse_condition_in_parentheses(&mut self)
                                                                         -> ParseResult<Expression> {
        const RULE: &str = "parse_condition_in_parentheses";

        self.expect(TokenKind::LeftBracket, RULE)?;
        let position = self.current().position;
        let condition = self.try_parse_condition()?
                            .ok_or(ParseError::MissingCondition { rule: RULE,
                                                                  position })?;
        self.expect(TokenKind::RightBracket, RULE)?;

        Ok(condition)
    }

    /// Runs `rule` and turns an absent result into `MissingExpression`.
    fn required(&mut self,
                rule: fn(&mut Self) -> ParseResult<Option<Expression>>,
                name: &'static str)
                -> ParseResult<Expression> {
        let position = self.current().position;
        rule(self)?.ok_or(ParseError::MissingExpression { rule: name,
                                                          position })
    }
}
