use std::collections::HashSet;

use crate::{
    ast::{Function, Parameter, VariableType},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        source::Source,
        token::TokenKind,
    },
};

impl<S: Source> Parser<S> {
    /// Parses a function definition.
    ///
    /// Grammar: `function := (Type | void) IDENTIFIER '(' parameters ')' block`
    ///
    /// # Returns
    /// `None` if the current token is neither a type nor `void`.
    ///
    /// # Errors
    /// - `UnexpectedToken` for a missing name or bracket.
    /// - `MissingFunctionBlock` if the body is absent.
    /// - `DuplicateParameter` if two parameters share a name.
    pub(in crate::interpreter::parser) fn try_parse_function(&mut self)
                                                             -> ParseResult<Option<Function>> {
        if !(self.current().kind.is_type() || self.check(TokenKind::Void)) {
            return Ok(None);
        }
        let type_token = self.advance()?;
        let Some(return_type) = VariableType::from_token(&type_token) else {
            return Ok(None);
        };

        let name = self.expect_identifier("parse_function")?;
        self.expect(TokenKind::LeftBracket, "parse_function")?;
        let parameters = self.parse_parameters(&name)?;
        self.expect(TokenKind::RightBracket, "parse_function")?;

        let position = self.current().position;
        let body = self.try_parse_block()?
                       .ok_or_else(|| ParseError::MissingFunctionBlock { name: name.clone(),
                                                                         position })?;

        Ok(Some(Function { return_type,
                           name,
                           parameters,
                           body }))
    }

    /// Parses a comma-separated, possibly empty, parameter list.
    ///
    /// A comma must be followed by another parameter.
    fn parse_parameters(&mut self, function: &str) -> ParseResult<Vec<Parameter>> {
        let mut parameters = Vec::new();
        let Some(first) = self.try_parse_parameter()? else {
            return Ok(parameters);
        };
        parameters.push(first);

        while self.consume_if(TokenKind::Comma)?.is_some() {
            let position = self.current().position;
            let parameter = self.try_parse_parameter()?
                                .ok_or(ParseError::MissingParameter { position })?;
            parameters.push(parameter);
        }

        let mut seen = HashSet::new();
        for parameter in &parameters {
            if !seen.insert(parameter.name.as_str()) {
                return Err(ParseError::DuplicateParameter { function:  function.to_string(),
                                                            parameter: parameter.name.clone(), });
            }
        }

        Ok(parameters)
    }

    /// Parses `Type IDENTIFIER` or a bare, untyped `IDENTIFIER`.
    fn try_parse_parameter(&mut self) -> ParseResult<Option<Parameter>> {
        if self.check(TokenKind::Identifier) {
            let name = self.expect_identifier("parse_parameter")?;
            return Ok(Some(Parameter { declared_type: None,
                                       name }));
        }
        if !self.current().kind.is_type() {
            return Ok(None);
        }

        let declared_type = VariableType::from_token(&self.advance()?);
        let name = self.expect_identifier("parse_parameter")?;
        Ok(Some(Parameter { declared_type, name }))
    }
}
