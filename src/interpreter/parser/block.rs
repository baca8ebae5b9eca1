use crate::{
    ast::{Block, FunctionCall, Statement, VariableType},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        source::Source,
        token::TokenKind,
    },
};

impl<S: Source> Parser<S> {
    /// Parses a braced block.
    ///
    /// Grammar: `block := '{' (instruction ';' | control_statement | block)* '}'`
    ///
    /// # Returns
    /// `None` if the current token is not `{`.
    ///
    /// # Errors
    /// `UnexpectedToken` if an item cannot be parsed or the block is not
    /// closed.
    pub(in crate::interpreter::parser) fn try_parse_block(&mut self)
                                                          -> ParseResult<Option<Block>> {
        if self.consume_if(TokenKind::LeftCurlyBracket)?.is_none() {
            return Ok(None);
        }

        let mut items = Vec::new();
        while self.consume_if(TokenKind::RightCurlyBracket)?.is_none() {
            let Some(statement) = self.try_parse_statement()? else {
                return Err(self.unexpected("parse_block", &[TokenKind::RightCurlyBracket]));
            };
            items.push(statement);
        }

        Ok(Some(Block { items }))
    }

    /// Parses one block item.
    ///
    /// Control statements and nested blocks stand on their own; every other
    /// instruction is terminated by `;`.
    fn try_parse_statement(&mut self) -> ParseResult<Option<Statement>> {
        match self.current().kind {
            TokenKind::If => self.parse_if_statement().map(Some),
            TokenKind::While => self.parse_while_statement().map(Some),
            TokenKind::LeftCurlyBracket => Ok(self.try_parse_block()?.map(Statement::Block)),
            _ => {
                let Some(instruction) = self.try_parse_instruction()? else {
                    return Ok(None);
                };
                self.expect(TokenKind::Semicolon, "parse_block")?;
                Ok(Some(instruction))
            },
        }
    }

    /// Parses a return, an initialization, an assignment or a call.
    fn try_parse_instruction(&mut self) -> ParseResult<Option<Statement>> {
        if self.consume_if(TokenKind::Return)?.is_some() {
            return Ok(Some(Statement::Return(self.try_parse_condition()?)));
        }
        if self.current().kind.is_type() {
            return self.parse_init_instruction().map(Some);
        }
        if !self.check(TokenKind::Identifier) {
            return Ok(None);
        }

        let identifier = self.expect_identifier("parse_assign_or_function_call")?;
        if self.check(TokenKind::LeftBracket) {
            let arguments = self.parse_function_call_arguments()?;
            return Ok(Some(Statement::FunctionCall(FunctionCall { name: identifier,
                                                                  arguments })));
        }
        if self.consume_if(TokenKind::Assign)?.is_some() {
            let position = self.current().position;
            let expr = self.try_parse_condition()?
                           .ok_or(ParseError::MissingExpression { rule: "parse_assign_instruction",
                                                                  position })?;
            return Ok(Some(Statement::Assign { identifier, expr }));
        }

        Err(self.unexpected("parse_assign_or_function_call",
                            &[TokenKind::LeftBracket, TokenKind::Assign]))
    }

    /// Grammar: `init := Type IDENTIFIER '=' condition`
    fn parse_init_instruction(&mut self) -> ParseResult<Statement> {
        let type_token = self.advance()?;
        let declared_type = VariableType::from_token(&type_token).ok_or_else(|| {
                                ParseError::UnexpectedToken { rule:     "parse_init_instruction",
                                                              expected: vec![TokenKind::Int,
                                                                             TokenKind::Float,
                                                                             TokenKind::String,
                                                                             TokenKind::Bool,
                                                                             TokenKind::CurrencyId],
                                                              found:    type_token.kind,
                                                              position: type_token.position, }
                            })?;
        let identifier = self.expect_identifier("parse_init_instruction")?;
        self.expect(TokenKind::Assign, "parse_init_instruction")?;

        let position = self.current().position;
        let expr = self.try_parse_condition()?
                       .ok_or(ParseError::MissingExpression { rule: "parse_init_instruction",
                                                              position })?;

        Ok(Statement::Init { declared_type,
                             identifier,
                             expr })
    }

    /// Grammar: `if := 'if' '(' condition ')' branch ('else' branch)?`
    ///
    /// A branch is a block, a control statement, or a single instruction
    /// terminated by `;`.
    fn parse_if_statement(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::If, "parse_if_statement")?;
        let condition = self.parse_condition_in_parentheses()?;
        let then_branch = self.parse_branch("parse_if_statement")?;

        let else_branch = if self.consume_if(TokenKind::Else)?.is_some() {
            Some(self.parse_branch("parse_else_branch")?)
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_branch,
                           else_branch })
    }

    fn parse_branch(&mut self, rule: &'static str) -> ParseResult<Box<Statement>> {
        let position = self.current().position;
        self.try_parse_statement()?
            .map(Box::new)
            .ok_or(ParseError::MissingInstruction { rule, position })
    }

    /// Grammar: `while := 'while' '(' condition ')' block`
    fn parse_while_statement(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::While, "parse_while_statement")?;
        let condition = self.parse_condition_in_parentheses()?;

        let position = self.current().position;
        let body = self.try_parse_block()?
                       .ok_or(ParseError::MissingBlock { rule: "parse_while_statement",
                                                         position })?;

        Ok(Statement::While { condition, body })
    }
}
