use std::io::Write;

use crate::{
    ast::{Block, Expression, Statement},
    interpreter::evaluator::{
        core::{ControlFlow, EvalResult, Interpreter},
        validation::check_init_type,
    },
};

impl<W: Write> Interpreter<'_, W> {
    /// Executes a block in a fresh scope.
    ///
    /// Statements run in order until one of them returns. The scope is closed
    /// again on every exit path, including errors.
    ///
    /// # Returns
    /// `ControlFlow::Return` if a statement in the block returned, otherwise
    /// `ControlFlow::Continue`.
    pub fn execute_block(&mut self, block: &Block) -> EvalResult<ControlFlow> {
        self.context_mut()?.push_scope();

        let result = self.execute_items(&block.items);

        if let Some(context) = self.call_stack.last_mut() {
            context.pop_scope();
        }
        result
    }

    fn execute_items(&mut self, items: &[Statement]) -> EvalResult<ControlFlow> {
        for statement in items {
            if let ControlFlow::Return(value) = self.execute_statement(statement)? {
                return Ok(ControlFlow::Return(value));
            }
        }
        Ok(ControlFlow::Continue)
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// - `UnknownVariable` when assigning to an undeclared variable.
    /// - `TypeMismatch` for an ill-typed initialization or a non-boolean
    ///   condition.
    /// - `VariableAlreadyExists` when initializing a variable twice in one
    ///   scope.
    /// - Any error raised by the nested expressions and calls.
    pub fn execute_statement(&mut self, statement: &Statement) -> EvalResult<ControlFlow> {
        match statement {
            Statement::Assign { identifier, expr } => {
                let value = self.evaluate(expr)?;
                self.context_mut()?.assign_nearest(identifier, value)?;
                Ok(ControlFlow::Continue)
            },
            Statement::Init { declared_type,
                              identifier,
                              expr, } => {
                let value = self.evaluate(expr)?;
                check_init_type(declared_type, &value)?;
                self.context_mut()?.define_local(identifier, value)?;
                Ok(ControlFlow::Continue)
            },
            Statement::Return(expr) => {
                let value = expr.as_ref().map(|e| self.evaluate(e)).transpose()?;
                Ok(ControlFlow::Return(value))
            },
            Statement::If { condition,
                            then_branch,
                            else_branch, } => {
                if self.evaluate_condition(condition)? {
                    self.execute_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute_statement(else_branch)
                } else {
                    Ok(ControlFlow::Continue)
                }
            },
            Statement::While { condition, body } => {
                while self.evaluate_condition(condition)? {
                    if let ControlFlow::Return(value) = self.execute_block(body)? {
                        return Ok(ControlFlow::Return(value));
                    }
                }
                Ok(ControlFlow::Continue)
            },
            Statement::FunctionCall(call) => {
                self.call_function(call)?;
                Ok(ControlFlow::Continue)
            },
            Statement::Block(block) => self.execute_block(block),
        }
    }

    fn evaluate_condition(&mut self, condition: &Expression) -> EvalResult<bool> {
        self.evaluate(condition)?.as_bool()
    }
}
