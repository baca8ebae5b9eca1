use std::io::Write;

use crate::{
    ast::{Expression, Factor, FactorValue, LogicalOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{arithmetic, comparison},
            cast::cast,
            core::{EvalResult, Interpreter},
            unary::negate,
        },
        value::core::Value,
    },
};

impl<W: Write> Interpreter<'_, W> {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands are evaluated left to right. `&&` and `||` short-circuit:
    /// the right operand is only evaluated when the left one does not decide
    /// the result.
    ///
    /// # Errors
    /// - `TypeMismatch` if a logical operand is not a boolean.
    /// - Any error raised by the operators, casts and calls involved.
    pub fn evaluate(&mut self, expr: &Expression) -> EvalResult<Value> {
        match expr {
            Expression::Factor(factor) => self.evaluate_factor(factor),
            Expression::Arithmetic { left, op, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                arithmetic::apply(*op, &left, &right)
            },
            Expression::Comparison { left, op, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                comparison::compare(*op, &left, &right).map(Value::Bool)
            },
            Expression::Logical { left, op, right } => {
                let left = self.evaluate(left)?.as_bool()?;
                let decided = match op {
                    LogicalOperator::Or => left,
                    LogicalOperator::And => !left,
                };
                if decided {
                    return Ok(Value::Bool(left));
                }
                self.evaluate(right)?.as_bool().map(Value::Bool)
            },
            Expression::Not(operand) => {
                let value = self.evaluate(operand)?.as_bool()?;
                Ok(Value::Bool(!value))
            },
        }
    }

    /// Evaluates a factor: the operand first, then negation, then the cast.
    fn evaluate_factor(&mut self, factor: &Factor) -> EvalResult<Value> {
        let mut value = match &factor.value {
            FactorValue::FunctionCall(call) => {
                self.call_function(call)?
                    .ok_or_else(|| RuntimeError::MissingValue { function: call.name.clone() })?
            },
            FactorValue::Parenthesized(inner) => self.evaluate(inner)?,
            FactorValue::Identifier(name) => {
                self.context()?
                    .get_variable(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })?
            },
            FactorValue::Literal(literal) => Value::from(literal),
        };

        if factor.negated {
            value = negate(&value)?;
        }
        if let Some(target) = &factor.cast_to {
            value = cast(value, target, self.exchange_rates)?;
        }

        Ok(value)
    }
}
