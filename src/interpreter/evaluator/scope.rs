use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A single block's local variables.
pub type Scope = HashMap<String, Value>;

/// The scopes of one active function invocation.
///
/// Scopes are ordered from outermost to innermost. Lookup and assignment
/// search from the innermost scope outward; definitions always go into the
/// innermost scope.
#[derive(Debug, Clone, Default)]
pub struct FunctionCallContext {
    scopes: Vec<Scope>,
}

impl FunctionCallContext {
    /// Creates a context whose only scope holds the call's parameter
    /// bindings.
    ///
    /// # Example
    /// ```
    /// use currenscript::interpreter::{evaluator::scope::FunctionCallContext, value::core::Value};
    ///
    /// let context = FunctionCallContext::new([("x".to_string(), Value::Integer(5))].into());
    ///
    /// assert_eq!(context.get_variable("x"), Some(&Value::Integer(5)));
    /// assert_eq!(context.depth(), 1);
    /// ```
    #[must_use]
    pub fn new(bindings: Scope) -> Self {
        Self { scopes: vec![bindings] }
    }

    /// The number of scopes currently open.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Opens a fresh innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Closes the innermost scope and drops its variables.
    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Retrieves a variable, searching from the innermost scope outward.
    ///
    /// # Returns
    /// A reference to the value if found, otherwise `None`.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Defines a variable in the innermost scope.
    ///
    /// Shadowing a variable of an enclosing scope is allowed; redefining one
    /// in the same scope is not.
    ///
    /// # Errors
    /// - `VariableAlreadyExists` if the innermost scope already defines `name`.
    /// - `NoActiveCall` if the context has no scope left.
    ///
    /// # Example
    /// ```
    /// use currenscript::interpreter::{evaluator::scope::FunctionCallContext, value::core::Value};
    ///
    /// let mut context = FunctionCallContext::default();
    /// context.push_scope();
    /// context.define_local("a", Value::Integer(1)).unwrap();
    ///
    /// assert!(context.define_local("a", Value::Integer(2)).is_err());
    ///
    /// context.push_scope();
    /// assert!(context.define_local("a", Value::Integer(3)).is_ok());
    /// assert_eq!(context.get_variable("a"), Some(&Value::Integer(3)));
    /// ```
    pub fn define_local(&mut self, name: &str, value: Value) -> EvalResult<()> {
        let scope = self.scopes.last_mut().ok_or(RuntimeError::NoActiveCall)?;
        if scope.contains_key(name) {
            return Err(RuntimeError::VariableAlreadyExists { name: name.to_string() });
        }
        scope.insert(name.to_string(), value);
        Ok(())
    }

    /// Assigns to the nearest scope that defines `name`.
    ///
    /// # Errors
    /// `UnknownVariable` if no scope defines `name`.
    pub fn assign_nearest(&mut self, name: &str, value: Value) -> EvalResult<()> {
        let slot = self.scopes
                       .iter_mut()
                       .rev()
                       .find_map(|scope| scope.get_mut(name))
                       .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })?;
        *slot = value;
        Ok(())
    }
}
