use std::{collections::HashMap, fmt};

use crate::interpreter::{
    token::{Token, TokenKind},
    value::core::Value,
};

/// A parsed program: every function definition, keyed by name.
///
/// Function names are unique; the parser rejects a second definition with the
/// same name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// All function definitions of the program.
    pub functions: HashMap<String, Function>,
}

/// A user-defined function.
///
/// Parameter names are pairwise distinct. The declared return type is checked
/// against the produced value at call time.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// The declared return type, possibly `void`.
    pub return_type: VariableType,
    /// The function name.
    pub name:        String,
    /// The formal parameters in declaration order.
    pub parameters:  Vec<Parameter>,
    /// The function body.
    pub body:        Block,
}

/// A formal function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// The declared type. `None` accepts a value of any runtime type.
    pub declared_type: Option<VariableType>,
    /// The parameter name.
    pub name:          String,
}

/// The category of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// `int`
    Int,
    /// `float`
    Float,
    /// `string`
    String,
    /// `bool`
    Bool,
    /// A currency id such as `PLN`.
    Currency,
    /// `void`, only valid as a return type.
    Void,
}

/// A declared type as written in the source.
///
/// `currency_id` is set if and only if `kind` is [`TypeKind::Currency`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableType {
    /// The type category.
    pub kind:        TypeKind,
    /// The currency id of a currency type.
    pub currency_id: Option<String>,
}

impl VariableType {
    /// Builds a type from a type keyword or currency id token.
    ///
    /// # Returns
    /// `None` if the token does not name a type.
    ///
    /// # Example
    /// ```
    /// use currenscript::{
    ///     ast::{TypeKind, VariableType},
    ///     interpreter::token::{Position, Token, TokenKind, TokenValue},
    /// };
    ///
    /// let token = Token::with_value(TokenKind::CurrencyId,
    ///                               Position::default(),
    ///                               TokenValue::Text("EUR".into()));
    /// let declared = VariableType::from_token(&token).unwrap();
    ///
    /// assert_eq!(declared.kind, TypeKind::Currency);
    /// assert_eq!(declared.currency_id.as_deref(), Some("EUR"));
    /// ```
    #[must_use]
    pub fn from_token(token: &Token) -> Option<Self> {
        let kind = match token.kind {
            TokenKind::Int => TypeKind::Int,
            TokenKind::Float => TypeKind::Float,
            TokenKind::String => TypeKind::String,
            TokenKind::Bool => TypeKind::Bool,
            TokenKind::Void => TypeKind::Void,
            TokenKind::CurrencyId => {
                return token.text().map(|id| Self::from_parts(TypeKind::Currency, Some(id)));
            },
            _ => return None,
        };
        Some(Self::from_parts(kind, None::<String>))
    }

    /// Builds a type from explicit fields.
    ///
    /// A currency id passed with any kind other than [`TypeKind::Currency`]
    /// is discarded.
    #[must_use]
    pub fn from_parts(kind: TypeKind, currency_id: Option<impl Into<String>>) -> Self {
        let currency_id = match kind {
            TypeKind::Currency => currency_id.map(Into::into),
            _ => None,
        };
        Self { kind, currency_id }
    }

    /// Returns `true` if `value` is an instance of this type.
    ///
    /// Currency values must carry exactly this type's currency id. No value
    /// is an instance of `void`.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self.kind, value) {
            (TypeKind::Int, Value::Integer(_))
            | (TypeKind::Float, Value::Float(_))
            | (TypeKind::String, Value::String(_))
            | (TypeKind::Bool, Value::Bool(_)) => true,
            (TypeKind::Currency, Value::Currency(currency)) => {
                self.currency_id.as_deref() == Some(currency.currency_id.as_str())
            },
            _ => false,
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TypeKind::Int => f.write_str("int"),
            TypeKind::Float => f.write_str("float"),
            TypeKind::String => f.write_str("string"),
            TypeKind::Bool => f.write_str("bool"),
            TypeKind::Void => f.write_str("void"),
            TypeKind::Currency => f.write_str(self.currency_id.as_deref().unwrap_or("currency")),
        }
    }
}

/// An ordered sequence of statements executed in its own scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// The statements of the block.
    pub items: Vec<Statement>,
}

/// A statement inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `identifier = expr;`
    Assign {
        /// The variable being assigned.
        identifier: String,
        /// The new value.
        expr:       Expression,
    },
    /// `Type identifier = expr;`
    Init {
        /// The declared type of the new variable.
        declared_type: VariableType,
        /// The variable being defined.
        identifier:    String,
        /// The initial value.
        expr:          Expression,
    },
    /// `return expr;` or `return;`
    Return(Option<Expression>),
    /// `if (condition) then_branch [else else_branch]`
    If {
        /// The branch condition.
        condition:   Expression,
        /// Executed when the condition holds.
        then_branch: Box<Self>,
        /// Executed otherwise, if present.
        else_branch: Option<Box<Self>>,
    },
    /// `while (condition) body`
    While {
        /// Re-evaluated before every iteration.
        condition: Expression,
        /// The loop body.
        body:      Block,
    },
    /// A call whose result, if any, is discarded.
    FunctionCall(FunctionCall),
    /// A nested block.
    Block(Block),
}

/// `name(arguments...)`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The callee name.
    pub name:      String,
    /// The argument expressions, evaluated left to right.
    pub arguments: Vec<Expression>,
}

/// An expression or condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A single, possibly negated and cast, operand.
    Factor(Factor),
    /// `left (+|-|*|/) right`
    Arithmetic {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    ArithmeticOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `left (==|!=|<|<=|>|>=) right`
    Comparison {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    ComparisonOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `left (&&|||) right`
    Logical {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `!expr`
    Not(Box<Self>),
}

/// The smallest expression unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    /// Whether a unary `-` precedes the factor.
    pub negated: bool,
    /// The operand itself.
    pub value:   FactorValue,
    /// The target type of a trailing `as` cast.
    pub cast_to: Option<VariableType>,
}

impl Factor {
    /// Wraps a plain operand with no negation and no cast.
    #[must_use]
    pub const fn plain(value: FactorValue) -> Self {
        Self { negated: false,
               value,
               cast_to: None }
    }
}

/// The payload of a [`Factor`].
#[derive(Debug, Clone, PartialEq)]
pub enum FactorValue {
    /// A function call used as a value.
    FunctionCall(FunctionCall),
    /// `( condition )`
    Parenthesized(Box<Expression>),
    /// A variable read.
    Identifier(String),
    /// A constant.
    Literal(Literal),
}

/// A constant written in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// An integer literal.
    Integer(i64),
    /// A float literal.
    Float(f64),
    /// A string literal.
    String(String),
    /// `true` or `false`.
    Bool(bool),
}

/// `+`, `-`, `*` and `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl ArithmeticOperator {
    /// The operation name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
        }
    }
}

/// Equality and ordering operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
}

/// `||` and `&&`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    /// `||`
    Or,
    /// `&&`
    And,
}
