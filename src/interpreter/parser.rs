/// Parser state and token helpers.
///
/// Declares the `Parser` struct, the `ParseResult` alias and the program
/// rule, together with the lookahead helpers every other rule builds on.
pub mod core;

/// Function definition parsing.
///
/// Handles return types, function names and typed or untyped parameter lists.
pub mod function;

/// Block and statement parsing.
///
/// Parses braced blocks and their items: initializations, assignments,
/// returns, calls, and the `if` and `while` control statements.
pub mod block;

/// Condition parsing.
///
/// Implements the logical, equality and relational precedence levels and
/// the unary `!`.
pub mod condition;

/// Arithmetic expression parsing.
///
/// Implements additive and multiplicative levels, casts, negation, factors
/// and function call arguments.
pub mod expression;
