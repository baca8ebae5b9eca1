/// Binary operator evaluation logic.
///
/// Handles arithmetic and comparison operators together with their operand
/// type rules.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation of numbers and currency amounts.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, the control-flow signal returned by
/// statements and the program entry point.
pub mod core;

/// Variable scopes.
///
/// Defines the per-call stack of block scopes and the lookup, definition and
/// assignment rules over it.
pub mod scope;

/// Statement execution.
///
/// Runs blocks, assignments, initializations, returns, conditionals and
/// loops.
pub mod statement;

/// Expression evaluation.
///
/// Evaluates factors, operators and short-circuiting logical conditions.
pub mod expression;

/// Type casts.
///
/// Implements the `as` operator, including currency conversion through the
/// exchange-rate table.
pub mod cast;

/// Runtime type checks.
///
/// Validates argument counts, argument and initialization types and
/// function return values.
pub mod validation;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
