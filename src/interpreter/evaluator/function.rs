/// Function call dispatch.
///
/// Resolves user-defined functions and builtins, checks arity, binds
/// parameters into a new call context and validates the returned value.
pub mod core;

/// Builtin functions.
///
/// Implements `print` and `typeof`.
pub mod builtin;
