/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between `i64`, `f64`
/// and arbitrary-precision decimals without silent data loss. Every
/// conversion that can fail returns a `Result` carrying a `RuntimeError`.
pub mod num;
