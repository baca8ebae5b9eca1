/// Currency values.
///
/// Defines the `Currency` type: an arbitrary-precision decimal amount paired
/// with a configured currency id.
pub mod currency;

pub mod core;
