/// Numeric conversion helpers.
///
/// Safe conversions from `f64` to integer types that refuse to silently
/// truncate, round or saturate.
pub mod num;
