/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Largest integer exactly representable as an `f64`, as an `f64`.
#[allow(clippy::cast_precision_loss)]
const MAX_SAFE_F64_INT: f64 = MAX_SAFE_U64_INT as f64;

/// Safely converts an `f64` to `u64` if and only if it is a non-negative
/// integer that `f64` represents exactly.
///
/// ## Errors
/// Returns `Err(error)` for NaN, infinities, negative values, values with a
/// fractional part, and values above [`MAX_SAFE_U64_INT`].
///
/// ## Parameters
/// - `value`: The float to convert.
/// - `error`: The error to return if the conversion is not exact.
///
/// ## Example
/// ```
/// use reckon::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(42.0, "not an index"), Ok(42));
/// assert!(f64_to_u64_checked(4.5, "not an index").is_err());
/// assert!(f64_to_u64_checked(-1.0, "not an index").is_err());
/// assert!(f64_to_u64_checked(f64::NAN, "not an index").is_err());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_u64_checked<E>(value: f64, error: E) -> Result<u64, E> {
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > MAX_SAFE_F64_INT {
        return Err(error);
    }
    Ok(value as u64)
}

/// Converts a count or index to `f64`. Exact up to [`MAX_SAFE_U64_INT`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64(value: usize) -> f64 {
    value as f64
}
