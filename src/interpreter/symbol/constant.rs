use std::f64::consts::{E, PI, TAU};

/// The golden ratio, `(1 + √5) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Every built-in constant with its value.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", PI), ("e", E), ("tau", TAU), ("golden", GOLDEN_RATIO)];

/// Looks up a built-in constant by name.
///
/// # Example
/// ```
/// use reckon::interpreter::symbol::constant::lookup_constant;
///
/// assert_eq!(lookup_constant("tau"), Some(std::f64::consts::TAU));
/// assert_eq!(lookup_constant("x"), None);
/// ```
#[must_use]
pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANTS.iter()
             .find(|(constant, _)| *constant == name)
             .map(|(_, value)| *value)
}

/// Whether `name` is reserved by the constant table.
#[must_use]
pub fn is_constant(name: &str) -> bool {
    lookup_constant(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_ratio_matches_its_definition() {
        assert!((GOLDEN_RATIO - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup_constant("pi"), Some(PI));
        assert_eq!(lookup_constant("PI"), None);
        assert!(is_constant("e"));
        assert!(!is_constant("ans"));
    }
}
