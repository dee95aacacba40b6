use std::collections::BTreeMap;

use crate::{
    error::Diagnostic,
    interpreter::{evaluator::function::core::is_builtin_function, symbol::constant::is_constant},
};

/// Words that look like identifiers but can never name a variable.
pub const RESERVED_WORDS: &[&str] = &["ans", "let"];

/// The session's user-defined variables.
///
/// Keys are unique. Iteration through [`VariableTable::all`] is in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableTable {
    values: BTreeMap<String, f64>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Binds `name` to `value` and returns the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Removes `name` and returns the value it was bound to.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(name)
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterates over all bindings in name order.
    pub fn all(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Checks that `name` may be used as an assignment target.
///
/// A variable name starts with an ASCII letter, continues with letters,
/// digits or underscores, and does not collide with a constant, a built-in
/// function or a reserved word.
///
/// # Errors
/// Returns [`Diagnostic::InvalidVariableName`] describing the first rule the
/// name breaks.
///
/// # Example
/// ```
/// use reckon::interpreter::symbol::variable::validate_variable_name;
///
/// assert!(validate_variable_name("rate_2").is_ok());
/// assert!(validate_variable_name("_rate").is_err());
/// assert!(validate_variable_name("pi").is_err());
/// assert!(validate_variable_name("sqrt").is_err());
/// ```
pub fn validate_variable_name(name: &str) -> Result<(), Diagnostic> {
    let reject = |reason: &str| {
        Err(Diagnostic::InvalidVariableName { name:   name.to_string(),
                                              reason: reason.to_string(), })
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return reject("a variable name is required"),
        Some(first) if !first.is_ascii_alphabetic() => {
            return reject("names must start with a letter");
        },
        Some(_) => {},
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return reject("names may only contain letters, digits and underscores");
    }

    if is_constant(name) {
        return reject("constants cannot be reassigned");
    }
    if is_builtin_function(name) {
        return reject("the name belongs to a built-in function");
    }
    if RESERVED_WORDS.contains(&name) {
        return reject("the name is reserved");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_returns_previous_binding() {
        let mut table = VariableTable::new();
        assert_eq!(table.set("x", 1.0), None);
        assert_eq!(table.set("x", 2.0), Some(1.0));
        assert_eq!(table.get("x"), Some(2.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn all_is_sorted_by_name() {
        let mut table = VariableTable::new();
        table.set("b", 2.0);
        table.set("a", 1.0);
        table.set("c", 3.0);
        let names: Vec<_> = table.all().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn remove_and_clear() {
        let mut table = VariableTable::new();
        table.set("a", 1.0);
        table.set("b", 2.0);
        assert_eq!(table.remove("a"), Some(1.0));
        assert_eq!(table.remove("a"), None);
        table.clear();
        assert!(table.is_empty());
    }

    #[test]
    fn reserved_names_are_rejected() {
        for name in ["pi", "e", "tau", "golden", "ans", "let", "log10", "factorial"] {
            assert!(matches!(validate_variable_name(name),
                             Err(Diagnostic::InvalidVariableName { .. })),
                    "{name} should be rejected");
        }
    }

    #[test]
    fn malformed_names_are_rejected() {
        for name in ["", "2x", "_x", "x-y", "x y", "é"] {
            assert!(validate_variable_name(name).is_err(), "{name:?} should be rejected");
        }
        assert!(validate_variable_name("x_1").is_ok());
        assert!(validate_variable_name("pie").is_ok());
    }
}
