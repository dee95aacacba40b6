use crate::{
    ast::Expr,
    error::Diagnostic,
    interpreter::evaluator::{
        core::{EvalResult, EvaluationContext},
        function::builtin,
    },
};

/// Domain guard: accepts the arguments or explains why they are invalid.
type GuardFn = fn(&[f64]) -> Result<(), String>;

/// Evaluation rule: maps validated arguments to the result.
type RuleFn = fn(&[f64]) -> f64;

/// Describes one built-in function.
///
/// Arity and domain are checked before the rule runs, so a rule may index its
/// arguments directly.
#[derive(Debug)]
pub struct FunctionDescriptor {
    /// The name used in call position.
    pub name:  &'static str,
    /// Exact number of arguments.
    pub arity: usize,
    /// Precondition on the arguments.
    pub guard: GuardFn,
    /// Computes the result.
    pub rule:  RuleFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact arity,
/// - the domain guard,
/// - the evaluation rule.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                guard: $guard:expr,
                rule: $rule:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[FunctionDescriptor] = &[
            $(
                FunctionDescriptor { name: $name, arity: $arity, guard: $guard, rule: $rule },
            )*
        ];
        /// Names of every built-in function, in registry order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"      => { arity: 1, guard: builtin::sqrt_domain,      rule: builtin::sqrt },
    "abs"       => { arity: 1, guard: builtin::unguarded,        rule: builtin::abs },
    "pow"       => { arity: 2, guard: builtin::unguarded,        rule: builtin::pow },
    "log"       => { arity: 1, guard: builtin::log_domain,       rule: builtin::ln },
    "log10"     => { arity: 1, guard: builtin::log_domain,       rule: builtin::log10 },
    "sin"       => { arity: 1, guard: builtin::unguarded,        rule: builtin::sin },
    "cos"       => { arity: 1, guard: builtin::unguarded,        rule: builtin::cos },
    "tan"       => { arity: 1, guard: builtin::unguarded,        rule: builtin::tan },
    "round"     => { arity: 1, guard: builtin::unguarded,        rule: builtin::round },
    "ceil"      => { arity: 1, guard: builtin::unguarded,        rule: builtin::ceil },
    "floor"     => { arity: 1, guard: builtin::unguarded,        rule: builtin::floor },
    "factorial" => { arity: 1, guard: builtin::factorial_domain, rule: builtin::factorial },
}

/// Looks up a built-in function by name.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::core::lookup_function;
///
/// assert_eq!(lookup_function("pow").map(|f| f.arity), Some(2));
/// assert!(lookup_function("sinh").is_none());
/// ```
#[must_use]
pub fn lookup_function(name: &str) -> Option<&'static FunctionDescriptor> {
    BUILTIN_TABLE.iter().find(|function| function.name == name)
}

/// Whether `name` belongs to a built-in function.
#[must_use]
pub fn is_builtin_function(name: &str) -> bool {
    lookup_function(name).is_some()
}

impl FunctionDescriptor {
    /// Checks the arguments against the domain guard and applies the rule.
    ///
    /// A NaN argument skips the guard and yields NaN, so the top-level result
    /// classification reports it rather than a guard message that would not
    /// describe the real problem.
    ///
    /// # Errors
    /// - [`Diagnostic::InvalidFunction`] if the argument count is wrong.
    /// - [`Diagnostic::InvalidExpression`] if the domain guard fails.
    pub fn apply(&self, args: &[f64], position: usize) -> EvalResult<f64> {
        if args.len() != self.arity {
            return Err(Diagnostic::InvalidFunction { position,
                                                     name: self.name.to_string(),
                                                     details: format!("expects {} arguments, found {}",
                                                                      self.arity,
                                                                      args.len()) });
        }

        if args.iter().any(|arg| arg.is_nan()) {
            return Ok(f64::NAN);
        }

        (self.guard)(args).map_err(Diagnostic::invalid_expression)?;

        Ok((self.rule)(args))
    }
}

impl EvaluationContext {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated first, left to right; then the registry's
    /// guard and rule are applied. A failure anywhere aborts the call.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions.
    /// - `position`: Offset of the name, for error reporting.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     position: usize)
                                     -> EvalResult<f64> {
        let function = lookup_function(name).ok_or_else(|| Diagnostic::InvalidFunction {
            position,
            name: name.to_string(),
            details: "unknown function".to_string(),
        })?;

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        function.apply(&values, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_every_function_once() {
        let mut names = BUILTIN_FUNCTIONS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_FUNCTIONS.len());
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn guard_failure_becomes_invalid_expression() {
        let sqrt = lookup_function("sqrt").unwrap();
        assert_eq!(sqrt.apply(&[16.0], 0), Ok(4.0));
        assert!(matches!(sqrt.apply(&[-1.0], 0),
                         Err(Diagnostic::InvalidExpression { .. })));
    }

    #[test]
    fn nan_arguments_bypass_the_guard() {
        let log = lookup_function("log").unwrap();
        assert!(log.apply(&[f64::NAN], 0).unwrap().is_nan());
    }

    #[test]
    fn wrong_argument_count_is_an_invalid_function() {
        let pow = lookup_function("pow").unwrap();
        assert!(matches!(pow.apply(&[2.0], 3),
                         Err(Diagnostic::InvalidFunction { position: 3, .. })));
    }
}
