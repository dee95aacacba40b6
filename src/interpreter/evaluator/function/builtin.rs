use crate::util::num::f64_to_u64_checked;

/// Largest argument `factorial` accepts. Every factorial up to this one is an
/// integer that a double represents exactly; larger arguments are rejected.
pub const MAX_FACTORIAL_ARGUMENT: u64 = 20;

/// Generates a one-argument rule that forwards to the `f64` method of the
/// same name.
macro_rules! real_builtin {
    ($($fname:ident => $real_fn:ident),* $(,)?) => {
        $(
            #[must_use]
            pub fn $fname(args: &[f64]) -> f64 {
                args[0].$real_fn()
            }
        )*
    };
}

real_builtin! {
    sqrt => sqrt,
    abs => abs,
    ln => ln,
    log10 => log10,
    sin => sin,
    cos => cos,
    tan => tan,
    round => round,
    ceil => ceil,
    floor => floor,
}

/// `pow(base, exponent)`.
#[must_use]
pub fn pow(args: &[f64]) -> f64 {
    args[0].powf(args[1])
}

/// `factorial(n)` for an integer `n` the guard has already accepted.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::builtin::factorial;
///
/// assert_eq!(factorial(&[5.0]), 120.0);
/// assert_eq!(factorial(&[0.0]), 1.0);
/// assert_eq!(factorial(&[20.0]), 2_432_902_008_176_640_000.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn factorial(args: &[f64]) -> f64 {
    f64_to_u64_checked(args[0], ()).map_or(f64::NAN, |n| (1..=n).product::<u64>() as f64)
}

/// Guard for functions defined on every real number.
#[allow(clippy::unnecessary_wraps)]
pub fn unguarded(_: &[f64]) -> Result<(), String> {
    Ok(())
}

/// `sqrt` requires a non-negative argument.
pub fn sqrt_domain(args: &[f64]) -> Result<(), String> {
    if args[0] < 0.0 {
        return Err(format!("square root of a negative number ({}) is undefined", args[0]));
    }
    Ok(())
}

/// `log` and `log10` require a strictly positive argument.
pub fn log_domain(args: &[f64]) -> Result<(), String> {
    if args[0] <= 0.0 {
        return Err(format!("logarithm of a non-positive number ({}) is undefined", args[0]));
    }
    Ok(())
}

/// `factorial` requires a non-negative integer no larger than
/// [`MAX_FACTORIAL_ARGUMENT`].
pub fn factorial_domain(args: &[f64]) -> Result<(), String> {
    let n = f64_to_u64_checked(args[0], ()).map_err(|()| {
                                              format!("factorial requires a non-negative integer, found {}",
                                                      args[0])
                                          })?;

    if n > MAX_FACTORIAL_ARGUMENT {
        return Err(format!("factorial is limited to arguments of at most {MAX_FACTORIAL_ARGUMENT}, found {n}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_domain_boundaries() {
        assert!(factorial_domain(&[0.0]).is_ok());
        assert!(factorial_domain(&[20.0]).is_ok());
        assert!(factorial_domain(&[21.0]).is_err());
        assert!(factorial_domain(&[-1.0]).is_err());
        assert!(factorial_domain(&[2.5]).is_err());
        assert!(factorial_domain(&[f64::INFINITY]).is_err());
    }

    #[test]
    fn log_domain_rejects_zero() {
        assert!(log_domain(&[0.0]).is_err());
        assert!(log_domain(&[-3.0]).is_err());
        assert!(log_domain(&[1e-300]).is_ok());
    }

    #[test]
    fn sqrt_domain_accepts_zero() {
        assert!(sqrt_domain(&[0.0]).is_ok());
        assert!(sqrt_domain(&[-0.5]).is_err());
    }

    #[test]
    fn rounding_rules() {
        assert_eq!(round(&[2.5]), 3.0);
        assert_eq!(round(&[-2.5]), -3.0);
        assert_eq!(ceil(&[1.1]), 2.0);
        assert_eq!(floor(&[-1.1]), -2.0);
    }
}
