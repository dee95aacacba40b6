use crate::{
    error::Diagnostic,
    interpreter::{
        evaluator::core::{EvalResult, EvaluationContext},
        symbol::variable::validate_variable_name,
    },
    util::num::usize_to_f64,
};

/// The interval a sweep covers and how finely it samples it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotDomain {
    /// First sampled value.
    pub start:   f64,
    /// Last sampled value.
    pub end:     f64,
    /// Number of evenly spaced samples, both ends included.
    pub samples: usize,
}

impl PlotDomain {
    /// Checks that the domain is a finite, non-empty interval with at least
    /// two samples.
    ///
    /// # Errors
    /// Returns [`Diagnostic::InvalidExpression`] describing the problem.
    pub fn validate(&self) -> EvalResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(Diagnostic::invalid_expression("plot bounds must be finite"));
        }
        if self.start >= self.end {
            return Err(Diagnostic::invalid_expression("plot start must be below plot end"));
        }
        if self.samples < 2 {
            return Err(Diagnostic::invalid_expression("a plot needs at least two samples"));
        }
        Ok(())
    }

    /// The sampled values, from `start` to `end` inclusive.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        let last = usize_to_f64(self.samples - 1);
        (0..self.samples).map(move |i| {
                             if i + 1 == self.samples {
                                 self.end
                             } else {
                                 self.start + (self.end - self.start) * usize_to_f64(i) / last
                             }
                         })
    }
}

/// One point of a sweep. `y` is NaN when the expression failed at `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// The value bound to the sweep variable.
    pub x: f64,
    /// The expression's value, or NaN.
    pub y: f64,
}

impl Sample {
    /// Whether the expression produced a value at this point.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        self.y.is_finite()
    }
}

/// Evaluates `input` once per point of `domain` with `variable` bound to it.
///
/// Each sample saves the current binding of `variable` (or its absence),
/// binds the sample value, evaluates, and restores the saved state before the
/// next sample. A sample that fails is recorded as NaN and the sweep goes on.
/// The previous answer is never changed.
///
/// # Errors
/// - [`Diagnostic::InvalidVariableName`] if `variable` cannot be bound.
/// - [`Diagnostic::InvalidExpression`] if `domain` is unusable.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     evaluator::core::EvaluationContext,
///     plot::{PlotDomain, sweep},
/// };
///
/// let mut context = EvaluationContext::new();
/// let domain = PlotDomain { start:   -1.0,
///                           end:     1.0,
///                           samples: 3, };
///
/// let samples = sweep("log(x)", "x", &domain, &mut context).unwrap();
/// assert!(samples[0].y.is_nan());
/// assert!(samples[1].y.is_nan());
/// assert_eq!(samples[2].y, 0.0);
/// assert!(context.variables().get("x").is_none());
/// ```
pub fn sweep(input: &str,
             variable: &str,
             domain: &PlotDomain,
             context: &mut EvaluationContext)
             -> EvalResult<Vec<Sample>> {
    validate_variable_name(variable)?;
    domain.validate()?;

    let samples = domain.points()
                        .map(|x| Sample { x,
                                          y: sample_at(input, variable, x, context) })
                        .collect::<Vec<_>>();

    log::debug!("swept {input:?} over {variable} in [{}, {}]: {} of {} samples defined",
                domain.start,
                domain.end,
                samples.iter().filter(|s| s.is_defined()).count(),
                samples.len());

    Ok(samples)
}

/// Evaluates `input` with `variable` temporarily bound to `x`.
fn sample_at(input: &str, variable: &str, x: f64, context: &mut EvaluationContext) -> f64 {
    let saved = context.variables_mut().set(variable, x);

    let y = context.evaluate_for_plot(input).unwrap_or_else(|e| {
                                                  log::trace!("{variable} = {x}: {e}");
                                                  f64::NAN
                                              });

    match saved {
        Some(previous) => context.variables_mut().set(variable, previous),
        None => context.variables_mut().remove(variable),
    };

    y
}
