use crate::{
    ast::{Expr, Statement},
    error::Diagnostic,
    interpreter::{parser::core::parse_source, symbol::variable::VariableTable},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`Diagnostic`] describing the failure.
pub type EvalResult<T> = Result<T, Diagnostic>;

/// Stores the state that survives between evaluations.
///
/// The context holds the session's variables and the previous answer. It is
/// owned by the caller and passed into every evaluation; there is no global
/// state.
///
/// ## Invariant
///
/// `previous_answer` changes only when an evaluation through
/// [`EvaluationContext::evaluate`] succeeds with a finite result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationContext {
    variables:       VariableTable,
    previous_answer: Option<f64>,
}

impl EvaluationContext {
    /// Creates a context with no variables and no previous answer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's variables.
    #[must_use]
    pub const fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Mutable access to the session's variables.
    pub const fn variables_mut(&mut self) -> &mut VariableTable {
        &mut self.variables
    }

    /// The result of the last successful evaluation, if there was one.
    #[must_use]
    pub const fn previous_answer(&self) -> Option<f64> {
        self.previous_answer
    }

    /// Removes every variable; the previous answer is kept.
    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// Returns the context to its initial state.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.previous_answer = None;
    }

    /// Evaluates one line of input, updating the context on success.
    ///
    /// Assignments store their value before it is returned. Whatever the
    /// input, a success also becomes the new previous answer; a failure
    /// leaves both the variables and the previous answer untouched.
    ///
    /// # Errors
    /// Returns the first [`Diagnostic`] raised by lexing, parsing or
    /// evaluation.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::evaluator::core::EvaluationContext;
    ///
    /// let mut context = EvaluationContext::new();
    /// assert_eq!(context.evaluate("2 + 3"), Ok(5.0));
    /// assert_eq!(context.evaluate("ans * 2"), Ok(10.0));
    /// assert!(context.evaluate("ans / 0").is_err());
    /// assert_eq!(context.previous_answer(), Some(10.0));
    /// ```
    pub fn evaluate(&mut self, input: &str) -> EvalResult<f64> {
        let result = parse_source(input, self).and_then(|statement| self.eval_statement(&statement));

        match result {
            Ok(value) => {
                log::debug!("{input:?} = {value}");
                self.previous_answer = Some(value);
                Ok(value)
            },
            Err(e) => {
                log::debug!("{input:?} failed: {e}");
                Err(e)
            },
        }
    }

    /// Evaluates an expression without touching the context.
    ///
    /// The numeric semantics are those of [`EvaluationContext::evaluate`].
    /// Assignments are rejected because they would have to write a variable.
    ///
    /// # Errors
    /// Returns any lexing, parsing or evaluation [`Diagnostic`], or
    /// [`Diagnostic::InvalidExpression`] for a `let` statement.
    pub fn evaluate_for_plot(&self, input: &str) -> EvalResult<f64> {
        match parse_source(input, self)? {
            Statement::Expression { expr } => classify_result(self.eval(&expr)?),
            Statement::Assignment { .. } => {
                Err(Diagnostic::invalid_expression("assignments cannot be plotted"))
            },
        }
    }

    /// Evaluates an expression tree and returns its raw value.
    ///
    /// Operands are evaluated left to right, post-order. Division by zero and
    /// similar operations are computed normally here and may yield infinities
    /// or NaN; [`classify_result`] turns those into diagnostics at the top
    /// level. Domain guard failures abort the walk immediately.
    ///
    /// # Errors
    /// - [`Diagnostic::InvalidExpression`] for a failed domain guard.
    /// - [`Diagnostic::UndefinedVariable`] if a variable or `ans` was unbound
    ///   after parsing.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } | Expr::Constant { value, .. } => Ok(*value),
            Expr::Variable { name, position } => {
                self.variables.get(name).ok_or_else(|| Diagnostic::UndefinedVariable {
                    position: *position,
                    name: name.clone(),
                })
            },
            Expr::PreviousAnswer { position } => {
                self.previous_answer.ok_or_else(|| Diagnostic::UndefinedVariable {
                    position: *position,
                    name: "ans".to_string(),
                })
            },
            Expr::UnaryOp { op, expr, .. } => Ok(Self::eval_unary(*op, self.eval(expr)?)),
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right))
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 position, } => self.eval_function_call(name, arguments, *position),
        }
    }

    /// Evaluates a single statement and classifies its result.
    ///
    /// An assignment stores its value only once the value is known to be
    /// finite, so a failing right-hand side never leaves a binding behind.
    ///
    /// # Errors
    /// Anything [`EvaluationContext::eval`] or [`classify_result`] reports.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<f64> {
        match statement {
            Statement::Expression { expr } => classify_result(self.eval(expr)?),
            Statement::Assignment { name, value } => {
                let value = classify_result(self.eval(value)?)?;
                self.variables.set(name.clone(), value);
                Ok(value)
            },
        }
    }
}

/// Requires a raw evaluation result to be finite.
///
/// # Errors
/// - [`Diagnostic::DivisionByZero`] for positive or negative infinity.
/// - [`Diagnostic::InvalidExpression`] for NaN.
///
/// # Example
/// ```
/// use reckon::{error::Diagnostic, interpreter::evaluator::core::classify_result};
///
/// assert_eq!(classify_result(1.5), Ok(1.5));
/// assert_eq!(classify_result(f64::NEG_INFINITY),
///            Err(Diagnostic::DivisionByZero));
/// assert!(matches!(classify_result(f64::NAN),
///                  Err(Diagnostic::InvalidExpression { .. })));
/// ```
pub fn classify_result(value: f64) -> EvalResult<f64> {
    if value.is_nan() {
        return Err(Diagnostic::invalid_expression("computation produced an invalid result"));
    }
    if value.is_infinite() {
        return Err(Diagnostic::DivisionByZero);
    }
    Ok(value)
}
