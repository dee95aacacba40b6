use crate::{ast::BinaryOperator, interpreter::evaluator::core::EvaluationContext};

impl EvaluationContext {
    /// Evaluates a binary operation on two values.
    ///
    /// Nothing is rejected here: `x / 0` yields an infinity or NaN, and a
    /// fractional power of a negative base yields NaN. The caller classifies
    /// non-finite results once the whole expression is evaluated.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::BinaryOperator, interpreter::evaluator::core::EvaluationContext};
    ///
    /// assert_eq!(EvaluationContext::eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    /// assert!(EvaluationContext::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Pow => left.powf(right),
        }
    }
}
