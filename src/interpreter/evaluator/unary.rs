use crate::{ast::UnaryOperator, interpreter::evaluator::core::EvaluationContext};

impl EvaluationContext {
    /// Evaluates a unary operation on a value.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::UnaryOperator, interpreter::evaluator::core::EvaluationContext};
    ///
    /// assert_eq!(EvaluationContext::eval_unary(UnaryOperator::Negate, 4.0), -4.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
        }
    }
}
