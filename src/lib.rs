//! # reckon
//!
//! reckon is a numeric expression evaluator for interactive calculators.
//! It turns short arithmetic and function expressions into double precision
//! results, keeps the previous answer available as `ans`, and stores named
//! variables created with `let`.
//!
//! ```
//! use reckon::{EvaluationContext, evaluate};
//!
//! let mut context = EvaluationContext::new();
//! assert_eq!(evaluate("let r = 2", &mut context), Ok(2.0));
//! assert_eq!(evaluate("r ^ 2 + 1", &mut context), Ok(5.0));
//! assert_eq!(evaluate("ans * 2", &mut context), Ok(10.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed input.
///
/// This module declares the [`ast::Expr`] and [`ast::Statement`] types built
/// by the parser and walked by the evaluator. Trees are built fresh for each
/// input and discarded after evaluation.
pub mod ast;
/// Provides the diagnostic type shared by every phase.
///
/// # Responsibilities
/// - Defines one closed enum for lexer, parser and evaluator failures.
/// - Attaches source offsets so a display layer can point at the problem.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, parser, symbol tables, function
/// registry, evaluator and plotting sweep.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use crate::{
    error::Diagnostic,
    interpreter::{evaluator::core::EvaluationContext, symbol::variable::VariableTable},
};
use crate::{ast::Statement, interpreter::parser::core::parse_source};

/// Evaluates one line of input against `context`.
///
/// The line is either an expression or `let <name> = <expression>`. On
/// success the result becomes the context's previous answer; on failure the
/// context is unchanged.
///
/// # Errors
/// Returns the [`Diagnostic`] for the first problem found while lexing,
/// parsing or evaluating.
///
/// # Examples
/// ```
/// use reckon::{Diagnostic, EvaluationContext, evaluate};
///
/// let mut context = EvaluationContext::new();
/// assert_eq!(evaluate("2 + 3 * 4", &mut context), Ok(14.0));
/// assert_eq!(evaluate("5 / 0", &mut context), Err(Diagnostic::DivisionByZero));
/// assert_eq!(context.previous_answer(), Some(14.0));
/// ```
pub fn evaluate(input: &str, context: &mut EvaluationContext) -> Result<f64, Diagnostic> {
    context.evaluate(input)
}

/// Evaluates an expression for plotting without changing `context`.
///
/// # Errors
/// Same as [`evaluate`]; `let` input is rejected as well.
pub fn evaluate_for_plot(input: &str, context: &EvaluationContext) -> Result<f64, Diagnostic> {
    context.evaluate_for_plot(input)
}

/// Parses one line of input into a statement without evaluating it.
///
/// # Errors
/// Returns the first lexing or parsing [`Diagnostic`].
pub fn parse(input: &str, context: &EvaluationContext) -> Result<Statement, Diagnostic> {
    parse_source(input, context)
}
