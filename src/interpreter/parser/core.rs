use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::Diagnostic,
    interpreter::{
        evaluator::core::EvaluationContext,
        lexer::{Lexeme, tokenize},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, Diagnostic>;

/// State shared by all parsing functions while one line is parsed.
///
/// Identifiers are classified against `context` at the moment they are
/// consumed, so the scope borrows the live symbol tables for the duration of
/// the parse.
pub struct ParseScope<'c> {
    /// The complete input line. Diagnostics that name a run of source text
    /// slice it out of here.
    pub source:      &'c str,
    /// Variables and previous answer used to classify identifiers.
    pub context:     &'c EvaluationContext,
    /// Offsets of the `(` opened and not yet closed, innermost last.
    pub open_parens: Vec<usize>,
    /// Current nesting of groups, calls and exponents.
    pub depth:       usize,
}

impl<'c> ParseScope<'c> {
    /// Creates a scope for parsing `source` against `context`.
    #[must_use]
    pub const fn new(source: &'c str, context: &'c EvaluationContext) -> Self {
        Self { source,
               context,
               open_parens: Vec::new(),
               depth: 0 }
    }
}

/// Lexes and parses one line of input into a [`Statement`].
///
/// # Errors
/// Returns the first lexing or parsing [`Diagnostic`] encountered.
///
/// # Example
/// ```
/// use reckon::{
///     ast::{BinaryOperator, Expr, Statement},
///     interpreter::{evaluator::core::EvaluationContext, parser::core::parse_source},
/// };
///
/// let context = EvaluationContext::new();
/// let statement = parse_source("1 + pi", &context).unwrap();
///
/// let Statement::Expression { expr: Expr::BinaryOp { op, right, .. } } = statement else {
///     panic!("expected a binary expression");
/// };
/// assert_eq!(op, BinaryOperator::Add);
/// assert!(matches!(*right, Expr::Constant { .. }));
/// ```
pub fn parse_source(source: &str, context: &EvaluationContext) -> ParseResult<Statement> {
    let lexemes = tokenize(source)?;
    let mut scope = ParseScope::new(source, context);
    let mut tokens = lexemes.iter().peekable();

    let statement = parse_statement(&mut tokens, &mut scope)?;
    log::debug!("parsed {source:?} as {statement:?}");

    Ok(statement)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, addition and subtraction, and recursively descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               scope: &mut ParseScope<'_>)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    parse_additive(tokens, scope)
}
