use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{Diagnostic, ParenSide, Span},
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::{ParseResult, ParseScope, parse_expression},
    },
};

/// Parses a comma-separated argument list up to the closing `)`.
///
/// The opening `(` has already been consumed and pushed with
/// [`open_group`]. An immediately encountered `)` produces an empty list;
/// arity is the caller's concern.
///
/// Grammar: `argList := expression ("," expression)*`
///
/// # Errors
/// - [`Diagnostic::UnbalancedParenthesis`] if the input ends inside the list.
/// - [`Diagnostic::InvalidExpression`] if an argument is followed by anything
///   other than `,` or `)`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I>(tokens: &mut Peekable<I>,
                                                                   scope: &mut ParseScope<'_>)
                                                                   -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let mut items = Vec::new();
    if tokens.next_if(|lexeme| lexeme.token == Token::RParen).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_expression(tokens, scope)?);
        match tokens.next() {
            Some(Lexeme { token: Token::Comma,
                          .. }) => {},
            Some(Lexeme { token: Token::RParen,
                          .. }) => break,
            Some(Lexeme { token: Token::End,
                          .. })
            | None => return Err(end_of_input(scope)),
            Some(lexeme) => return Err(unexpected(scope, lexeme)),
        }
    }
    Ok(items)
}

/// Rejects operators that directly follow `operator`.
///
/// After a binary operator, a single `-` followed by an operand is a unary
/// minus and is allowed when `allow_negation` is set. Any other run reports
/// the operator and everything up to the last operator of the run.
///
/// # Errors
/// Returns [`Diagnostic::InvalidOperatorSequence`] naming the full run.
pub(in crate::interpreter::parser) fn reject_operator_run<'a, I>(tokens: &Peekable<I>,
                                                                 scope: &ParseScope<'_>,
                                                                 operator: &Lexeme,
                                                                 allow_negation: bool)
                                                                 -> ParseResult<()>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let run = operators_ahead(tokens);

    let negation = allow_negation
                   && run.len() == 1
                   && run.first().is_some_and(|lexeme| lexeme.token == Token::Minus);

    match run.last() {
        Some(last) if !negation => Err(operator_sequence(scope, operator, last)),
        _ => Ok(()),
    }
}

/// Builds the error for an operator found where an operand should start.
///
/// A lone operator is an unexpected token (a leading `+` is not a no-op); two
/// or more in a row form an operator sequence.
pub(in crate::interpreter::parser) fn misplaced_operator<'a, I>(tokens: &Peekable<I>,
                                                                scope: &ParseScope<'_>,
                                                                operator: &Lexeme)
                                                                -> Diagnostic
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let mut ahead = tokens.clone();
    ahead.next();

    match operators_ahead(&ahead).last() {
        Some(last) => operator_sequence(scope, operator, last),
        None => unexpected(scope, operator),
    }
}

/// Deepest nesting of parentheses, calls and exponents a line may use.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Enters one level of nesting at `at`.
///
/// # Errors
/// Returns [`Diagnostic::InvalidExpression`] pointing at `at` once
/// [`MAX_NESTING_DEPTH`] is reached.
pub(in crate::interpreter::parser) fn descend(scope: &mut ParseScope<'_>, at: &Lexeme) -> ParseResult<()> {
    if scope.depth >= MAX_NESTING_DEPTH {
        return Err(Diagnostic::invalid_expression_at(span_of(at),
                                                     format!("nesting deeper than {MAX_NESTING_DEPTH} levels")));
    }
    scope.depth += 1;
    Ok(())
}

/// Leaves the level entered by the matching [`descend`].
pub(in crate::interpreter::parser) const fn ascend(scope: &mut ParseScope<'_>) {
    scope.depth -= 1;
}

/// Records `open` as the innermost unclosed `(`.
pub(in crate::interpreter::parser) fn open_group(scope: &mut ParseScope<'_>, open: &Lexeme) -> ParseResult<()> {
    descend(scope, open)?;
    scope.open_parens.push(open.position);
    Ok(())
}

/// Closes the innermost `(`.
pub(in crate::interpreter::parser) fn close_group(scope: &mut ParseScope<'_>) {
    scope.open_parens.pop();
    ascend(scope);
}

/// Error for input that stops before the grammar is satisfied.
///
/// Inside parentheses the innermost unclosed `(` is blamed; otherwise the
/// error points just past the input.
pub(in crate::interpreter::parser) fn end_of_input(scope: &ParseScope<'_>) -> Diagnostic {
    match scope.open_parens.last() {
        Some(&position) => Diagnostic::UnbalancedParenthesis { position,
                                                               side: ParenSide::Open },
        None => {
            Diagnostic::invalid_expression_at(Span { position: scope.source.len(),
                                                     length:   1, },
                                              "input ends where an operand is expected")
        },
    }
}

/// Error for a token the grammar does not allow at this point.
pub(in crate::interpreter::parser) fn unexpected(scope: &ParseScope<'_>, lexeme: &Lexeme) -> Diagnostic {
    match lexeme.token {
        Token::End => end_of_input(scope),
        _ => Diagnostic::invalid_expression_at(span_of(lexeme),
                                               format!("unexpected '{}' at position {}",
                                                       lexeme.text, lexeme.position)),
    }
}

fn span_of(lexeme: &Lexeme) -> Span {
    Span { position: lexeme.position,
           length:   lexeme.length().max(1), }
}

/// Collects the operators at the front of the stream without consuming them.
fn operators_ahead<'a, I>(tokens: &Peekable<I>) -> Vec<&'a Lexeme>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let mut ahead = tokens.clone();
    let mut run = Vec::new();
    while let Some(lexeme) = ahead.next_if(|lexeme| lexeme.token.is_operator()) {
        run.push(lexeme);
    }
    run
}

fn operator_sequence(scope: &ParseScope<'_>, first: &Lexeme, last: &Lexeme) -> Diagnostic {
    Diagnostic::InvalidOperatorSequence { position: first.position,
                                          text:     scope.source[first.position..last.end()].to_string(), }
}
