use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::{Diagnostic, ParenSide, Span},
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::{ParseResult, ParseScope, parse_expression},
            utils::unexpected,
        },
        symbol::variable::validate_variable_name,
    },
};

/// Parses a single statement and requires that it consumes the whole line.
///
/// A statement is either an assignment, `let <name> = <expression>`, or a
/// bare expression. The `let` prefix is recognized once, up front; it is not
/// part of the expression grammar.
///
/// # Errors
/// - [`Diagnostic::InvalidVariableName`] for a bad assignment target.
/// - [`Diagnostic::UnbalancedParenthesis`] for a stray `)` after the
///   expression.
/// - [`Diagnostic::InvalidExpression`] for any other trailing token, or for
///   a `let` with no `=`.
/// - Anything raised while parsing the expression itself.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              scope: &mut ParseScope<'_>)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let statement = match parse_assignment(tokens, scope)? {
        Some(statement) => statement,
        None => Statement::Expression { expr: parse_expression(tokens, scope)? },
    };

    expect_end(tokens, scope)?;

    Ok(statement)
}

/// Parses `let <name> = <expression>` if the line starts with `let`.
///
/// Everything between `let` and the first `=` is taken as the target name, so
/// inputs like `let 2x = 1` or `let a b = 1` are reported as invalid names
/// rather than as stray tokens.
///
/// # Returns
/// - `Ok(Some(statement))` if an assignment was parsed,
/// - `Ok(None)` if the line does not start with `let`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           scope: &mut ParseScope<'_>)
                           -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let Some(keyword) = tokens.next_if(|lexeme| lexeme.token == Token::Let) else {
        return Ok(None);
    };

    let target_start = tokens.peek().map_or(keyword.end(), |lexeme| lexeme.position);
    let target_end = loop {
        match tokens.next() {
            Some(Lexeme { token: Token::Equals,
                          position,
                          .. }) => break *position,
            Some(Lexeme { token: Token::End,
                          .. })
            | None => {
                return Err(Diagnostic::invalid_expression_at(Span { position: keyword.position,
                                                                    length:   keyword.length(), },
                                                             "'let' needs '=' and a value"));
            },
            Some(_) => {},
        }
    };

    let name = scope.source[target_start..target_end].trim();
    validate_variable_name(name)?;

    let value = parse_expression(tokens, scope)?;

    Ok(Some(Statement::Assignment { name: name.to_string(),
                                    value }))
}

/// Requires that only [`Token::End`] remains.
fn expect_end<'a, I>(tokens: &mut Peekable<I>, scope: &ParseScope<'_>) -> ParseResult<()>
    where I: Iterator<Item = &'a Lexeme>
{
    match tokens.peek() {
        None
        | Some(Lexeme { token: Token::End,
                        .. }) => Ok(()),
        Some(Lexeme { token: Token::RParen,
                      position,
                      .. }) => {
            Err(Diagnostic::UnbalancedParenthesis { position: *position,
                                                    side:     ParenSide::Close, })
        },
        Some(lexeme) => Err(unexpected(scope, lexeme)),
    }
}
