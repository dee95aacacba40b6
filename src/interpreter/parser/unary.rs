use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::{Diagnostic, ParenSide},
    interpreter::{
        evaluator::function::core::lookup_function,
        lexer::{Lexeme, Token},
        parser::{
            core::{ParseResult, ParseScope, parse_expression},
            utils::{
                close_group, end_of_input, misplaced_operator, open_group, parse_comma_separated,
                reject_operator_run, unexpected,
            },
        },
        symbol::constant::lookup_constant,
    },
};

/// Identifier that refers to the previous answer.
pub const PREVIOUS_ANSWER: &str = "ans";

/// Parses a unary expression.
///
/// Unary minus is the only prefix operator and may appear at most once before
/// a primary; `--x` is an operator sequence, not a double negation.
///
/// Grammar: `unary := "-"? primary`
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, scope: &mut ParseScope<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    if let Some(minus) = tokens.next_if(|lexeme| lexeme.token == Token::Minus) {
        reject_operator_run(tokens, scope, minus, false)?;
        let expr = parse_primary(tokens, scope)?;
        return Ok(Expr::UnaryOp { op:       UnaryOperator::Negate,
                                  expr:     Box::new(expr),
                                  position: minus.position, });
    }

    parse_primary(tokens, scope)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | identifier "(" argList ")"
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - [`Diagnostic::UnbalancedParenthesis`] for a `)` with nothing open, or
///   if the input ends inside parentheses.
/// - [`Diagnostic::InvalidOperatorSequence`] or
///   [`Diagnostic::InvalidExpression`] for an operator in operand position.
/// - [`Diagnostic::InvalidExpression`] if the operand is missing.
/// - Identifier and function call errors.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, scope: &mut ParseScope<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let Some(lexeme) = tokens.peek().copied() else {
        return Err(end_of_input(scope));
    };

    match &lexeme.token {
        Token::Number(value) => {
            tokens.next();
            Ok(Expr::Number { value:    *value,
                              position: lexeme.position, })
        },
        Token::Identifier(_) => parse_identifier_or_function(tokens, scope),
        Token::LParen => parse_grouping(tokens, scope),
        Token::RParen if scope.open_parens.is_empty() => {
            Err(Diagnostic::UnbalancedParenthesis { position: lexeme.position,
                                                    side:     ParenSide::Close, })
        },
        token if token.is_operator() => Err(misplaced_operator(tokens, scope, lexeme)),
        _ => Err(unexpected(scope, lexeme)),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `group := "(" expression ")"`
///
/// # Errors
/// - [`Diagnostic::UnbalancedParenthesis`] pointing at the innermost open `(`
///   if the input ends before it is closed.
/// - [`Diagnostic::InvalidExpression`] if the group nests too deeply.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, scope: &mut ParseScope<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let Some(open) = tokens.next() else {
        return Err(end_of_input(scope));
    };

    open_group(scope, open)?;
    let expr = parse_expression(tokens, scope)?;

    match tokens.next() {
        Some(Lexeme { token: Token::RParen,
                      .. }) => {
            close_group(scope);
            Ok(expr)
        },
        Some(lexeme) => Err(unexpected(scope, lexeme)),
        None => Err(end_of_input(scope)),
    }
}

/// Parses an identifier, or a function call if it is followed by `(`.
///
/// A name in call position must be a built-in function and must receive the
/// number of arguments the function declares.
///
/// # Errors
/// - [`Diagnostic::InvalidFunction`] for an unknown function or a wrong
///   argument count.
/// - Whatever [`resolve_identifier`] reports for a plain identifier.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       scope: &mut ParseScope<'_>)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let Some(lexeme) = tokens.next() else {
        return Err(end_of_input(scope));
    };
    let Token::Identifier(name) = &lexeme.token else {
        return Err(unexpected(scope, lexeme));
    };
    let position = &lexeme.position;

    let Some(open) = tokens.next_if(|lexeme| lexeme.token == Token::LParen) else {
        return resolve_identifier(name, *position, scope);
    };

    let function = lookup_function(name).ok_or_else(|| {
                                             Diagnostic::InvalidFunction { position: *position,
                                                                           name:     name.clone(),
                                                                           details:  "unknown function".to_string(), }
                                         })?;

    open_group(scope, open)?;
    let arguments = parse_comma_separated(tokens, scope)?;
    close_group(scope);

    if arguments.len() != function.arity {
        return Err(Diagnostic::InvalidFunction { position: *position,
                                                 name:     name.clone(),
                                                 details:  format!("expects {} argument{}, found {}",
                                                                   function.arity,
                                                                   if function.arity == 1 { "" } else { "s" },
                                                                   arguments.len()), });
    }

    Ok(Expr::FunctionCall { name: name.clone(),
                            arguments,
                            position: *position })
}

/// Classifies an identifier in operand position.
///
/// The order is fixed: `ans`, then constants, then bound variables. Anything
/// else is undefined. `ans` is only defined once a previous evaluation has
/// succeeded.
///
/// # Errors
/// Returns [`Diagnostic::UndefinedVariable`] if the name resolves to nothing.
fn resolve_identifier(name: &str, position: usize, scope: &ParseScope<'_>) -> ParseResult<Expr> {
    if name == PREVIOUS_ANSWER {
        if scope.context.previous_answer().is_some() {
            return Ok(Expr::PreviousAnswer { position });
        }
    } else if let Some(value) = lookup_constant(name) {
        return Ok(Expr::Constant { name: name.to_string(),
                                   value,
                                   position });
    } else if scope.context.variables().contains(name) {
        return Ok(Expr::Variable { name: name.to_string(),
                                   position });
    }

    Err(Diagnostic::UndefinedVariable { position,
                                        name: name.to_string() })
}
