use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::{ParseResult, ParseScope},
            unary::parse_unary,
            utils::{ascend, descend, reject_operator_run},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, scope: &mut ParseScope<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let mut left = parse_multiplicative(tokens, scope)?;
    loop {
        if let Some(lexeme) = tokens.peek().copied()
           && let Some(op) = token_to_binary_operator(&lexeme.token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            reject_operator_run(tokens, scope, lexeme, true)?;
            let right = parse_multiplicative(tokens, scope)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: lexeme.position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative operators `*` and `/`. Division by zero is not a
/// parse error; it is left for the evaluator to classify.
///
/// The rule is: `term := power (("*" | "/") power)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   scope: &mut ParseScope<'_>)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let mut left = parse_exponent(tokens, scope)?;
    loop {
        if let Some(lexeme) = tokens.peek().copied()
           && let Some(op) = token_to_binary_operator(&lexeme.token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            reject_operator_run(tokens, scope, lexeme, true)?;
            let right = parse_exponent(tokens, scope)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: lexeme.position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// Its operands are unary expressions, so `-2 ^ 2` is `(-2) ^ 2`. Each `^`
/// counts as one level of nesting.
///
/// The rule is: `power := unary ("^" power)?`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, scope: &mut ParseScope<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let base = parse_unary(tokens, scope)?;

    if let Some(lexeme) = tokens.next_if(|lexeme| lexeme.token == Token::Caret) {
        reject_operator_run(tokens, scope, lexeme, true)?;
        descend(scope, lexeme)?;
        let exponent = parse_exponent(tokens, scope)?;
        ascend(scope);
        return Ok(Expr::BinaryOp { left:     Box::new(base),
                                   op:       BinaryOperator::Pow,
                                   right:    Box::new(exponent),
                                   position: lexeme.position, });
    }

    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not `+ - * / ^`.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
