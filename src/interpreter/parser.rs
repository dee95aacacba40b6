/// Parser entry points and shared state.
///
/// Contains the per-line [`core::ParseScope`], the top-level
/// [`core::parse_source`] function, and the lowest precedence entry point.
pub mod core;

/// Statement parsing.
///
/// Recognizes the `let <name> = <expr>` prefix before general expression
/// parsing and checks that nothing trails the statement.
pub mod statement;

/// Binary operator parsing.
///
/// One function per precedence level: additive, multiplicative and
/// exponentiation.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles unary minus, literals, parenthesized groups, identifier
/// resolution and function calls.
pub mod unary;

/// Shared parsing helpers.
///
/// Argument lists and the detection of operator runs.
pub mod utils;
