/// Core evaluation logic and context management.
///
/// Contains the evaluation context that survives between inputs, the AST
/// walk, and the classification of non-finite results.
pub mod core;

/// Unary operator evaluation.
///
/// Implements arithmetic negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements `+ - * / ^` with plain floating point semantics.
pub mod binary;

/// Function evaluation.
///
/// Holds the built-in function registry, its domain guards, and the
/// evaluation of calls.
pub mod function;
