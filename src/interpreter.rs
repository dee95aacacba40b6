/// The evaluator module walks syntax trees and computes results.
///
/// It owns the [`evaluator::core::EvaluationContext`], the only state that
/// survives between inputs, and the built-in function registry.
///
/// # Responsibilities
/// - Evaluates AST nodes with plain double precision semantics.
/// - Applies function domain guards before function rules.
/// - Classifies infinite and NaN results as diagnostics.
pub mod evaluator;
/// The lexer module tokenizes input lines.
///
/// The lexer reads the raw text and produces positioned tokens: numbers,
/// identifiers, operators, parentheses and commas. Lexing fails as a whole on
/// the first character outside the language.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive descent parser with one function per precedence level. It
/// classifies identifiers against the live symbol tables as it consumes them
/// and detects unbalanced parentheses and operator runs structurally.
pub mod parser;
/// Repeated evaluation of one expression over a range of values.
///
/// Used to plot an expression: one variable is bound to each sample value in
/// turn and restored afterwards.
pub mod plot;
/// The symbol module holds named values.
///
/// Built-in constants are fixed; user variables are created by `let`.
pub mod symbol;
