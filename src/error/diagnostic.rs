use std::fmt;

use thiserror::Error;

/// Which half of a parenthesis pair is missing its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenSide {
    /// A `(` that is never closed.
    Open,
    /// A `)` with no matching `(`.
    Close,
}

impl fmt::Display for ParenSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "unclosed '('"),
            Self::Close => write!(f, "unmatched ')'"),
        }
    }
}

/// A region of the input, in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first offending character.
    pub position: usize,
    /// Number of characters covered, at least one.
    pub length:   usize,
}

/// Represents every error the engine can report.
///
/// Diagnostics are produced at the earliest point of detection and never
/// carry partially built trees or partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// The input was empty or contained only whitespace.
    #[error("Expression is empty.")]
    EmptyExpression,

    /// The lexer met a character outside the language.
    #[error("Invalid character '{character}' at position {position}.")]
    InvalidCharacter {
        /// Offset of the character.
        position:  usize,
        /// The character itself.
        character: char,
    },

    /// A parenthesis has no partner.
    #[error("Unbalanced parenthesis at position {position}: {side}.")]
    UnbalancedParenthesis {
        /// Offset of the unpaired parenthesis.
        position: usize,
        /// Whether an opening or closing parenthesis is unpaired.
        side:     ParenSide,
    },

    /// Two or more operators follow each other with no operand between them.
    #[error("Invalid operator sequence '{text}' at position {position}.")]
    InvalidOperatorSequence {
        /// Offset of the first operator in the run.
        position: usize,
        /// The complete run as written.
        text:     String,
    },

    /// A call names an unknown function or passes the wrong number of
    /// arguments.
    #[error("Invalid function '{name}' at position {position}: {details}.")]
    InvalidFunction {
        /// Offset of the function name.
        position: usize,
        /// The name used in call position.
        name:     String,
        /// What is wrong with the call.
        details:  String,
    },

    /// An assignment target is not an acceptable variable name.
    #[error("Invalid variable name '{name}': {reason}.")]
    InvalidVariableName {
        /// The rejected name.
        name:   String,
        /// Why the name was rejected.
        reason: String,
    },

    /// An identifier is neither a constant, a bound variable, nor `ans`.
    #[error("Undefined variable '{name}' at position {position}.")]
    UndefinedVariable {
        /// Offset of the identifier.
        position: usize,
        /// The identifier.
        name:     String,
    },

    /// Evaluation produced an infinite result.
    #[error("Division by zero.")]
    DivisionByZero,

    /// Anything else that makes the input unusable: a failed domain guard,
    /// a NaN result, a misplaced token or input that ends too early.
    #[error("Invalid expression: {message}.")]
    InvalidExpression {
        /// Human readable reason.
        message: String,
        /// The offending input, when the problem has a location.
        span:    Option<Span>,
    },
}

impl Diagnostic {
    /// Builds an [`Diagnostic::InvalidExpression`] from any message.
    pub fn invalid_expression(message: impl Into<String>) -> Self {
        Self::InvalidExpression { message: message.into(),
                                  span:    None, }
    }

    /// Builds an [`Diagnostic::InvalidExpression`] that points at `span`.
    ///
    /// # Example
    /// ```
    /// use reckon::error::{Diagnostic, Span};
    ///
    /// let span = Span { position: 2,
    ///                   length:   1, };
    /// let err = Diagnostic::invalid_expression_at(span, "unexpected '3'");
    ///
    /// assert_eq!(err.to_string(), "Invalid expression: unexpected '3'.");
    /// assert_eq!(err.span(), Some(span));
    /// ```
    pub fn invalid_expression_at(span: Span, message: impl Into<String>) -> Self {
        Self::InvalidExpression { message: message.into(),
                                  span:    Some(span), }
    }

    /// Returns the part of the input this diagnostic points at, if any.
    ///
    /// # Example
    /// ```
    /// use reckon::error::{Diagnostic, Span};
    ///
    /// let err = Diagnostic::UndefinedVariable { position: 4,
    ///                                           name:     "foo".to_string(), };
    /// assert_eq!(err.span(),
    ///            Some(Span { position: 4,
    ///                        length:   3, }));
    /// assert_eq!(Diagnostic::DivisionByZero.span(), None);
    /// ```
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        let (position, length) = match self {
            Self::InvalidCharacter { position, .. }
            | Self::UnbalancedParenthesis { position, .. } => (*position, 1),
            Self::InvalidOperatorSequence { position, text } => (*position, text.chars().count()),
            Self::InvalidFunction { position, name, .. }
            | Self::UndefinedVariable { position, name } => (*position, name.chars().count()),
            Self::InvalidExpression { span, .. } => return *span,
            Self::EmptyExpression
            | Self::InvalidVariableName { .. }
            | Self::DivisionByZero => return None,
        };

        Some(Span { position,
                    length: length.max(1) })
    }
}
