use logos::Logos;

use crate::error::Diagnostic;

/// Represents a lexical token in the source input.
///
/// Whitespace is skipped and never produces a token. [`Token::End`] is not
/// matched by the lexer; [`tokenize`] appends it once the input is exhausted.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literals such as `42`, `3.14`, `1.5e3` or `2E-4`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// `let`
    #[token("let")]
    Let,
    /// Identifiers; constants, variables, `ans` and function names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`, only meaningful after `let <name>`.
    #[token("=")]
    Equals,
    /// End of input.
    End,
}

impl Token {
    /// Whether this token is one of the binary operators `+ - * / ^`.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Caret)
    }
}

/// A token together with the text it was lexed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The classified token.
    pub token:    Token,
    /// The exact source text; empty for [`Token::End`].
    pub text:     String,
    /// Offset of the first character.
    pub position: usize,
}

impl Lexeme {
    /// Number of characters covered by this lexeme.
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// Offset just past the last character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.position + self.text.len()
    }
}

/// Converts source text into a token stream terminated by [`Token::End`].
///
/// Lexing is all or nothing: the first character outside the language stops
/// it with [`Diagnostic::InvalidCharacter`] and no tokens are returned.
///
/// # Errors
/// - [`Diagnostic::EmptyExpression`] if the input is empty or whitespace.
/// - [`Diagnostic::InvalidCharacter`] for any unrecognized character.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let lexemes = tokenize("2 * x").unwrap();
/// let tokens: Vec<_> = lexemes.into_iter().map(|l| l.token).collect();
/// assert_eq!(tokens,
///            vec![Token::Number(2.0),
///                 Token::Star,
///                 Token::Identifier("x".to_string()),
///                 Token::End]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, Diagnostic> {
    if source.chars().all(is_skipped_whitespace) {
        return Err(Diagnostic::EmptyExpression);
    }

    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => lexemes.push(Lexeme { token,
                                               text: lexer.slice().to_string(),
                                               position: span.start }),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(Diagnostic::InvalidCharacter { position: source[..span.start].chars()
                                                                                         .count(),
                                                          character });
            },
        }
    }

    lexemes.push(Lexeme { token:    Token::End,
                          text:     String::new(),
                          position: source.len(), });

    log::trace!("lexed {} tokens from {source:?}", lexemes.len());

    Ok(lexemes)
}

/// Whitespace the lexer skips; the same set as the `skip` pattern on [`Token`].
const fn is_skipped_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C')
}

/// Parses a numeric literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|l| l.token).collect()
    }

    #[test]
    fn scientific_notation_is_one_number() {
        assert_eq!(tokens("1.5e3"), vec![Token::Number(1500.0), Token::End]);
        assert_eq!(tokens("2E-4"), vec![Token::Number(0.0002), Token::End]);
        assert_eq!(tokens("7e+2"), vec![Token::Number(700.0), Token::End]);
    }

    #[test]
    fn let_is_a_keyword_but_prefixes_are_identifiers() {
        assert_eq!(tokens("let letter"),
                   vec![Token::Let, Token::Identifier("letter".to_string()), Token::End]);
    }

    #[test]
    fn positions_skip_whitespace() {
        let lexemes = tokenize("  sqrt( 9 )").unwrap();
        let positions: Vec<_> = lexemes.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![2, 6, 8, 10, 11]);
        assert_eq!(lexemes[0].length(), 4);
    }

    #[test]
    fn invalid_character_reports_offset() {
        assert_eq!(tokenize("2 + $"),
                   Err(Diagnostic::InvalidCharacter { position:  4,
                                                      character: '$', }));
        assert_eq!(tokenize("1.5.2"),
                   Err(Diagnostic::InvalidCharacter { position:  3,
                                                      character: '.', }));
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(tokenize(""), Err(Diagnostic::EmptyExpression));
        assert_eq!(tokenize(" \t "), Err(Diagnostic::EmptyExpression));
        assert_eq!(tokenize("\r\n\x0C"), Err(Diagnostic::EmptyExpression));
    }

    #[test]
    fn other_whitespace_is_an_invalid_character() {
        assert_eq!(tokenize("\u{0B}"),
                   Err(Diagnostic::InvalidCharacter { position:  0,
                                                      character: '\u{0B}', }));
        assert_eq!(tokenize("1\u{0B}"),
                   Err(Diagnostic::InvalidCharacter { position:  1,
                                                      character: '\u{0B}', }));
        assert_eq!(tokenize("\u{A0}2"),
                   Err(Diagnostic::InvalidCharacter { position:  0,
                                                      character: '\u{A0}', }));
    }
}
