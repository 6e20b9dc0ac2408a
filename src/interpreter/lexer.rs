use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens such as `42`, `3.14`, `2.` or `.5`.
    ///
    /// A literal holds at most one decimal point; a second `.` ends the
    /// literal, so `1.2.3` scans as `1.2` followed by `.3`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Identifier tokens; variable names such as `x` or `rate_2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
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
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// End-of-input marker. Never matched from text; [`tokenize`] appends
    /// exactly one after the last scanned token.
    EndOfInput,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid literal.
/// - `None`: If the slice does not parse as a number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Scans one source line into its complete token sequence.
///
/// Each token is paired with its byte offset into `source`. The sequence
/// always ends with exactly one [`Token::EndOfInput`] carrying the source
/// length, so the parser can match the end of the line like any other
/// token. The sequence is created fresh per line and discarded after
/// parsing.
///
/// # Errors
/// Returns a [`LexError`] with the offending character and its offset when
/// the line contains a character outside the language. The error is fatal
/// for the line; no tokens are returned.
///
/// # Examples
/// ```
/// use deskcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 + 2").unwrap();
/// assert_eq!(tokens[0], (Token::Number(2.0), 0));
/// assert_eq!(tokens.last(), Some(&(Token::EndOfInput, 5)));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or('\0');
                return Err(LexError { character,
                                      position: lexer.span().start });
            },
        }
    }

    tokens.push((Token::EndOfInput, source.len()));
    Ok(tokens)
}
