use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`. A sign is never part of the
    /// literal; `-` is always lexed as [`Token::Minus`]. The magnitude is
    /// unsigned so that `-9223372036854775808` can be read; the parser
    /// checks that the value fits an `i64`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(u64),
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
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(u64)`: The parsed magnitude if successful.
/// - `None`: If the literal does not fit in a `u64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<u64> {
    lex.slice().parse().ok()
}

/// Splits source text into tokens paired with their 1-based column.
///
/// Whitespace is dropped. A run of digits that does not fit in a `u64` is
/// reported as [`ParseError::LiteralTooLarge`]; any other unrecognised
/// character is reported as [`ParseError::UnexpectedToken`].
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12 * (3)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(12), 1),
///                 (Token::Star, 4),
///                 (Token::LParen, 6),
///                 (Token::Integer(3), 7),
///                 (Token::RParen, 8)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = column_of(source, lexer.span().start);
        if let Ok(tok) = token {
            tokens.push((tok, column));
        } else {
            let slice = lexer.slice();
            if slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { column });
            }
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     column });
        }
    }

    Ok(tokens)
}

/// Converts a byte offset into a 1-based character column.
fn column_of(source: &str, offset: usize) -> usize {
    source.get(..offset)
          .map_or(offset, |prefix| prefix.chars().count())
    + 1
}
