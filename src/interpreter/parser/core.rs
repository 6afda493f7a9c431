use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of nested parenthesised groups.
///
/// Each group costs the parser about ten stack frames, and the evaluator and
/// the reducer recurse once more per group. This limit keeps all of them
/// well inside the 2 MiB stack of a spawned thread, even in debug builds.
/// Operator chains are flat and do not count against it.
pub const MAX_NESTING: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy. The first operand
/// is in leading position, so a minus in front of it is the sign of the
/// base: `-2^2` is `(-2)^2`.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth, true)
}

/// Parses a complete token stream into a single expression.
///
/// Every token must be consumed; leftovers such as the `3` in `1 + 2 3` or
/// the `)` in `1)` are reported as
/// [`ParseError::UnexpectedTrailingTokens`].
///
/// # Parameters
/// - `tokens`: The tokens produced by the lexer.
/// - `end_column`: Column just past the end of the source, used when input
///   stops in the middle of an expression.
///
/// # Errors
/// - `EmptyExpression` if there are no tokens.
/// - Any error raised while parsing the expression.
pub fn parse_tokens(tokens: &[(Token, usize)], end_column: usize) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = match parse_expression(&mut iter, 0) {
        Ok(expr) => expr,
        Err(ParseError::UnexpectedEndOfInput { .. }) => {
            return Err(ParseError::UnexpectedEndOfInput { column: end_column });
        },
        Err(e) => return Err(e),
    };

    if let Some((tok, column)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  tok.to_string(),
                                                          column: *column, });
    }

    tracing::trace!(%expr, "parsed expression");
    Ok(expr)
}
