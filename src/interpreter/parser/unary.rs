use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING, ParseResult, parse_expression},
    },
};

/// Magnitude of `i64::MIN`, the one literal that only fits after a minus.
const MIN_MAGNITUDE: u64 = i64::MIN.unsigned_abs();

/// Parses an operand of `^`, optionally preceded by a minus.
///
/// With `signed`, a leading `-` binds tighter than `^` and applies to the
/// following primary only. Without it a `-` is an unexpected token, which
/// rejects a second minus such as the last one in `2---3`.
///
/// Grammar:
/// ```text
///     operand        := primary
///     signed_operand := "-" primary
///                     | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
/// - `signed`: Whether a minus is allowed here.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_power_operand<'a, I>(tokens: &mut Peekable<I>,
                                         depth: usize,
                                         signed: bool)
                                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if signed && let Some((Token::Minus, column)) = tokens.peek() {
        let column = *column;
        tokens.next();
        if let Some(literal) = parse_negated_minimum(tokens, column, false)? {
            return Ok(literal);
        }
        let expr = parse_primary(tokens, depth)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           column })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Reads `9223372036854775808` directly after a unary minus as `i64::MIN`.
///
/// `column` is the column of the minus. When the minus negates a whole
/// power (`negates_power`), a following `^` would make the unsigned literal
/// the base, so the literal is too large there.
///
/// # Returns
/// `None`, consuming nothing, if the next token is any other token.
pub(crate) fn parse_negated_minimum<'a, I>(tokens: &mut Peekable<I>,
                                           column: usize,
                                           negates_power: bool)
                                           -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((Token::Integer(MIN_MAGNITUDE), literal_column)) = tokens.peek() else {
        return Ok(None);
    };
    let literal_column = *literal_column;
    tokens.next();

    if negates_power && let Some((Token::Caret, _)) = tokens.peek() {
        return Err(ParseError::LiteralTooLarge { column: literal_column });
    }
    Ok(Some(Expr::Literal { value: i64::MIN,
                            column }))
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := integer
///              | "(" expression ")"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(value), column)) => match i64::try_from(*value) {
            Ok(value) => Ok(Expr::Literal { value,
                                            column: *column }),
            Err(_) => Err(ParseError::LiteralTooLarge { column: *column }),
        },
        Some((Token::LParen, column)) => parse_grouping(tokens, depth, *column),
        Some((tok, column)) => Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                                 column: *column, }),
        None => Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    }
}

/// Parses the rest of a parenthesised group after its `(`.
///
/// # Errors
/// - `NestingTooDeep` past [`MAX_NESTING`] open groups.
/// - `ExpectedClosingParen` if the input ends before the matching `)`.
/// - `UnexpectedToken` if something other than `)` follows the inner
///   expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         depth: usize,
                         column: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth >= MAX_NESTING {
        return Err(ParseError::NestingTooDeep { column });
    }
    let expr = parse_expression(tokens, depth + 1)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Expr::Group { expr: Box::new(expr),
                                                     column }),
        Some((tok, column)) => {
            Err(ParseError::UnexpectedToken { token:  format!("expected ')', found {tok}"),
                                              column: *column, })
        },
        None => Err(ParseError::ExpectedClosingParen { column }),
    }
}
