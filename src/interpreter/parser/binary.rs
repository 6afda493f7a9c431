use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Link, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_negated_minimum, parse_power_operand},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `depth`: Current nesting depth.
/// - `leading`: Whether the expression starts the input or a group, which
///   decides how a leading `-` binds (see [`parse_exponent`]).
///
/// # Returns
/// An `Expr::Chain` of the parsed operations, or the single operand if
/// there were none.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             depth: usize,
                             leading: bool)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let head = parse_multiplicative(tokens, depth, leading)?;
    parse_tier(tokens, depth, 2, head, |tokens, depth| {
        parse_multiplicative(tokens, depth, false)
    })
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   depth: usize,
                                   leading: bool)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let head = parse_exponent(tokens, depth, leading)?;
    parse_tier(tokens, depth, 1, head, |tokens, depth| parse_exponent(tokens, depth, false))
}

/// Parses exponentiation expressions.
///
/// Repeated exponentiation groups left to right like every other tier:
/// `a ^ b ^ c` parses as `(a ^ b) ^ c`.
///
/// How a unary minus binds depends on where it stands:
/// - at the start of the input or of a group it is the sign of the base, so
///   `-2^2` is `(-2)^2`;
/// - directly after `^` it is the sign of the exponent, so `2^-1` is
///   `2^(-1)`;
/// - after any other operator it negates the whole power, so `2*-3^2` is
///   `2*(-(3^2))`.
///
/// A minus may not follow another minus that is already unary.
///
/// The rule is:
/// ```text
///     exponent := "-" power        (after an operator)
///               | power
///     power    := operand ("^" signed_operand)*
/// ```
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>,
                             depth: usize,
                             leading: bool)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if !leading && let Some((Token::Minus, column)) = tokens.peek() {
        let column = *column;
        tokens.next();
        if let Some(literal) = parse_negated_minimum(tokens, column, true)? {
            return Ok(literal);
        }
        let expr = parse_power(tokens, depth, false)?;
        return Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                                  expr: Box::new(expr),
                                  column });
    }
    parse_power(tokens, depth, leading)
}

/// Parses a run of `^` operations.
///
/// `signed` allows a minus in front of the base.
fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize, signed: bool) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let head = parse_power_operand(tokens, depth, signed)?;
    parse_tier(tokens, depth, 0, head, |tokens, depth| parse_power_operand(tokens, depth, true))
}

/// Parses the operators of one left-associative precedence tier.
///
/// `head` is the already parsed leftmost operand. Operators are accepted
/// while they belong to `tier`, each followed by an operand parsed with
/// `parse_operand`. All of them end up in one flat chain.
fn parse_tier<'a, I>(tokens: &mut Peekable<I>,
                     depth: usize,
                     tier: usize,
                     head: Expr,
                     parse_operand: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut links = Vec::new();
    while let Some((token, column)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && op.tier() == tier
    {
        let column = *column;
        tokens.next();
        let operand = parse_operand(tokens, depth)?;
        links.push(Link { op,
                          operand,
                          column });
    }

    if links.is_empty() {
        return Ok(head);
    }
    Ok(Expr::Chain { head: Box::new(head),
                     links })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of
/// `+ - * / % ^`, otherwise `None`.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
