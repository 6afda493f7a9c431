//! # reckon
//!
//! reckon is an integer arithmetic expression evaluator written in Rust.
//! It parses expressions built from `+ - * / % ^`, unary minus and
//! parentheses, and reduces them to a signed 64-bit result, optionally
//! recording every intermediate state of the reduction.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::eval,
        lexer::tokenize,
        parser::core::parse_tokens,
        reduction::Reducer,
    },
    util::format::Normalization,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types. The tree is
/// built by the parser and traversed by the evaluator and the reducer.
///
/// # Responsibilities
/// - Defines literal, group, unary and binary expression nodes.
/// - Holds the operator symbols and the precedence tier table.
/// - Renders an expression back into compact text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating an expression, and the coarse [`error::ErrorKind`] each of
/// them belongs to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source columns and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates lexing, parsing, evaluation and step-wise reduction.
pub mod interpreter;
/// General utilities: numeric conversion and text normalization.
pub mod util;

/// Options for a single evaluation call.
///
/// The record is immutable and passed by reference, so the same options can
/// be shared across calls and threads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// Record every intermediate state of the reduction in
    /// [`Evaluation::trace`].
    pub verbose:       bool,
    /// How the echoed expression and the trace states are normalized.
    pub normalization: Normalization,
}

/// The outcome of evaluating one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The source expression after normalization.
    pub expression: String,
    /// The computed result.
    pub value:      i64,
    /// Every state from the input to the final literal, inclusive. Empty
    /// unless [`Options::verbose`] was set.
    pub trace:      Vec<String>,
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.expression, self.value)
    }
}

/// Parses source text into an expression tree.
///
/// # Errors
/// Returns a [`ParseError`] if the text is empty or is not a well-formed
/// expression.
///
/// # Examples
/// ```
/// use reckon::parse;
///
/// let expr = parse("1 + 2 * 3").unwrap();
/// assert_eq!(expr.to_string(), "1+2*3");
///
/// assert!(parse("(1+2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens, source.chars().count() + 1)
}

/// Evaluates an expression and returns its value.
///
/// # Errors
/// Returns an error if the expression is malformed or if any operation
/// divides by zero, uses a negative exponent or overflows.
///
/// # Examples
/// ```
/// use reckon::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2+2").unwrap(), 4);
/// assert_eq!(evaluate("4^7-12^3").unwrap(), 14656);
///
/// let err = evaluate("(1+2").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MalformedExpression);
/// ```
pub fn evaluate(source: &str) -> Result<i64, Error> {
    let expr = parse(source)?;
    tracing::trace!(source, "evaluating");
    Ok(eval(&expr)?)
}

/// Evaluates an expression with the given options.
///
/// Without [`Options::verbose`] the tree is evaluated directly. With it, the
/// expression is reduced one step at a time and each distinct state is
/// recorded, normalized the same way as the echoed expression.
///
/// # Errors
/// Returns an error if the expression is malformed or if any operation
/// fails. No partial result is returned.
///
/// # Examples
/// ```
/// use reckon::{Options, evaluate_with, util::format::Normalization};
///
/// let options = Options { verbose:       true,
///                         normalization: Normalization::Spacing, };
/// let evaluation = evaluate_with("2*(4-5)", &options).unwrap();
///
/// assert_eq!(evaluation.trace, ["2 * (4 - 5)", "2 * -1", "-2"]);
/// assert_eq!(evaluation.to_string(), "2 * (4 - 5) = -2");
/// ```
pub fn evaluate_with(source: &str, options: &Options) -> Result<Evaluation, Error> {
    let expression = options.normalization.apply(source);
    let expr = parse(source)?;

    if !options.verbose {
        let value = eval(&expr)?;
        return Ok(Evaluation { expression,
                               value,
                               trace: Vec::new() });
    }

    let mut trace = vec![expression.clone()];
    let mut reducer = Reducer::new(expr);
    while reducer.step()?.is_some() {
        let state = options.normalization.apply(&reducer.state().to_string());
        if trace.last() != Some(&state) {
            trace.push(state);
        }
    }

    let value = reducer.value()?;
    Ok(Evaluation { expression,
                    value,
                    trace })
}
