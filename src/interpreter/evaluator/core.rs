use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns its integer value.
///
/// Operands are evaluated left before right, then combined with the
/// operator table, so the first failing operation in that order is the one
/// reported. Chains are folded in a loop; only parentheses and negation
/// recurse.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The computed value, or the first runtime error encountered.
///
/// # Example
/// ```
/// use reckon::{interpreter::evaluator::core::eval, parse};
///
/// let expr = parse("3^4+6*((9+12/6)*(24/2^3-1))").unwrap();
/// assert_eq!(eval(&expr).unwrap(), 213);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::Group { expr, .. } => eval(expr),
        Expr::UnaryOp { op, expr, column } => eval_unary(*op, eval(expr)?, *column),
        Expr::Chain { head, links } => links.iter().try_fold(eval(head)?, |acc, link| {
                                                       let operand = eval(&link.operand)?;
                                                       eval_binary(link.op, acc, operand, link.column)
                                                   }),
    }
}
