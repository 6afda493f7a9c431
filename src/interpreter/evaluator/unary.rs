use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a unary operation on a value.
///
/// Negating `i64::MIN` has no representable result and is reported as
/// [`RuntimeError::Overflow`].
///
/// # Example
/// ```
/// use reckon::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5, 1).unwrap(), -5);
/// assert!(eval_unary(UnaryOperator::Negate, i64::MIN, 1).is_err());
/// ```
pub const fn eval_unary(op: UnaryOperator, value: i64, column: usize) -> EvalResult<i64> {
    match op {
        UnaryOperator::Negate => match value.checked_neg() {
            Some(v) => Ok(v),
            None => Err(RuntimeError::Overflow { column }),
        },
    }
}
