use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_u32_checked,
};

/// Evaluates a binary operation between two integers.
///
/// This is the operator table:
/// - `+`, `-`, `*`: checked arithmetic.
/// - `/`: division truncating toward zero.
/// - `%`: remainder truncating toward zero; the sign follows the dividend.
/// - `^`: integer power, see [`eval_pow`].
///
/// A zero divisor is [`RuntimeError::DivisionByZero`]. Any result outside
/// the `i64` range, including `i64::MIN / -1` and `i64::MIN % -1`, is
/// [`RuntimeError::Overflow`].
///
/// # Example
/// ```
/// use reckon::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Div, -7, 2, 1).unwrap(), -3);
/// assert_eq!(eval_binary(BinaryOperator::Mod, -7, 2, 1).unwrap(), -1);
/// assert!(eval_binary(BinaryOperator::Div, 1, 0, 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, column: usize) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div | Mod if right == 0 => return Err(RuntimeError::DivisionByZero { column }),
        Div => left.checked_div(right),
        Mod => left.checked_rem(right),
        Pow => return eval_pow(left, right, column),
    };

    result.ok_or(RuntimeError::Overflow { column })
}

/// Evaluates an integer exponentiation.
///
/// Negative exponents have no integer result and are rejected with
/// [`RuntimeError::InvalidExponent`]. Any base raised to `0` is `1`.
/// Exponents too large for `u32` only succeed for the bases `0`, `1` and
/// `-1`; every other base overflows long before that.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::binary::eval_pow;
///
/// assert_eq!(eval_pow(2, 10, 1).unwrap(), 1024);
/// assert_eq!(eval_pow(-1, 1 << 40, 1).unwrap(), 1);
/// assert!(eval_pow(2, -1, 1).is_err());
/// ```
pub fn eval_pow(base: i64, exponent: i64, column: usize) -> EvalResult<i64> {
    if exponent < 0 {
        return Err(RuntimeError::InvalidExponent { exponent, column });
    }

    match base {
        0 | 1 => return Ok(if exponent == 0 { 1 } else { base }),
        -1 => return Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => {},
    }

    base.checked_pow(i64_to_u32_checked(exponent, column)?)
        .ok_or(RuntimeError::Overflow { column })
}
