use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Safely converts a non-negative `i64` into a `u32`.
///
/// Used for exponents, which the standard library's `checked_pow` takes as
/// `u32`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value is negative or larger than
/// `u32::MAX`.
///
/// ## Example
/// ```
/// use reckon::{error::RuntimeError, util::num::i64_to_u32_checked};
///
/// assert_eq!(i64_to_u32_checked(7, 1).unwrap(), 7);
///
/// let err = i64_to_u32_checked(i64::from(u32::MAX) + 1, 3).unwrap_err();
/// assert_eq!(err, RuntimeError::Overflow { column: 3 });
/// ```
pub fn i64_to_u32_checked(value: i64, column: usize) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| RuntimeError::Overflow { column })
}
