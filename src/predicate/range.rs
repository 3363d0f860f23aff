//! Range predicates
//!
//! Both bounds are inclusive. The bounds themselves must satisfy
//! `min < max` under the comparison engine; otherwise the call returns
//! [`Error::InvalidRange`] instead of a boolean, so a misuse cannot be
//! mistaken for an ordinary mismatch.

use crate::compare::{compare_values, Op};
use crate::error::{Error, Result};
use crate::value::Value;

pub(crate) fn ordered_bounds(min: Value, max: Value) -> Result<(Value, Value)> {
    if compare_values(&min, &max, Op::Lt) {
        Ok((min, max))
    } else {
        #[cfg(feature = "tracing")]
        tracing::debug!(%min, %max, "range bounds are not ordered");
        Err(Error::InvalidRange { min, max })
    }
}

/// `min <= val <= max`.
///
/// # Example
///
/// ```rust
/// use conform::predicate::between;
///
/// assert_eq!(between(5, 1, 10), Ok(true));
/// assert_eq!(between(10, 1, 10), Ok(true));
/// assert_eq!(between(11, 1, 10), Ok(false));
/// assert_eq!(between("m", "a", "z"), Ok(true));
/// assert!(between(5, 10, 1).unwrap_err().is_invalid_range());
/// ```
pub fn between(
    val: impl Into<Value>,
    min: impl Into<Value>,
    max: impl Into<Value>,
) -> Result<bool> {
    let (min, max) = ordered_bounds(min.into(), max.into())?;
    let val = val.into();
    Ok(compare_values(&val, &min, Op::Ge) && compare_values(&val, &max, Op::Le))
}

/// `val < min || val > max`.
///
/// # Example
///
/// ```rust
/// use conform::predicate::not_between;
///
/// assert_eq!(not_between(0, 1, 10), Ok(true));
/// assert_eq!(not_between(1, 1, 10), Ok(false));
/// assert!(not_between(0, 1, 1).is_err());
/// ```
pub fn not_between(
    val: impl Into<Value>,
    min: impl Into<Value>,
    max: impl Into<Value>,
) -> Result<bool> {
    let (min, max) = ordered_bounds(min.into(), max.into())?;
    let val = val.into();
    Ok(compare_values(&val, &min, Op::Lt) || compare_values(&val, &max, Op::Gt))
}
