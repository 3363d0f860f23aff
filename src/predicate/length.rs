//! Length predicates
//!
//! The length of a value is:
//! - text: number of `char`s, not bytes
//! - bytes, lists, maps: number of elements
//! - numbers and intervals: length of their decimal rendering, sign and
//!   decimal point included (intervals render as nanoseconds)
//!
//! Every other kind has no length, and predicates over it are false.

use super::range::ordered_bounds;
use crate::compare::{compare, compare_values, Op};
use crate::error::Result;
use crate::value::Value;

/// The length of a value, if it has one.
///
/// # Example
///
/// ```rust
/// use conform::predicate::measure;
/// use conform::Value;
///
/// assert_eq!(measure(&Value::from("héllo")), Some(5));
/// assert_eq!(measure(&Value::from(vec![1, 2, 3])), Some(3));
/// assert_eq!(measure(&Value::from(-1234)), Some(5));
/// assert_eq!(measure(&Value::from(1.25)), Some(4));
/// assert_eq!(measure(&Value::from(true)), None);
/// ```
pub fn measure(value: &Value) -> Option<usize> {
    match value {
        Value::Str(s) => Some(s.chars().count()),
        Value::Bytes(b) => Some(b.len()),
        Value::List(items) => Some(items.len()),
        Value::Map(entries) => Some(entries.len()),
        Value::Int(i) => Some(i.to_string().len()),
        Value::Uint(u) => Some(u.to_string().len()),
        Value::Float(f) => Some(f.to_string().len()),
        Value::Duration(d) => d.num_nanoseconds().map(|ns| ns.to_string().len()),
        Value::Number(n) => Some(n.to_string().len()),
        Value::Nil | Value::Bool(_) | Value::Time(_) | Value::Opaque(_) => None,
    }
}

/// `len(val) op n`.
///
/// # Example
///
/// ```rust
/// use conform::predicate::length;
/// use conform::Op;
///
/// assert!(length("héllo", 5, Op::Eq));
/// assert!(length(vec![1, 2], 3, Op::Lt));
/// assert!(length(12345, 5, Op::Eq));
/// assert!(!length(true, 1, Op::Ne));
/// ```
pub fn length(val: impl Into<Value>, n: usize, op: Op) -> bool {
    measure(&val.into()).is_some_and(|len| compare(len, n, op))
}

/// `min <= len(val) <= max`.
///
/// `min` must be less than `max`, otherwise the call fails with
/// [`Error::InvalidRange`](crate::Error::InvalidRange).
///
/// # Example
///
/// ```rust
/// use conform::predicate::length_between;
///
/// assert_eq!(length_between("abc", 3, 10), Ok(true));
/// assert_eq!(length_between("ab", 3, 10), Ok(false));
/// assert_eq!(length_between(vec![1; 11], 3, 10), Ok(false));
/// assert!(length_between("abc", 10, 3).is_err());
/// ```
pub fn length_between(val: impl Into<Value>, min: usize, max: usize) -> Result<bool> {
    let (min, max) = ordered_bounds(min.into(), max.into())?;
    Ok(measure(&val.into()).is_some_and(|len| {
        let len = Value::from(len);
        compare_values(&len, &min, Op::Ge) && compare_values(&len, &max, Op::Le)
    }))
}
