//! Relational predicates
//!
//! Named shorthands for [`compare`] with a fixed operator.

use crate::compare::{compare, Op};
use crate::value::Value;

/// `a > b`.
///
/// # Example
///
/// ```rust
/// use conform::predicate::*;
///
/// assert!(greater_than(6, 5));
/// assert!(!greater_than(5, 5));
/// assert!(greater_than(2, 1.3));
/// ```
pub fn greater_than(a: impl Into<Value>, b: impl Into<Value>) -> bool {
    compare(a, b, Op::Gt)
}

/// `a >= b`.
///
/// # Example
///
/// ```rust
/// use conform::predicate::*;
///
/// assert!(greater_equal_than(5, 5));
/// assert!(!greater_equal_than("a", "b"));
/// ```
pub fn greater_equal_than(a: impl Into<Value>, b: impl Into<Value>) -> bool {
    compare(a, b, Op::Ge)
}

/// `a < b`.
///
/// # Example
///
/// ```rust
/// use conform::predicate::*;
///
/// assert!(less_than(4, 5));
/// assert!(!less_than(5, 5));
/// ```
pub fn less_than(a: impl Into<Value>, b: impl Into<Value>) -> bool {
    compare(a, b, Op::Lt)
}

/// `a <= b`.
///
/// # Example
///
/// ```rust
/// use conform::predicate::*;
///
/// assert!(less_equal_than(5, 5));
/// assert!(less_equal_than(false, true));
/// ```
pub fn less_equal_than(a: impl Into<Value>, b: impl Into<Value>) -> bool {
    compare(a, b, Op::Le)
}

/// `a = b`.
///
/// # Example
///
/// ```rust
/// use conform::predicate::*;
///
/// assert!(equal(5u8, 5i64));
/// assert!(equal(true, "true"));
/// assert!(!equal(5, "five"));
/// ```
pub fn equal(a: impl Into<Value>, b: impl Into<Value>) -> bool {
    compare(a, b, Op::Eq)
}

/// `a != b`.
///
/// # Example
///
/// ```rust
/// use conform::predicate::*;
///
/// assert!(not_equal(5, 4));
/// assert!(!not_equal(5, 5));
/// ```
pub fn not_equal(a: impl Into<Value>, b: impl Into<Value>) -> bool {
    compare(a, b, Op::Ne)
}
