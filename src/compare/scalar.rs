//! Comparators over already-coerced values of a single domain.

use chrono::{DateTime, TimeZone};

use super::op::Op;

/// Compare two numbers of the same type.
///
/// Follows native `PartialOrd`, so a NaN operand satisfies only [`Op::Ne`].
///
/// # Example
///
/// ```rust
/// use conform::compare::scalar::compare_num;
/// use conform::Op;
///
/// assert!(compare_num(2.2, 1.3, Op::Gt));
/// assert!(compare_num(f64::NAN, 1.0, Op::Ne));
/// assert!(!compare_num(f64::NAN, f64::NAN, Op::Eq));
/// ```
#[inline]
pub fn compare_num<T: PartialOrd>(a: T, b: T, op: Op) -> bool {
    op.accepts(a.partial_cmp(&b))
}

/// Compare two strings lexicographically by bytes, which for UTF-8 is
/// code point order.
#[inline]
pub fn compare_str(a: &str, b: &str, op: Op) -> bool {
    op.accepts(Some(a.cmp(b)))
}

/// Compare two instants by their position on the timeline.
///
/// Offsets are irrelevant: noon UTC equals 13:00 at UTC+1.
#[inline]
pub fn compare_time<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>, op: Op) -> bool {
    op.accepts(Some(a.naive_utc().cmp(&b.naive_utc())))
}

/// Compare two booleans as `0` and `1`.
#[inline]
pub fn compare_bool(a: bool, b: bool, op: Op) -> bool {
    compare_num(u8::from(a), u8::from(b), op)
}
