//! The cross-type comparison engine
//!
//! [`compare`] takes two operands of arbitrary kind and a relational
//! operator and decides whether `src op dst` holds. The comparison domain is
//! picked from the *source* operand's kind, and the destination is coerced
//! into it:
//!
//! 1. time source and time destination: compared as instants
//! 2. boolean source: destination must be a boolean or a boolean literal
//! 3. string source and string destination: compared lexicographically
//! 4. float source, or float destination: both coerced to float
//! 5. anything else: both coerced to integers
//!
//! Step 4 looks at kinds, not contents: a float-valued string destination
//! does not make the pair float-like. So `2 < 2.5` holds while `2 < "2.5"`
//! falls back, since `"2.5"` has no integer reading.
//!
//! When no domain applies the engine falls back to structural equality,
//! which only answers `=` and `!=`; every other operator yields `false`.
//! The engine never fails.
//!
//! # Example
//!
//! ```rust
//! use conform::{compare, Op};
//!
//! assert!(compare("abc", "abd", Op::Lt));
//! assert!(compare(2, 1.3, Op::Gt));
//! assert!(compare(true, "true", Op::Eq));
//! assert!(!compare(2.1, "x", Op::Gt));
//! assert!(compare(2.1, "x", Op::Ne));
//! assert!(compare(2, 2.5, Op::Lt));
//! assert!(!compare(2, "2.5", Op::Lt));
//! ```

pub mod coerce;
mod op;
pub mod scalar;

use chrono::{DateTime, FixedOffset};

use crate::value::Value;

pub use op::Op;

use coerce::{parse_bool, to_float, to_int};
use scalar::{compare_bool, compare_num, compare_str, compare_time};

/// The space a pair of operands is compared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Instants on the timeline.
    Temporal,
    /// Booleans as `0`/`1`.
    Boolean,
    /// Lexicographic text.
    String,
    /// Integers or floats.
    Numeric,
    /// No domain applies; only `=` and `!=` are answerable.
    Opaque,
}

/// A pair of operands after coercion into a common domain.
enum Resolved<'a> {
    Temporal(&'a DateTime<FixedOffset>, &'a DateTime<FixedOffset>),
    Boolean(bool, bool),
    String(&'a str, &'a str),
    Float(f64, f64),
    Integer(i128, i128),
    Opaque,
}

impl Resolved<'_> {
    fn domain(&self) -> Domain {
        match self {
            Resolved::Temporal(..) => Domain::Temporal,
            Resolved::Boolean(..) => Domain::Boolean,
            Resolved::String(..) => Domain::String,
            Resolved::Float(..) | Resolved::Integer(..) => Domain::Numeric,
            Resolved::Opaque => Domain::Opaque,
        }
    }
}

fn resolve<'a>(src: &'a Value, dst: &'a Value) -> Resolved<'a> {
    match (src, dst) {
        (Value::Time(a), Value::Time(b)) => Resolved::Temporal(a, b),
        (Value::Time(_), _) => Resolved::Opaque,
        (Value::Bool(a), Value::Bool(b)) => Resolved::Boolean(*a, *b),
        (Value::Bool(a), Value::Str(s)) => {
            parse_bool(s).map_or(Resolved::Opaque, |b| Resolved::Boolean(*a, b))
        }
        (Value::Bool(_), _) => Resolved::Opaque,
        (Value::Str(a), Value::Str(b)) => Resolved::String(a, b),
        _ if src.is_float_like() || dst.is_float_like() => match (to_float(src), to_float(dst)) {
            (Ok(a), Ok(b)) => Resolved::Float(a, b),
            _ => Resolved::Opaque,
        },
        _ => match (to_int(src), to_int(dst)) {
            (Ok(a), Ok(b)) => Resolved::Integer(a, b),
            _ => Resolved::Opaque,
        },
    }
}

/// The domain [`compare_values`] evaluates a pair in.
///
/// # Example
///
/// ```rust
/// use conform::compare::{resolve_domain, Domain};
/// use conform::Value;
///
/// let d = |a: Value, b: Value| resolve_domain(&a, &b);
/// assert_eq!(d(2.into(), "3".into()), Domain::Numeric);
/// assert_eq!(d("2".into(), 3.into()), Domain::Numeric);
/// assert_eq!(d("2".into(), "3".into()), Domain::String);
/// assert_eq!(d("two".into(), 3.into()), Domain::Opaque);
/// assert_eq!(d(true.into(), "false".into()), Domain::Boolean);
/// assert_eq!(d(true.into(), "no".into()), Domain::Opaque);
/// ```
pub fn resolve_domain(src: &Value, dst: &Value) -> Domain {
    resolve(src, dst).domain()
}

/// Evaluate `src op dst` over borrowed values.
pub fn compare_values(src: &Value, dst: &Value, op: Op) -> bool {
    match resolve(src, dst) {
        Resolved::Temporal(a, b) => compare_time(a, b, op),
        Resolved::Boolean(a, b) => compare_bool(a, b, op),
        Resolved::String(a, b) => compare_str(a, b, op),
        Resolved::Float(a, b) => compare_num(a, b, op),
        Resolved::Integer(a, b) => compare_num(a, b, op),
        Resolved::Opaque => fallback(src, dst, op),
    }
}

fn fallback(src: &Value, dst: &Value, op: Op) -> bool {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        src = %src.kind(),
        dst = %dst.kind(),
        op = %op,
        "no comparison domain, falling back to raw equality"
    );
    match op {
        Op::Eq => src == dst,
        Op::Ne => src != dst,
        _ => false,
    }
}

/// Evaluate `src op dst`.
///
/// See the [module documentation](self) for how the domain is chosen.
///
/// # Example
///
/// ```rust
/// use conform::{compare, Op};
///
/// assert!(!compare(2, 3, Op::Gt));
/// assert!(compare(2.2, 1.3, Op::Gt));
/// assert!(compare(2.1, 2, Op::Gt));
/// assert!(compare(u64::MAX, -1, Op::Gt));
/// assert!(compare(None::<i32>, 0, Op::Eq));
/// ```
pub fn compare(src: impl Into<Value>, dst: impl Into<Value>, op: Op) -> bool {
    compare_values(&src.into(), &dst.into(), op)
}

/// Evaluate `src op dst` with the operator given as a token.
///
/// An unrecognized token answers `false`.
///
/// # Example
///
/// ```rust
/// use conform::compare::compare_token;
///
/// assert!(compare_token(1, 2, "<"));
/// assert!(!compare_token(1, 2, "<>"));
/// ```
pub fn compare_token(src: impl Into<Value>, dst: impl Into<Value>, op: &str) -> bool {
    op.parse::<Op>()
        .map(|op| compare(src, dst, op))
        .unwrap_or(false)
}
