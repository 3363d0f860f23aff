//! Testing utilities
//!
//! Assertion macros for the comparison engine and the range predicates, and
//! `proptest` strategies for [`Value`] and [`Op`] behind the `proptest`
//! feature.
//!
//! # Examples
//!
//! ```rust
//! use conform::{assert_holds, assert_invalid_range, assert_not_holds, predicate, Op};
//!
//! assert_holds!(2, Op::Gt, 1.3);
//! assert_not_holds!(2.1, Op::Gt, "x");
//! assert_invalid_range!(predicate::between(5, 10, 1));
//! ```

#[cfg(feature = "proptest")]
use crate::compare::Op;
#[cfg(feature = "proptest")]
use crate::value::Value;

/// Assert that `src op dst` holds under the comparison engine.
///
/// # Example
///
/// ```rust
/// use conform::{assert_holds, Op};
///
/// assert_holds!("abc", Op::Lt, "abd");
/// ```
#[macro_export]
macro_rules! assert_holds {
    ($src:expr, $op:expr, $dst:expr) => {{
        let src = $crate::Value::from($src);
        let dst = $crate::Value::from($dst);
        let op: $crate::Op = $op;
        if !$crate::compare::compare_values(&src, &dst, op) {
            panic!("Expected {:?} {} {:?} to hold", src, op, dst);
        }
    }};
}

/// Assert that `src op dst` does not hold under the comparison engine.
///
/// # Example
///
/// ```rust
/// use conform::{assert_not_holds, Op};
///
/// assert_not_holds!(f64::NAN, Op::Eq, f64::NAN);
/// ```
#[macro_export]
macro_rules! assert_not_holds {
    ($src:expr, $op:expr, $dst:expr) => {{
        let src = $crate::Value::from($src);
        let dst = $crate::Value::from($dst);
        let op: $crate::Op = $op;
        if $crate::compare::compare_values(&src, &dst, op) {
            panic!("Expected {:?} {} {:?} not to hold", src, op, dst);
        }
    }};
}

/// Assert that a range predicate rejected its bounds.
///
/// An ordinary `Ok(false)` does not satisfy this assertion.
///
/// # Example
///
/// ```rust
/// use conform::{assert_invalid_range, predicate};
///
/// assert_invalid_range!(predicate::length_between("abc", 5, 2));
/// ```
#[macro_export]
macro_rules! assert_invalid_range {
    ($result:expr) => {
        match $result {
            Err($crate::Error::InvalidRange { .. }) => {}
            other => {
                panic!("Expected InvalidRange, got {:?}", other);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Op {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(Op::ALL.to_vec()).boxed()
    }
}

/// Strategy for values that land in the numeric domain.
#[cfg(feature = "proptest")]
pub fn numeric_value() -> BoxedStrategy<Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::Uint),
        any::<f64>().prop_map(Value::Float),
        any::<i32>().prop_map(|n| Value::Str(n.to_string())),
    ]
    .boxed()
}

/// Strategy for instants between year 1 and year 9999.
#[cfg(feature = "proptest")]
pub fn time_value() -> BoxedStrategy<Value> {
    (-62_135_596_800i64..253_402_300_799)
        .prop_filter_map("timestamp out of range", |secs| {
            chrono::DateTime::from_timestamp(secs, 0).map(Value::from)
        })
        .boxed()
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Value::Nil),
            any::<bool>().prop_map(Value::Bool),
            numeric_value(),
            ".*".prop_map(Value::Str),
            time_value(),
            prop::collection::vec(any::<i8>(), 0..4).prop_map(Value::from),
        ]
        .boxed()
    }
}
