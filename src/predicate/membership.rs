//! Set membership.

use crate::compare::{compare_values, Op};
use crate::value::Value;

/// True when some candidate equals `val` under the comparison engine.
///
/// An empty candidate set contains nothing, so the answer is `false`.
///
/// # Example
///
/// ```rust
/// use conform::predicate::one_of;
///
/// assert!(one_of(3, [1, 2, 3]));
/// assert!(one_of(2, [1.5, 2.0]));
/// assert!(one_of("b", ["a", "b"]));
/// assert!(!one_of(4, [1, 2, 3]));
/// assert!(!one_of(1, Vec::<i32>::new()));
/// ```
pub fn one_of<I>(val: impl Into<Value>, candidates: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let val = val.into();
    candidates
        .into_iter()
        .any(|candidate| compare_values(&val, &candidate.into(), Op::Eq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_false() {
        assert!(!one_of(Value::Nil, Vec::<Value>::new()));
        assert!(!one_of("", Vec::<&str>::new()));
    }

    #[test]
    fn test_coerces_candidates() {
        assert!(one_of(3, ["1", "3"]));
        assert!(one_of(true, ["false", "true"]));
        assert!(!one_of("3", ["03"]));
    }

    #[test]
    fn test_heterogeneous_candidates() {
        let candidates = vec![Value::from("x"), Value::from(10u8), Value::from(false)];
        assert!(one_of(10, candidates.clone()));
        assert!(one_of("x", candidates.clone()));
        assert!(one_of(false, candidates.clone()));
        assert!(!one_of(11, candidates));
    }

    #[test]
    fn test_nan_is_never_a_member() {
        assert!(!one_of(f64::NAN, [f64::NAN]));
    }
}
