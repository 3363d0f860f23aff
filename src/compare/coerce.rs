//! Coercion into the canonical numeric domains
//!
//! The integer domain is `i128` so that every `i64` and every `u64` fits
//! without loss. Text is trimmed before parsing, [`Value::Nil`] reads as
//! zero, and any kind without a numeric reading fails with
//! [`Error::BadType`].

use crate::error::{Error, Result};
use crate::value::Value;

fn bad_type(value: &Value) -> Error {
    Error::BadType { kind: value.kind() }
}

/// Coerce a value into the wide signed integer domain.
///
/// Floats truncate toward zero; non-finite floats fail. Text must be a
/// base-10 integer literal within the `i64`/`u64` range.
///
/// # Example
///
/// ```rust
/// use conform::compare::coerce::to_int;
/// use conform::Value;
///
/// assert_eq!(to_int(&Value::from(" 42 ")).unwrap(), 42);
/// assert_eq!(to_int(&Value::from(u64::MAX)).unwrap(), u64::MAX as i128);
/// assert_eq!(to_int(&Value::from(2.9)).unwrap(), 2);
/// assert_eq!(to_int(&Value::Nil).unwrap(), 0);
/// assert!(to_int(&Value::from("4.5")).is_err());
/// ```
pub fn to_int(value: &Value) -> Result<i128> {
    match value {
        Value::Nil => Ok(0),
        Value::Int(i) => Ok(i128::from(*i)),
        Value::Uint(u) => Ok(i128::from(*u)),
        Value::Float(f) if f.is_finite() => Ok(f.trunc() as i128),
        Value::Str(s) => s
            .trim()
            .parse::<i128>()
            .ok()
            .filter(|n| (i128::from(i64::MIN)..=i128::from(u64::MAX)).contains(n))
            .ok_or_else(|| bad_type(value)),
        Value::Duration(d) => d
            .num_nanoseconds()
            .map(i128::from)
            .ok_or_else(|| bad_type(value)),
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .ok_or_else(|| bad_type(value)),
        _ => Err(bad_type(value)),
    }
}

/// Coerce a value into a signed 64-bit integer.
///
/// Same rules as [`to_int`], failing when the result does not fit.
pub fn to_i64(value: &Value) -> Result<i64> {
    to_int(value).and_then(|n| i64::try_from(n).map_err(|_| bad_type(value)))
}

/// Coerce a value into the 64-bit floating point domain.
///
/// # Example
///
/// ```rust
/// use conform::compare::coerce::to_float;
/// use conform::Value;
///
/// assert_eq!(to_float(&Value::from("1.25")).unwrap(), 1.25);
/// assert_eq!(to_float(&Value::from(3u8)).unwrap(), 3.0);
/// assert!(to_float(&Value::from("x")).is_err());
/// assert!(to_float(&Value::from(true)).is_err());
/// ```
pub fn to_float(value: &Value) -> Result<f64> {
    match value {
        Value::Nil => Ok(0.0),
        Value::Int(i) => Ok(*i as f64),
        Value::Uint(u) => Ok(*u as f64),
        Value::Float(f) => Ok(*f),
        Value::Str(s) => s.trim().parse::<f64>().map_err(|_| bad_type(value)),
        Value::Duration(d) => Ok(d
            .num_nanoseconds()
            .map_or(d.num_milliseconds() as f64 * 1e6, |ns| ns as f64)),
        Value::Number(n) => n.as_f64().ok_or_else(|| bad_type(value)),
        _ => Err(bad_type(value)),
    }
}

/// Parse a boolean literal.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`, nothing else.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Kind;
    use chrono::TimeDelta;
    use std::str::FromStr;

    #[test]
    fn nil_is_zero_in_both_domains() {
        assert_eq!(to_int(&Value::Nil), Ok(0));
        assert_eq!(to_float(&Value::Nil), Ok(0.0));
    }

    #[test]
    fn strings_are_trimmed() {
        assert_eq!(to_int(&Value::from("\t-17\n")), Ok(-17));
        assert_eq!(to_float(&Value::from("  2.5 ")), Ok(2.5));
    }

    #[test]
    fn integer_text_outside_64_bits_fails() {
        let too_big = format!("{}", u64::MAX as i128 + 1);
        assert!(to_int(&Value::from(too_big)).is_err());
        assert_eq!(
            to_int(&Value::from(u64::MAX.to_string())),
            Ok(i128::from(u64::MAX))
        );
    }

    #[test]
    fn non_finite_floats_have_no_integer_reading() {
        assert!(to_int(&Value::Float(f64::NAN)).is_err());
        assert!(to_int(&Value::Float(f64::INFINITY)).is_err());
        assert_eq!(to_int(&Value::Float(-3.7)), Ok(-3));
    }

    #[test]
    fn durations_read_as_nanoseconds() {
        let d = Value::from(TimeDelta::milliseconds(2));
        assert_eq!(to_int(&d), Ok(2_000_000));
        assert_eq!(to_float(&d), Ok(2_000_000.0));
    }

    #[test]
    fn json_numbers() {
        let int = Value::Number(serde_json::Number::from(7u64));
        let float = Value::Number(serde_json::Number::from_str("7.5").unwrap());
        assert_eq!(to_int(&int), Ok(7));
        assert!(to_int(&float).is_err());
        assert_eq!(to_float(&float), Ok(7.5));
    }

    #[test]
    fn structured_kinds_are_bad_type() {
        for value in [
            Value::from(true),
            Value::from(vec![1]),
            Value::bytes(*b"12"),
            Value::opaque(()),
        ] {
            let kind = value.kind();
            assert_eq!(to_int(&value), Err(Error::BadType { kind }));
            assert_eq!(to_float(&value), Err(Error::BadType { kind }));
        }
    }

    #[test]
    fn to_i64_rejects_large_unsigned() {
        assert_eq!(
            to_i64(&Value::from(u64::MAX)),
            Err(Error::BadType { kind: Kind::Uint })
        );
        assert_eq!(to_i64(&Value::from(5u64)), Ok(5));
    }

    #[test]
    fn bool_literals() {
        assert_eq!(parse_bool("True"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool(""), None);
    }
}
