//! Predicates over values of any kind.
//!
//! These accept anything convertible into a [`Value`]. Numeric kinds answer
//! from their kind alone; text is matched against the corresponding
//! pattern; every other kind is not valid.

use chrono::{NaiveDate, TimeDelta};

use super::patterns::{LATITUDE, LONGITUDE, NUMBER, NUMERIC};
use crate::value::Value;

/// Any numeric kind, or text holding a signed decimal number.
///
/// # Example
///
/// ```rust
/// use conform::format::numeric;
///
/// assert!(numeric(-4.5));
/// assert!(numeric("+12.50"));
/// assert!(!numeric("1e5"));
/// assert!(!numeric(true));
/// ```
pub fn numeric(val: impl Into<Value>) -> bool {
    match val.into() {
        Value::Str(s) => NUMERIC.is_match(&s),
        v => v.is_numeric(),
    }
}

/// Any numeric kind, or text made of ASCII digits only.
///
/// # Example
///
/// ```rust
/// use conform::format::number;
///
/// assert!(number(7u8));
/// assert!(number("0042"));
/// assert!(!number("-1"));
/// ```
pub fn number(val: impl Into<Value>) -> bool {
    match val.into() {
        Value::Str(s) => NUMBER.is_match(&s),
        v => v.is_numeric(),
    }
}

/// Whether the value can be read as a boolean.
///
/// Text must be one of `1 yes YES Yes on ON On true TRUE True` or
/// `0 no NO No off OFF Off false FALSE False`, or empty. Integers qualify
/// only when they are exactly `0` or `1`. A `bool` qualifies only when it is
/// `true`; `false` is reported as not boolean-like, and no other absent
/// value counts as falsy.
///
/// # Example
///
/// ```rust
/// use conform::format::boolean;
///
/// assert!(boolean("On"));
/// assert!(boolean(""));
/// assert!(boolean(1u32));
/// assert!(!boolean(2));
/// assert!(!boolean("y"));
/// assert!(!boolean(None::<bool>));
/// ```
pub fn boolean(val: impl Into<Value>) -> bool {
    match val.into() {
        Value::Str(s) => matches!(
            s.as_str(),
            "1" | "yes"
                | "YES"
                | "Yes"
                | "on"
                | "ON"
                | "On"
                | "true"
                | "TRUE"
                | "True"
                | "0"
                | "no"
                | "NO"
                | "No"
                | ""
                | "off"
                | "OFF"
                | "Off"
                | "false"
                | "FALSE"
                | "False"
        ),
        Value::Int(n) => n == 0 || n == 1,
        Value::Uint(n) => n == 0 || n == 1,
        Value::Bool(b) => b,
        _ => false,
    }
}

fn decimal_text(val: Value) -> Option<String> {
    match val {
        Value::Str(s) => Some(s),
        Value::Int(i) => Some(i.to_string()),
        Value::Uint(u) => Some(u.to_string()),
        Value::Float(f) => Some(f.to_string()),
        _ => None,
    }
}

/// A latitude in decimal degrees, `-90` to `90`.
///
/// Numbers are rendered in plain decimal notation before matching.
///
/// # Example
///
/// ```rust
/// use conform::format::latitude;
///
/// assert!(latitude(-45.5));
/// assert!(latitude("90.000"));
/// assert!(!latitude(90.5));
/// assert!(!latitude(true));
/// ```
pub fn latitude(val: impl Into<Value>) -> bool {
    decimal_text(val.into()).is_some_and(|s| LATITUDE.is_match(&s))
}

/// A longitude in decimal degrees, `-180` to `180`.
pub fn longitude(val: impl Into<Value>) -> bool {
    decimal_text(val.into()).is_some_and(|s| LONGITUDE.is_match(&s))
}

/// Text or bytes holding a single well-formed JSON document.
///
/// # Example
///
/// ```rust
/// use conform::format::json;
/// use conform::Value;
///
/// assert!(json(r#"{"a": [1, 2]}"#));
/// assert!(json(Value::bytes("null")));
/// assert!(!json("{a: 1}"));
/// assert!(!json(42));
/// ```
pub fn json(val: impl Into<Value>) -> bool {
    let parse = |bytes: &[u8]| serde_json::from_slice::<serde_json::Value>(bytes).is_ok();
    match val.into() {
        Value::Str(s) => parse(s.as_bytes()),
        Value::Bytes(b) => parse(&b),
        _ => false,
    }
}

fn is_zero_time(val: &Value) -> bool {
    let zero = NaiveDate::from_ymd_opt(1, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0));
    matches!(val, Value::Time(t) if Some(t.naive_utc()) == zero)
}

/// Whether a value is empty.
///
/// - text, bytes, lists, maps: no elements
/// - numbers and intervals: zero
/// - booleans: `false`
/// - times: `0001-01-01T00:00:00Z`
/// - nil: always
///
/// # Example
///
/// ```rust
/// use conform::format::empty;
///
/// assert!(empty(""));
/// assert!(empty(0.0));
/// assert!(empty(Vec::<u8>::new()));
/// assert!(empty(None::<i32>));
/// assert!(!empty(" "));
/// ```
pub fn empty(val: impl Into<Value>) -> bool {
    let val = val.into();
    match &val {
        Value::Nil => true,
        Value::Bool(b) => !b,
        Value::Int(i) => *i == 0,
        Value::Uint(u) => *u == 0,
        Value::Float(f) => *f == 0.0,
        Value::Str(s) => s.is_empty(),
        Value::Bytes(b) => b.is_empty(),
        Value::List(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        Value::Duration(d) => *d == TimeDelta::zero(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Time(_) => is_zero_time(&val),
        Value::Opaque(_) => false,
    }
}

/// The negation of [`empty`].
pub fn not_empty(val: impl Into<Value>) -> bool {
    !empty(val)
}

/// Whether the value differs from its kind's default.
///
/// Unlike [`not_empty`], a collection has a value even when it holds no
/// elements; only nil does not.
///
/// # Example
///
/// ```rust
/// use conform::format::has_value;
///
/// assert!(has_value(Vec::<i32>::new()));
/// assert!(has_value(3));
/// assert!(!has_value(0));
/// assert!(!has_value(""));
/// assert!(!has_value(None::<Vec<i32>>));
/// ```
pub fn has_value(val: impl Into<Value>) -> bool {
    match val.into() {
        Value::Bytes(_) | Value::List(_) | Value::Map(_) | Value::Opaque(_) => true,
        other => !empty(other),
    }
}

/// The negation of [`has_value`].
pub fn is_default(val: impl Into<Value>) -> bool {
    !has_value(val)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_numeric_kinds() {
        assert!(numeric(0u64));
        assert!(numeric(f64::NAN));
        assert!(numeric(TimeDelta::seconds(1)));
        assert!(numeric("-0.5"));
        assert!(!numeric(".5"));
        assert!(!numeric("5."));
        assert!(!numeric(""));
        assert!(!numeric(vec![1]));
    }

    #[test]
    fn test_number_digits_only() {
        assert!(number(-3));
        assert!(number("123"));
        assert!(!number("1.5"));
        assert!(!number(""));
    }

    #[test]
    fn test_boolean_literals() {
        for truthy in ["1", "yes", "YES", "Yes", "on", "ON", "On", "true", "TRUE", "True"] {
            assert!(boolean(truthy), "{}", truthy);
        }
        for falsy in [
            "0", "no", "NO", "No", "", "off", "OFF", "Off", "false", "FALSE", "False",
        ] {
            assert!(boolean(falsy), "{:?}", falsy);
        }
        for other in ["yEs", "t", "f", " true", "2"] {
            assert!(!boolean(other), "{:?}", other);
        }
    }

    #[test]
    fn test_boolean_numbers() {
        assert!(boolean(0));
        assert!(boolean(1i64));
        assert!(boolean(1u8));
        assert!(!boolean(-1));
        assert!(!boolean(2u64));
        assert!(!boolean(1.0));
    }

    // Only the empty string counts as an absent falsy value; a false bool
    // and nil are not boolean-like. Kept as observed rather than unified.
    #[test]
    fn test_boolean_absent_value_asymmetry() {
        assert!(boolean(""));
        assert!(boolean(true));
        assert!(!boolean(false));
        assert!(!boolean(Value::Nil));
    }

    #[test]
    fn test_coordinates() {
        assert!(latitude(0));
        assert!(latitude(-90));
        assert!(latitude("+89.999999"));
        assert!(!latitude(91u8));
        assert!(!latitude("90.1"));
        assert!(longitude(-180));
        assert!(longitude(179.5));
        assert!(longitude("180.0"));
        assert!(!longitude(180.5));
        assert!(!longitude("abc"));
        assert!(!longitude(Value::Nil));
    }

    #[test]
    fn test_json() {
        assert!(json("[]"));
        assert!(json("\"text\""));
        assert!(json(" 1.5 "));
        assert!(!json(""));
        assert!(!json("[1,]"));
        assert!(!json("{} {}"));
        assert!(!json(Value::Nil));
    }

    #[test]
    fn test_empty() {
        assert!(empty(Value::Nil));
        assert!(empty(false));
        assert!(empty(0u8));
        assert!(empty(TimeDelta::zero()));
        assert!(empty(Value::bytes(Vec::<u8>::new())));
        assert!(!empty(true));
        assert!(!empty(-1));
        assert!(!empty(vec![0]));
        assert!(!empty(Value::opaque(())));
    }

    #[test]
    fn test_empty_time() {
        let zero = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap();
        assert!(empty(zero));
        assert!(!empty(Utc::now()));
        assert!(not_empty(Utc::now()));
    }

    #[test]
    fn test_has_value() {
        assert!(has_value(Value::bytes(Vec::<u8>::new())));
        assert!(has_value("x"));
        assert!(has_value(true));
        assert!(!has_value(false));
        assert!(is_default(0.0));
        assert!(is_default(Value::Nil));
        assert!(!is_default(Vec::<i32>::new()));
    }
}
