//! Tagged operands for the comparison engine
//!
//! Every operand handed to [`compare`](crate::compare::compare) and the
//! derived predicates is first lifted into a [`Value`]. The variant records
//! the operand's kind, so domain selection works over a closed set of cases
//! instead of inspecting types at run time.
//!
//! # Example
//!
//! ```rust
//! use conform::{Kind, Value};
//!
//! assert_eq!(Value::from(42u8).kind(), Kind::Uint);
//! assert_eq!(Value::from(-3i16).kind(), Kind::Int);
//! assert_eq!(Value::from("abc").kind(), Kind::Str);
//! assert_eq!(Value::from(None::<i32>).kind(), Kind::Nil);
//! ```

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Absent value.
    Nil,
    /// Boolean.
    Bool,
    /// Signed integer of any width.
    Int,
    /// Unsigned integer of any width.
    Uint,
    /// Floating point of any width.
    Float,
    /// UTF-8 text.
    Str,
    /// Raw bytes.
    Bytes,
    /// A point on the timeline.
    Time,
    /// A signed time interval.
    Duration,
    /// A numeral parsed from an external source such as JSON.
    Number,
    /// An ordered sequence of values.
    List,
    /// A string-keyed mapping.
    Map,
    /// Anything the engine cannot look inside.
    Opaque,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Str => "string",
            Kind::Bytes => "bytes",
            Kind::Time => "time",
            Kind::Duration => "duration",
            Kind::Number => "number",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

/// A value the engine only knows by identity.
///
/// Two opaque values are equal only when they share the same allocation,
/// so cloning an `Opaque` yields an equal value while wrapping the same
/// data twice does not.
///
/// # Example
///
/// ```rust
/// use conform::Opaque;
///
/// struct Handle(u32);
///
/// let a = Opaque::new(Handle(7));
/// let b = a.clone();
/// assert_eq!(a, b);
/// assert_ne!(a, Opaque::new(Handle(7)));
/// assert_eq!(a.downcast_ref::<Handle>().map(|h| h.0), Some(7));
/// ```
#[derive(Clone)]
pub struct Opaque {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    /// Wrap an arbitrary value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    /// Name of the wrapped type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the wrapped value if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Opaque").field(&self.type_name).finish()
    }
}

/// A dynamically kinded operand.
///
/// `PartialEq` is structural: both sides must be the same variant with equal
/// payloads. Integers of different signedness are different variants, NaN is
/// never equal to itself, times are equal when they denote the same instant,
/// and [`Opaque`] values compare by identity. This is the equality the
/// dispatcher falls back to when no comparison domain applies.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Nil,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point.
    Float(f64),
    /// UTF-8 text.
    Str(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// A point on the timeline, keeping the offset it was given in.
    Time(DateTime<FixedOffset>),
    /// A signed time interval.
    Duration(TimeDelta),
    /// A numeral parsed from JSON.
    Number(serde_json::Number),
    /// An ordered sequence.
    List(Vec<Value>),
    /// A string-keyed mapping.
    Map(BTreeMap<String, Value>),
    /// Anything else.
    Opaque(Opaque),
}

impl Value {
    /// Build a [`Value::Bytes`].
    ///
    /// `Vec<u8>` converts into a list of unsigned integers through `From`,
    /// so raw bytes need an explicit constructor.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(bytes.into())
    }

    /// Wrap an arbitrary value as [`Value::Opaque`].
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Value::Opaque(Opaque::new(value))
    }

    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::Bytes(_) => Kind::Bytes,
            Value::Time(_) => Kind::Time,
            Value::Duration(_) => Kind::Duration,
            Value::Number(_) => Kind::Number,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Opaque(_) => Kind::Opaque,
        }
    }

    /// True for native floats and for external numerals that carry a
    /// fractional or exponent part.
    pub fn is_float_like(&self) -> bool {
        match self {
            Value::Float(_) => true,
            Value::Number(n) => n.is_f64(),
            _ => false,
        }
    }

    /// True for every integer, float, interval and external numeral kind.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Uint(_) | Value::Float(_) | Value::Duration(_) | Value::Number(_)
        )
    }

    /// Borrow the text of a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Value::Time(t) => f.write_str(&t.to_rfc3339()),
            Value::Duration(d) => write!(f, "{}", d),
            Value::Number(n) => write!(f, "{}", n),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
            Value::Opaque(o) => write!(f, "<{}>", o.type_name()),
        }
    }
}

macro_rules! impl_from_scalar {
    ($variant:ident, $target:ty, [$($ty:ty),+]) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from_scalar!(Int, i64, [i8, i16, i32, i64, isize]);
impl_from_scalar!(Uint, u64, [u8, u16, u32, u64, usize]);
impl_from_scalar!(Float, f64, [f32, f64]);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Value::Time(v.fixed_offset())
    }
}

/// Naive date-times are read as UTC.
impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Time(Utc.from_utc_datetime(&v).fixed_offset())
    }
}

impl From<TimeDelta> for Value {
    fn from(v: TimeDelta) -> Self {
        Value::Duration(v)
    }
}

/// Intervals too long for [`TimeDelta`] saturate at its maximum.
impl From<std::time::Duration> for Value {
    fn from(v: std::time::Duration) -> Self {
        Value::Duration(TimeDelta::from_std(v).unwrap_or(TimeDelta::MAX))
    }
}

impl From<serde_json::Number> for Value {
    fn from(v: serde_json::Number) -> Self {
        Value::Number(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Opaque> for Value {
    fn from(v: Opaque) -> Self {
        Value::Opaque(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::List(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(v: BTreeMap<K, V>) -> Self {
        Value::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(v: HashMap<K, V, S>) -> Self {
        Value::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
