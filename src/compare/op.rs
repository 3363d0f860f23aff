//! Relational operators.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the six relational operators.
///
/// Parses from and renders to the tokens `=`, `!=`, `<`, `<=`, `>`, `>=`.
///
/// # Example
///
/// ```rust
/// use conform::Op;
///
/// let op: Op = "<=".parse().unwrap();
/// assert_eq!(op, Op::Le);
/// assert_eq!(op.to_string(), "<=");
/// assert!("==".parse::<Op>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Op {
    /// Every operator, in token order.
    pub const ALL: [Op; 6] = [Op::Eq, Op::Ne, Op::Lt, Op::Le, Op::Gt, Op::Ge];

    /// The token for this operator.
    pub fn token(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
        }
    }

    /// The operator that holds for `(b, a)` whenever `self` holds for `(a, b)`.
    pub fn flip(self) -> Op {
        match self {
            Op::Eq => Op::Eq,
            Op::Ne => Op::Ne,
            Op::Lt => Op::Gt,
            Op::Le => Op::Ge,
            Op::Gt => Op::Lt,
            Op::Ge => Op::Le,
        }
    }

    /// Whether the operator accepts the outcome of a three-way comparison.
    ///
    /// `None` stands for an unordered pair (a NaN operand), which satisfies
    /// only [`Op::Ne`].
    ///
    /// ```rust
    /// use conform::Op;
    /// use std::cmp::Ordering;
    ///
    /// assert!(Op::Le.accepts(Some(Ordering::Equal)));
    /// assert!(!Op::Lt.accepts(Some(Ordering::Equal)));
    /// assert!(Op::Ne.accepts(None));
    /// assert!(!Op::Eq.accepts(None));
    /// ```
    pub fn accepts(self, ordering: Option<Ordering>) -> bool {
        match ordering {
            None => self == Op::Ne,
            Some(Ordering::Less) => matches!(self, Op::Lt | Op::Le | Op::Ne),
            Some(Ordering::Equal) => matches!(self, Op::Eq | Op::Le | Op::Ge),
            Some(Ordering::Greater) => matches!(self, Op::Gt | Op::Ge | Op::Ne),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Op {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::ALL
            .into_iter()
            .find(|op| op.token() == s)
            .ok_or_else(|| Error::UnknownOperator(s.to_owned()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Op {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Op {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
