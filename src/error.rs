//! Error types.
//!
//! Ordinary mismatches never surface here: the comparison engine degrades
//! them to `false`. An [`Error`] is returned only when a value cannot be
//! coerced, when an operator token is not recognized, or when a range
//! predicate is called with bounds that are not ordered.

use std::fmt;

use crate::value::{Kind, Value};

/// Errors reported by coercion, operator parsing, and range predicates.
///
/// # Examples
///
/// ```rust
/// use conform::{predicate, Error};
///
/// match predicate::between(5, 10, 1) {
///     Err(Error::InvalidRange { min, max }) => {
///         assert_eq!(min.to_string(), "10");
///         assert_eq!(max.to_string(), "1");
///     }
///     other => panic!("expected invalid range, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The value has no conversion into the requested domain.
    BadType {
        /// Kind of the value that failed to convert.
        kind: Kind,
    },
    /// A range predicate was called with `min` not less than `max`.
    ///
    /// This is a caller bug, distinct from the predicate evaluating to false.
    InvalidRange {
        /// Lower bound as given.
        min: Value,
        /// Upper bound as given.
        max: Value,
    },
    /// An operator token outside `=`, `!=`, `<`, `<=`, `>`, `>=`.
    UnknownOperator(String),
}

impl Error {
    /// True for the precondition violation raised by range predicates.
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Error::InvalidRange { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadType { kind } => write!(f, "bad value type: {}", kind),
            Error::InvalidRange { min, max } => {
                write!(f, "bad value range: min {} is not less than max {}", min, max)
            }
            Error::UnknownOperator(token) => write!(f, "unknown operator `{}`", token),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
