//! Predicates derived from the comparison engine
//!
//! Everything here is a thin layer over [`compare`](crate::compare::compare):
//! relational shorthands, inclusive ranges, length checks and set
//! membership. Operands of any kind are accepted and coerced the same way
//! the engine coerces them.
//!
//! Ordinary mismatches answer `false`. Range predicates additionally check
//! that their bounds are ordered and report [`Error::InvalidRange`] when
//! they are not.
//!
//! # Example
//!
//! ```rust
//! use conform::predicate::*;
//! use conform::{Error, Op};
//!
//! assert!(greater_than(2, 1.3));
//! assert!(length("héllo", 5, Op::Eq));
//! assert!(one_of(3, [1, 2, 3]));
//! assert_eq!(between(5, 1, 10), Ok(true));
//! assert!(matches!(between(5, 10, 1), Err(Error::InvalidRange { .. })));
//! ```
//!
//! [`Error::InvalidRange`]: crate::Error::InvalidRange

mod length;
mod membership;
mod range;
mod relational;

pub use length::{length, length_between, measure};
pub use membership::one_of;
pub use range::{between, not_between};
pub use relational::{
    equal, greater_equal_than, greater_than, less_equal_than, less_than, not_equal,
};
