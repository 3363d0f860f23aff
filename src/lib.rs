//! # Conform
//!
//! Standalone format predicates and a cross-type comparison engine.
//!
//! ## Overview
//!
//! **Conform** answers two kinds of question about a value:
//! - **Format**: does this text look like an e-mail address, a UUID, an IP
//!   address, a semantic version? See [`format`].
//! - **Comparison**: does `a op b` hold, even when `a` and `b` have
//!   different kinds? See [`compare()`] and the derived predicates in
//!   [`predicate`].
//!
//! Operands are [`Value`]s. Anything with a `From` conversion (integers,
//! floats, strings, bools, chrono times and intervals, JSON numbers,
//! collections, options) can be passed directly.
//!
//! ## Quick Example
//!
//! ```rust
//! use conform::predicate::{between, one_of};
//! use conform::{compare, format, Op};
//!
//! // Mixed kinds meet in a common domain
//! assert!(compare(2, 1.3, Op::Gt));
//! assert!(compare("10", 9u8, Op::Gt));
//! assert!(compare(true, "true", Op::Eq));
//!
//! // No common domain: only structural inequality holds
//! assert!(!compare(2.1, "x", Op::Gt));
//! assert!(compare(2.1, "x", Op::Ne));
//!
//! // Derived predicates
//! assert_eq!(between(5, 1, 10), Ok(true));
//! assert!(one_of("b", ["a", "b"]));
//!
//! // Format predicates
//! assert!(format::email("user@example.com"));
//! assert!(format::semver("1.2.3-rc.1"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace`/`debug` events when a comparison falls back to
//!   raw equality or a range is rejected.
//! - `serde`: (de)serialize [`Op`] as its operator token.
//! - `proptest`: `Arbitrary` implementations for [`Value`] and [`Op`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod compare;
pub mod error;
pub mod format;
pub mod predicate;
pub mod testing;
pub mod value;

// Re-exports
pub use compare::{compare, compare_token, Domain, Op};
pub use error::{Error, Result};
pub use value::{Kind, Opaque, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compare::{compare, compare_token, Op};
    pub use crate::error::{Error, Result};
    pub use crate::predicate::{
        between, equal, greater_equal_than, greater_than, length, length_between, less_equal_than,
        less_than, not_between, not_equal, one_of,
    };
    pub use crate::value::Value;
}
