//! Format predicates
//!
//! Standalone checks that answer whether a value has a named shape: an
//! e-mail address, a UUID, an IP address, a color, a hash digest and so on.
//! Every predicate is a pure function returning `bool`; malformed or empty
//! input is reported as not valid, never as an error. The only exceptions
//! to purity are [`file`], [`dir`] and [`timezone`], which consult the
//! filesystem.
//!
//! Regular expressions are compiled once, on first use, and shared
//! read-only afterwards, so every predicate is safe to call from any
//! number of threads.
//!
//! # Example
//!
//! ```rust
//! use conform::format;
//!
//! assert!(format::email("user@example.com"));
//! assert!(format::uuid4("a987fbc9-4bed-4078-8f07-9141ba07c9f3"));
//! assert!(format::ipv4("10.0.0.1"));
//! assert!(format::color("#ff8800"));
//! assert!(format::boolean("yes"));
//! assert!(!format::semver("v1.0"));
//! ```

mod color;
mod fs;
mod network;
mod patterns;
mod text;
mod time;
mod typed;

pub use color::{color, hex_color, hsl, hsla, rgb, rgba};
pub use fs::{dir, file};
pub use network::{ip, ipv4, ipv6, mac, url};
pub use text::{
    alpha, alpha_unicode, alphanumeric, alphanumeric_unicode, ascii, base64, base64_url, e164,
    email, hexadecimal, html, html_encoded, jwt, label, lowercase, md4, md5, phone_number, semver,
    sha256, sha384, sha512, ulid, uppercase, url_encoded, uuid, uuid3, uuid4, uuid5,
};
pub use time::{datetime, timezone};
pub use typed::{
    boolean, empty, has_value, is_default, json, latitude, longitude, not_empty, number, numeric,
};
