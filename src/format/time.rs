//! Date, time and time zone predicates.

use std::env;
use std::fs::File;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Whether `s` parses under the strftime-style `layout`.
///
/// The layout may describe a full timestamp with or without an offset, a
/// bare date, or a bare time of day.
///
/// # Example
///
/// ```rust
/// use conform::format::datetime;
///
/// assert!(datetime("2024-02-29", "%Y-%m-%d"));
/// assert!(datetime("2024-02-29 13:45:00", "%Y-%m-%d %H:%M:%S"));
/// assert!(datetime("2024-02-29T13:45:00+0100", "%Y-%m-%dT%H:%M:%S%z"));
/// assert!(datetime("13:45", "%H:%M"));
/// assert!(!datetime("2023-02-29", "%Y-%m-%d"));
/// assert!(!datetime("2024/02/29", "%Y-%m-%d"));
/// ```
pub fn datetime(s: &str, layout: &str) -> bool {
    DateTime::parse_from_str(s, layout).is_ok()
        || NaiveDateTime::parse_from_str(s, layout).is_ok()
        || NaiveDate::parse_from_str(s, layout).is_ok()
        || NaiveTime::parse_from_str(s, layout).is_ok()
}

const ZONEINFO_DIRS: [&str; 4] = [
    "/usr/share/zoneinfo/",
    "/usr/share/lib/zoneinfo/",
    "/usr/lib/locale/TZ/",
    "/etc/zoneinfo/",
];

fn is_relative_name(name: &str) -> bool {
    Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

fn is_tzif(path: &Path) -> bool {
    let mut magic = [0u8; 4];
    File::open(path)
        .and_then(|mut f| f.read_exact(&mut magic))
        .is_ok_and(|()| &magic == b"TZif")
}

fn zoneinfo_roots() -> impl Iterator<Item = PathBuf> {
    env::var_os("ZONEINFO")
        .map(PathBuf::from)
        .into_iter()
        .chain(ZONEINFO_DIRS.iter().map(PathBuf::from))
}

/// An IANA time zone name known to the system zoneinfo database.
///
/// `UTC` is always known. The empty string and `Local` (in any case) are
/// rejected because they name no particular zone. Lookups honour the
/// `ZONEINFO` environment variable before the usual system directories, and
/// block on the filesystem.
///
/// # Example
///
/// ```rust
/// use conform::format::timezone;
///
/// assert!(timezone("UTC"));
/// assert!(!timezone(""));
/// assert!(!timezone("local"));
/// assert!(!timezone("../etc/passwd"));
/// ```
pub fn timezone(name: &str) -> bool {
    if name.is_empty() || name.eq_ignore_ascii_case("local") {
        return false;
    }
    if name == "UTC" {
        return true;
    }
    if !is_relative_name(name) {
        return false;
    }
    zoneinfo_roots().any(|root| is_tzif(&root.join(name)))
}
