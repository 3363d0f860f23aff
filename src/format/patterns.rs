//! Compiled patterns shared by the format predicates.
//!
//! Patterns compile on first use and are read-only afterwards. `\d`, `\w`
//! and `\s` are Unicode-aware in `regex`, so the ASCII classes are spelled
//! out where only ASCII digits, word characters and whitespace are meant.

use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! patterns {
    ($($name:ident = $pattern:expr;)+) => {
        $(
            pub(crate) static $name: Lazy<Regex> = Lazy::new(|| {
                Regex::new($pattern).expect(concat!("pattern ", stringify!($name), " compiles"))
            });
        )+

        #[cfg(test)]
        pub(crate) fn all() -> Vec<(&'static str, &'static Lazy<Regex>)> {
            vec![$((stringify!($name), &$name)),+]
        }
    };
}

patterns! {
    ALPHA = r"^[a-zA-Z]+$";
    ALPHANUMERIC = r"^[a-zA-Z0-9]+$";
    ALPHA_UNICODE = r"^[\p{L}]+$";
    ALPHANUMERIC_UNICODE = r"^[\p{L}\p{N}]+$";
    NUMERIC = r"^[-+]?[0-9]+(?:\.[0-9]+)?$";
    NUMBER = r"^[0-9]+$";
    HEXADECIMAL = r"^(0[xX])?[0-9a-fA-F]+$";
    HEX_COLOR = r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$";
    RGB = r"^rgb\([\t\n\f\r ]*(?:(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])[\t\n\f\r ]*,[\t\n\f\r ]*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])[\t\n\f\r ]*,[\t\n\f\r ]*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])|(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])%[\t\n\f\r ]*,[\t\n\f\r ]*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])%[\t\n\f\r ]*,[\t\n\f\r ]*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])%)[\t\n\f\r ]*\)$";
    RGBA = r"^rgba\([\t\n\f\r ]*(?:(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])[\t\n\f\r ]*,[\t\n\f\r ]*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])[\t\n\f\r ]*,[\t\n\f\r ]*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])|(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])%[\t\n\f\r ]*,[\t\n\f\r ]*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])%[\t\n\f\r ]*,[\t\n\f\r ]*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])%)[\t\n\f\r ]*,[\t\n\f\r ]*(?:(?:0.[1-9]*)|[01])[\t\n\f\r ]*\)$";
    HSL = r"^hsl\([\t\n\f\r ]*(?:0|[1-9][0-9]?|[12][0-9][0-9]|3[0-5][0-9]|360)[\t\n\f\r ]*,[\t\n\f\r ]*(?:(?:0|[1-9][0-9]?|100)%)[\t\n\f\r ]*,[\t\n\f\r ]*(?:(?:0|[1-9][0-9]?|100)%)[\t\n\f\r ]*\)$";
    HSLA = r"^hsla\([\t\n\f\r ]*(?:0|[1-9][0-9]?|[12][0-9][0-9]|3[0-5][0-9]|360)[\t\n\f\r ]*,[\t\n\f\r ]*(?:(?:0|[1-9][0-9]?|100)%)[\t\n\f\r ]*,[\t\n\f\r ]*(?:(?:0|[1-9][0-9]?|100)%)[\t\n\f\r ]*,[\t\n\f\r ]*(?:(?:0.[1-9]*)|[01])[\t\n\f\r ]*\)$";
    EMAIL = r"^(?:(?:(?:(?:[a-zA-Z]|[0-9]|[!#\$%&'\*\+\-\/=\?\^_`{\|}~]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])+(?:\.([a-zA-Z]|[0-9]|[!#\$%&'\*\+\-\/=\?\^_`{\|}~]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])+)*)|(?:(?:\x22)(?:(?:(?:(?:\x20|\x09)*(?:\x0d\x0a))?(?:\x20|\x09)+)?(?:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x7f]|\x21|[\x23-\x5b]|[\x5d-\x7e]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])|(?:(?:[\x01-\x09\x0b\x0c\x0d-\x7f]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]))))*(?:(?:(?:\x20|\x09)*(?:\x0d\x0a))?(\x20|\x09)+)?(?:\x22))))@(?:(?:(?:[a-zA-Z]|[0-9]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])|(?:(?:[a-zA-Z]|[0-9]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])(?:[a-zA-Z]|[0-9]|-|\.|~|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])*(?:[a-zA-Z]|[0-9]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])))\.)+(?:(?:[a-zA-Z]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])|(?:(?:[a-zA-Z]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])(?:[a-zA-Z]|[0-9]|-|\.|~|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])*(?:[a-zA-Z]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])))\.?$";
    E164 = r"^\+[1-9]?[0-9]{7,14}$";
    PHONE_NUMBER = r"^(\+?86)?1[0-9]{10}$";
    BASE64 = r"^(?:[A-Za-z0-9+\/]{4})*(?:[A-Za-z0-9+\/]{2}==|[A-Za-z0-9+\/]{3}=|[A-Za-z0-9+\/]{4})$";
    BASE64_URL = r"^(?:[A-Za-z0-9\-_]{4})*(?:[A-Za-z0-9\-_]{2}==|[A-Za-z0-9\-_]{3}=|[A-Za-z0-9\-_]{4})$";
    JWT = r"^[A-Za-z0-9\-_]+\.[A-Za-z0-9\-_]+\.[A-Za-z0-9\-_]*$";
    UUID3 = r"^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$";
    UUID4 = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
    UUID5 = r"^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
    UUID = r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";
    ULID = r"^[A-HJKMNP-TV-Z0-9]{26}$";
    MD4 = r"^[0-9a-f]{32}$";
    MD5 = r"^[0-9a-f]{32}$";
    SHA256 = r"^[0-9a-f]{64}$";
    SHA384 = r"^[0-9a-f]{96}$";
    SHA512 = r"^[0-9a-f]{128}$";
    ASCII = r"^[\x00-\x7F]*$";
    LATITUDE = r"^[-+]?([1-8]?[0-9](\.[0-9]+)?|90(\.0+)?)$";
    LONGITUDE = r"^[-+]?(180(\.0+)?|((1[0-7][0-9])|([1-9]?[0-9]))(\.[0-9]+)?)$";
    URL_ENCODED = r"^(?:[^%]|%[0-9A-Fa-f]{2})*$";
    HTML_ENCODED = r"&#[x]?([0-9a-fA-F]{2})|(&gt)|(&lt)|(&quot)|(&amp)+[;]?";
    HTML = r"<[/]?([a-zA-Z]+).*?>";
    SEMVER = r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";
    LABEL = r"^[a-fA-F][0-9A-Za-z_]*$";
}
