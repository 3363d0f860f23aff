//! Pattern-backed string predicates.
//!
//! Each predicate answers whether the whole string has the named shape.
//! Malformed and empty input is simply not valid.

use super::patterns::*;

/// ASCII letters only.
///
/// # Example
///
/// ```rust
/// use conform::format::alpha;
///
/// assert!(alpha("abcXYZ"));
/// assert!(!alpha("abc1"));
/// assert!(!alpha(""));
/// ```
pub fn alpha(s: &str) -> bool {
    ALPHA.is_match(s)
}

/// ASCII letters and digits only.
pub fn alphanumeric(s: &str) -> bool {
    ALPHANUMERIC.is_match(s)
}

/// Unicode letters only.
///
/// # Example
///
/// ```rust
/// use conform::format::alpha_unicode;
///
/// assert!(alpha_unicode("héllo"));
/// assert!(alpha_unicode("日本語"));
/// assert!(!alpha_unicode("abc1"));
/// ```
pub fn alpha_unicode(s: &str) -> bool {
    ALPHA_UNICODE.is_match(s)
}

/// Unicode letters and numbers only.
pub fn alphanumeric_unicode(s: &str) -> bool {
    ALPHANUMERIC_UNICODE.is_match(s)
}

/// Hexadecimal digits with an optional `0x`/`0X` prefix.
///
/// # Example
///
/// ```rust
/// use conform::format::hexadecimal;
///
/// assert!(hexadecimal("0xdeadBEEF"));
/// assert!(hexadecimal("ff"));
/// assert!(!hexadecimal("0x"));
/// ```
pub fn hexadecimal(s: &str) -> bool {
    HEXADECIMAL.is_match(s)
}

/// An e-mail address per the RFC 5322 derived grammar.
///
/// # Example
///
/// ```rust
/// use conform::format::email;
///
/// assert!(email("user@example.com"));
/// assert!(email("first.last+tag@sub.example.org"));
/// assert!(!email("user@"));
/// assert!(!email("not an email"));
/// ```
pub fn email(s: &str) -> bool {
    EMAIL.is_match(s)
}

/// An E.164 phone number: `+` followed by 7 to 15 digits.
pub fn e164(s: &str) -> bool {
    E164.is_match(s)
}

/// A mainland China mobile number, with an optional `86`/`+86` prefix.
///
/// # Example
///
/// ```rust
/// use conform::format::phone_number;
///
/// assert!(phone_number("13800138000"));
/// assert!(phone_number("+8613800138000"));
/// assert!(!phone_number("23800138000"));
/// ```
pub fn phone_number(s: &str) -> bool {
    PHONE_NUMBER.is_match(s)
}

/// Standard base64 with padding.
pub fn base64(s: &str) -> bool {
    BASE64.is_match(s)
}

/// URL-safe base64 with padding.
pub fn base64_url(s: &str) -> bool {
    BASE64_URL.is_match(s)
}

/// Three dot-separated URL-safe base64 segments, the last may be empty.
pub fn jwt(s: &str) -> bool {
    JWT.is_match(s)
}

/// A lowercase UUID of any version.
///
/// # Example
///
/// ```rust
/// use conform::format::{uuid, uuid4};
///
/// let id = "a987fbc9-4bed-4078-8f07-9141ba07c9f3";
/// assert!(uuid(id));
/// assert!(uuid4(id));
/// assert!(!uuid(&id.to_uppercase()));
/// ```
pub fn uuid(s: &str) -> bool {
    UUID.is_match(s)
}

/// A version 3 UUID.
pub fn uuid3(s: &str) -> bool {
    UUID3.is_match(s)
}

/// A version 4 UUID with the RFC 4122 variant.
pub fn uuid4(s: &str) -> bool {
    UUID4.is_match(s)
}

/// A version 5 UUID with the RFC 4122 variant.
pub fn uuid5(s: &str) -> bool {
    UUID5.is_match(s)
}

/// A ULID: 26 characters of Crockford base32.
pub fn ulid(s: &str) -> bool {
    ULID.is_match(s)
}

/// 32 lowercase hex digits.
pub fn md4(s: &str) -> bool {
    MD4.is_match(s)
}

/// 32 lowercase hex digits.
pub fn md5(s: &str) -> bool {
    MD5.is_match(s)
}

/// 64 lowercase hex digits.
pub fn sha256(s: &str) -> bool {
    SHA256.is_match(s)
}

/// 96 lowercase hex digits.
pub fn sha384(s: &str) -> bool {
    SHA384.is_match(s)
}

/// 128 lowercase hex digits.
pub fn sha512(s: &str) -> bool {
    SHA512.is_match(s)
}

/// Only ASCII characters. The empty string qualifies.
pub fn ascii(s: &str) -> bool {
    ASCII.is_match(s)
}

/// Every `%` starts a valid two-digit escape.
///
/// # Example
///
/// ```rust
/// use conform::format::url_encoded;
///
/// assert!(url_encoded("a%20b"));
/// assert!(!url_encoded("100%"));
/// assert!(!url_encoded("%zz"));
/// ```
pub fn url_encoded(s: &str) -> bool {
    URL_ENCODED.is_match(s)
}

/// Contains an HTML character reference such as `&#x3c;` or `&lt`.
pub fn html_encoded(s: &str) -> bool {
    HTML_ENCODED.is_match(s)
}

/// Contains something shaped like an HTML tag.
///
/// # Example
///
/// ```rust
/// use conform::format::html;
///
/// assert!(html("<b>bold</b>"));
/// assert!(html("text </p>"));
/// assert!(!html("1 < 2"));
/// ```
pub fn html(s: &str) -> bool {
    HTML.is_match(s)
}

/// A semantic version per semver.org.
///
/// # Example
///
/// ```rust
/// use conform::format::semver;
///
/// assert!(semver("1.2.3"));
/// assert!(semver("1.0.0-alpha.1+build.5"));
/// assert!(!semver("01.2.3"));
/// assert!(!semver("1.2"));
/// ```
pub fn semver(s: &str) -> bool {
    SEMVER.is_match(s)
}

/// A label: a leading `a`-`f`/`A`-`F` followed by word characters.
///
/// # Example
///
/// ```rust
/// use conform::format::label;
///
/// assert!(label("abc_1"));
/// assert!(label("F"));
/// // the leading character must be a hex letter
/// assert!(!label("xyz"));
/// assert!(!label("_a"));
/// ```
pub fn label(s: &str) -> bool {
    LABEL.is_match(s)
}

/// Non-empty and unchanged by lowercasing.
pub fn lowercase(s: &str) -> bool {
    !s.is_empty() && s == s.to_lowercase()
}

/// Non-empty and unchanged by uppercasing.
pub fn uppercase(s: &str) -> bool {
    !s.is_empty() && s == s.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_variants() {
        assert!(alpha("Hello"));
        assert!(!alpha("héllo"));
        assert!(alphanumeric("abc123"));
        assert!(!alphanumeric("abc 123"));
        assert!(alpha_unicode("Ωμέγα"));
        assert!(alphanumeric_unicode("abc١٢٣"));
        assert!(!alphanumeric_unicode("a-b"));
    }

    #[test]
    fn test_email() {
        assert!(email("test@mail.com"));
        assert!(email("Dörte@Sörensen.example.com"));
        assert!(email("\"quoted local\"@example.com"));
        assert!(email("trailing.dot@example.com."));
        assert!(!email("@example.com"));
        assert!(!email("a@b"));
        assert!(!email("two@@example.com"));
        assert!(!email(""));
    }

    #[test]
    fn test_phone_numbers() {
        assert!(e164("+14155552671"));
        assert!(e164("+0123456789"));
        assert!(!e164("14155552671"));
        assert!(!e164("+123456"));
        assert!(phone_number("8613800138000"));
        assert!(!phone_number("1380013800"));
    }

    #[test]
    fn test_base64() {
        assert!(base64("aGVsbG8="));
        assert!(base64("aGVsbG8gd29ybGQ="));
        assert!(base64("ab+/"));
        assert!(!base64("ab-_"));
        assert!(!base64("aGVsbG8"));
        assert!(!base64(""));
        assert!(base64_url("ab-_"));
        assert!(!base64_url("ab+/"));
    }

    #[test]
    fn test_jwt() {
        assert!(jwt("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxIn0.c2ln"));
        assert!(jwt("a.b."));
        assert!(!jwt("a.b"));
        assert!(!jwt("a..c"));
    }

    #[test]
    fn test_uuids() {
        assert!(uuid3("a987fbc9-4bed-3078-cf07-9141ba07c9f3"));
        assert!(!uuid3("a987fbc9-4bed-4078-8f07-9141ba07c9f3"));
        assert!(uuid5("987fbc97-4bed-5078-af07-9141ba07c9f3"));
        assert!(!uuid5("987fbc97-4bed-5078-cf07-9141ba07c9f3"));
        assert!(!uuid4("a987fbc9-4bed-4078-cf07-9141ba07c9f3"));
        assert!(!uuid("a987fbc94bed4078cf079141ba07c9f3"));
    }

    #[test]
    fn test_ulid() {
        assert!(ulid("01ARZ3NDEKTSV4RRFFQ69G5FAV"));
        assert!(!ulid("01ARZ3NDEKTSV4RRFFQ69G5FAI"));
        assert!(!ulid("01arz3ndektsv4rrffq69g5fav"));
    }

    #[test]
    fn test_hashes() {
        let md = "d41d8cd98f00b204e9800998ecf8427e";
        assert!(md4(md));
        assert!(md5(md));
        assert!(!md5(&md.to_uppercase()));
        assert!(sha256(&"a".repeat(64)));
        assert!(!sha256(&"a".repeat(63)));
        assert!(sha384(&"0".repeat(96)));
        assert!(sha512(&"f".repeat(128)));
        assert!(!sha512(&"g".repeat(128)));
    }

    #[test]
    fn test_ascii() {
        assert!(ascii(""));
        assert!(ascii("plain text\n\t~"));
        assert!(!ascii("naïve"));
    }

    #[test]
    fn test_encodings() {
        assert!(url_encoded(""));
        assert!(url_encoded("%E6%97%A5"));
        assert!(html_encoded("&lt;b&gt;"));
        assert!(html_encoded("&#x3c;"));
        assert!(!html_encoded("plain"));
        assert!(html("<br/>"));
        assert!(!html("no tags"));
    }

    #[test]
    fn test_hexadecimal() {
        assert!(hexadecimal("0XFF"));
        assert!(!hexadecimal("0xfg"));
        assert!(!hexadecimal(""));
    }

    #[test]
    fn test_semver() {
        assert!(semver("0.0.0"));
        assert!(semver("10.20.30-rc.1"));
        assert!(semver("1.1.2+meta-valid"));
        assert!(!semver("1.2.3-0123"));
        assert!(!semver("v1.2.3"));
    }

    #[test]
    fn test_label_keeps_hex_letter_start() {
        assert!(label("a"));
        assert!(label("Eagle_9"));
        assert!(!label("g"));
        assert!(!label("9a"));
        assert!(!label("a-b"));
    }

    #[test]
    fn test_case() {
        assert!(lowercase("abc 123"));
        assert!(!lowercase("aBc"));
        assert!(!lowercase(""));
        assert!(uppercase("ÀBC"));
        assert!(!uppercase("Abc"));
        assert!(!uppercase(""));
    }
}
