//! Format predicates exercised through the public API

use conform::format;
use conform::Value;

#[test]
fn identifiers() {
    assert!(format::uuid("6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
    assert!(format::uuid3("a987fbc9-4bed-3078-cf07-9141ba07c9f3"));
    assert!(!format::uuid3("a987fbc9-4bed-4078-8f07-9141ba07c9f3"));
    assert!(format::uuid5("987fbc97-4bed-5078-af07-9141ba07c9f3"));
    assert!(format::ulid("01ARZ3NDEKTSV4RRFFQ69G5FAV"));
    assert!(!format::ulid("01ARZ3NDEKTSV4RRFFQ69G5FAU0"));
}

#[test]
fn digests() {
    assert!(format::md5("d41d8cd98f00b204e9800998ecf8427e"));
    assert!(format::md4("31d6cfe0d16ae931b73c59d7e0c089c0"));
    assert!(format::sha256(&"a".repeat(64)));
    assert!(format::sha384(&"b".repeat(96)));
    assert!(format::sha512(&"c".repeat(128)));
    assert!(!format::sha256(&"g".repeat(64)));
}

#[test]
fn encodings() {
    assert!(format::base64("aGVsbG8="));
    assert!(format::base64_url("aGVsbG8_d29ybGQ-"));
    assert!(format::hexadecimal("0xdeadBEEF"));
    assert!(format::url_encoded("a%20b"));
    assert!(format::html_encoded("&amp;"));
    assert!(format::html("<p>"));
    assert!(format::ascii("plain text"));
    assert!(!format::ascii("naïve"));
    assert!(format::json(r#"{"ok": true}"#));
}

#[test]
fn contact_details() {
    assert!(format::email("first.last+tag@sub.example.org"));
    assert!(!format::email("no-at-sign"));
    assert!(format::e164("+14155552671"));
    assert!(!format::e164("14155552671"));
}

#[test]
fn network() {
    assert!(format::ip("127.0.0.1"));
    assert!(format::ip("::1"));
    assert!(format::ipv6("fe80::1"));
    assert!(!format::ipv4("fe80::1"));
    assert!(format::mac("00:1a:2b:3c:4d:5e"));
    assert!(format::mac("0000.5e00.5301"));
    assert!(!format::mac("00:1a:2b:3c:4d"));
    assert!(format::url("ftp://files.example.com/pub"));
}

#[test]
fn colors() {
    assert!(format::color("#FFF"));
    assert!(format::color("rgb(255, 0, 0)"));
    assert!(format::color("hsla(120, 50%, 50%, 0.3)"));
    assert!(!format::color("red"));
}

#[test]
fn character_classes() {
    assert!(format::alpha("abcXYZ"));
    assert!(!format::alpha("abc1"));
    assert!(format::alphanumeric("abc123"));
    assert!(format::alpha_unicode("héllo"));
    assert!(format::alphanumeric_unicode("日本語123"));
    assert!(format::lowercase("abc 1"));
    assert!(format::uppercase("ABC 1"));
    assert!(!format::lowercase("aBc"));
}

#[test]
fn versions_and_labels() {
    assert!(format::semver("1.0.0"));
    assert!(format::semver("1.0.0-alpha.1+build.5"));
    assert!(!format::semver("01.0.0"));
}

#[test]
fn typed_values() {
    assert!(format::numeric("-3.25"));
    assert!(format::number(42u32));
    assert!(format::boolean("off"));
    assert!(format::latitude(51.5));
    assert!(format::longitude(-0.12));
    assert!(format::empty(Value::Nil));
    assert!(format::not_empty(vec![1]));
    assert!(format::has_value(Vec::<i32>::new()));
    assert!(format::is_default(0));
}

#[test]
fn filesystem() {
    let root = env!("CARGO_MANIFEST_DIR");
    assert!(format::dir(root));
    assert!(format::file(format!("{}/Cargo.toml", root)));
    assert!(format::datetime("2024-12-31", "%Y-%m-%d"));
}

#[test]
fn predicates_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let addr = format!("user{}@example.com", i);
                format::email(&addr) && format::uuid4("a987fbc9-4bed-4078-8f07-9141ba07c9f3")
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
