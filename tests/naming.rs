//! Tests for the identifier and quoting helpers.
use nodeforge::naming::{class_name_of, escape_ts, field_identifier_of, package_name_of, quote};

#[test]
fn test_class_name_capitalizes_first_letter_only() {
    assert_eq!(class_name_of("fooBar"), "FooBar");
    assert_eq!(class_name_of("slack2"), "Slack2");
    assert_eq!(class_name_of("x"), "X");
}

#[test]
fn test_class_name_is_idempotent_and_handles_empty() {
    assert_eq!(class_name_of(&class_name_of("fooBar")), "FooBar");
    assert_eq!(class_name_of(""), "");
}

#[test]
fn test_field_identifier_collapses_whitespace_runs() {
    assert_eq!(field_identifier_of("API Key"), "api_key");
    assert_eq!(field_identifier_of("Client   Secret"), "client_secret");
    assert_eq!(field_identifier_of("Tab\tand\nnewline"), "tab_and_newline");
    assert_eq!(field_identifier_of("single"), "single");
}

#[test]
fn test_field_identifier_collisions_are_not_detected() {
    assert_eq!(
        field_identifier_of("User Name"),
        field_identifier_of("user  name")
    );
}

#[test]
fn test_package_name_is_prefixed_and_lowercased() {
    assert_eq!(package_name_of("weatherApi"), "n8n-nodes-weatherapi");
}

#[test]
fn test_quote_escapes_embedded_quotes_and_newlines() {
    assert_eq!(quote("plain"), "'plain'");
    assert_eq!(quote("it's"), r"'it\'s'");
    assert_eq!(quote("a\\b"), r"'a\\b'");
    assert_eq!(quote("line one\nline two"), r"'line one\nline two'");
    assert_eq!(escape_ts("\u{0007}"), r"\u0007");
}
