//! String transforms shared by every generator.
//!
//! All identifiers that appear in more than one artifact are derived here so
//! the files of a bundle always agree with each other.

/// Prefix every community node package name carries.
pub const PACKAGE_PREFIX: &str = "n8n-nodes";

/// Upper-cases the first character and leaves the rest untouched.
///
/// `class_name_of("fooBar") == "FooBar"`, and an empty input yields an empty string.
pub fn class_name_of(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases a label and collapses every whitespace run into one underscore.
///
/// Two labels that differ only in case or spacing map to the same key; no
/// collision detection is done.
pub fn field_identifier_of(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_whitespace = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// `n8n-nodes-<name lowercased>`.
pub fn package_name_of(name: &str) -> String {
    format!("{}-{}", PACKAGE_PREFIX, name.to_lowercase())
}

/// Escapes a value for use inside a single-quoted TypeScript string literal.
pub fn escape_ts(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Wraps a value in a single-quoted TypeScript string literal, escaping its content.
pub fn quote(value: &str) -> String {
    format!("'{}'", escape_ts(value))
}
