//! Tests for string and block-string decoding.

use crate::GraphQLStringParsingError;
use crate::string_value::cook_block_string;
use crate::string_value::cook_string;

// =============================================================================
// Single-line strings
// =============================================================================

#[test]
fn plain_string_is_unchanged() {
    assert_eq!(cook_string(b"hello world").unwrap(), "hello world");
}

#[test]
fn simple_escapes() {
    assert_eq!(
        cook_string(br#"\n\r\t\\\"\/\b\f"#).unwrap(),
        "\n\r\t\\\"/\u{0008}\u{000C}",
    );
}

#[test]
fn fixed_width_unicode_escape() {
    assert_eq!(cook_string(br"caf\u00E9").unwrap(), "café");
}

#[test]
fn variable_width_unicode_escape() {
    assert_eq!(cook_string(br"\u{1F600}").unwrap(), "\u{1F600}");
}

#[test]
fn surrogate_pair_escape() {
    assert_eq!(cook_string(br"\uD83D\uDE00").unwrap(), "\u{1F600}");
}

#[test]
fn lone_leading_surrogate_is_rejected() {
    assert!(matches!(
        cook_string(br"\uD83D!"),
        Err(GraphQLStringParsingError::InvalidUnicodeEscape(_)),
    ));
}

#[test]
fn unknown_escape_is_rejected() {
    assert_eq!(
        cook_string(br"\q"),
        Err(GraphQLStringParsingError::InvalidEscapeSequence(r"\q".to_string())),
    );
}

#[test]
fn short_unicode_escape_is_rejected() {
    assert!(matches!(
        cook_string(br"\u12"),
        Err(GraphQLStringParsingError::InvalidUnicodeEscape(_)),
    ));
}

#[test]
fn invalid_utf8_is_rejected() {
    assert_eq!(
        cook_string(b"ab\xFF"),
        Err(GraphQLStringParsingError::InvalidUtf8(2)),
    );
}

// =============================================================================
// Block strings
// =============================================================================

/// Common indentation is removed from every line after the first.
#[test]
fn block_string_removes_common_indent() {
    let raw = b"\n    type Foo {\n      bar: Int\n    }\n";
    assert_eq!(
        cook_block_string(raw).unwrap(),
        "type Foo {\n  bar: Int\n}",
    );
}

/// The first line does not take part in the indentation calculation.
#[test]
fn block_string_first_line_keeps_its_indent() {
    let raw = b"  first\n    second\n    third";
    assert_eq!(cook_block_string(raw).unwrap(), "  first\nsecond\nthird");
}

#[test]
fn block_string_drops_leading_and_trailing_blank_lines() {
    let raw = b"  \n\n  text\n   \n";
    assert_eq!(cook_block_string(raw).unwrap(), "text");
}

#[test]
fn block_string_normalizes_line_endings() {
    let raw = b"a\r\nb\rc\nd";
    assert_eq!(cook_block_string(raw).unwrap(), "a\nb\nc\nd");
}

#[test]
fn block_string_unescapes_triple_quote() {
    assert_eq!(cook_block_string(br#"say \""" please"#).unwrap(), r#"say """ please"#);
}

/// Other backslash sequences are literal in block strings.
#[test]
fn block_string_keeps_other_escapes() {
    assert_eq!(cook_block_string(br"C:\path\n").unwrap(), r"C:\path\n");
}

#[test]
fn empty_block_string() {
    assert_eq!(cook_block_string(b"").unwrap(), "");
    assert_eq!(cook_block_string(b"\n   \n").unwrap(), "");
}
