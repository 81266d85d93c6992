//! Tests for `ByteSpanReader`.

use crate::ByteSpanReader;
use crate::keywords;

/// A fresh reader has not consumed anything, which is distinct from having
/// consumed byte 0.
#[test]
fn reader_starts_before_first_byte() {
    let mut reader = ByteSpanReader::new(b"ab");
    assert_eq!(reader.position(), None);
    assert_eq!(reader.offset(), 0);

    assert!(reader.advance());
    assert_eq!(reader.position(), Some(0));
    assert_eq!(reader.offset(), 1);
}

#[test]
fn peek_does_not_consume() {
    let reader = ByteSpanReader::new(b"xy");
    assert_eq!(reader.try_peek(), Some(b'x'));
    assert_eq!(reader.try_peek(), Some(b'x'));
    assert_eq!(reader.try_peek_nth(1), Some(b'y'));
    assert_eq!(reader.try_peek_nth(2), None);
}

/// Advancing past the end is refused without moving the cursor.
#[test]
fn advance_stops_at_end() {
    let mut reader = ByteSpanReader::new(b"a");
    assert!(reader.advance());
    assert!(reader.is_at_end());
    assert!(!reader.advance());
    assert_eq!(reader.offset(), 1);
    assert_eq!(reader.try_peek(), None);
}

#[test]
fn advance_by_is_all_or_nothing() {
    let mut reader = ByteSpanReader::new(b"abc");
    assert!(!reader.advance_by(4));
    assert_eq!(reader.offset(), 0);
    assert!(reader.advance_by(3));
    assert!(reader.is_at_end());
}

#[test]
fn try_skip_next_only_consumes_on_match() {
    let mut reader = ByteSpanReader::new(b"...x");
    assert!(reader.is_next(b".."));
    assert!(!reader.try_skip_next(b"...."));
    assert_eq!(reader.offset(), 0);
    assert!(reader.try_skip_next(b"..."));
    assert_eq!(reader.remaining(), b"x");
}

#[test]
fn try_read_returns_consumed_byte() {
    let mut reader = ByteSpanReader::new(b"q");
    assert_eq!(reader.try_read(), Some(b'q'));
    assert_eq!(reader.try_read(), None);
}

/// The returned slice borrows the original buffer rather than copying it.
#[test]
fn try_read_while_any_returns_zero_copy_slice() {
    let source = b"user_name1 rest";
    let mut reader = ByteSpanReader::new(source);
    let name = reader.try_read_while_any(keywords::is_name_continue);

    assert_eq!(name, b"user_name1");
    assert_eq!(name.as_ptr(), source.as_ptr());
    assert_eq!(reader.try_peek(), Some(b' '));

    let empty = reader.try_read_while_any(keywords::is_digit);
    assert!(empty.is_empty());
    assert_eq!(reader.offset(), 10);
}

#[test]
fn slice_from_covers_consumed_range() {
    let mut reader = ByteSpanReader::new(b"12345");
    reader.advance();
    let start = reader.offset();
    reader.advance_by(3);
    assert_eq!(reader.slice_from(start), b"234");
}

#[test]
fn empty_reader() {
    let mut reader = ByteSpanReader::new(b"");
    assert!(reader.is_empty());
    assert!(reader.is_at_end());
    assert_eq!(reader.try_read(), None);
    assert_eq!(reader.position(), None);
}
