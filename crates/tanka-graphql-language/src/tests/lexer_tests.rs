//! Tests for `GraphQLLexer`.

use crate::GraphQLLexErrorKind;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::Location;
use crate::lexer::GraphQLLexer;
use crate::tests::utils::lex_kinds;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use proptest::prelude::*;

fn single_token(source: &str) -> GraphQLToken<'_> {
    let mut lexer = GraphQLLexer::new(source);
    let token = lexer
        .next_token()
        .unwrap_or_else(|err| panic!("{}", err.format_detailed(Some(source))));
    assert_eq!(
        lexer.next_token().map(|token| token.kind),
        Ok(GraphQLTokenKind::End),
        "expected a single token in {source:?}",
    );
    token
}

fn lex_error(source: &str) -> GraphQLParseError {
    let mut lexer = GraphQLLexer::new(source);
    loop {
        match lexer.next_token() {
            Ok(token) if token.kind == GraphQLTokenKind::End => {
                panic!("Expected a lexer error for {source:?}")
            }
            Ok(_) => {}
            Err(err) => return err,
        }
    }
}

fn lex_error_kind(source: &str) -> GraphQLLexErrorKind {
    match lex_error(source).kind() {
        GraphQLParseErrorKind::LexerError(kind) => *kind,
        other => panic!("Expected a lexer error, got: {other:?}"),
    }
}

// =============================================================================
// Punctuators and names
// =============================================================================

#[test]
fn lexes_every_punctuator() {
    assert_eq!(
        lex_kinds("! $ & ( ) ... : = @ [ ] { | }"),
        vec![
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::Ampersand,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::Spread,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Equals,
            GraphQLTokenKind::At,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Pipe,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::End,
        ],
    );
}

/// Commas are insignificant and behave like whitespace.
#[test]
fn commas_are_ignored() {
    assert_eq!(
        lex_kinds(",,a,,b,"),
        vec![GraphQLTokenKind::Name, GraphQLTokenKind::Name, GraphQLTokenKind::End],
    );
}

#[test]
fn name_value_is_source_slice() {
    let source = "  _typeName2 ";
    let token = single_token(source);
    assert_eq!(token.kind, GraphQLTokenKind::Name);
    assert_eq!(token.value, b"_typeName2");
    assert_eq!(token.start, 2);
    assert_eq!(token.value.as_ptr(), source[2..].as_ptr());
}

#[test]
fn keywords_are_names() {
    let token = single_token("query");
    assert_eq!(token.kind, GraphQLTokenKind::Name);
    assert!(token.is_keyword(b"query"));
    assert!(!token.is_keyword(b"mutation"));
}

#[test]
fn empty_input_is_end() {
    assert_eq!(lex_kinds(""), vec![GraphQLTokenKind::End]);
    assert_eq!(lex_kinds(" \t\n,"), vec![GraphQLTokenKind::End]);
}

/// Once exhausted, the lexer keeps returning `End`, while the iterator stops
/// after yielding it once.
#[test]
fn end_is_sticky() {
    let mut lexer = GraphQLLexer::new("a");
    assert_eq!(lexer.next_token().map(|t| t.kind), Ok(GraphQLTokenKind::Name));
    assert_eq!(lexer.next_token().map(|t| t.kind), Ok(GraphQLTokenKind::End));
    assert_eq!(lexer.next_token().map(|t| t.kind), Ok(GraphQLTokenKind::End));

    assert_eq!(GraphQLLexer::new("a").count(), 2);
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn lexes_integers() {
    for source in ["0", "123", "-0", "-42"] {
        let token = single_token(source);
        assert_eq!(token.kind, GraphQLTokenKind::IntValue, "{source}");
        assert_eq!(token.value, source.as_bytes());
        assert!(!token.is_exponential);
    }
}

#[test]
fn lexes_floats() {
    let cases = [
        ("1.5", false),
        ("-0.25", false),
        ("1e10", true),
        ("1.5e-3", true),
        ("2E+8", true),
    ];
    for (source, is_exponential) in cases {
        let token = single_token(source);
        assert_eq!(token.kind, GraphQLTokenKind::FloatValue, "{source}");
        assert_eq!(token.value, source.as_bytes());
        assert_eq!(token.is_exponential, is_exponential, "{source}");
    }
}

#[test]
fn rejects_leading_zeros() {
    assert_eq!(lex_error_kind("007"), GraphQLLexErrorKind::LeadingZero);
    assert_eq!(lex_error_kind("-01"), GraphQLLexErrorKind::LeadingZero);
}

#[test]
fn rejects_dangling_minus() {
    assert_eq!(lex_error_kind("- 1"), GraphQLLexErrorKind::MissingDigits);
}

#[test]
fn rejects_empty_exponent() {
    assert_eq!(lex_error_kind("1e"), GraphQLLexErrorKind::MissingExponentDigits);
    assert_eq!(lex_error_kind("1.5E+"), GraphQLLexErrorKind::MissingExponentDigits);
}

/// A `.` that is not followed by a digit does not start a fraction.
#[test]
fn dot_without_digits_is_not_a_fraction() {
    let err = lex_error("1.");
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::LexerError(GraphQLLexErrorKind::UnexpectedDot),
    ));
    assert_eq!(err.location(), Location::new(1, 2));
}

// =============================================================================
// Strings
// =============================================================================

/// Escapes are left in place; the token spans the raw content between the
/// quotes.
#[test]
fn string_value_keeps_raw_escapes() {
    let token = single_token(r#""a\"b""#);
    assert_eq!(token.kind, GraphQLTokenKind::StringValue);
    assert_eq!(token.value, br#"a\"b"#);
    assert_eq!(token.start, 0);
}

/// An escaped backslash does not escape the closing quote.
#[test]
fn escaped_backslash_before_closing_quote() {
    let token = single_token(r#""a\\""#);
    assert_eq!(token.value, br"a\\");
}

#[test]
fn empty_string() {
    let token = single_token(r#""""#);
    assert_eq!(token.kind, GraphQLTokenKind::StringValue);
    assert!(token.value.is_empty());
}

#[test]
fn unterminated_string() {
    assert_eq!(lex_error_kind(r#""abc"#), GraphQLLexErrorKind::UnterminatedString);
    assert_eq!(
        lex_error_kind("\"abc\ndef\""),
        GraphQLLexErrorKind::UnterminatedString,
    );
}

#[test]
fn block_string_value_is_raw_content() {
    let token = single_token("\"\"\"\n  hello\n\"\"\"");
    assert_eq!(token.kind, GraphQLTokenKind::BlockStringValue);
    assert_eq!(token.value, b"\n  hello\n");
}

/// `\"""` inside a block string does not close it.
#[test]
fn block_string_escaped_triple_quote() {
    let token = single_token(r#""""a \""" b""""#);
    assert_eq!(token.value, br#"a \""" b"#);
}

#[test]
fn unterminated_block_string() {
    let err = lex_error("type A\n\"\"\"never closed");
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::LexerError(GraphQLLexErrorKind::UnterminatedBlockString),
    ));
    assert_eq!(err.location(), Location::new(2, 1));
}

// =============================================================================
// Comments, BOM and line tracking
// =============================================================================

#[test]
fn comments_are_skipped_by_default() {
    assert_eq!(
        lex_kinds("# leading\nname # trailing"),
        vec![GraphQLTokenKind::Name, GraphQLTokenKind::End],
    );
}

#[test]
fn comments_can_be_kept() {
    let tokens = GraphQLLexer::new("# hi\nname")
        .with_comments(true)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(tokens[0].kind, GraphQLTokenKind::Comment);
    assert_eq!(tokens[0].value, b" hi");
    assert_eq!(tokens[1].kind, GraphQLTokenKind::Name);
    assert_eq!(tokens[1].location(), Location::new(2, 1));
}

#[test]
fn byte_order_mark_is_skipped_once() {
    let token = single_token("\u{FEFF}name");
    assert_eq!(token.value, b"name");
    assert_eq!(token.location(), Location::new(1, 1));

    // A BOM anywhere else is not ignorable.
    let err = lex_error("a \u{FEFF}");
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::LexerError(GraphQLLexErrorKind::UnexpectedCharacter),
    ));
}

#[test]
fn tracks_lines_and_columns() {
    let tokens = GraphQLLexer::new("a\n  b\r\n\tc\rd")
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let locations: Vec<_> = tokens.iter().map(|token| token.location()).collect();
    assert_eq!(
        locations,
        vec![
            Location::new(1, 1),
            Location::new(2, 3),
            Location::new(3, 2),
            Location::new(4, 1),
            Location::new(4, 2),
        ],
    );
}

/// Line terminators inside a block string advance the line counter.
#[test]
fn block_string_newlines_advance_lines() {
    let tokens = GraphQLLexer::new("\"\"\"one\r\ntwo\nthree\"\"\" next")
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(tokens[0].location(), Location::new(1, 1));
    assert_eq!(tokens[1].value, b"next");
    assert_eq!(tokens[1].location(), Location::new(3, 10));
}

// =============================================================================
// Invalid input
// =============================================================================

#[test]
fn unexpected_character() {
    let err = lex_error("{ a ? }");
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::LexerError(GraphQLLexErrorKind::UnexpectedCharacter),
    ));
    assert_eq!(err.location(), Location::new(1, 5));
    assert!(err.message().contains('?'));
}

#[test]
fn single_quote_gets_help_note() {
    let err = lex_error("'text'");
    assert!(!err.notes().is_empty());
}

#[test]
fn double_dot_is_rejected() {
    assert_eq!(lex_error_kind("..a"), GraphQLLexErrorKind::UnexpectedDot);
}

/// The iterator yields the error and then stops.
#[test]
fn iterator_ends_after_error() {
    let results: Vec<_> = GraphQLLexer::new("a ? b").collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    /// Any valid name lexes to a single `Name` token whose value is exactly
    /// the input.
    #[test]
    fn any_name_round_trips(name in "[_A-Za-z][_0-9A-Za-z]{0,30}") {
        let token = single_token(&name);
        prop_assert_eq!(token.kind, GraphQLTokenKind::Name);
        prop_assert_eq!(token.value, name.as_bytes());
    }

    /// Integers without leading zeros always lex as a single `IntValue`.
    #[test]
    fn any_integer_lexes(value in any::<i64>()) {
        let source = value.to_string();
        let token = single_token(&source);
        prop_assert_eq!(token.kind, GraphQLTokenKind::IntValue);
        prop_assert_eq!(token.value, source.as_bytes());
    }

    /// The lexer never panics, whatever the input.
    #[test]
    fn arbitrary_input_never_panics(source in ".{0,64}") {
        for result in GraphQLLexer::new(&source) {
            let _ = result;
        }
    }
}
