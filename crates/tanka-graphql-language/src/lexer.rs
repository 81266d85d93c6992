//! A byte-level GraphQL lexer.
//!
//! [`GraphQLLexer`] produces one [`GraphQLToken`] at a time from a borrowed
//! byte buffer. Token values are zero-copy slices of the source: strings are
//! handed out still escaped and are only decoded once the parser builds an
//! AST node (see [`crate::string_value`]).
//!
//! # Usage
//!
//! ```rust
//! use tanka_graphql_language::lexer::GraphQLLexer;
//! use tanka_graphql_language::token::GraphQLTokenKind;
//!
//! let kinds = GraphQLLexer::new("{ name }")
//!     .map(|token| token.map(|token| token.kind))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::Name,
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::End,
//! ]);
//! ```

use crate::ByteSpanReader;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLLexErrorKind;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::Location;
use crate::keywords;
use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// Tokenizes a single byte buffer.
///
/// Line and column numbers are 1-based; columns count bytes. `\n`, `\r` and
/// `\r\n` each end exactly one line. A UTF-8 byte order mark is skipped once
/// at the very start of the input.
///
/// The lexer stops at the first malformed token: the error is returned from
/// [`next_token()`](Self::next_token) and the iterator ends after yielding
/// it.
pub struct GraphQLLexer<'src> {
    reader: ByteSpanReader<'src>,

    /// Current 1-based line number.
    line: usize,

    /// Byte offset of the first byte of the current line.
    line_start: usize,

    /// Emit `#` comments as `Comment` tokens instead of skipping them.
    keep_comments: bool,

    /// Line of byte 0 and how many columns precede it on that line. Non-zero
    /// only for lexers over a slice of a larger document.
    first_line: usize,
    first_line_indent: usize,

    /// Whether the `End` token (or an error) has been yielded by the iterator.
    finished: bool,
}

impl<'src> GraphQLLexer<'src> {
    pub fn new(source: &'src (impl AsRef<[u8]> + ?Sized)) -> Self {
        Self {
            reader: ByteSpanReader::new(source.as_ref()),
            line: 1,
            line_start: 0,
            keep_comments: false,
            first_line: 1,
            first_line_indent: 0,
            finished: false,
        }
    }

    /// Reports locations as if byte 0 of the source sat at `origin` in an
    /// enclosing document.
    pub(crate) fn starting_at(mut self, origin: Location) -> Self {
        self.line = origin.line;
        self.first_line = origin.line;
        self.first_line_indent = origin.column.saturating_sub(1);
        self
    }

    /// Configures whether `#` comments are emitted as
    /// [`GraphQLTokenKind::Comment`] tokens.
    pub fn with_comments(mut self, keep_comments: bool) -> Self {
        self.keep_comments = keep_comments;
        self
    }

    /// The full buffer being lexed.
    pub fn source(&self) -> &'src [u8] {
        self.reader.span()
    }

    /// Location of the next unread byte.
    pub fn location(&self) -> Location {
        self.location_at(self.reader.offset())
    }

    fn location_at(&self, offset: usize) -> Location {
        let column = offset - self.line_start + 1;
        if self.line == self.first_line {
            Location::new(self.line, column + self.first_line_indent)
        } else {
            Location::new(self.line, column)
        }
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Reads the next token.
    ///
    /// Once the input is exhausted every call returns an `End` token.
    pub fn next_token(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.reader.position().is_none() && self.reader.try_skip_next(keywords::BOM) {
            self.line_start = self.reader.offset();
        }

        loop {
            self.skip_ignored();

            let start = self.reader.offset();
            let Some(byte) = self.reader.try_peek() else {
                return Ok(self.make_token(GraphQLTokenKind::End, start, &[]));
            };

            if let Some(kind) = GraphQLTokenKind::from_punctuator(byte) {
                self.reader.advance();
                return Ok(self.make_token(kind, start, self.reader.slice_from(start)));
            }

            match byte {
                b'#' => {
                    let comment = self.lex_comment();
                    if self.keep_comments {
                        return Ok(comment);
                    }
                }

                b'"' => return self.lex_string(),

                b'.' => return self.lex_dots(),

                b if keywords::is_name_start(b) => {
                    let name = self.reader.try_read_while_any(keywords::is_name_continue);
                    return Ok(self.make_token(GraphQLTokenKind::Name, start, name));
                }

                b if b == b'-' || keywords::is_digit(b) => return self.lex_number(),

                _ => return Err(self.unexpected_character()),
            }
        }
    }

    fn make_token(
        &self,
        kind: GraphQLTokenKind,
        start: usize,
        value: &'src [u8],
    ) -> GraphQLToken<'src> {
        let location = self.location_at(start);
        GraphQLToken {
            kind,
            value,
            line: location.line,
            column: location.column,
            start,
            is_exponential: false,
        }
    }

    fn error(
        &self,
        kind: GraphQLLexErrorKind,
        message: impl Into<String>,
        location: Location,
        notes: GraphQLErrorNotes,
    ) -> GraphQLParseError {
        GraphQLParseError::with_notes(
            message,
            location,
            GraphQLParseErrorKind::LexerError(kind),
            notes,
        )
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips spaces, tabs, commas and line terminators.
    fn skip_ignored(&mut self) {
        while let Some(byte) = self.reader.try_peek() {
            match byte {
                b' ' | b'\t' | b',' => {
                    self.reader.advance();
                }
                b'\n' => {
                    self.reader.advance();
                    self.start_new_line();
                }
                b'\r' => {
                    self.reader.advance();
                    self.reader.try_skip_next(b"\n");
                    self.start_new_line();
                }
                _ => break,
            }
        }
    }

    fn start_new_line(&mut self) {
        self.line += 1;
        self.line_start = self.reader.offset();
    }

    /// Accounts for line terminators inside an already-consumed slice that
    /// begins at byte offset `slice_start`.
    fn track_newlines(&mut self, slice: &[u8], slice_start: usize) {
        for index in memchr::memchr2_iter(b'\n', b'\r', slice) {
            if slice[index] == b'\r' && slice.get(index + 1) == Some(&b'\n') {
                continue;
            }
            self.line += 1;
            self.line_start = slice_start + index + 1;
        }
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Consumes a comment up to (not including) the line terminator.
    fn lex_comment(&mut self) -> GraphQLToken<'src> {
        let start = self.reader.offset();
        self.reader.advance();
        let content_start = self.reader.offset();
        let remaining = self.reader.remaining();
        let content_len = memchr::memchr2(b'\n', b'\r', remaining).unwrap_or(remaining.len());
        self.reader.advance_by(content_len);
        self.make_token(
            GraphQLTokenKind::Comment,
            start,
            self.reader.slice_from(content_start),
        )
    }

    // =========================================================================
    // Dots
    // =========================================================================

    /// Lexes `...`, rejecting one or two dots with a hint.
    fn lex_dots(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let start = self.reader.offset();
        if self.reader.try_skip_next(b"...") {
            return Ok(self.make_token(
                GraphQLTokenKind::Spread,
                start,
                self.reader.slice_from(start),
            ));
        }

        let location = self.location_at(start);
        if self.reader.is_next(b"..") {
            return Err(self.error(
                GraphQLLexErrorKind::UnexpectedDot,
                "Unexpected `..` (use `...` for spread operator)",
                location,
                smallvec![GraphQLErrorNote::help(
                    "Add one more `.` to form the spread operator `...`"
                )],
            ));
        }

        let notes = if self.dots_are_spaced(start) {
            smallvec![GraphQLErrorNote::help(
                "These dots may have been intended to form a `...` spread \
                 operator. Try removing the extra spacing between the dots."
            )]
        } else {
            smallvec![]
        };
        Err(self.error(
            GraphQLLexErrorKind::UnexpectedDot,
            "Unexpected `.`",
            location,
            notes,
        ))
    }

    /// Returns `true` for `. .`-style input on a single line.
    fn dots_are_spaced(&self, start: usize) -> bool {
        let rest = &self.reader.span()[start + 1..];
        rest.iter()
            .find(|byte| !matches!(byte, b' ' | b'\t'))
            .is_some_and(|byte| *byte == b'.')
            && rest.first().is_some_and(|byte| matches!(byte, b' ' | b'\t'))
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Handles:
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fractional part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// The literal is only classified and sliced here; conversion happens
    /// in the parser.
    fn lex_number(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let start = self.reader.offset();
        let mut kind = GraphQLTokenKind::IntValue;
        let mut is_exponential = false;

        self.reader.try_skip_next(b"-");

        let integer_part = self.reader.try_read_while_any(keywords::is_digit);
        if integer_part.is_empty() {
            return Err(self.error(
                GraphQLLexErrorKind::MissingDigits,
                "Unexpected `-`",
                self.location_at(start),
                smallvec![GraphQLErrorNote::help(
                    "A `-` must be immediately followed by the digits of a number"
                )],
            ));
        }
        if integer_part.len() > 1 && integer_part[0] == b'0' {
            return Err(self.error(
                GraphQLLexErrorKind::LeadingZero,
                format!(
                    "Invalid number: leading zeros are not allowed: `{}`",
                    String::from_utf8_lossy(self.reader.slice_from(start)),
                ),
                self.location_at(start),
                smallvec![GraphQLErrorNote::spec(
                    "https://spec.graphql.org/October2021/#sec-Int-Value"
                )],
            ));
        }

        if self.reader.try_peek() == Some(b'.')
            && self.reader.try_peek_nth(1).is_some_and(keywords::is_digit)
        {
            kind = GraphQLTokenKind::FloatValue;
            self.reader.advance();
            self.reader.try_read_while_any(keywords::is_digit);
        }

        if let Some(b'e' | b'E') = self.reader.try_peek() {
            kind = GraphQLTokenKind::FloatValue;
            is_exponential = true;
            self.reader.advance();
            if let Some(b'+' | b'-') = self.reader.try_peek() {
                self.reader.advance();
            }
            if self.reader.try_read_while_any(keywords::is_digit).is_empty() {
                return Err(self.error(
                    GraphQLLexErrorKind::MissingExponentDigits,
                    format!(
                        "Invalid number: exponent must have at least one digit: `{}`",
                        String::from_utf8_lossy(self.reader.slice_from(start)),
                    ),
                    self.location_at(start),
                    smallvec![GraphQLErrorNote::spec(
                        "https://spec.graphql.org/October2021/#sec-Float-Value"
                    )],
                ));
            }
        }

        let mut token = self.make_token(kind, start, self.reader.slice_from(start));
        token.is_exponential = is_exponential;
        Ok(token)
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Lexes a single-line or block string.
    fn lex_string(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.reader.is_next(b"\"\"\"") {
            return self.lex_block_string();
        }

        let start = self.reader.offset();
        self.reader.advance();
        let content_start = self.reader.offset();

        loop {
            match self.reader.try_peek() {
                None => {
                    return Err(self.error(
                        GraphQLLexErrorKind::UnterminatedString,
                        "Unterminated string literal",
                        self.location_at(start),
                        smallvec![GraphQLErrorNote::help("Add closing `\"`")],
                    ));
                }
                Some(b'\n' | b'\r') => {
                    return Err(self.error(
                        GraphQLLexErrorKind::UnterminatedString,
                        "Unterminated string literal",
                        self.location_at(start),
                        smallvec![
                            GraphQLErrorNote::general(
                                "Single-line strings cannot contain unescaped newlines"
                            ),
                            GraphQLErrorNote::help(
                                "Use a block string (triple quotes) for multi-line \
                                 strings, or escape the newline with `\\n`"
                            ),
                        ],
                    ));
                }
                Some(b'"') => break,
                Some(b'\\') => {
                    // The escaped byte can never close the string.
                    self.reader.advance();
                    if let Some(b'\n' | b'\r') | None = self.reader.try_peek() {
                        continue;
                    }
                    self.reader.advance();
                }
                Some(_) => {
                    self.reader.advance();
                }
            }
        }

        let content = self.reader.slice_from(content_start);
        self.reader.advance();
        Ok(self.make_token(GraphQLTokenKind::StringValue, start, content))
    }

    /// Lexes a `"""` block string. `\"""` inside the block does not close it.
    fn lex_block_string(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let start = self.reader.offset();
        let location = self.location_at(start);
        self.reader.advance_by(3);
        let content_start = self.reader.offset();

        loop {
            let remaining = self.reader.remaining();
            let Some(index) = memchr::memchr2(b'"', b'\\', remaining) else {
                self.reader.advance_by(remaining.len());
                return Err(self.error(
                    GraphQLLexErrorKind::UnterminatedBlockString,
                    "Unterminated block string",
                    location,
                    smallvec![GraphQLErrorNote::help("Add closing `\"\"\"`")],
                ));
            };
            self.reader.advance_by(index);

            if self.reader.try_skip_next(b"\\\"\"\"") {
                continue;
            }
            if self.reader.is_next(b"\"\"\"") {
                let content = self.reader.slice_from(content_start);
                self.reader.advance_by(3);
                let token = self.make_token(GraphQLTokenKind::BlockStringValue, start, content);
                self.track_newlines(content, content_start);
                return Ok(token);
            }
            self.reader.advance();
        }
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn unexpected_character(&self) -> GraphQLParseError {
        let location = self.location();
        let remaining = self.reader.remaining();
        let prefix = &remaining[..remaining.len().min(4)];
        let valid = match std::str::from_utf8(prefix) {
            Ok(text) => text,
            Err(err) => std::str::from_utf8(&prefix[..err.valid_up_to()]).unwrap_or(""),
        };

        let message = match valid.chars().next() {
            Some(ch) => format!("Unexpected character {}", describe_char(ch)),
            None => format!(
                "Unexpected byte 0x{:02X} (not valid UTF-8)",
                prefix.first().copied().unwrap_or_default(),
            ),
        };
        let notes = match valid.chars().next() {
            Some('\'') => smallvec![GraphQLErrorNote::help(
                "GraphQL strings are delimited by `\"`, not `'`"
            )],
            _ => smallvec![],
        };
        self.error(GraphQLLexErrorKind::UnexpectedCharacter, message, location, notes)
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for GraphQLLexer<'src> {
    type Item = Result<GraphQLToken<'src>, GraphQLParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        if !matches!(&result, Ok(token) if token.kind != GraphQLTokenKind::End) {
            self.finished = true;
        }
        Some(result)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns a human-readable description of a character for error messages.
///
/// Invisible and control characters include their code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || is_invisible(ch) {
        match unicode_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {})", ch.escape_debug(), ch as u32, name),
            None => format!("`{}` (U+{:04X})", ch.escape_debug(), ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

fn is_invisible(ch: char) -> bool {
    matches!(ch, '\u{200B}'..='\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2060}' | '\u{FEFF}')
}

/// Names for the invisible characters most often pasted into documents.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{00AD}' => Some("SOFT HYPHEN"),
        '\u{2002}' => Some("EN SPACE"),
        '\u{2003}' => Some("EM SPACE"),
        '\u{2009}' => Some("THIN SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{200E}' => Some("LEFT-TO-RIGHT MARK"),
        '\u{200F}' => Some("RIGHT-TO-LEFT MARK"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{202A}' => Some("LEFT-TO-RIGHT EMBEDDING"),
        '\u{202B}' => Some("RIGHT-TO-LEFT EMBEDDING"),
        '\u{202C}' => Some("POP DIRECTIONAL FORMATTING"),
        '\u{202D}' => Some("LEFT-TO-RIGHT OVERRIDE"),
        '\u{202E}' => Some("RIGHT-TO-LEFT OVERRIDE"),
        '\u{2060}' => Some("WORD JOINER"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        '\u{FEFF}' => Some("BYTE ORDER MARK"),
        _ => None,
    }
}
