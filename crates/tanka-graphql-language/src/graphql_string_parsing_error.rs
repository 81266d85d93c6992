/// Error returned when decoding a GraphQL string literal fails.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLStringParsingError {
    /// An invalid escape sequence was encountered (e.g. `\q`).
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// An invalid Unicode escape sequence was encountered (e.g. `\u{ZZZZ}`).
    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),

    /// The string content is not valid UTF-8.
    #[error("String is not valid UTF-8 (invalid byte at offset {0})")]
    InvalidUtf8(usize),
}
