/// Categorizes lexer failures.
///
/// The lexer stops at the first malformed token; the enclosing
/// [`GraphQLParseError`](crate::GraphQLParseError) carries the location and a
/// human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphQLLexErrorKind {
    /// A `"` string reached a line terminator or the end of input.
    #[error("unterminated string")]
    UnterminatedString,

    /// A `"""` block string reached the end of input.
    #[error("unterminated block string")]
    UnterminatedBlockString,

    /// An integer part starting with `0` is followed by another digit.
    #[error("leading zero")]
    LeadingZero,

    /// A `-` is not followed by any digit.
    #[error("missing digits")]
    MissingDigits,

    /// An `e`/`E` exponent marker is not followed by any digit.
    #[error("missing exponent digits")]
    MissingExponentDigits,

    /// One or two dots that do not form a `...` spread.
    #[error("unexpected `.`")]
    UnexpectedDot,

    /// A byte that cannot start any token.
    #[error("unexpected character")]
    UnexpectedCharacter,
}
