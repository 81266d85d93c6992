use crate::GraphQLStringParsingError;

/// Errors that occur when converting raw literal text into values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    /// Invalid string literal (bad escape sequence, invalid UTF-8).
    #[error("Invalid GraphQL string: {0}")]
    String(#[from] GraphQLStringParsingError),

    /// Integer literal that does not fit a signed 32-bit integer.
    #[error("Invalid GraphQL integer: {0}")]
    Int(String),

    /// Float literal that is not a finite `f64`.
    #[error("Invalid GraphQL float: {0}")]
    Float(String),
}
