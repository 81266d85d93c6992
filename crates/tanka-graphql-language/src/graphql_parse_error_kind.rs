use crate::GraphQLLexErrorKind;
use crate::ReservedNameContext;
use crate::ValueParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context (suggestions, explanations) belongs in the
/// `notes` of [`GraphQLParseError`](crate::GraphQLParseError).
///
/// The `#[error(...)]` messages are concise/programmatic. Full human-readable
/// messages are in `GraphQLParseError::message()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What tokens were expected (e.g. `[":", "{", "@"]`).
        expected: Vec<String>,
        /// Description of what was found (e.g. `"String"` or `"}"`).
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    ///
    /// # Example
    /// ```text
    /// { field_with_missing_brace
    ///                           ^ expected `}`, found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEnd {
        /// What was expected when the end of input was reached.
        expected: Vec<String>,
    },

    /// A name was found where a specific keyword was required.
    ///
    /// # Example
    /// ```text
    /// fragment Foo in User { id }
    ///              ^^ expected `on`
    /// ```
    #[error("unexpected keyword: `{found}`")]
    UnexpectedKeyword {
        /// The keyword (or keywords) that would have been accepted.
        expected: Vec<String>,
        /// The name that was found instead.
        found: String,
    },

    /// The lexer could not produce a token.
    ///
    /// The lexer's message and notes are preserved in the parent
    /// `GraphQLParseError`.
    #[error("lexer error: {0}")]
    LexerError(GraphQLLexErrorKind),

    /// A literal value (string, int) could not be converted.
    ///
    /// # Example
    /// ```text
    /// query { field(limit: 99999999999) }
    ///                      ^^^^^^^^^^^ integer overflow
    /// ```
    #[error("invalid value")]
    InvalidValue(ValueParsingError),

    /// Reserved name used in a context where it is not allowed.
    ///
    /// # Example
    /// ```text
    /// fragment on on User { name }
    ///          ^^ fragment name cannot be `on`
    /// ```
    #[error("reserved name: `{name}`")]
    ReservedName {
        /// The reserved name that was used (e.g. `"on"`, `"true"`).
        name: String,
        /// The context where this name is not allowed.
        context: ReservedNameContext,
    },

    /// A `$variable` appeared in a position that only accepts constants.
    ///
    /// # Example
    /// ```text
    /// query ($a: Int = $b) { f }
    ///                  ^^ variables are not allowed in default values
    /// ```
    #[error("variable not allowed in {context}")]
    VariableNotAllowed {
        /// Where the constant value was being parsed (e.g. `"default value"`).
        context: String,
    },

    /// Empty construct that requires content.
    ///
    /// # Example
    /// ```text
    /// query { user { } }
    ///              ^ selection set cannot be empty
    /// ```
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        /// What construct is empty (e.g. `"selection set"`).
        construct: String,
    },

    /// A description preceded a construct that cannot have one.
    ///
    /// # Example
    /// ```text
    /// "Adds age" extend type User { age: Int }
    /// ^^^^^^^^^^ type extensions cannot have a description
    /// ```
    #[error("description not allowed on {construct}")]
    DescriptionNotAllowed {
        /// The construct that followed the description (e.g.
        /// `"type extension"`).
        construct: String,
    },

    /// Nested values, selection sets, or types exceeded the configured
    /// maximum depth.
    #[error("nesting too deep (limit: {limit})")]
    NestingTooDeep {
        /// The configured maximum recursion depth.
        limit: usize,
    },
}
