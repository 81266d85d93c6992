use std::fmt;

/// The kind of a GraphQL token.
///
/// Keywords (including `true`, `false` and `null`) are lexed as `Name`; the
/// parser compares the token value against [`crate::keywords`].
///
/// Negative numbers like `-123` are lexed as single tokens, not as separate
/// minus and number tokens. This matches the GraphQL grammar for
/// `IntValue`/`FloatValue`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTokenKind {
    // =========================================================================
    // Stream boundaries
    // =========================================================================
    /// Before the first token has been read.
    Start,
    /// End of input.
    End,

    // =========================================================================
    // Literals
    // =========================================================================
    Name,
    IntValue,
    FloatValue,
    /// A `"..."` string. The token value is the still-escaped content between
    /// the quotes.
    StringValue,
    /// A `"""..."""` block string. The token value is the raw content between
    /// the triple quotes.
    BlockStringValue,
    /// A `#` comment (only produced when the lexer keeps comments). The token
    /// value excludes the leading `#`.
    Comment,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `...`
    Spread,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,
}

impl GraphQLTokenKind {
    /// Returns the punctuator kind for a single byte, if any.
    pub fn from_punctuator(byte: u8) -> Option<Self> {
        Some(match byte {
            b'&' => Self::Ampersand,
            b'@' => Self::At,
            b'!' => Self::Bang,
            b':' => Self::Colon,
            b'}' => Self::CurlyBraceClose,
            b'{' => Self::CurlyBraceOpen,
            b'$' => Self::Dollar,
            b'=' => Self::Equals,
            b')' => Self::ParenClose,
            b'(' => Self::ParenOpen,
            b'|' => Self::Pipe,
            b']' => Self::SquareBracketClose,
            b'[' => Self::SquareBracketOpen,
            _ => return None,
        })
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the source text of a punctuator, or `None` for other kinds.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        Some(match self {
            Self::Ampersand => "&",
            Self::At => "@",
            Self::Bang => "!",
            Self::Colon => ":",
            Self::CurlyBraceClose => "}",
            Self::CurlyBraceOpen => "{",
            Self::Dollar => "$",
            Self::Equals => "=",
            Self::ParenClose => ")",
            Self::ParenOpen => "(",
            Self::Pipe => "|",
            Self::Spread => "...",
            Self::SquareBracketClose => "]",
            Self::SquareBracketOpen => "[",
            _ => return None,
        })
    }

    /// Returns `true` for both single-line and block strings.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::StringValue | Self::BlockStringValue)
    }
}

impl fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(punctuator) = self.as_punctuator_str() {
            return write!(f, "`{punctuator}`");
        }
        f.write_str(match self {
            Self::Start => "start of input",
            Self::End => "end of input",
            Self::Name => "name",
            Self::IntValue => "integer",
            Self::FloatValue => "float",
            Self::StringValue => "string",
            Self::BlockStringValue => "block string",
            Self::Comment => "comment",
            _ => "punctuator",
        })
    }
}
