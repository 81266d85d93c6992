use crate::Location;
use crate::token::GraphQLTokenKind;
use std::borrow::Cow;

/// A single lexed token.
///
/// Tokens are produced one at a time and never collected by the parser. The
/// `value` borrows directly from the source buffer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind,

    /// The token's bytes. For strings this is the content between the
    /// quotes, still escaped; for comments the text after `#`.
    pub value: &'src [u8],

    /// 1-based line of the token's first byte.
    pub line: usize,

    /// 1-based byte column of the token's first byte.
    pub column: usize,

    /// Byte offset of the token's first byte (including any opening quotes).
    pub start: usize,

    /// Set for `FloatValue` tokens that carry an exponent part.
    pub is_exponential: bool,
}

impl<'src> GraphQLToken<'src> {
    pub(crate) fn start_of_input() -> Self {
        Self {
            kind: GraphQLTokenKind::Start,
            value: &[],
            line: 1,
            column: 1,
            start: 0,
            is_exponential: false,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// The token value as text. Names, numbers and punctuators are ASCII so
    /// this only allocates for strings containing invalid UTF-8.
    pub fn value_str(&self) -> Cow<'src, str> {
        String::from_utf8_lossy(self.value)
    }

    /// Returns `true` if this is a `Name` token whose value is `keyword`.
    pub fn is_keyword(&self, keyword: &[u8]) -> bool {
        self.kind == GraphQLTokenKind::Name && self.value == keyword
    }

    /// A short human-readable rendering for "found ..." error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            GraphQLTokenKind::Name => format!("`{}`", self.value_str()),
            GraphQLTokenKind::IntValue | GraphQLTokenKind::FloatValue => {
                format!("number `{}`", self.value_str())
            }
            GraphQLTokenKind::StringValue => {
                format!("string \"{}\"", truncate(&self.value_str(), 20))
            }
            GraphQLTokenKind::BlockStringValue => "block string".to_string(),
            kind => kind.to_string(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}
