use std::fmt;

/// A 1-based `line:column` position in a GraphQL source buffer.
///
/// Columns count bytes from the start of the line, so a multi-byte UTF-8
/// character advances the column by its encoded length. Locations are
/// diagnostic metadata only; parsers attach one to every node they build,
/// pointing at the node's first token.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Location {
    /// Line number (1-based: first line is 1).
    pub line: usize,

    /// Byte column within the line (1-based: first byte is 1).
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
