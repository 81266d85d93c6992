/// Default bound on nested values, selection sets, and type references.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 64;

/// Tunables for a [`GraphQLParser`](crate::GraphQLParser).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphQLParserOptions {
    /// Maximum nesting of values, selection sets, and type references before
    /// parsing fails with
    /// [`NestingTooDeep`](crate::GraphQLParseErrorKind::NestingTooDeep).
    pub max_recursion_depth: usize,
}

impl GraphQLParserOptions {
    pub fn with_max_recursion_depth(self, max_recursion_depth: usize) -> Self {
        Self {
            max_recursion_depth,
            ..self
        }
    }
}

impl Default for GraphQLParserOptions {
    fn default() -> Self {
        Self {
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}
