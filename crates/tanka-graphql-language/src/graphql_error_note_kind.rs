use std::fmt;

/// How a [`GraphQLErrorNote`](crate::GraphQLErrorNote) is labelled when an
/// error is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// Extra context, e.g. where an unclosed bracket was opened.
    General,

    /// A concrete fix the user can apply.
    Help,

    /// A link into the GraphQL specification.
    Spec,
}

impl GraphQLErrorNoteKind {
    /// The label printed before the note message: `= note: ...`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "note",
            Self::Help => "help",
            Self::Spec => "spec",
        }
    }
}

impl fmt::Display for GraphQLErrorNoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
