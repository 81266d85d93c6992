use crate::GraphQLErrorNoteKind;
use crate::Location;
use crate::SmallVec;

/// An error note providing additional context about an error.
///
/// Notes augment the primary error message with explanations, fix
/// suggestions, specification links, and related source locations (e.g.
/// where an unterminated string was opened).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,

    /// Optional location of a related source position.
    pub location: Option<Location>,
}

impl GraphQLErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            location: None,
        }
    }

    pub fn general_with_location(
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            location: Some(location),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            location: None,
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Spec,
            message: url.into(),
            location: None,
        }
    }
}

/// Most errors carry 0-2 notes, so they are stored inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
