use crate::Location;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::keywords;
use std::fmt;

/// A `directive @name(...) repeatable on LOCATION | ...` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub is_repeatable: bool,
    pub directive_locations: Vec<DirectiveLocation>,
    pub location: Option<Location>,
}

/// The kind of location where a directive may be applied.
///
/// See
/// [Directive Locations](https://spec.graphql.org/October2021/#DirectiveLocations)
/// in the spec.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    ArgumentDefinition,
    Enum,
    EnumValue,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputFieldDefinition,
    InputObject,
    Interface,
    Mutation,
    Object,
    Query,
    Scalar,
    Schema,
    Subscription,
    Union,
    VariableDefinition,
}

impl DirectiveLocation {
    /// Maps a location name (e.g. `FIELD_DEFINITION`) to a location.
    pub fn from_name(name: &[u8]) -> Option<Self> {
        Some(match name {
            b"ARGUMENT_DEFINITION" => Self::ArgumentDefinition,
            b"ENUM" => Self::Enum,
            b"ENUM_VALUE" => Self::EnumValue,
            b"FIELD" => Self::Field,
            b"FIELD_DEFINITION" => Self::FieldDefinition,
            b"FRAGMENT_DEFINITION" => Self::FragmentDefinition,
            b"FRAGMENT_SPREAD" => Self::FragmentSpread,
            b"INLINE_FRAGMENT" => Self::InlineFragment,
            b"INPUT_FIELD_DEFINITION" => Self::InputFieldDefinition,
            b"INPUT_OBJECT" => Self::InputObject,
            b"INTERFACE" => Self::Interface,
            b"MUTATION" => Self::Mutation,
            b"OBJECT" => Self::Object,
            b"QUERY" => Self::Query,
            b"SCALAR" => Self::Scalar,
            b"SCHEMA" => Self::Schema,
            b"SUBSCRIPTION" => Self::Subscription,
            b"UNION" => Self::Union,
            b"VARIABLE_DEFINITION" => Self::VariableDefinition,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::Field => "FIELD",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Mutation => "MUTATION",
            Self::Object => "OBJECT",
            Self::Query => "QUERY",
            Self::Scalar => "SCALAR",
            Self::Schema => "SCHEMA",
            Self::Subscription => "SUBSCRIPTION",
            Self::Union => "UNION",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }

    /// Returns `true` for locations inside executable documents.
    pub fn is_executable(&self) -> bool {
        keywords::EXECUTABLE_DIRECTIVE_LOCATIONS.contains(&self.as_str().as_bytes())
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

ast_node!(DirectiveDefinition);

with_fields!(DirectiveDefinition {
    with_description => description: Option<StringValue>,
    with_name => name: Name,
    with_arguments => arguments: Vec<InputValueDefinition>,
    with_is_repeatable => is_repeatable: bool,
    with_directive_locations => directive_locations: Vec<DirectiveLocation>,
    with_location => location: Option<Location>,
});
