use crate::GraphQLParseError;
use crate::Location;
use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::NodeKind;
use crate::ast::OperationDefinition;
use inherent::inherent;
use std::str::FromStr;

/// Root of a parsed executable document: operations and fragments in
/// source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecutableDocument {
    pub operation_definitions: Vec<OperationDefinition>,
    pub fragment_definitions: Vec<FragmentDefinition>,
}

#[inherent]
impl AstNode for ExecutableDocument {
    /// Documents always start at the beginning of the source.
    pub fn location(&self) -> Option<Location> {
        Some(Location::new(1, 1))
    }

    pub fn node_kind(&self) -> NodeKind {
        NodeKind::ExecutableDocument
    }
}

impl ExecutableDocument {
    /// Returns the first operation named `name`.
    pub fn operation(&self, name: &str) -> Option<&OperationDefinition> {
        self.operation_definitions
            .iter()
            .find(|op| op.name.as_ref().is_some_and(|n| n.value == name))
    }

    /// Returns the first fragment named `name`.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragment_definitions
            .iter()
            .find(|fragment| fragment.fragment_name.value == name)
    }
}

with_fields!(ExecutableDocument {
    with_operation_definitions => operation_definitions: Vec<OperationDefinition>,
    with_fragment_definitions => fragment_definitions: Vec<FragmentDefinition>,
});

impl FromStr for ExecutableDocument {
    type Err = GraphQLParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        crate::parse_executable_document(source)
    }
}
