use crate::Location;
use crate::ast::Directive;
use crate::ast::NamedType;
use crate::ast::OperationType;
use crate::ast::StringValue;

/// A `schema { query: Query ... }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub description: Option<StringValue>,
    pub directives: Vec<Directive>,
    pub operations: Vec<RootOperationTypeDefinition>,
    pub location: Option<Location>,
}

/// An `extend schema ...` extension. Extensions carry no description.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension {
    pub directives: Vec<Directive>,
    pub operations: Vec<RootOperationTypeDefinition>,
    pub location: Option<Location>,
}

/// One `operation: Type` entry of a schema definition or extension.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition {
    pub operation_type: OperationType,
    pub named_type: NamedType,
    pub location: Option<Location>,
}

impl SchemaDefinition {
    /// Returns the root type configured for `operation_type`.
    pub fn root_type(&self, operation_type: OperationType) -> Option<&NamedType> {
        self.operations
            .iter()
            .find(|op| op.operation_type == operation_type)
            .map(|op| &op.named_type)
    }
}

ast_node!(SchemaDefinition, SchemaExtension, RootOperationTypeDefinition);

has_directive!(SchemaDefinition, SchemaExtension);

with_fields!(SchemaDefinition {
    with_description => description: Option<StringValue>,
    with_directives => directives: Vec<Directive>,
    with_operations => operations: Vec<RootOperationTypeDefinition>,
    with_location => location: Option<Location>,
});
with_fields!(SchemaExtension {
    with_directives => directives: Vec<Directive>,
    with_operations => operations: Vec<RootOperationTypeDefinition>,
    with_location => location: Option<Location>,
});
with_fields!(RootOperationTypeDefinition {
    with_operation_type => operation_type: OperationType,
    with_named_type => named_type: NamedType,
    with_location => location: Option<Location>,
});
