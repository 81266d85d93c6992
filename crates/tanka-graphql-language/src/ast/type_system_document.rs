use crate::GraphQLParseError;
use crate::Location;
use crate::ast::AstNode;
use crate::ast::DirectiveDefinition;
use crate::ast::Import;
use crate::ast::NodeKind;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use inherent::inherent;
use std::str::FromStr;

/// Root of a parsed type-system (SDL) document. Every list keeps source
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeSystemDocument {
    pub schema_definitions: Vec<SchemaDefinition>,
    pub type_definitions: Vec<TypeDefinition>,
    pub directive_definitions: Vec<DirectiveDefinition>,
    pub schema_extensions: Vec<SchemaExtension>,
    pub type_extensions: Vec<TypeExtension>,
    pub imports: Vec<Import>,
}

#[inherent]
impl AstNode for TypeSystemDocument {
    /// Documents always start at the beginning of the source.
    pub fn location(&self) -> Option<Location> {
        Some(Location::new(1, 1))
    }

    pub fn node_kind(&self) -> NodeKind {
        NodeKind::TypeSystemDocument
    }
}

impl TypeSystemDocument {
    /// Returns a new document holding this document's definitions followed
    /// by `other`'s.
    pub fn merge(&self, other: &TypeSystemDocument) -> TypeSystemDocument {
        fn concat<T: Clone>(left: &[T], right: &[T]) -> Vec<T> {
            left.iter().chain(right).cloned().collect()
        }

        TypeSystemDocument {
            schema_definitions: concat(&self.schema_definitions, &other.schema_definitions),
            type_definitions: concat(&self.type_definitions, &other.type_definitions),
            directive_definitions: concat(
                &self.directive_definitions,
                &other.directive_definitions,
            ),
            schema_extensions: concat(&self.schema_extensions, &other.schema_extensions),
            type_extensions: concat(&self.type_extensions, &other.type_extensions),
            imports: concat(&self.imports, &other.imports),
        }
    }

    /// Returns the first type definition named `name`. Extensions are not
    /// consulted.
    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.type_definitions
            .iter()
            .find(|def| def.name().value == name)
    }

    /// Returns the first directive definition named `name` (without `@`).
    pub fn directive_definition(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_definitions
            .iter()
            .find(|def| def.name.value == name)
    }

    pub fn is_empty(&self) -> bool {
        self.schema_definitions.is_empty()
            && self.type_definitions.is_empty()
            && self.directive_definitions.is_empty()
            && self.schema_extensions.is_empty()
            && self.type_extensions.is_empty()
            && self.imports.is_empty()
    }
}

with_fields!(TypeSystemDocument {
    with_schema_definitions => schema_definitions: Vec<SchemaDefinition>,
    with_type_definitions => type_definitions: Vec<TypeDefinition>,
    with_directive_definitions => directive_definitions: Vec<DirectiveDefinition>,
    with_schema_extensions => schema_extensions: Vec<SchemaExtension>,
    with_type_extensions => type_extensions: Vec<TypeExtension>,
    with_imports => imports: Vec<Import>,
});

impl FromStr for TypeSystemDocument {
    type Err = GraphQLParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        crate::parse_type_system_document(source)
    }
}
