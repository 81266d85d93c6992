//! Immutable AST for executable and type-system GraphQL documents.
//!
//! Nodes own their data (names and strings are decoded into `String`s at
//! parse time) and carry the [`Location`](crate::Location) of their first
//! token. Nodes are never modified in place: every struct node has
//! `with_<field>()` helpers that return a copy with one field replaced.
//!
//! ```rust
//! use tanka_graphql_language::ast::Name;
//! use tanka_graphql_language::ast::TypeDefinition;
//! use tanka_graphql_language::parse_type_system_document;
//!
//! let document = parse_type_system_document("type User { id: ID! }").unwrap();
//! let TypeDefinition::Object(user) = &document.type_definitions[0] else {
//!     unreachable!()
//! };
//! let account = user.with_name(Name::new("Account"));
//! assert_eq!(user.name.value, "User");
//! assert_eq!(account.name.value, "Account");
//! assert_eq!(account.fields, user.fields);
//! ```

#[macro_use]
mod macros;

mod ast_node;
mod directive;
mod directive_definition;
mod executable_document;
mod field_definition;
mod fragment_definition;
mod import;
mod name;
mod node_ref;
mod operation_definition;
mod schema_definition;
mod selection;
mod type_definition;
mod type_ref;
mod type_system_document;
mod value;
mod variable_definition;

pub use ast_node::AstNode;
pub use directive::Argument;
pub use directive::Directive;
pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveLocation;
pub use executable_document::ExecutableDocument;
pub use field_definition::FieldDefinition;
pub use field_definition::InputValueDefinition;
pub use fragment_definition::FragmentDefinition;
pub use import::Import;
pub use name::Name;
pub use node_ref::NodeKind;
pub use node_ref::NodeRef;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationType;
pub use schema_definition::RootOperationTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use schema_definition::SchemaExtension;
pub use selection::FieldSelection;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use selection::SelectionSet;
pub use type_definition::EnumDefinition;
pub use type_definition::EnumValueDefinition;
pub use type_definition::InputObjectDefinition;
pub use type_definition::InterfaceDefinition;
pub use type_definition::ObjectDefinition;
pub use type_definition::ScalarDefinition;
pub use type_definition::TypeDefinition;
pub use type_definition::TypeExtension;
pub use type_definition::UnionDefinition;
pub use type_ref::ListType;
pub use type_ref::NamedType;
pub use type_ref::NonNullType;
pub use type_ref::TypeRef;
pub use type_system_document::TypeSystemDocument;
pub use value::BooleanValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::ListValue;
pub use value::NullValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::StringValue;
pub use value::Value;
pub use value::Variable;
pub use variable_definition::DefaultValue;
pub use variable_definition::VariableDefinition;
