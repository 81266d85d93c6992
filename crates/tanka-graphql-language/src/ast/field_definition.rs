use crate::Location;
use crate::ast::DefaultValue;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::TypeRef;

/// A field of an object or interface type (e.g. `friends(first: Int): [User]`).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub type_: TypeRef,
    pub directives: Vec<Directive>,
    pub location: Option<Location>,
}

/// An argument definition or input object field (e.g. `first: Int = 10`).
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub type_: TypeRef,
    pub default_value: Option<DefaultValue>,
    pub directives: Vec<Directive>,
    pub location: Option<Location>,
}

impl FieldDefinition {
    /// Returns the first argument definition named `name`.
    pub fn argument(&self, name: &str) -> Option<&InputValueDefinition> {
        self.arguments.iter().find(|arg| arg.name.value == name)
    }
}

ast_node!(FieldDefinition, InputValueDefinition);

has_directive!(FieldDefinition, InputValueDefinition);

with_fields!(FieldDefinition {
    with_description => description: Option<StringValue>,
    with_name => name: Name,
    with_arguments => arguments: Vec<InputValueDefinition>,
    with_type => type_: TypeRef,
    with_directives => directives: Vec<Directive>,
    with_location => location: Option<Location>,
});
with_fields!(InputValueDefinition {
    with_description => description: Option<StringValue>,
    with_name => name: Name,
    with_type => type_: TypeRef,
    with_default_value => default_value: Option<DefaultValue>,
    with_directives => directives: Vec<Directive>,
    with_location => location: Option<Location>,
});
