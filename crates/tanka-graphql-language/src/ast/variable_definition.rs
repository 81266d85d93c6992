use crate::Location;
use crate::ast::Directive;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::ast::Variable;

/// A variable declared by an operation (e.g. `$first: Int = 10`).
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub variable: Variable,
    pub type_: TypeRef,
    pub default_value: Option<DefaultValue>,
    pub directives: Vec<Directive>,
    pub location: Option<Location>,
}

/// The `= value` part of a variable or input value definition. Always a
/// constant value.
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultValue {
    pub value: Value,
    pub location: Option<Location>,
}

ast_node!(VariableDefinition, DefaultValue);

has_directive!(VariableDefinition);

with_fields!(VariableDefinition {
    with_variable => variable: Variable,
    with_type => type_: TypeRef,
    with_default_value => default_value: Option<DefaultValue>,
    with_directives => directives: Vec<Directive>,
    with_location => location: Option<Location>,
});
with_fields!(DefaultValue {
    with_value => value: Value,
    with_location => location: Option<Location>,
});
