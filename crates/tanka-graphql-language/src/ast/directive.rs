use crate::Location;
use crate::ast::Name;
use crate::ast::Value;

/// A directive applied to a definition or selection (e.g.
/// `@include(if: $flag)`).
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub location: Option<Location>,
}

impl Directive {
    /// Returns the first argument named `name`.
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name.value == name)
    }
}

/// A `name: value` argument of a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub location: Option<Location>,
}

ast_node!(Directive, Argument);

with_fields!(Directive {
    with_name => name: Name,
    with_arguments => arguments: Vec<Argument>,
    with_location => location: Option<Location>,
});
with_fields!(Argument {
    with_name => name: Name,
    with_value => value: Value,
    with_location => location: Option<Location>,
});
