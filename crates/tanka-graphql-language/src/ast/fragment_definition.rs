use crate::Location;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::SelectionSet;

/// A named fragment (e.g. `fragment UserFields on User { id }`).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub fragment_name: Name,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub location: Option<Location>,
}

ast_node!(FragmentDefinition);

has_directive!(FragmentDefinition);

with_fields!(FragmentDefinition {
    with_fragment_name => fragment_name: Name,
    with_type_condition => type_condition: NamedType,
    with_directives => directives: Vec<Directive>,
    with_selection_set => selection_set: SelectionSet,
    with_location => location: Option<Location>,
});
