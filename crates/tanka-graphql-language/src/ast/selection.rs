use crate::Location;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use inherent::inherent;

/// A `{ ... }` block listing the fields and fragments to resolve.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub location: Option<Location>,
}

/// One entry of a [`SelectionSet`].
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[inherent]
impl AstNode for Selection {
    pub fn location(&self) -> Option<Location> {
        match self {
            Selection::Field(s) => s.location,
            Selection::FragmentSpread(s) => s.location,
            Selection::InlineFragment(s) => s.location,
        }
    }

    pub fn node_kind(&self) -> NodeKind {
        match self {
            Selection::Field(_) => NodeKind::FieldSelection,
            Selection::FragmentSpread(_) => NodeKind::FragmentSpread,
            Selection::InlineFragment(_) => NodeKind::InlineFragment,
        }
    }
}

/// A field selection (e.g. `alias: field(arg: 1) @dir { ... }`).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    pub location: Option<Location>,
}

impl FieldSelection {
    /// The key this field is returned under: the alias if present,
    /// otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

/// A named fragment spread (e.g. `...UserFields`).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub fragment_name: Name,
    pub directives: Vec<Directive>,
    pub location: Option<Location>,
}

/// An inline fragment (e.g. `... on User { id }` or `... @skip(if: $x) { id }`).
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub location: Option<Location>,
}

ast_node!(SelectionSet, FieldSelection, FragmentSpread, InlineFragment);

has_directive!(FieldSelection, FragmentSpread, InlineFragment);

with_fields!(SelectionSet {
    with_selections => selections: Vec<Selection>,
    with_location => location: Option<Location>,
});
with_fields!(FieldSelection {
    with_alias => alias: Option<Name>,
    with_name => name: Name,
    with_arguments => arguments: Vec<Argument>,
    with_directives => directives: Vec<Directive>,
    with_selection_set => selection_set: Option<SelectionSet>,
    with_location => location: Option<Location>,
});
with_fields!(FragmentSpread {
    with_fragment_name => fragment_name: Name,
    with_directives => directives: Vec<Directive>,
    with_location => location: Option<Location>,
});
with_fields!(InlineFragment {
    with_type_condition => type_condition: Option<NamedType>,
    with_directives => directives: Vec<Directive>,
    with_selection_set => selection_set: SelectionSet,
    with_location => location: Option<Location>,
});
