use crate::Location;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::keywords;
use std::fmt;

/// The kind of a GraphQL operation.
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// in the spec.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationType {
    Mutation,
    Query,
    Subscription,
}

impl OperationType {
    /// Maps an operation keyword to its operation type.
    pub fn from_keyword(keyword: &[u8]) -> Option<Self> {
        match keyword {
            keywords::QUERY => Some(OperationType::Query),
            keywords::MUTATION => Some(OperationType::Mutation),
            keywords::SUBSCRIPTION => Some(OperationType::Subscription),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Mutation => "mutation",
            OperationType::Query => "query",
            OperationType::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query, mutation or subscription.
///
/// A bare `{ ... }` selection set parses as an anonymous query with
/// `is_short_hand` set.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub is_short_hand: bool,
    pub location: Option<Location>,
}

ast_node!(OperationDefinition);

has_directive!(OperationDefinition);

with_fields!(OperationDefinition {
    with_operation => operation: OperationType,
    with_name => name: Option<Name>,
    with_variable_definitions => variable_definitions: Vec<VariableDefinition>,
    with_directives => directives: Vec<Directive>,
    with_selection_set => selection_set: SelectionSet,
    with_is_short_hand => is_short_hand: bool,
    with_location => location: Option<Location>,
});
