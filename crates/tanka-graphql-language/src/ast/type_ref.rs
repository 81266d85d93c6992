use crate::Location;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;
use std::fmt;

/// A type reference (e.g. `String`, `[ID!]`, `User!`).
///
/// The parser accepts at most one `!` per level, but the type itself can
/// express `NonNull(NonNull(..))`; rejecting that is left to validation.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}

#[inherent]
impl AstNode for TypeRef {
    pub fn location(&self) -> Option<Location> {
        match self {
            TypeRef::Named(t) => t.location,
            TypeRef::List(t) => t.location,
            TypeRef::NonNull(t) => t.location,
        }
    }

    pub fn node_kind(&self) -> NodeKind {
        match self {
            TypeRef::Named(_) => NodeKind::NamedType,
            TypeRef::List(_) => NodeKind::ListType,
            TypeRef::NonNull(_) => NodeKind::NonNullType,
        }
    }
}

impl TypeRef {
    /// The innermost named type.
    pub fn innermost_named_type(&self) -> &NamedType {
        match self {
            TypeRef::Named(named) => named,
            TypeRef::List(list) => list.of_type.innermost_named_type(),
            TypeRef::NonNull(non_null) => non_null.of_type.innermost_named_type(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(named) => write!(f, "{}", named.name),
            TypeRef::List(list) => write!(f, "[{}]", list.of_type),
            TypeRef::NonNull(non_null) => write!(f, "{}!", non_null.of_type),
        }
    }
}

/// A reference to a type by name. Also used for type conditions,
/// implemented interfaces, union members and root operation types.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub name: Name,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub of_type: Box<TypeRef>,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub of_type: Box<TypeRef>,
    pub location: Option<Location>,
}

ast_node!(NamedType, ListType, NonNullType);

with_fields!(NamedType {
    with_name => name: Name,
    with_location => location: Option<Location>,
});
with_fields!(ListType {
    with_of_type => of_type: Box<TypeRef>,
    with_location => location: Option<Location>,
});
with_fields!(NonNullType {
    with_of_type => of_type: Box<TypeRef>,
    with_location => location: Option<Location>,
});
