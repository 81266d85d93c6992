/// Implements [`AstNode`](crate::ast::AstNode) for a struct node that
/// carries a `location` field.
macro_rules! ast_node {
    ($($node:ident),* $(,)?) => {
        $(
            #[inherent::inherent]
            impl crate::ast::AstNode for $node {
                pub fn location(&self) -> Option<crate::Location> {
                    self.location
                }

                pub fn node_kind(&self) -> crate::ast::NodeKind {
                    crate::ast::NodeKind::$node
                }
            }
        )*
    };
}

/// Generates `with_<field>` helpers that return a copy of the node with a
/// single field replaced.
macro_rules! with_fields {
    ($node:ident { $($method:ident => $field:ident: $ty:ty),* $(,)? }) => {
        impl $node {
            $(
                #[doc = concat!(
                    "Returns a copy of this node with `",
                    stringify!($field),
                    "` replaced.",
                )]
                #[must_use]
                pub fn $method(&self, $field: $ty) -> Self {
                    Self {
                        $field,
                        ..self.clone()
                    }
                }
            )*
        }
    };
}

/// Generates `has_directive()` for nodes with a `directives` list.
macro_rules! has_directive {
    ($($node:ident),* $(,)?) => {
        $(
            impl $node {
                /// Returns `true` if a directive named `name` is applied to
                /// this node.
                pub fn has_directive(&self, name: &str) -> bool {
                    self.directives
                        .iter()
                        .any(|directive| directive.name.value == name)
                }
            }
        )*
    };
}
