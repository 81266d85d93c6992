use crate::Location;
use crate::ast::*;

macro_rules! node_refs {
    ($($variant:ident),* $(,)?) => {
        /// Identifies the kind of a walkable AST node.
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum NodeKind {
            $($variant,)*
        }

        impl NodeKind {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(NodeKind::$variant => stringify!($variant),)*
                }
            }
        }

        /// A borrowed reference to any walkable AST node.
        ///
        /// The variant set is closed: the
        /// [`DocumentWalker`](crate::walker::DocumentWalker) matches on it
        /// exhaustively.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum NodeRef<'doc> {
            $($variant(&'doc $variant),)*
        }

        impl NodeRef<'_> {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(NodeRef::$variant(_) => NodeKind::$variant,)*
                }
            }

            pub fn location(&self) -> Option<Location> {
                match self {
                    $(NodeRef::$variant(node) => node.location(),)*
                }
            }

            /// Returns `true` if both references point at the same node in
            /// memory.
            pub fn ptr_eq(&self, other: &NodeRef<'_>) -> bool {
                self.kind() == other.kind() && self.addr() == other.addr()
            }

            fn addr(&self) -> *const () {
                match self {
                    $(NodeRef::$variant(node) => std::ptr::from_ref::<$variant>(*node).cast(),)*
                }
            }
        }

        $(
            impl<'doc> From<&'doc $variant> for NodeRef<'doc> {
                fn from(node: &'doc $variant) -> Self {
                    NodeRef::$variant(node)
                }
            }
        )*
    };
}

node_refs!(
    // Executable nodes
    ExecutableDocument,
    OperationDefinition,
    FragmentDefinition,
    VariableDefinition,
    DefaultValue,
    SelectionSet,
    FieldSelection,
    FragmentSpread,
    InlineFragment,
    Directive,
    Argument,
    // Values
    Variable,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    // Type references
    NamedType,
    ListType,
    NonNullType,
    // Type-system nodes
    TypeSystemDocument,
    SchemaDefinition,
    SchemaExtension,
    RootOperationTypeDefinition,
    ScalarDefinition,
    ObjectDefinition,
    InterfaceDefinition,
    UnionDefinition,
    EnumDefinition,
    EnumValueDefinition,
    InputObjectDefinition,
    FieldDefinition,
    InputValueDefinition,
    DirectiveDefinition,
    TypeExtension,
    Import,
);

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'doc> From<&'doc Selection> for NodeRef<'doc> {
    fn from(selection: &'doc Selection) -> Self {
        match selection {
            Selection::Field(field) => NodeRef::FieldSelection(field),
            Selection::FragmentSpread(spread) => NodeRef::FragmentSpread(spread),
            Selection::InlineFragment(inline) => NodeRef::InlineFragment(inline),
        }
    }
}

impl<'doc> From<&'doc Value> for NodeRef<'doc> {
    fn from(value: &'doc Value) -> Self {
        match value {
            Value::Variable(v) => NodeRef::Variable(v),
            Value::Int(v) => NodeRef::IntValue(v),
            Value::Float(v) => NodeRef::FloatValue(v),
            Value::String(v) => NodeRef::StringValue(v),
            Value::Boolean(v) => NodeRef::BooleanValue(v),
            Value::Null(v) => NodeRef::NullValue(v),
            Value::Enum(v) => NodeRef::EnumValue(v),
            Value::List(v) => NodeRef::ListValue(v),
            Value::Object(v) => NodeRef::ObjectValue(v),
        }
    }
}

impl<'doc> From<&'doc TypeRef> for NodeRef<'doc> {
    fn from(type_ref: &'doc TypeRef) -> Self {
        match type_ref {
            TypeRef::Named(t) => NodeRef::NamedType(t),
            TypeRef::List(t) => NodeRef::ListType(t),
            TypeRef::NonNull(t) => NodeRef::NonNullType(t),
        }
    }
}

impl<'doc> From<&'doc TypeDefinition> for NodeRef<'doc> {
    fn from(definition: &'doc TypeDefinition) -> Self {
        match definition {
            TypeDefinition::Scalar(def) => NodeRef::ScalarDefinition(def),
            TypeDefinition::Object(def) => NodeRef::ObjectDefinition(def),
            TypeDefinition::Interface(def) => NodeRef::InterfaceDefinition(def),
            TypeDefinition::Union(def) => NodeRef::UnionDefinition(def),
            TypeDefinition::Enum(def) => NodeRef::EnumDefinition(def),
            TypeDefinition::InputObject(def) => NodeRef::InputObjectDefinition(def),
        }
    }
}
