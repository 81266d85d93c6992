use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EnumValue;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::StringValue;
use inherent::inherent;

/// A named type definition. Also the payload of a [`TypeExtension`].
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Scalar(ScalarDefinition),
    Object(ObjectDefinition),
    Interface(InterfaceDefinition),
    Union(UnionDefinition),
    Enum(EnumDefinition),
    InputObject(InputObjectDefinition),
}

#[inherent]
impl AstNode for TypeDefinition {
    pub fn location(&self) -> Option<Location> {
        match self {
            TypeDefinition::Scalar(def) => def.location,
            TypeDefinition::Object(def) => def.location,
            TypeDefinition::Interface(def) => def.location,
            TypeDefinition::Union(def) => def.location,
            TypeDefinition::Enum(def) => def.location,
            TypeDefinition::InputObject(def) => def.location,
        }
    }

    pub fn node_kind(&self) -> NodeKind {
        match self {
            TypeDefinition::Scalar(_) => NodeKind::ScalarDefinition,
            TypeDefinition::Object(_) => NodeKind::ObjectDefinition,
            TypeDefinition::Interface(_) => NodeKind::InterfaceDefinition,
            TypeDefinition::Union(_) => NodeKind::UnionDefinition,
            TypeDefinition::Enum(_) => NodeKind::EnumDefinition,
            TypeDefinition::InputObject(_) => NodeKind::InputObjectDefinition,
        }
    }
}

impl TypeDefinition {
    pub fn name(&self) -> &Name {
        match self {
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
        }
    }

    pub fn description(&self) -> Option<&StringValue> {
        match self {
            TypeDefinition::Scalar(def) => def.description.as_ref(),
            TypeDefinition::Object(def) => def.description.as_ref(),
            TypeDefinition::Interface(def) => def.description.as_ref(),
            TypeDefinition::Union(def) => def.description.as_ref(),
            TypeDefinition::Enum(def) => def.description.as_ref(),
            TypeDefinition::InputObject(def) => def.description.as_ref(),
        }
    }

    pub fn directives(&self) -> &[Directive] {
        match self {
            TypeDefinition::Scalar(def) => &def.directives,
            TypeDefinition::Object(def) => &def.directives,
            TypeDefinition::Interface(def) => &def.directives,
            TypeDefinition::Union(def) => &def.directives,
            TypeDefinition::Enum(def) => &def.directives,
            TypeDefinition::InputObject(def) => &def.directives,
        }
    }

    pub fn has_directive(&self, name: &str) -> bool {
        self.directives()
            .iter()
            .any(|directive| directive.name.value == name)
    }
}

/// A `scalar Name` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub location: Option<Location>,
}

/// A `type Name implements A & B { ... }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub location: Option<Location>,
}

/// An `interface Name implements A { ... }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub location: Option<Location>,
}

/// A `union Name = A | B` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub members: Vec<NamedType>,
    pub location: Option<Location>,
}

/// An `enum Name { A B }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
    pub location: Option<Location>,
}

/// One value of an [`EnumDefinition`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub description: Option<StringValue>,
    pub value: EnumValue,
    pub directives: Vec<Directive>,
    pub location: Option<Location>,
}

/// An `input Name { ... }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<InputValueDefinition>,
    pub location: Option<Location>,
}

/// An `extend <type definition>` extension. The location is that of the
/// `extend` keyword.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeExtension {
    pub definition: TypeDefinition,
    pub location: Option<Location>,
}

impl ObjectDefinition {
    /// Returns the first field named `name`.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name.value == name)
    }
}

impl InterfaceDefinition {
    /// Returns the first field named `name`.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name.value == name)
    }
}

ast_node!(
    ScalarDefinition,
    ObjectDefinition,
    InterfaceDefinition,
    UnionDefinition,
    EnumDefinition,
    EnumValueDefinition,
    InputObjectDefinition,
    TypeExtension,
);

has_directive!(
    ScalarDefinition,
    ObjectDefinition,
    InterfaceDefinition,
    UnionDefinition,
    EnumDefinition,
    EnumValueDefinition,
    InputObjectDefinition,
);

with_fields!(ScalarDefinition {
    with_description => description: Option<StringValue>,
    with_name => name: Name,
    with_directives => directives: Vec<Directive>,
    with_location => location: Option<Location>,
});
with_fields!(ObjectDefinition {
    with_description => description: Option<StringValue>,
    with_name => name: Name,
    with_interfaces => interfaces: Vec<NamedType>,
    with_directives => directives: Vec<Directive>,
    with_fields => fields: Vec<FieldDefinition>,
    with_location => location: Option<Location>,
});
with_fields!(InterfaceDefinition {
    with_description => description: Option<StringValue>,
    with_name => name: Name,
    with_interfaces => interfaces: Vec<NamedType>,
    with_directives => directives: Vec<Directive>,
    with_fields => fields: Vec<FieldDefinition>,
    with_location => location: Option<Location>,
});
with_fields!(UnionDefinition {
    with_description => description: Option<StringValue>,
    with_name => name: Name,
    with_directives => directives: Vec<Directive>,
    with_members => members: Vec<NamedType>,
    with_location => location: Option<Location>,
});
with_fields!(EnumDefinition {
    with_description => description: Option<StringValue>,
    with_name => name: Name,
    with_directives => directives: Vec<Directive>,
    with_values => values: Vec<EnumValueDefinition>,
    with_location => location: Option<Location>,
});
with_fields!(EnumValueDefinition {
    with_description => description: Option<StringValue>,
    with_value => value: EnumValue,
    with_directives => directives: Vec<Directive>,
    with_location => location: Option<Location>,
});
with_fields!(InputObjectDefinition {
    with_description => description: Option<StringValue>,
    with_name => name: Name,
    with_directives => directives: Vec<Directive>,
    with_fields => fields: Vec<InputValueDefinition>,
    with_location => location: Option<Location>,
});
with_fields!(TypeExtension {
    with_definition => definition: TypeDefinition,
    with_location => location: Option<Location>,
});
