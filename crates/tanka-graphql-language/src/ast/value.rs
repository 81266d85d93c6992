use crate::Location;
use crate::ValueParsingError;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

/// An input value (argument value, default value, list item, object field
/// value).
///
/// See
/// [Input Values](https://spec.graphql.org/October2021/#sec-Input-Values)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

#[inherent]
impl AstNode for Value {
    pub fn location(&self) -> Option<Location> {
        match self {
            Value::Variable(v) => v.location,
            Value::Int(v) => v.location,
            Value::Float(v) => v.location,
            Value::String(v) => v.location,
            Value::Boolean(v) => v.location,
            Value::Null(v) => v.location,
            Value::Enum(v) => v.location,
            Value::List(v) => v.location,
            Value::Object(v) => v.location,
        }
    }

    pub fn node_kind(&self) -> NodeKind {
        match self {
            Value::Variable(_) => NodeKind::Variable,
            Value::Int(_) => NodeKind::IntValue,
            Value::Float(_) => NodeKind::FloatValue,
            Value::String(_) => NodeKind::StringValue,
            Value::Boolean(_) => NodeKind::BooleanValue,
            Value::Null(_) => NodeKind::NullValue,
            Value::Enum(_) => NodeKind::EnumValue,
            Value::List(_) => NodeKind::ListValue,
            Value::Object(_) => NodeKind::ObjectValue,
        }
    }
}

impl Value {
    /// Returns `true` if this value contains no variables at any depth.
    pub fn is_constant(&self) -> bool {
        match self {
            Value::Variable(_) => false,
            Value::List(list) => list.values.iter().all(Value::is_constant),
            Value::Object(object) => object.fields.iter().all(|f| f.value.is_constant()),
            _ => true,
        }
    }
}

/// A variable reference (e.g. `$id`).
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: Name,
    pub location: Option<Location>,
}

/// An integer literal, converted to a signed 32-bit integer.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub value: i32,
    pub location: Option<Location>,
}

/// A float literal. The source text is kept as written; use
/// [`to_f64()`](Self::to_f64) for a numeric value.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: String,
    /// Set when the literal has an exponent part (e.g. `1e10`).
    pub is_exponential: bool,
    pub location: Option<Location>,
}

impl FloatValue {
    pub fn to_f64(&self) -> Result<f64, ValueParsingError> {
        match self.value.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ValueParsingError::Float(self.value.clone())),
        }
    }
}

/// A string literal after escape processing (single-line) or indentation
/// stripping (block).
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
    /// Set when the literal was written as a `"""` block string.
    pub is_block: bool,
    pub location: Option<Location>,
}

impl StringValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_block: false,
            location: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub location: Option<Location>,
}

/// An enum value (any name other than `true`, `false` or `null`).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub name: Name,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub location: Option<Location>,
}

impl ObjectValue {
    /// Returns the first field named `name`.
    pub fn field(&self, name: &str) -> Option<&ObjectField> {
        self.fields.iter().find(|field| field.name.value == name)
    }
}

/// A `name: value` entry of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub location: Option<Location>,
}

ast_node!(
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
);

with_fields!(Variable {
    with_name => name: Name,
    with_location => location: Option<Location>,
});
with_fields!(IntValue {
    with_value => value: i32,
    with_location => location: Option<Location>,
});
with_fields!(FloatValue {
    with_value => value: String,
    with_is_exponential => is_exponential: bool,
    with_location => location: Option<Location>,
});
with_fields!(StringValue {
    with_value => value: String,
    with_is_block => is_block: bool,
    with_location => location: Option<Location>,
});
with_fields!(BooleanValue {
    with_value => value: bool,
    with_location => location: Option<Location>,
});
with_fields!(NullValue {
    with_location => location: Option<Location>,
});
with_fields!(EnumValue {
    with_name => name: Name,
    with_location => location: Option<Location>,
});
with_fields!(ListValue {
    with_values => values: Vec<Value>,
    with_location => location: Option<Location>,
});
with_fields!(ObjectValue {
    with_fields => fields: Vec<ObjectField>,
    with_location => location: Option<Location>,
});
with_fields!(ObjectField {
    with_name => name: Name,
    with_value => value: Value,
    with_location => location: Option<Location>,
});
