use crate::Location;

/// A GraphQL name (`/[_A-Za-z][_0-9A-Za-z]*/`).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Name {
    pub value: String,
    pub location: Option<Location>,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            location: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

with_fields!(Name {
    with_value => value: String,
    with_location => location: Option<Location>,
});

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
