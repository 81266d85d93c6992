use crate::Location;
use crate::ast::Name;
use crate::ast::StringValue;

/// A `tanka_import [Name ...] from "path"` statement carried in the leading
/// block string of a type-system document.
///
/// `types` is `None` when the statement lists no names (import everything
/// from `from`).
#[derive(Clone, Debug, PartialEq)]
pub struct Import {
    pub types: Option<Vec<Name>>,
    pub from: StringValue,
    pub location: Option<Location>,
}

ast_node!(Import);

with_fields!(Import {
    with_types => types: Option<Vec<Name>>,
    with_from => from: StringValue,
    with_location => location: Option<Location>,
});
