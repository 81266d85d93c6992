use crate::Location;
use crate::ast::NodeKind;

/// Trait implemented by all walkable AST node types.
///
/// Struct nodes implement this trait via `#[inherent] impl AstNode`, giving
/// each node both inherent methods (no trait import needed) and a trait
/// bound for generic utilities (error formatters, linters, etc.).
pub trait AstNode {
    /// Location of the node's first token, or `None` for nodes that were
    /// built programmatically.
    fn location(&self) -> Option<Location>;

    fn node_kind(&self) -> NodeKind;
}
