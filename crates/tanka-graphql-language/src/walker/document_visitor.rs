use crate::ast::NodeRef;

/// Hooks invoked by a [`DocumentWalker`](crate::walker::DocumentWalker) for
/// every node it visits.
///
/// `C` is the caller-owned walk context and `E` the error type that aborts
/// the walk. Both hooks default to doing nothing, so a visitor only
/// overrides the side it needs.
pub trait DocumentVisitor<'doc, C, E> {
    /// Called after `node` has been pushed onto the node stack and before
    /// its children are visited.
    fn enter_node(&mut self, context: &mut C, node: NodeRef<'doc>) -> Result<(), E> {
        let _ = (context, node);
        Ok(())
    }

    /// Called after every child of `node` has been visited and before
    /// `node` is popped off the node stack.
    fn exit_node(&mut self, context: &mut C, node: NodeRef<'doc>) -> Result<(), E> {
        let _ = (context, node);
        Ok(())
    }
}
