use crate::ast::NodeRef;
use smallvec::SmallVec;

/// Progress through one collection of child nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrayState<'doc> {
    /// Index of the element currently being visited.
    pub index: usize,

    /// Number of elements in the collection.
    pub len: usize,

    /// The node that owns the collection.
    pub owner: NodeRef<'doc>,

    /// Name of the owning node's field that holds the collection, e.g.
    /// `"selections"`.
    pub field: &'static str,
}

impl ArrayState<'_> {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }
}

/// Traversal bookkeeping maintained by the walker: the stack of entered
/// nodes and the stack of collections currently being iterated.
#[derive(Clone, Debug, Default)]
pub struct WalkState<'doc> {
    nodes: Vec<NodeRef<'doc>>,
    array_states: SmallVec<[ArrayState<'doc>; 8]>,
}

impl<'doc> WalkState<'doc> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The innermost node being visited.
    pub fn current(&self) -> Option<NodeRef<'doc>> {
        self.nodes.last().copied()
    }

    /// The node that contains [`current()`](Self::current).
    pub fn parent(&self) -> Option<NodeRef<'doc>> {
        self.nodes.len().checked_sub(2).map(|index| self.nodes[index])
    }

    /// Every entered node except the current one, outermost first.
    pub fn ancestors(&self) -> &[NodeRef<'doc>] {
        match self.nodes.split_last() {
            Some((_, ancestors)) => ancestors,
            None => &[],
        }
    }

    /// Number of nodes on the stack.
    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    /// The innermost collection being iterated.
    pub fn array_state(&self) -> Option<&ArrayState<'doc>> {
        self.array_states.last()
    }

    pub fn array_states(&self) -> &[ArrayState<'doc>] {
        &self.array_states
    }

    pub(crate) fn push_node(&mut self, node: NodeRef<'doc>) {
        self.nodes.push(node);
    }

    pub(crate) fn pop_node(&mut self) {
        self.nodes.pop();
    }

    pub(crate) fn push_array(&mut self, array_state: ArrayState<'doc>) {
        self.array_states.push(array_state);
    }

    pub(crate) fn set_array_index(&mut self, index: usize) {
        if let Some(array_state) = self.array_states.last_mut() {
            array_state.index = index;
        }
    }

    pub(crate) fn pop_array(&mut self) {
        self.array_states.pop();
    }
}

/// A walk context that carries a [`WalkState`].
///
/// Visitors that need more shared data than the walk state define their own
/// context type embedding a `WalkState` and implement this trait for it.
pub trait WalkContext<'doc> {
    fn walk_state(&self) -> &WalkState<'doc>;
    fn walk_state_mut(&mut self) -> &mut WalkState<'doc>;
}

impl<'doc> WalkContext<'doc> for WalkState<'doc> {
    fn walk_state(&self) -> &WalkState<'doc> {
        self
    }

    fn walk_state_mut(&mut self) -> &mut WalkState<'doc> {
        self
    }
}
