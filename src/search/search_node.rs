use crate::search::State;

/// Handle to a [`SearchNode`] stored in a
/// [`SearchSpace`](crate::search::SearchSpace). Handles are only meaningful
/// for the search space that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// Node is in the fringe, waiting to be expanded
    Open,
    /// Node has been removed from the fringe and expanded
    Closed,
}

/// A [`SearchNode`] pairs a state with the best path known to reach it, given
/// as the parent node and the action taken from the parent. The parent link
/// is overwritten whenever a cheaper path to the state is found.
///
/// The cost and depth of that path are stored on the node. They are kept in
/// step with the parent links by [`SearchSpace`](crate::search::SearchSpace).
#[derive(Debug, Clone)]
pub struct SearchNode<S: State> {
    /// Position of the node in the search space
    node_id: NodeId,
    /// The state this node stands for
    state: S,
    /// Status of the node
    status: SearchNodeStatus,
    /// Parent node and the action leading from it to this node. `None` only
    /// for the root node.
    parent: Option<(NodeId, S::Action)>,
    /// G-value of the node, the cost of the path through the parent links
    g: f64,
    /// Number of actions on the path through the parent links
    depth: usize,
    /// Nodes generated from, or rerouted through, this node. A child whose
    /// parent link has since moved elsewhere is skipped by readers.
    children: Vec<NodeId>,
}

impl<S: State> SearchNode<S> {
    /// Create the root node of a search. For all other nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId, state: S) -> Self {
        Self {
            node_id,
            state,
            status: SearchNodeStatus::Open,
            parent: None,
            g: 0.,
            depth: 0,
            children: vec![],
        }
    }

    /// Create a node reached from `parent_id` via `action`, at cost `g` and
    /// `depth` actions from the root. For the root node see
    /// [`SearchNode::new_without_parent`].
    pub fn new_with_parent(
        node_id: NodeId,
        state: S,
        parent_id: NodeId,
        action: S::Action,
        g: f64,
        depth: usize,
    ) -> Self {
        Self {
            node_id,
            state,
            status: SearchNodeStatus::Open,
            parent: Some((parent_id, action)),
            g,
            depth,
            children: vec![],
        }
    }

    /// Point this node at a cheaper way of reaching its state.
    pub fn relax(&mut self, parent_id: NodeId, action: S::Action, g: f64, depth: usize) {
        debug_assert_ne!(parent_id, self.node_id, "A node cannot be its own parent");
        debug_assert!(g <= self.g, "Relaxation must not increase the g-value");
        self.parent = Some((parent_id, action));
        self.update_path(g, depth);
    }

    /// Record a new cost and depth after an ancestor was relaxed.
    pub fn update_path(&mut self, g: f64, depth: usize) {
        self.g = g;
        self.depth = depth;
    }

    pub fn add_child(&mut self, child_id: NodeId) {
        if !self.children.contains(&child_id) {
            self.children.push(child_id);
        }
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    #[inline(always)]
    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    #[inline(always)]
    pub fn get_state(&self) -> &S {
        &self.state
    }

    #[inline(always)]
    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    #[inline(always)]
    pub fn get_g(&self) -> f64 {
        self.g
    }

    #[inline(always)]
    pub fn get_depth(&self) -> usize {
        self.depth
    }

    #[inline(always)]
    pub fn get_children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline(always)]
    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent.as_ref().map(|(parent_id, _)| *parent_id)
    }

    #[inline(always)]
    pub fn get_action(&self) -> Option<&S::Action> {
        self.parent.as_ref().map(|(_, action)| action)
    }

    #[inline(always)]
    pub fn get_parent(&self) -> Option<&(NodeId, S::Action)> {
        self.parent.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{GridCell, GridStep};

    #[test]
    fn root_has_no_parent_or_action() {
        let node = SearchNode::new_without_parent(NodeId::new(0), GridCell::new(0, 0));
        assert!(node.is_root());
        assert_eq!(node.get_parent_id(), None);
        assert_eq!(node.get_action(), None);
        assert_eq!(node.get_status(), SearchNodeStatus::Open);
        assert_eq!(node.get_g(), 0.);
        assert_eq!(node.get_depth(), 0);
    }

    #[test]
    fn relax_overwrites_parent_and_action() {
        let mut node = SearchNode::new_with_parent(
            NodeId::new(3),
            GridCell::new(1, 1),
            NodeId::new(1),
            GridStep::Right,
            7.,
            5,
        );
        node.relax(NodeId::new(2), GridStep::Down, 2., 2);
        assert_eq!(node.get_parent_id(), Some(NodeId::new(2)));
        assert_eq!(node.get_action(), Some(&GridStep::Down));
        assert_eq!(node.get_g(), 2.);
        assert_eq!(node.get_depth(), 2);
    }

    #[test]
    fn children_are_recorded_once() {
        let mut node = SearchNode::new_without_parent(NodeId::new(0), GridCell::new(0, 0));
        node.add_child(NodeId::new(1));
        node.add_child(NodeId::new(2));
        node.add_child(NodeId::new(1));
        assert_eq!(node.get_children(), &[NodeId::new(1), NodeId::new(2)]);
    }

    #[test]
    fn close_marks_node_closed() {
        let mut node = SearchNode::new_without_parent(NodeId::new(0), GridCell::new(0, 0));
        node.close();
        assert_eq!(node.get_status(), SearchNodeStatus::Closed);
    }
}
