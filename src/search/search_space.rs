use crate::search::{Action, NodeId, Path, SearchNode, State};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// A [`SearchSpace`] owns every node generated during a search and maps each
/// distinct state to its unique node. Other structures, like the fringe,
/// refer to nodes through [`NodeId`] handles only.
///
/// Entries are never removed. The only mutation after insertion is closing a
/// node and relaxing its parent link, which also lowers the stored cost of
/// every node below it in the tree of parent links.
#[derive(Debug)]
pub struct SearchSpace<S: State> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<S>, Linear>,
    registered_nodes: HashMap<S, NodeId>,
}

impl<S: State> SearchSpace<S> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut registered_nodes = HashMap::new();

        let root_node_id = NodeId::new(0);
        registered_nodes.insert(initial_state.clone(), root_node_id);
        nodes.push(SearchNode::new_without_parent(root_node_id, initial_state));

        Self {
            root_node_id,
            nodes,
            registered_nodes,
        }
    }

    /// Look up the node registered for `state`, if the state has been
    /// generated before.
    #[inline(always)]
    pub fn get_node_id(&self, state: &S) -> Option<NodeId> {
        self.registered_nodes.get(state).copied()
    }

    /// Register a state that has not been generated before.
    pub fn insert_node(&mut self, state: S, parent_id: NodeId, action: S::Action) -> NodeId {
        debug_assert!(
            !self.registered_nodes.contains_key(&state),
            "State {:?} is already registered",
            state
        );
        let node_id = NodeId::new(self.nodes.len());
        let g = self.path_cost(parent_id) + action.cost();
        let depth = self.depth(parent_id) + 1;
        self.registered_nodes.insert(state.clone(), node_id);
        self.nodes.push(SearchNode::new_with_parent(
            node_id, state, parent_id, action, g, depth,
        ));
        self.get_node_mut(parent_id).add_child(node_id);
        node_id
    }

    /// Reroute the node `node_id` through `parent_id`.
    ///
    /// Returns `node_id` followed by every node below it in the tree of parent
    /// links, all of which now have a lower cost.
    pub fn relax(
        &mut self,
        node_id: NodeId,
        parent_id: NodeId,
        action: S::Action,
    ) -> Vec<NodeId> {
        let g = self.path_cost(parent_id) + action.cost();
        let depth = self.depth(parent_id) + 1;
        self.get_node_mut(node_id).relax(parent_id, action, g, depth);
        self.get_node_mut(parent_id).add_child(node_id);

        let mut updated = vec![node_id];
        let mut next = 0;
        while let Some(&current_id) = updated.get(next) {
            next += 1;
            let current = self.get_node(current_id);
            let (g, depth) = (current.get_g(), current.get_depth());
            let children = current.get_children().to_vec();
            for child_id in children {
                let child = self.get_node_mut(child_id);
                if child.get_parent_id() != Some(current_id) {
                    continue;
                }
                let cost = child.get_action().map_or(0., |action| action.cost());
                child.update_path(g + cost, depth + 1);
                updated.push(child_id);
            }
        }
        updated
    }

    /// The cost of reaching `node_id` along its current chain of parent links.
    #[inline(always)]
    pub fn path_cost(&self, node_id: NodeId) -> f64 {
        self.get_node(node_id).get_g()
    }

    /// Number of actions between the root and `node_id`.
    #[inline(always)]
    pub fn depth(&self, node_id: NodeId) -> usize {
        self.get_node(node_id).get_depth()
    }

    /// Reconstruct the path from the root to `goal_id`.
    pub fn extract_path(&self, goal_id: NodeId) -> Path<S> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while let Some((parent_id, action)) = current_node.get_parent() {
            steps.push((action.clone(), current_node.get_state().clone()));
            current_node = self.get_node(*parent_id);
        }
        steps.reverse();
        Path::new(self.get_root_node().get_state().clone(), steps)
    }

    #[inline(always)]
    pub fn get_root_node_id(&self) -> NodeId {
        self.root_node_id
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode<S> {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<S> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.get_node(node_id).get_state()
    }

    /// Number of distinct states registered so far.
    pub fn len(&self) -> usize {
        self.registered_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{GridCell, GridStep};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn root_is_registered() {
        let space = SearchSpace::new(GridCell::new(0, 0));
        assert_eq!(space.len(), 1);
        assert_eq!(
            space.get_node_id(&GridCell::new(0, 0)),
            Some(space.get_root_node_id())
        );
        assert_eq!(space.get_node_id(&GridCell::new(1, 0)), None);
        assert_approx_eq!(space.path_cost(space.get_root_node_id()), 0.);
        assert_eq!(space.depth(space.get_root_node_id()), 0);
    }

    #[test]
    fn one_node_per_state() {
        let mut space = SearchSpace::new(GridCell::new(0, 0));
        let root = space.get_root_node_id();
        let right = space.insert_node(GridCell::new(1, 0), root, GridStep::Right);
        let down = space.insert_node(GridCell::new(0, 1), root, GridStep::Down);
        assert_ne!(right, down);
        assert_eq!(space.len(), 3);
        assert_eq!(space.get_node_id(&GridCell::new(1, 0)), Some(right));
        assert_eq!(space.get_state(down), &GridCell::new(0, 1));
    }

    #[test]
    fn path_cost_follows_current_parents() {
        let mut space = SearchSpace::new(GridCell::new(0, 0));
        let root = space.get_root_node_id();
        let a = space.insert_node(GridCell::new(1, 0), root, GridStep::Right);
        let b = space.insert_node(GridCell::new(2, 0), a, GridStep::Right);
        let c = space.insert_node(GridCell::new(2, 1), b, GridStep::Down);
        assert_approx_eq!(space.path_cost(c), 3.);
        assert_eq!(space.depth(c), 3);

        // Reroute b straight from the root; c inherits the shorter chain.
        assert_eq!(space.relax(b, root, GridStep::Right), vec![b, c]);
        assert_approx_eq!(space.path_cost(b), 1.);
        assert_approx_eq!(space.path_cost(c), 2.);
        assert_eq!(space.depth(c), 2);
    }

    #[test]
    fn relax_skips_children_that_moved_away() {
        let mut space = SearchSpace::new(GridCell::new(0, 0));
        let root = space.get_root_node_id();
        let a = space.insert_node(GridCell::new(0, 1), root, GridStep::Down);
        let b = space.insert_node(GridCell::new(0, 2), a, GridStep::Down);
        let c = space.insert_node(GridCell::new(0, 3), b, GridStep::Down);
        let d = space.insert_node(GridCell::new(1, 3), c, GridStep::Right);
        let e = space.insert_node(GridCell::new(1, 2), b, GridStep::Right);

        // d moves under e, so lowering c no longer reaches it.
        assert_eq!(space.relax(d, e, GridStep::Down), vec![d]);
        assert_approx_eq!(space.path_cost(d), 4.);
        assert_eq!(space.relax(c, a, GridStep::Down), vec![c]);
        assert_approx_eq!(space.path_cost(c), 2.);
        assert_approx_eq!(space.path_cost(d), 4.);

        // Lowering b reaches e and, through e, d.
        assert_eq!(space.relax(b, root, GridStep::Down), vec![b, e, d]);
        assert_approx_eq!(space.path_cost(e), 2.);
        assert_approx_eq!(space.path_cost(d), 3.);
        assert_eq!(space.depth(d), 3);
        assert_approx_eq!(space.path_cost(c), 2.);
    }

    #[test]
    fn deep_chain_costs() {
        let depth = 50_000;
        let mut space = SearchSpace::new(GridCell::new(0, 0));
        let mut last = space.get_root_node_id();
        for y in 1..=depth {
            last = space.insert_node(GridCell::new(0, y), last, GridStep::Down);
        }
        assert_approx_eq!(space.path_cost(last), f64::from(depth));
        assert_eq!(space.depth(last), usize::try_from(depth).unwrap());
        assert_eq!(space.extract_path(last).len(), space.depth(last));
    }

    #[test]
    fn extract_path_of_root_is_empty() {
        let space = SearchSpace::new(GridCell::new(4, 4));
        let path = space.extract_path(space.get_root_node_id());
        assert!(path.is_empty());
        assert_eq!(path.start(), &GridCell::new(4, 4));
        assert_eq!(path.last_state(), &GridCell::new(4, 4));
    }

    #[test]
    fn extract_path_runs_root_to_goal() {
        let mut space = SearchSpace::new(GridCell::new(0, 0));
        let root = space.get_root_node_id();
        let a = space.insert_node(GridCell::new(1, 0), root, GridStep::Right);
        let b = space.insert_node(GridCell::new(1, 1), a, GridStep::Down);

        let path = space.extract_path(b);
        assert_eq!(path.len(), 2);
        assert_eq!(
            path.actions().cloned().collect::<Vec<_>>(),
            vec![GridStep::Right, GridStep::Down]
        );
        assert_eq!(
            path.states().cloned().collect::<Vec<_>>(),
            vec![
                GridCell::new(0, 0),
                GridCell::new(1, 0),
                GridCell::new(1, 1)
            ]
        );
    }
}
