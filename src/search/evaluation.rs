//! Evaluation functions decide the order in which a best-first search expands
//! nodes. Lower values are expanded first. The choice of evaluation turns the
//! same engine into uniform-cost search, greedy best-first search or A*.

use crate::search::{Heuristic, State};
use ordered_float::OrderedFloat;

pub type EvaluationValue = OrderedFloat<f64>;

/// Read-only view of a node handed to an [`Evaluation`].
#[derive(Debug, Clone)]
pub struct NodeView<'a, S: State> {
    state: &'a S,
    action: Option<&'a S::Action>,
    path_cost: f64,
    depth: usize,
}

impl<'a, S: State> NodeView<'a, S> {
    pub fn new(state: &'a S, action: Option<&'a S::Action>, path_cost: f64, depth: usize) -> Self {
        Self {
            state,
            action,
            path_cost,
            depth,
        }
    }

    pub fn state(&self) -> &'a S {
        self.state
    }

    /// The action that led to this node, `None` for the root.
    pub fn action(&self) -> Option<&'a S::Action> {
        self.action
    }

    /// Accumulated cost of the best known path to this node, usually called g.
    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

pub trait Evaluation<S: State> {
    /// Score a node. Must be defined for every reachable node and must not be
    /// NaN.
    fn evaluate(&mut self, node: &NodeView<'_, S>) -> EvaluationValue;
}

impl<S, F> Evaluation<S> for F
where
    S: State,
    F: FnMut(&NodeView<'_, S>) -> f64,
{
    fn evaluate(&mut self, node: &NodeView<'_, S>) -> EvaluationValue {
        self(node).into()
    }
}

/// f(n) = g(n). Expands nodes in order of accumulated path cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl<S: State> Evaluation<S> for UniformCost {
    fn evaluate(&mut self, node: &NodeView<'_, S>) -> EvaluationValue {
        node.path_cost().into()
    }
}

/// f(n) = h(n). Ignores the cost already paid.
#[derive(Debug, Clone)]
pub struct Greedy<H> {
    heuristic: H,
}

impl<H> Greedy<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<S: State, H: Heuristic<S>> Evaluation<S> for Greedy<H> {
    fn evaluate(&mut self, node: &NodeView<'_, S>) -> EvaluationValue {
        self.heuristic.estimate(node.state()).into()
    }
}

/// f(n) = g(n) + h(n). Returns cost-optimal paths when the heuristic is
/// admissible and consistent.
#[derive(Debug, Clone)]
pub struct AStar<H> {
    heuristic: H,
}

impl<H> AStar<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<S: State, H: Heuristic<S>> Evaluation<S> for AStar<H> {
    fn evaluate(&mut self, node: &NodeView<'_, S>) -> EvaluationValue {
        (node.path_cost() + self.heuristic.estimate(node.state())).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{manhattan_to, GridCell, GridStep};

    fn view(state: &GridCell, path_cost: f64) -> NodeView<'_, GridCell> {
        NodeView::new(state, Some(&GridStep::Down), path_cost, 4)
    }

    #[test]
    fn uniform_cost_is_path_cost() {
        let cell = GridCell::new(1, 1);
        assert_eq!(UniformCost.evaluate(&view(&cell, 4.)), OrderedFloat(4.));
    }

    #[test]
    fn greedy_is_heuristic() {
        let cell = GridCell::new(1, 1);
        let mut greedy = Greedy::new(manhattan_to(GridCell::new(4, 5)));
        assert_eq!(greedy.evaluate(&view(&cell, 4.)), OrderedFloat(7.));
    }

    #[test]
    fn astar_adds_path_cost_and_heuristic() {
        let cell = GridCell::new(1, 1);
        let mut astar = AStar::new(manhattan_to(GridCell::new(4, 5)));
        assert_eq!(astar.evaluate(&view(&cell, 4.)), OrderedFloat(11.));
    }

    #[test]
    fn closure_evaluation() {
        let cell = GridCell::new(1, 1);
        let mut by_depth = |node: &NodeView<'_, GridCell>| node.depth() as f64;
        assert_eq!(by_depth.evaluate(&view(&cell, 4.)), OrderedFloat(4.));
    }
}
