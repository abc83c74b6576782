//! Best-first search over an arbitrary state space.
//!
//! The fringe is ordered by an injected [`Evaluation`], and every state maps to
//! a single node in the [`SearchSpace`]. When a cheaper path to an already
//! generated state turns up, the node's parent link is rerouted in place and
//! the cost of every node below it drops with it. Each affected node that is
//! still in the fringe is evaluated again and moved to match its new value. A
//! node that has already been expanded is never expanded again. With an
//! evaluation whose order is consistent, like A* with a consistent heuristic
//! or uniform-cost search, this still yields cost-optimal paths.

use crate::search::{
    search_engines::{LogProgress, ProgressObserver, SearchResult, TerminationCondition},
    Action, EvaluationValue, Evaluation, Fringe, Goal, NodeId, NodeView, SearchConfig,
    SearchError, SearchNodeStatus, SearchSpace, SearchStatistics, State,
};
use std::{
    fmt,
    sync::{atomic::AtomicBool, Arc},
};
use tracing::{debug, info, trace};

pub struct BestFirstSearch<S: State> {
    start: S,
    goal: Box<dyn Goal<S>>,
    evaluation: Box<dyn Evaluation<S>>,
    config: SearchConfig,
    observer: Box<dyn ProgressObserver>,
    cancel_flag: Option<Arc<AtomicBool>>,
    statistics: SearchStatistics,
}

impl<S: State> fmt::Debug for BestFirstSearch<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BestFirstSearch")
            .field("start", &self.start)
            .field("config", &self.config)
            .field("statistics", &self.statistics)
            .finish_non_exhaustive()
    }
}

impl<S: State> BestFirstSearch<S> {
    pub fn new(start: S, goal: Box<dyn Goal<S>>, evaluation: Box<dyn Evaluation<S>>) -> Self {
        Self {
            start,
            goal,
            evaluation,
            config: SearchConfig::default(),
            observer: Box::new(LogProgress),
            cancel_flag: None,
            statistics: SearchStatistics::new(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default observer, which logs progress through `tracing`.
    pub fn with_progress_observer(mut self, observer: Box<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Stop the search as soon as `flag` is set. The flag is checked once per
    /// expansion.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent call to [`BestFirstSearch::search`].
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Search for a path from the start state to a goal state.
    ///
    /// Returns [`SearchResult::Exhausted`] if the fringe runs empty first.
    /// Errors are reserved for contract violations by the domain or the
    /// evaluation, and for an unusable configuration.
    pub fn search(&mut self) -> Result<SearchResult<S>, SearchError> {
        let mut termination =
            TerminationCondition::new(self.config.time_limit()?, self.config.max_expansions);
        if let Some(flag) = &self.cancel_flag {
            termination = termination.with_cancel_flag(flag.clone());
        }

        info!(
            fringe = ?self.config.fringe,
            tie_break = ?self.config.tie_break,
            "starting search"
        );
        self.statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(self.start.clone());
        let mut fringe = self.config.fringe.create(self.config.tie_break);

        let result = self.run(&mut search_space, fringe.as_mut(), &termination);

        info!(distinct_states = search_space.len());
        self.statistics.finalise_search();
        termination.finalise();
        result
    }

    fn run(
        &mut self,
        search_space: &mut SearchSpace<S>,
        fringe: &mut dyn Fringe,
        termination: &TerminationCondition,
    ) -> Result<SearchResult<S>, SearchError> {
        let root_id = search_space.get_root_node_id();
        let root_value = self.evaluate(search_space, root_id)?;
        fringe.push(root_id, root_value);
        self.statistics.register_fringe_size(fringe.len());
        self.record_visit();

        loop {
            if let Some(reason) = termination.should_terminate(self.statistics.expanded_nodes()) {
                info!(%reason, "search terminated");
                return Ok(SearchResult::Terminated(reason));
            }

            let Some(node_id) = fringe.pop() else {
                info!("fringe exhausted, no solution");
                return Ok(SearchResult::Exhausted);
            };
            search_space.get_node_mut(node_id).close();

            if self.goal.is_satisfied(search_space.get_state(node_id)) {
                let path = search_space.extract_path(node_id);
                info!(path_length = path.len(), path_cost = path.cost(), "goal found");
                return Ok(SearchResult::Success(path));
            }

            self.statistics.increment_expanded_nodes();
            self.expand(search_space, fringe, node_id)?;
        }
    }

    fn expand(
        &mut self,
        search_space: &mut SearchSpace<S>,
        fringe: &mut dyn Fringe,
        node_id: NodeId,
    ) -> Result<(), SearchError> {
        let g_value = search_space.path_cost(node_id);
        let successors = search_space.get_state(node_id).successors()?;
        trace!(
            node = node_id.id(),
            g_value,
            successors = successors.len(),
            "expanding node"
        );

        for (action, state) in successors {
            let cost = action.cost();
            if cost.is_nan() {
                return Err(SearchError::InvalidActionCost {
                    state: format!("{:?}", state),
                    cost,
                });
            }
            debug_assert!(
                cost >= 0.,
                "Action {:?} has negative cost {}",
                action,
                cost
            );
            self.record_visit();

            match search_space.get_node_id(&state) {
                None => {
                    let child_id = search_space.insert_node(state, node_id, action);
                    self.statistics.increment_generated_nodes();
                    let value = self.evaluate(search_space, child_id)?;
                    fringe.push(child_id, value);
                    self.statistics.register_fringe_size(fringe.len());
                }
                Some(existing_id) => {
                    let known_cost = search_space.path_cost(existing_id);
                    if known_cost > g_value + cost {
                        let status = search_space.get_node(existing_id).get_status();
                        let updated = search_space.relax(existing_id, node_id, action);
                        self.statistics.increment_relaxed_nodes();
                        self.requeue(search_space, fringe, &updated)?;
                        if status == SearchNodeStatus::Closed {
                            // The node is not expanded again. Nodes below it
                            // only see the lower cost.
                            self.statistics.increment_stale_relaxations();
                            debug!(
                                node = existing_id.id(),
                                known_cost,
                                new_cost = g_value + cost,
                                descendants = updated.len() - 1,
                                "relaxed an expanded node"
                            );
                        } else {
                            debug!(
                                node = existing_id.id(),
                                known_cost,
                                new_cost = g_value + cost,
                                "relaxed a node in the fringe"
                            );
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Evaluate the nodes whose cost just dropped again, and move those still
    /// in the fringe to their new position.
    fn requeue(
        &mut self,
        search_space: &SearchSpace<S>,
        fringe: &mut dyn Fringe,
        updated: &[NodeId],
    ) -> Result<(), SearchError> {
        for &updated_id in updated {
            if search_space.get_node(updated_id).get_status() == SearchNodeStatus::Open {
                let value = self.evaluate(search_space, updated_id)?;
                fringe.update(updated_id, value);
            }
        }
        Ok(())
    }

    fn evaluate(
        &mut self,
        search_space: &SearchSpace<S>,
        node_id: NodeId,
    ) -> Result<EvaluationValue, SearchError> {
        let node = search_space.get_node(node_id);
        let view = NodeView::new(
            node.get_state(),
            node.get_action(),
            search_space.path_cost(node_id),
            search_space.depth(node_id),
        );
        let value = self.evaluation.evaluate(&view);
        self.statistics.increment_evaluated_nodes();
        if value.into_inner().is_nan() {
            return Err(SearchError::InvalidEvaluation {
                state: format!("{:?}", node.get_state()),
            });
        }
        Ok(value)
    }

    fn record_visit(&mut self) {
        let visited_nodes = self.statistics.increment_visited_nodes();
        let interval = self.config.progress_interval;
        if interval > 0 && visited_nodes % interval == 0 {
            self.observer.nodes_visited(visited_nodes);
        }
    }
}
