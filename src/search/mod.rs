mod error;
mod evaluation;
mod fringe;
mod goal;
pub mod heuristics;
mod path;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod state;
mod validate;
mod verbosity;

pub use error::SearchError;
pub use evaluation::{AStar, Evaluation, EvaluationValue, Greedy, NodeView, UniformCost};
pub use fringe::{Fringe, FringeKind, HeapFringe, LinearFringe, TieBreak};
pub use goal::{Goal, GoalState};
pub use heuristics::{Heuristic, HeuristicName, ZeroHeuristic};
pub use path::Path;
pub use search_engines::{
    BestFirstSearch, LogProgress, ProgressObserver, SearchConfig, SearchEngineName, SearchResult,
    TerminationCondition, TerminationReason,
};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use state::{Action, DomainError, State, Successor};
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
