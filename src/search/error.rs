use crate::search::{DomainError, TerminationReason};
use thiserror::Error;

/// Errors returned by a search, and by [`SearchResult::into_path`] for
/// searches that ended without a path.
///
/// [`SearchResult::into_path`]: crate::search::SearchResult::into_path
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The fringe ran empty without reaching a goal.
    #[error("no solution: every reachable state was expanded without reaching a goal")]
    Exhausted,

    /// The search stopped early.
    #[error("search stopped early: {0}")]
    Terminated(TerminationReason),

    /// The successor relation of the domain reported a contract violation.
    #[error("malformed domain: {0}")]
    MalformedDomain(#[from] DomainError),

    /// The domain produced an action whose cost is not a number.
    #[error("malformed domain: action leading to {state} has cost {cost}")]
    InvalidActionCost { state: String, cost: f64 },

    /// The evaluation function returned NaN.
    #[error("evaluation of {state} is not a number")]
    InvalidEvaluation { state: String },

    /// The search configuration cannot be used.
    #[error("invalid search configuration: {detail}")]
    InvalidConfig { detail: String },
}
