//! The capabilities a problem domain has to provide before it can be searched.
//! A domain supplies a [`State`] type with a successor relation, and an
//! [`Action`] type carrying the cost of each transition.

use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// An action labels a transition between two states. The resulting state is
/// not stored on the action, it is produced alongside it by
/// [`State::successors`].
pub trait Action: Clone + Debug + PartialEq {
    /// The cost of taking this action. Must be non-negative, the search engine
    /// assumes so for both ordering and relaxation.
    fn cost(&self) -> f64;
}

/// A point in the search space of a problem domain.
///
/// Equality and hashing must agree: two equal states must hash identically,
/// otherwise the search cannot recognise a state it has already generated.
pub trait State: Clone + Debug + Eq + Hash {
    type Action: Action;

    /// Generate all outgoing transitions of this state. The search engine
    /// calls this at most once per state and does not cache the result.
    ///
    /// A domain that detects it cannot honour its own contract should return
    /// a [`DomainError`], which is passed on to the caller of the search
    /// unchanged.
    fn successors(&self) -> Result<Vec<Successor<Self>>, DomainError>;
}

/// An (action, resulting state) pair produced by the successor relation.
pub type Successor<S> = (<S as State>::Action, S);

/// A problem domain violated one of the capability contracts the search
/// relies on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DomainError {
    message: String,
}

impl DomainError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
