use crate::search::State;

/// Decides whether a state ends the search.
pub trait Goal<S: State> {
    /// Returns true if the given state satisfies the goal.
    fn is_satisfied(&self, state: &S) -> bool;
}

/// The goal of reaching one specific state.
#[derive(Debug, Clone)]
pub struct GoalState<S: State> {
    state: S,
}

impl<S: State> GoalState<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

impl<S: State> Goal<S> for GoalState<S> {
    fn is_satisfied(&self, state: &S) -> bool {
        *state == self.state
    }
}

impl<S, F> Goal<S> for F
where
    S: State,
    F: Fn(&S) -> bool,
{
    fn is_satisfied(&self, state: &S) -> bool {
        self(state)
    }
}
