//! A path is the sequence of actions leading from the start state of a search
//! to the state it ended in. This module provides the [`Path`] struct, which
//! represents such a path together with every state it passes through.

use crate::search::{Action, State, Successor};
use itertools::Itertools;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Path<S: State> {
    start: S,
    steps: Vec<Successor<S>>,
}

impl<S: State> Path<S> {
    /// The path of length zero that starts and ends in `start`.
    pub fn empty(start: S) -> Self {
        Self {
            start,
            steps: vec![],
        }
    }

    pub fn new(start: S, steps: Vec<Successor<S>>) -> Self {
        Self { start, steps }
    }

    pub fn start(&self) -> &S {
        &self.start
    }

    /// The state the path ends in. For an empty path this is the start state.
    pub fn last_state(&self) -> &S {
        self.steps
            .last()
            .map(|(_, state)| state)
            .unwrap_or(&self.start)
    }

    /// The (action, resulting state) pairs of the path in order.
    pub fn steps(&self) -> &[Successor<S>] {
        &self.steps
    }

    pub fn actions(&self) -> impl Iterator<Item = &S::Action> + '_ {
        self.steps.iter().map(|(action, _)| action)
    }

    /// Every state on the path, starting with the start state.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        std::iter::once(&self.start).chain(self.steps.iter().map(|(_, state)| state))
    }

    /// Sum of the action costs along the path.
    pub fn cost(&self) -> f64 {
        self.actions().map(|action| action.cost()).sum()
    }

    /// Number of actions in the path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<S> Display for Path<S>
where
    S: State + Display,
    S::Action: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        if !self.steps.is_empty() {
            write!(
                f,
                " {}",
                self.steps
                    .iter()
                    .format_with(" ", |(action, state), g| g(&format_args!(
                        "-[{}]-> {}",
                        action, state
                    )))
            )?;
        }
        Ok(())
    }
}
