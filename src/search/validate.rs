use crate::search::{DomainError, Goal, Path, State};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("step {step}: {action} does not lead from {from} to {to}")]
    InvalidStep {
        step: usize,
        from: String,
        action: String,
        to: String,
    },
    #[error("path ends in {0}, which does not satisfy the goal")]
    GoalNotReached(String),
    #[error("could not generate successors: {0}")]
    Domain(#[from] DomainError),
}

/// Replay `path` from its start state, checking that every step is a
/// transition of the domain and that the last state satisfies `goal`.
pub fn validate<S, G>(path: &Path<S>, goal: &G) -> Result<(), ValidationError>
where
    S: State,
    G: Goal<S> + ?Sized,
{
    let mut cur_state = path.start();
    for (step, (action, next_state)) in path.steps().iter().enumerate() {
        let successors = cur_state.successors()?;
        if !successors
            .iter()
            .any(|(other_action, other_state)| other_action == action && other_state == next_state)
        {
            return Err(ValidationError::InvalidStep {
                step,
                from: format!("{:?}", cur_state),
                action: format!("{:?}", action),
                to: format!("{:?}", next_state),
            });
        }
        cur_state = next_state;
    }

    if !goal.is_satisfied(cur_state) {
        return Err(ValidationError::GoalNotReached(format!("{:?}", cur_state)));
    }

    Ok(())
}
