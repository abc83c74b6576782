use std::{
    fmt::{self, Display},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};
use tracing::info;

/// Why a search stopped before reaching a goal or exhausting its fringe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search ran out of time
    TimeLimitExceeded,
    /// The search expanded as many nodes as it was allowed to
    ExpansionLimitExceeded,
    /// The search was cancelled from outside
    Cancelled,
}

impl Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::TimeLimitExceeded => write!(f, "time limit exceeded"),
            TerminationReason::ExpansionLimitExceeded => write!(f, "expansion limit exceeded"),
            TerminationReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Optional limits on a search. Checked once per iteration of the search
/// loop, so a search may overrun its time limit by the cost of one expansion.
#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    expansion_limit: Option<u64>,
    cancel_flag: Option<Arc<AtomicBool>>,
    start_time: Instant,
}

impl TerminationCondition {
    pub fn new(time_limit: Option<Duration>, expansion_limit: Option<u64>) -> Self {
        info!(
            time_limit = time_limit.map(|d| d.as_secs_f64()),
            expansion_limit = expansion_limit,
        );
        Self {
            time_limit,
            expansion_limit,
            cancel_flag: None,
            start_time: Instant::now(),
        }
    }

    /// Also stop once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    pub fn should_terminate(&self, expanded_nodes: u64) -> Option<TerminationReason> {
        if let Some(flag) = &self.cancel_flag {
            if flag.load(Ordering::Relaxed) {
                return Some(TerminationReason::Cancelled);
            }
        }
        if let Some(expansion_limit) = self.expansion_limit {
            if expanded_nodes >= expansion_limit {
                return Some(TerminationReason::ExpansionLimitExceeded);
            }
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(TerminationReason::TimeLimitExceeded);
            }
        }
        None
    }

    pub fn finalise(&self) {
        info!(total_time_used = self.start_time.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_limits_never_terminate() {
        let condition = TerminationCondition::new(None, None);
        assert_eq!(condition.should_terminate(u64::MAX), None);
    }

    #[test]
    fn expansion_limit() {
        let condition = TerminationCondition::new(None, Some(10));
        assert_eq!(condition.should_terminate(9), None);
        assert_eq!(
            condition.should_terminate(10),
            Some(TerminationReason::ExpansionLimitExceeded)
        );
    }

    #[test]
    fn time_limit() {
        let condition = TerminationCondition::new(Some(Duration::ZERO), None);
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(
            condition.should_terminate(0),
            Some(TerminationReason::TimeLimitExceeded)
        );

        let condition = TerminationCondition::new(Some(Duration::from_secs(3600)), None);
        assert_eq!(condition.should_terminate(0), None);
    }

    #[test]
    fn cancel_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let condition = TerminationCondition::new(None, None).with_cancel_flag(flag.clone());
        assert_eq!(condition.should_terminate(0), None);
        flag.store(true, Ordering::Relaxed);
        assert_eq!(
            condition.should_terminate(0),
            Some(TerminationReason::Cancelled)
        );
    }
}
