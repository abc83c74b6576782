use crate::search::{FringeKind, SearchError, TieBreak};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// Tunable parts of a best-first search. Every field has a default, so an
/// empty TOML table is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Data structure holding the unexpanded nodes
    pub fringe: FringeKind,
    /// Ordering among nodes with equal evaluation
    pub tie_break: TieBreak,
    /// Notify the progress observer every this many visited nodes, 0 turns
    /// notifications off
    pub progress_interval: u64,
    /// Wall-clock limit on the search, in seconds
    pub time_limit_secs: Option<f64>,
    /// Maximum number of node expansions
    pub max_expansions: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fringe: FringeKind::default(),
            tie_break: TieBreak::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            time_limit_secs: None,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn time_limit(&self) -> Result<Option<Duration>, SearchError> {
        self.time_limit_secs
            .map(|secs| {
                Duration::try_from_secs_f64(secs).map_err(|e| SearchError::InvalidConfig {
                    detail: format!("time-limit-secs = {}: {}", secs, e),
                })
            })
            .transpose()
    }

    pub fn set_time_limit(&mut self, time_limit: Duration) {
        self.time_limit_secs = Some(time_limit.as_secs_f64());
    }
}
