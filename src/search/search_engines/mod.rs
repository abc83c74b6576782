mod best_first;
mod progress;
mod search_config;
mod search_engine;
mod termination_condition;

pub use best_first::BestFirstSearch;
pub use progress::{LogProgress, ProgressObserver};
pub use search_config::{SearchConfig, DEFAULT_PROGRESS_INTERVAL};
pub use search_engine::{SearchEngineName, SearchResult};
pub use termination_condition::{TerminationCondition, TerminationReason};
