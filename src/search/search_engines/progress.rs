//! Progress notifications. The search engine notifies its observer every
//! `progress-interval` visited nodes with the running total. Observers only
//! watch, they cannot influence the search.

use tracing::info;

pub trait ProgressObserver {
    fn nodes_visited(&mut self, visited_nodes: u64);
}

impl<F> ProgressObserver for F
where
    F: FnMut(u64),
{
    fn nodes_visited(&mut self, visited_nodes: u64) {
        self(visited_nodes)
    }
}

/// Reports progress through `tracing` under the `progress` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn nodes_visited(&mut self, visited_nodes: u64) {
        info!(target: "progress", visited_nodes, "nodes explored");
    }
}
