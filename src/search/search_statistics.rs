use std::time::Instant;
use tracing::info;

/// Counters describing the work done by one search.
#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes visited, i.e. the root plus every generated successor,
    /// whether or not its state had been seen before
    visited_nodes: u64,
    /// Number of nodes expanded
    expanded_nodes: u64,
    /// Number of unique nodes generated, excluding the root
    generated_nodes: u64,
    /// Number of nodes evaluated
    evaluated_nodes: u64,
    /// Number of times a cheaper path to a known state was recorded
    relaxed_nodes: u64,
    /// Number of relaxations of nodes that were already expanded
    stale_relaxations: u64,
    /// Largest number of nodes in the fringe at any time
    peak_fringe_size: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self {
            visited_nodes: 0,
            expanded_nodes: 0,
            generated_nodes: 0,
            evaluated_nodes: 0,
            relaxed_nodes: 0,
            stale_relaxations: 0,
            peak_fringe_size: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    /// Returns the updated number of visited nodes.
    pub fn increment_visited_nodes(&mut self) -> u64 {
        self.visited_nodes += 1;
        self.log_if_needed();
        self.visited_nodes
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_relaxed_nodes(&mut self) {
        self.relaxed_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_stale_relaxations(&mut self) {
        self.stale_relaxations += 1;
        self.log_if_needed();
    }

    pub fn register_fringe_size(&mut self, fringe_size: usize) {
        self.peak_fringe_size = self.peak_fringe_size.max(fringe_size);
    }

    pub fn visited_nodes(&self) -> u64 {
        self.visited_nodes
    }

    pub fn expanded_nodes(&self) -> u64 {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> u64 {
        self.generated_nodes
    }

    pub fn evaluated_nodes(&self) -> u64 {
        self.evaluated_nodes
    }

    pub fn relaxed_nodes(&self) -> u64 {
        self.relaxed_nodes
    }

    pub fn stale_relaxations(&self) -> u64 {
        self.stale_relaxations
    }

    pub fn peak_fringe_size(&self) -> usize {
        self.peak_fringe_size
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            visited_nodes = self.visited_nodes,
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            evaluated_nodes = self.evaluated_nodes,
            relaxed_nodes = self.relaxed_nodes,
            stale_relaxations = self.stale_relaxations,
            peak_fringe_size = self.peak_fringe_size,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
