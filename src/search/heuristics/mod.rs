mod heuristic;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName};
pub use zero_heuristic::ZeroHeuristic;
