use crate::search::Heuristic;

/// Estimates zero everywhere. Admissible and consistent for every domain, it
/// turns A* into uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn estimate(&mut self, _state: &S) -> f64 {
        0.
    }
}
