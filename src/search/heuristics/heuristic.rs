/// A heuristic estimates the remaining cost from a state to the goal.
///
/// For [`AStar`](crate::search::AStar) to return optimal paths the estimate
/// must be admissible (never above the true remaining cost) and consistent
/// (never drop by more than the cost of an action along any transition).
pub trait Heuristic<S> {
    fn estimate(&mut self, state: &S) -> f64;
}

impl<S, F> Heuristic<S> for F
where
    F: FnMut(&S) -> f64,
{
    fn estimate(&mut self, state: &S) -> f64 {
        self(state)
    }
}

/// Where the planner binary takes its heuristic estimates from.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Use the estimates stored with each vertex of the graph.")]
    Table,
    #[clap(name = "zero", help = "The zero heuristic.")]
    ZeroHeuristic,
}
