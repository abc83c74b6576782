use crate::search::{
    AStar, Evaluation, Greedy, Heuristic, Path, SearchError, State, TerminationReason,
    UniformCost,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<S: State> {
    /// The search reached a goal state along the given path
    Success(Path<S>),
    /// The fringe ran empty, no goal state is reachable
    Exhausted,
    /// The search was stopped before it finished
    Terminated(TerminationReason),
}

impl<S: State> SearchResult<S> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn path(&self) -> Option<&Path<S>> {
        match self {
            SearchResult::Success(path) => Some(path),
            _ => None,
        }
    }

    /// Turn a search without a path into an error.
    pub fn into_path(self) -> Result<Path<S>, SearchError> {
        match self {
            SearchResult::Success(path) => Ok(path),
            SearchResult::Exhausted => Err(SearchError::Exhausted),
            SearchResult::Terminated(reason) => Err(SearchError::Terminated(reason)),
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(name = "astar", help = "A* search, f = g + h.")]
    AStar,
    #[clap(name = "gbfs", help = "Greedy best-first search, f = h.")]
    Greedy,
    #[clap(
        name = "ucs",
        help = "Uniform-cost search, f = g. Ignores the heuristic."
    )]
    UniformCost,
}

impl SearchEngineName {
    pub fn create<S, H>(&self, heuristic: H) -> Box<dyn Evaluation<S>>
    where
        S: State + 'static,
        H: Heuristic<S> + 'static,
    {
        match self {
            SearchEngineName::AStar => Box::new(AStar::new(heuristic)),
            SearchEngineName::Greedy => Box::new(Greedy::new(heuristic)),
            SearchEngineName::UniformCost => Box::new(UniformCost),
        }
    }
}
