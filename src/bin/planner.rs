use bestfirst::{
    graph::{TableHeuristic, Vertex, WeightedGraph},
    search::{
        heuristics::{HeuristicName, ZeroHeuristic},
        search_engines::{SearchEngineName, SearchResult},
        validate, BestFirstSearch, Evaluation, FringeKind, GoalState, Path, SearchConfig,
        TieBreak, ValidationError, Verbosity,
    },
};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Find a path between the start and goal vertices of a weighted graph.
struct Cli {
    #[arg(help = "The TOML graph file")]
    graph: PathBuf,
    #[arg(
        help = "Also write the path to this file",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    output: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::AStar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::Table
    )]
    heuristic_name: HeuristicName,
    #[arg(
        value_enum,
        help = "The fringe to use, overrides the graph file",
        long = "fringe",
        id = "FRINGE"
    )]
    fringe: Option<FringeKind>,
    #[arg(
        value_enum,
        help = "How to order nodes with equal evaluation, overrides the graph file",
        long = "tie-break",
        id = "TIE_BREAK"
    )]
    tie_break: Option<TieBreak>,
    #[arg(
        help = "Report progress every this many visited nodes, 0 to disable",
        long = "progress-interval",
        id = "PROGRESS_INTERVAL"
    )]
    progress_interval: Option<u64>,
    #[arg(
        help = "Give up after this long, e.g. 30s or 5m",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Give up after this many expansions",
        long = "max-expansions",
        id = "MAX_EXPANSIONS"
    )]
    max_expansions: Option<u64>,
    #[arg(help = "Print the result as JSON", long = "json")]
    json: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

impl Cli {
    /// The `[search]` table of the graph file with the command line
    /// overrides applied.
    fn search_config(&self, graph: &WeightedGraph) -> SearchConfig {
        let mut config = graph.search_config().clone();
        if let Some(fringe) = self.fringe {
            config.fringe = fringe;
        }
        if let Some(tie_break) = self.tie_break {
            config.tie_break = tie_break;
        }
        if let Some(progress_interval) = self.progress_interval {
            config.progress_interval = progress_interval;
        }
        if let Some(time_limit) = self.time_limit {
            config.set_time_limit(time_limit);
        }
        if let Some(max_expansions) = self.max_expansions {
            config.max_expansions = Some(max_expansions);
        }
        config
    }

    fn evaluation(&self) -> Box<dyn Evaluation<Vertex>> {
        match self.heuristic_name {
            HeuristicName::Table => self.search_engine_name.create(TableHeuristic),
            HeuristicName::ZeroHeuristic => self.search_engine_name.create(ZeroHeuristic),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let graph = match WeightedGraph::from_path(&cli.graph) {
        Ok(graph) => graph,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };

    let config = cli.search_config(&graph);
    let goal = graph.goal();
    let mut engine = BestFirstSearch::new(
        graph.start(),
        Box::new(GoalState::new(goal.clone())),
        cli.evaluation(),
    )
    .with_config(config);

    let result = match engine.search() {
        Ok(result) => result,
        Err(e) => {
            error!("search failed: {}", e);
            return ExitCode::from(2);
        }
    };

    // Nothing is reported before the path has been checked.
    if let Err(e) = validate_result(&result, &goal) {
        error!("path is invalid: {}", e);
        return ExitCode::from(2);
    }

    if cli.json {
        println!("{}", to_json(&result, &engine));
    }

    match &result {
        SearchResult::Success(path) => {
            if !cli.json {
                println!("Path found:");
                println!("{}", path);
                println!("Path length: {}", path.len());
                println!("Path cost: {}", path.cost());
            }

            if let Some(output) = &cli.output {
                if let Err(e) = std::fs::write(output, format!("{}\n", path)) {
                    error!("failed to write {}: {}", output.display(), e);
                    return ExitCode::from(2);
                }
            }
            ExitCode::SUCCESS
        }
        _ => {
            info!("no path found");
            if !cli.json {
                println!("No path found: {:?}", result);
            }
            ExitCode::FAILURE
        }
    }
}

/// Replay the path of a successful search. Searches without a path pass.
fn validate_result(result: &SearchResult<Vertex>, goal: &Vertex) -> Result<(), ValidationError> {
    let Some(path) = result.path() else {
        return Ok(());
    };
    info!("validating path");
    validate(path, &GoalState::new(goal.clone()))?;
    info!("path is valid");
    Ok(())
}

fn to_json(result: &SearchResult<Vertex>, engine: &BestFirstSearch<Vertex>) -> serde_json::Value {
    let statistics = engine.statistics();
    let outcome = match result {
        SearchResult::Success(_) => "success".to_string(),
        SearchResult::Exhausted => "exhausted".to_string(),
        SearchResult::Terminated(reason) => reason.to_string(),
    };
    serde_json::json!({
        "success": result.is_success(),
        "outcome": outcome,
        "path": result.path().map(path_json),
        "statistics": {
            "visited": statistics.visited_nodes(),
            "expanded": statistics.expanded_nodes(),
            "generated": statistics.generated_nodes(),
            "evaluated": statistics.evaluated_nodes(),
            "relaxed": statistics.relaxed_nodes(),
            "stale-relaxations": statistics.stale_relaxations(),
            "peak-fringe-size": statistics.peak_fringe_size(),
        },
    })
}

fn path_json(path: &Path<Vertex>) -> serde_json::Value {
    serde_json::json!({
        "states": path.states().map(Vertex::name).collect::<Vec<_>>(),
        "actions": path.actions().map(|action| action.label()).collect::<Vec<_>>(),
        "cost": path.cost(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestfirst::search::TerminationReason;

    const TRIANGLE: &str = r#"
        start = "a"
        goal = "c"

        [[edges]]
        from = "a"
        to = "b"
        cost = 1.0

        [[edges]]
        from = "b"
        to = "c"
        cost = 1.0
    "#;

    #[test]
    fn found_path_is_validated() {
        let graph = WeightedGraph::from_toml_str(TRIANGLE).unwrap();
        let mut engine = BestFirstSearch::new(
            graph.start(),
            Box::new(GoalState::new(graph.goal())),
            SearchEngineName::UniformCost.create(ZeroHeuristic),
        );
        let result = engine.search().unwrap();
        assert!(result.is_success());
        assert_eq!(validate_result(&result, &graph.goal()), Ok(()));
    }

    #[test]
    fn invalid_path_is_rejected() {
        let graph = WeightedGraph::from_toml_str(TRIANGLE).unwrap();
        // The empty path stays at the start.
        let result = SearchResult::Success(Path::empty(graph.start()));
        assert!(matches!(
            validate_result(&result, &graph.goal()),
            Err(ValidationError::GoalNotReached(_))
        ));

        let wrong_goal = graph.vertex("b").unwrap();
        let mut engine = BestFirstSearch::new(
            graph.start(),
            Box::new(GoalState::new(graph.goal())),
            SearchEngineName::UniformCost.create(ZeroHeuristic),
        );
        let result = engine.search().unwrap();
        assert!(validate_result(&result, &wrong_goal).is_err());
    }

    #[test]
    fn searches_without_path_pass() {
        let graph = WeightedGraph::from_toml_str(TRIANGLE).unwrap();
        assert_eq!(
            validate_result(&SearchResult::Exhausted, &graph.goal()),
            Ok(())
        );
        assert_eq!(
            validate_result(
                &SearchResult::Terminated(TerminationReason::Cancelled),
                &graph.goal()
            ),
            Ok(())
        );
    }
}
