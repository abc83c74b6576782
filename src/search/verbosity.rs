use tracing::Level;

/// How much the planner binary logs.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum Verbosity {
    /// Errors only
    Silent,
    /// Search start and end, progress, periodic statistics
    #[default]
    Normal,
    /// Also every relaxation
    Verbose,
    /// Also every expansion
    Debug,
}

impl From<Verbosity> for Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => Level::ERROR,
            Verbosity::Normal => Level::INFO,
            Verbosity::Verbose => Level::DEBUG,
            Verbosity::Debug => Level::TRACE,
        }
    }
}
