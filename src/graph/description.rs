use crate::search::SearchConfig;
use serde::Deserialize;

/// The TOML form of a [`WeightedGraph`](crate::graph::WeightedGraph).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDescription {
    pub start: String,
    pub goal: String,
    #[serde(default)]
    pub vertices: Vec<VertexDescription>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VertexDescription {
    pub name: String,
    /// Estimated cost from this vertex to the goal
    #[serde(default)]
    pub heuristic: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDescription {
    pub from: String,
    pub to: String,
    pub cost: f64,
    /// Defaults to `from->to`
    #[serde(default)]
    pub label: Option<String>,
    /// Also add the edge from `to` back to `from`, with the same cost
    #[serde(default)]
    pub bidirectional: bool,
}

impl EdgeDescription {
    pub fn new(from: impl Into<String>, to: impl Into<String>, cost: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            cost,
            label: None,
            bidirectional: false,
        }
    }
}
