use crate::graph::GraphDescription;
use crate::search::{Action, DomainError, Heuristic, SearchConfig, State, Successor};
use std::{
    collections::HashMap,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    path::{Path, PathBuf},
    rc::Rc,
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("failed to read graph file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse graph: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown vertex {0}")]
    UnknownVertex(String),
    #[error("vertex {0} is declared more than once")]
    DuplicateVertex(String),
    #[error("edge {from}->{to} has invalid cost {cost}, costs must be non-negative numbers")]
    InvalidCost { from: String, to: String, cost: f64 },
    #[error("vertex {name} has invalid heuristic estimate {value}")]
    InvalidHeuristic { name: String, value: f64 },
}

#[derive(Debug, Clone)]
struct Edge {
    target: usize,
    label: Rc<str>,
    cost: f64,
}

/// A directed graph with weighted edges and a heuristic estimate per vertex.
/// Successors of a vertex are listed in the order the edges were declared.
#[derive(Debug)]
pub struct WeightedGraph {
    names: Vec<String>,
    indices: HashMap<String, usize>,
    heuristic: Vec<f64>,
    adjacency: Vec<Vec<Edge>>,
    start: usize,
    goal: usize,
    search: SearchConfig,
}

impl WeightedGraph {
    pub fn from_path(path: &Path) -> Result<Rc<Self>, GraphError> {
        let text = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let graph = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            "loaded graph"
        );
        Ok(graph)
    }

    pub fn from_toml_str(text: &str) -> Result<Rc<Self>, GraphError> {
        let description: GraphDescription = toml::from_str(text)?;
        Self::from_description(description)
    }

    pub fn from_description(description: GraphDescription) -> Result<Rc<Self>, GraphError> {
        let mut graph = Self {
            names: vec![],
            indices: HashMap::new(),
            heuristic: vec![],
            adjacency: vec![],
            start: 0,
            goal: 0,
            search: description.search,
        };

        for vertex in description.vertices {
            if graph.indices.contains_key(&vertex.name) {
                return Err(GraphError::DuplicateVertex(vertex.name));
            }
            if vertex.heuristic.is_nan() || vertex.heuristic < 0. {
                return Err(GraphError::InvalidHeuristic {
                    name: vertex.name,
                    value: vertex.heuristic,
                });
            }
            let index = graph.add_vertex(&vertex.name);
            graph.heuristic[index] = vertex.heuristic;
        }

        for edge in description.edges {
            if edge.cost.is_nan() || edge.cost < 0. {
                return Err(GraphError::InvalidCost {
                    from: edge.from,
                    to: edge.to,
                    cost: edge.cost,
                });
            }
            let from = graph.add_vertex(&edge.from);
            let to = graph.add_vertex(&edge.to);
            let label: Rc<str> = match &edge.label {
                Some(label) => label.as_str().into(),
                None => format!("{}->{}", edge.from, edge.to).into(),
            };
            graph.adjacency[from].push(Edge {
                target: to,
                label,
                cost: edge.cost,
            });
            if edge.bidirectional {
                let label: Rc<str> = match &edge.label {
                    Some(label) => label.as_str().into(),
                    None => format!("{}->{}", edge.to, edge.from).into(),
                };
                graph.adjacency[to].push(Edge {
                    target: from,
                    label,
                    cost: edge.cost,
                });
            }
        }

        graph.start = graph.add_vertex(&description.start);
        graph.goal = graph.add_vertex(&description.goal);
        Ok(Rc::new(graph))
    }

    /// Index of the vertex `name`, registering it first if needed.
    fn add_vertex(&mut self, name: &str) -> usize {
        if let Some(&index) = self.indices.get(name) {
            return index;
        }
        let index = self.names.len();
        self.names.push(name.to_string());
        self.indices.insert(name.to_string(), index);
        self.heuristic.push(0.);
        self.adjacency.push(vec![]);
        index
    }

    pub fn start(self: &Rc<Self>) -> Vertex {
        Vertex::new(self.clone(), self.start)
    }

    pub fn goal(self: &Rc<Self>) -> Vertex {
        Vertex::new(self.clone(), self.goal)
    }

    pub fn vertex(self: &Rc<Self>, name: &str) -> Result<Vertex, GraphError> {
        match self.indices.get(name) {
            Some(&index) => Ok(Vertex::new(self.clone(), index)),
            None => Err(GraphError::UnknownVertex(name.to_string())),
        }
    }

    /// The `[search]` table of the graph file.
    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    pub fn num_vertices(&self) -> usize {
        self.names.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

/// A vertex of a [`WeightedGraph`], the search state of the graph domain.
#[derive(Clone)]
pub struct Vertex {
    graph: Rc<WeightedGraph>,
    index: usize,
}

impl Vertex {
    fn new(graph: Rc<WeightedGraph>, index: usize) -> Self {
        Self { graph, index }
    }

    pub fn name(&self) -> &str {
        &self.graph.names[self.index]
    }

    pub fn heuristic(&self) -> f64 {
        self.graph.heuristic[self.index]
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && Rc::ptr_eq(&self.graph, &other.graph)
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({})", self.name())
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl State for Vertex {
    type Action = Move;

    fn successors(&self) -> Result<Vec<Successor<Self>>, DomainError> {
        Ok(self.graph.adjacency[self.index]
            .iter()
            .map(|edge| {
                (
                    Move {
                        label: edge.label.clone(),
                        cost: edge.cost,
                    },
                    Vertex::new(self.graph.clone(), edge.target),
                )
            })
            .collect())
    }
}

/// Traversal of one edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    label: Rc<str>,
    cost: f64,
}

impl Move {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Action for Move {
    fn cost(&self) -> f64 {
        self.cost
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Reads the heuristic estimate stored with each vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableHeuristic;

impl Heuristic<Vertex> for TableHeuristic {
    fn estimate(&mut self, state: &Vertex) -> f64 {
        state.heuristic()
    }
}
