//! An explicit weighted directed graph read from TOML, the domain searched by
//! the planner binary.
//!
//! ```toml
//! start = "home"
//! goal = "office"
//!
//! [[vertices]]
//! name = "home"
//! heuristic = 4.0
//!
//! [[edges]]
//! from = "home"
//! to = "station"
//! cost = 1.5
//! label = "walk"
//! bidirectional = true
//!
//! [search]
//! fringe = "heap"
//! ```
//!
//! Vertices only need to be listed to attach a heuristic estimate, any vertex
//! named by an edge, the start or the goal exists implicitly.

mod description;
mod weighted_graph;

pub use description::{EdgeDescription, GraphDescription, VertexDescription};
pub use weighted_graph::{GraphError, Move, TableHeuristic, Vertex, WeightedGraph};
