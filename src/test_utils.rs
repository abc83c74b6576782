use crate::graph::{EdgeDescription, GraphDescription, VertexDescription, WeightedGraph};
use crate::search::{Action, DomainError, State, Successor};
use std::{fmt, rc::Rc};

/// Side length of the grid [`GridCell`] lives on
pub const GRID_SIZE: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    x: i32,
    y: i32,
}

impl GridCell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStep {
    Up,
    Down,
    Left,
    Right,
}

impl GridStep {
    const ALL: [GridStep; 4] = [GridStep::Up, GridStep::Down, GridStep::Left, GridStep::Right];

    fn apply(self, cell: &GridCell) -> GridCell {
        match self {
            GridStep::Up => GridCell::new(cell.x, cell.y - 1),
            GridStep::Down => GridCell::new(cell.x, cell.y + 1),
            GridStep::Left => GridCell::new(cell.x - 1, cell.y),
            GridStep::Right => GridCell::new(cell.x + 1, cell.y),
        }
    }
}

impl Action for GridStep {
    fn cost(&self) -> f64 {
        1.
    }
}

impl fmt::Display for GridStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GridStep::Up => "up",
            GridStep::Down => "down",
            GridStep::Left => "left",
            GridStep::Right => "right",
        };
        write!(f, "{}", name)
    }
}

impl State for GridCell {
    type Action = GridStep;

    fn successors(&self) -> Result<Vec<Successor<Self>>, DomainError> {
        Ok(GridStep::ALL
            .iter()
            .map(|&step| (step, step.apply(self)))
            .filter(|(_, next)| {
                (0..GRID_SIZE).contains(&next.x) && (0..GRID_SIZE).contains(&next.y)
            })
            .collect())
    }
}

pub fn manhattan_to(goal: GridCell) -> impl Fn(&GridCell) -> f64 {
    move |cell: &GridCell| f64::from((cell.x - goal.x).abs() + (cell.y - goal.y).abs())
}

pub fn graph_from_edges(
    start: &str,
    goal: &str,
    edges: &[(&str, &str, f64)],
) -> Rc<WeightedGraph> {
    graph_with_estimates(start, goal, edges, &[])
}

pub fn graph_with_estimates(
    start: &str,
    goal: &str,
    edges: &[(&str, &str, f64)],
    estimates: &[(&str, f64)],
) -> Rc<WeightedGraph> {
    let description = GraphDescription {
        start: start.to_string(),
        goal: goal.to_string(),
        vertices: estimates
            .iter()
            .map(|&(name, heuristic)| VertexDescription {
                name: name.to_string(),
                heuristic,
            })
            .collect(),
        edges: edges
            .iter()
            .map(|&(from, to, cost)| EdgeDescription::new(from, to, cost))
            .collect(),
        search: Default::default(),
    };
    WeightedGraph::from_description(description).unwrap()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Fails to list successors two steps away from the root
    BrokenSuccessors,
    /// The root has a single successor reached by an action of cost NaN
    NanCost,
}

/// A chain-shaped domain that misbehaves in the given way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Faulty {
    kind: FaultKind,
    depth: u32,
}

impl Faulty {
    pub fn new(kind: FaultKind) -> Self {
        Self { kind, depth: 0 }
    }

    fn child(&self) -> Self {
        Self {
            kind: self.kind,
            depth: self.depth + 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hop(pub f64);

impl Action for Hop {
    fn cost(&self) -> f64 {
        self.0
    }
}

impl State for Faulty {
    type Action = Hop;

    fn successors(&self) -> Result<Vec<Successor<Self>>, DomainError> {
        match (self.kind, self.depth) {
            (FaultKind::BrokenSuccessors, 2) => {
                Err(DomainError::new("successor table corrupted"))
            }
            (FaultKind::BrokenSuccessors, _) => Ok(vec![(Hop(1.), self.child())]),
            (FaultKind::NanCost, 0) => Ok(vec![(Hop(f64::NAN), self.child())]),
            (FaultKind::NanCost, _) => Ok(vec![]),
        }
    }
}

/// Positions on an unbounded half-line, each one step from its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line(pub u32);

impl State for Line {
    type Action = Hop;

    fn successors(&self) -> Result<Vec<Successor<Self>>, DomainError> {
        let mut successors = vec![(Hop(1.), Line(self.0 + 1))];
        if self.0 > 0 {
            successors.push((Hop(1.), Line(self.0 - 1)));
        }
        Ok(successors)
    }
}
