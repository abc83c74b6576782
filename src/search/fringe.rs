//! The fringe holds generated but not yet expanded nodes, ordered ascending by
//! their evaluation. Evaluations are stored next to the node handles. When a
//! queued node is relaxed its evaluation is replaced through
//! [`Fringe::update`], which places the node as if it had just been pushed.

use crate::search::{EvaluationValue, NodeId};
use priority_queue::PriorityQueue;
use serde::Deserialize;
use std::{cmp::Reverse, collections::VecDeque, fmt::Debug};

/// How to order a new node relative to nodes already in the fringe with the
/// same evaluation.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// A new node goes in front of every node with an equal evaluation.
    #[default]
    NewestFirst,
    /// A new node goes behind every node with an equal evaluation.
    OldestFirst,
}

pub trait Fringe: Debug {
    /// Add a node with the given evaluation.
    fn push(&mut self, node_id: NodeId, value: EvaluationValue);

    /// Replace the evaluation of a node that is in the fringe. The node is
    /// moved to where [`Fringe::push`] would put it with the new value.
    fn update(&mut self, node_id: NodeId, value: EvaluationValue);

    /// Remove and return the node with the lowest evaluation.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FringeKind {
    /// Sorted list with linear-scan insertion. O(n) per push and update, O(1)
    /// per pop.
    #[default]
    Linear,
    /// Binary heap. O(log n) per push, pop and update, same order as the
    /// sorted list.
    Heap,
}

impl FringeKind {
    pub fn create(&self, tie_break: TieBreak) -> Box<dyn Fringe> {
        match self {
            FringeKind::Linear => Box::new(LinearFringe::new(tie_break)),
            FringeKind::Heap => Box::new(HeapFringe::new(tie_break)),
        }
    }
}

/// A fringe kept as a sorted list. Insertion scans from the front for the
/// first node the new node has to precede.
#[derive(Debug)]
pub struct LinearFringe {
    entries: VecDeque<(NodeId, EvaluationValue)>,
    tie_break: TieBreak,
}

impl LinearFringe {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            entries: VecDeque::new(),
            tie_break,
        }
    }
}

impl Fringe for LinearFringe {
    fn push(&mut self, node_id: NodeId, value: EvaluationValue) {
        let position = match self.tie_break {
            TieBreak::NewestFirst => self.entries.iter().position(|(_, other)| *other >= value),
            TieBreak::OldestFirst => self.entries.iter().position(|(_, other)| *other > value),
        };
        match position {
            Some(index) => self.entries.insert(index, (node_id, value)),
            None => self.entries.push_back((node_id, value)),
        }
    }

    fn update(&mut self, node_id: NodeId, value: EvaluationValue) {
        let index = self.entries.iter().position(|(other, _)| *other == node_id);
        debug_assert!(index.is_some(), "Node {:?} is not in the fringe", node_id);
        if let Some(index) = index {
            self.entries.remove(index);
            self.push(node_id, value);
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.entries.pop_front().map(|(node_id, _)| node_id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A fringe backed by a priority queue. Ties on the evaluation are resolved
/// by insertion order, in the direction given by the [`TieBreak`].
#[derive(Debug)]
pub struct HeapFringe {
    queue: PriorityQueue<NodeId, Reverse<(EvaluationValue, i64)>>,
    tie_break: TieBreak,
    insertions: i64,
}

impl HeapFringe {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            queue: PriorityQueue::new(),
            tie_break,
            insertions: 0,
        }
    }

    /// Position among equal evaluations of the next node to be pushed.
    fn next_order(&mut self) -> i64 {
        self.insertions += 1;
        match self.tie_break {
            TieBreak::NewestFirst => -self.insertions,
            TieBreak::OldestFirst => self.insertions,
        }
    }
}

impl Fringe for HeapFringe {
    fn push(&mut self, node_id: NodeId, value: EvaluationValue) {
        let order = self.next_order();
        let previous = self.queue.push(node_id, Reverse((value, order)));
        debug_assert!(previous.is_none(), "Node {:?} pushed twice", node_id);
    }

    fn update(&mut self, node_id: NodeId, value: EvaluationValue) {
        let order = self.next_order();
        let previous = self.queue.change_priority(&node_id, Reverse((value, order)));
        debug_assert!(previous.is_some(), "Node {:?} is not in the fringe", node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
