//! Degree-based peeling
//!
//! Nodes are peeled from the outside in: a node becomes eligible once at
//! most one of its relations is still unvisited. The iterator seeds itself
//! from those counts at `init`, so `set_source` is ignored. Graphs where
//! every node sits on a cycle never produce an eligible node and the run
//! visits nothing.

use crate::graph::frontier::{Frontier, Queue, Stack};
use crate::graph::iterator::GraphIterator;
use crate::graph::marks::Marks;
use crate::graph::types::{Graph, NodeId};

#[derive(Debug, Default, Clone)]
pub struct TopologicalIterator<F> {
    frontier: F,
    /// Unvisited relations left per node
    remaining: Vec<usize>,
    queued: Vec<bool>,
}

/// Layered peeling: every extremity advances one step at a time
pub type BreadthFirstTopologicalIterator = TopologicalIterator<Queue>;

/// Sweeping peeling: the most recently freed node is peeled next
pub type DepthFirstTopologicalIterator = TopologicalIterator<Stack>;

impl<F: Frontier> TopologicalIterator<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unvisited relations still counted against `node`
    pub fn remaining(&self, node: NodeId) -> Option<usize> {
        self.remaining.get(node.0).copied()
    }

    fn enqueue(&mut self, node: NodeId) {
        self.queued[node.0] = true;
        self.frontier.push(node);
    }
}

impl<P, F: Frontier> GraphIterator<P> for TopologicalIterator<F> {
    fn init(&mut self, graph: &Graph<P>, marks: &Marks) {
        let count = graph.node_count();
        self.frontier.clear();
        self.queued = vec![false; count];
        self.remaining = graph
            .nodes()
            .map(|n| {
                graph
                    .related(n.id())
                    .filter(|r| !marks.is_visited(*r))
                    .count()
            })
            .collect();

        for i in 0..count {
            let id = NodeId(i);
            if self.remaining[i] <= 1 && !marks.is_visited(id) {
                self.enqueue(id);
            }
        }
        tracing::debug!(seeded = self.frontier.len(), nodes = count, "peeling_seeded");
    }

    fn set_source(&mut self, _graph: &Graph<P>, _source: NodeId) {}

    fn has_next(&self) -> bool {
        !self.frontier.is_empty()
    }

    fn next(&mut self) -> Option<NodeId> {
        self.frontier.pop()
    }

    fn cont(&mut self, graph: &Graph<P>, current: NodeId, marks: &Marks) {
        if self.remaining.is_empty() {
            return;
        }
        for related in graph.related(current) {
            let slot = &mut self.remaining[related.0];
            *slot = slot.saturating_sub(1);
            if *slot <= 1 && !marks.is_visited(related) && !self.queued[related.0] {
                self.enqueue(related);
            }
        }
    }
}
