use crate::graph::frontier::Frontier;
use crate::graph::iterator::GraphIterator;
use crate::graph::marks::Marks;
use crate::graph::types::{Graph, NodeId};

/// Which neighbours count as relations when expanding a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relations {
    /// Every incident edge, whatever its direction
    #[default]
    All,
    /// Outgoing edges only (same as `All` on undirected graphs)
    Outgoing,
}

impl Relations {
    pub fn collect<P>(self, graph: &Graph<P>, node: NodeId) -> Vec<NodeId> {
        match self {
            Relations::All => graph.related(node).collect(),
            Relations::Outgoing => graph.out_related(node).collect(),
        }
    }
}

/// Source-seeded iterator whose order is set entirely by its frontier
///
/// Expansion pushes each unvisited relation in adjacency order. With a
/// [`crate::graph::Stack`] this is depth-first, with a
/// [`crate::graph::Queue`] breadth-first.
#[derive(Debug, Default, Clone)]
pub struct FrontierIterator<F> {
    frontier: F,
    relations: Relations,
}

impl<F: Frontier> FrontierIterator<F> {
    pub fn new() -> Self {
        Self::with_relations(Relations::All)
    }

    pub fn with_relations(relations: Relations) -> Self {
        Self {
            frontier: F::default(),
            relations,
        }
    }

    pub fn relations(&self) -> Relations {
        self.relations
    }

    /// Pending candidates, including ones that may already be visited
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }
}

impl<P, F: Frontier> GraphIterator<P> for FrontierIterator<F> {
    fn init(&mut self, _graph: &Graph<P>, _marks: &Marks) {}

    fn set_source(&mut self, _graph: &Graph<P>, source: NodeId) {
        self.frontier.push(source);
    }

    fn has_next(&self) -> bool {
        !self.frontier.is_empty()
    }

    fn next(&mut self) -> Option<NodeId> {
        self.frontier.pop()
    }

    fn cont(&mut self, graph: &Graph<P>, current: NodeId, marks: &Marks) {
        for related in self.relations.collect(graph, current) {
            if !marks.is_visited(related) {
                self.frontier.push(related);
            }
        }
    }
}
