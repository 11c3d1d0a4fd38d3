use crate::graph::frontier::{Frontier, Queue};
use crate::graph::iterator::GraphIterator;
use crate::graph::marks::Marks;
use crate::graph::types::{Graph, NodeId};

/// Relation count above which a node is a bifurcation
pub const MAX_CHAIN_DEGREE: usize = 2;

/// Follows a single unbranched path out from the source
///
/// A candidate with more than [`MAX_CHAIN_DEGREE`] relations is never queued,
/// so the walk halts just before every fork. The source itself is seeded
/// whatever its degree.
#[derive(Debug, Default, Clone)]
pub struct NoBifurcationIterator {
    frontier: Queue,
}

impl NoBifurcationIterator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P> GraphIterator<P> for NoBifurcationIterator {
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
        for related in graph.related(current) {
            if marks.is_visited(related) {
                continue;
            }
            if graph.degree(related) > MAX_CHAIN_DEGREE {
                tracing::trace!(node = %related, "bifurcation");
                continue;
            }
            self.frontier.push(related);
        }
    }
}
