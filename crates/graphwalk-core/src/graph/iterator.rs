use crate::error::Result;
use crate::graph::marks::Marks;
use crate::graph::types::{EdgeId, Graph, NodeId};

/// Strategy half of a traversal: owns the frontier and decides what
/// "expanding" a node means
///
/// `init` only builds graph-wide bookkeeping and `set_source` only seeds the
/// frontier, so the two may be called in either order.
pub trait GraphIterator<P> {
    fn init(&mut self, graph: &Graph<P>, marks: &Marks);

    fn set_source(&mut self, graph: &Graph<P>, source: NodeId);

    fn has_next(&self) -> bool;

    /// Pop the next candidate; it may already be visited
    fn next(&mut self) -> Option<NodeId>;

    /// Expand `current` into the frontier
    fn cont(&mut self, graph: &Graph<P>, current: NodeId, marks: &Marks);

    /// Hook run when the walker prunes `current`
    fn kill_branch(&mut self, graph: &Graph<P>, current: NodeId, marks: &Marks) {
        let _ = (graph, current, marks);
    }
}

impl<P, I> GraphIterator<P> for Box<I>
where
    I: GraphIterator<P> + ?Sized,
{
    fn init(&mut self, graph: &Graph<P>, marks: &Marks) {
        (**self).init(graph, marks)
    }

    fn set_source(&mut self, graph: &Graph<P>, source: NodeId) {
        (**self).set_source(graph, source)
    }

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Option<NodeId> {
        (**self).next()
    }

    fn cont(&mut self, graph: &Graph<P>, current: NodeId, marks: &Marks) {
        (**self).cont(graph, current, marks)
    }

    fn kill_branch(&mut self, graph: &Graph<P>, current: NodeId, marks: &Marks) {
        (**self).kill_branch(graph, current, marks)
    }
}

/// Iterators that keep a tentative cost and parent per node
///
/// Cost and parent are only reported for visited nodes; asking about any
/// other node is a `NotVisited` error rather than a tentative value.
pub trait CostIterator<P>: GraphIterator<P> {
    fn cost(&self, node: NodeId, marks: &Marks) -> Result<f64>;

    fn parent(&self, node: NodeId, marks: &Marks) -> Result<Option<NodeId>>;

    /// Edge from the parent that the cheapest known path arrives through
    fn via(&self, node: NodeId, marks: &Marks) -> Result<Option<EdgeId>>;

    /// Nodes relaxation considers from `node`
    fn related(&self, graph: &Graph<P>, node: NodeId) -> Vec<NodeId>;
}
