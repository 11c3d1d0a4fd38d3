//! Shortest paths between two fixed nodes
//!
//! A [`ShortestPathFinder`] drives a cost iterator from the source, then
//! rebuilds the route from the parent ids and arrival edges recorded for
//! the target.

use crate::error::{Result, WalkError};
use crate::graph::algos::{AStarFunctions, AStarIterator, DijkstraIterator, EdgeWeigher};
use crate::graph::control::{VisitControl, Walker};
use crate::graph::iterator::CostIterator;
use crate::graph::marks::Marks;
use crate::graph::path::Path;
use crate::graph::traversal::{Traversal, TraversalStats, TraversalStatus};
use crate::graph::types::{Graph, Node, NodeId};

/// Notes when the target is visited, optionally pausing the run there
#[derive(Debug)]
struct TargetWalker {
    target: NodeId,
    stop_at_target: bool,
    reached: bool,
}

impl<P> Walker<P> for TargetWalker {
    fn visit(&mut self, node: &Node<P>, _marks: &mut Marks) -> VisitControl {
        if node.id() != self.target {
            return VisitControl::Continue;
        }
        self.reached = true;
        if self.stop_at_target {
            VisitControl::Suspend
        } else {
            VisitControl::Continue
        }
    }
}

pub struct ShortestPathFinder<'g, P, I> {
    traversal: Traversal<'g, P, I, TargetWalker>,
    source: NodeId,
    target: NodeId,
    calculated: bool,
}

impl<'g, P, W> ShortestPathFinder<'g, P, DijkstraIterator<W>>
where
    W: EdgeWeigher<P>,
{
    /// Uniform-cost search, run until the frontier drains
    ///
    /// Costs of every node reachable from `source` are final afterwards.
    pub fn dijkstra(graph: &'g Graph<P>, source: NodeId, target: NodeId, weigher: W) -> Self {
        Self::new(graph, DijkstraIterator::new(weigher), source, target, false)
    }
}

impl<'g, P, H> ShortestPathFinder<'g, P, AStarIterator<H>>
where
    H: AStarFunctions<P>,
{
    /// Heuristic search that stops as soon as `target` is settled
    pub fn astar(graph: &'g Graph<P>, source: NodeId, target: NodeId, functions: H) -> Self {
        Self::new(
            graph,
            AStarIterator::new(target, functions),
            source,
            target,
            true,
        )
    }
}

impl<'g, P, I> ShortestPathFinder<'g, P, I>
where
    I: CostIterator<P>,
{
    pub fn new(
        graph: &'g Graph<P>,
        iterator: I,
        source: NodeId,
        target: NodeId,
        stop_at_target: bool,
    ) -> Self {
        let walker = TargetWalker {
            target,
            stop_at_target,
            reached: false,
        };
        Self {
            traversal: Traversal::new(graph, iterator, walker),
            source,
            target,
            calculated: false,
        }
    }

    /// Run the search; repeated calls do nothing
    #[tracing::instrument(skip(self), fields(source = %self.source, target = %self.target))]
    pub fn calculate(&mut self) -> Result<()> {
        if self.calculated {
            return Ok(());
        }
        let graph = self.traversal.graph();
        for id in [self.source, self.target] {
            if !graph.contains(id) {
                return Err(WalkError::unknown_node(id));
            }
        }

        self.traversal.init();
        self.traversal.set_source(self.source)?;
        loop {
            match self.traversal.traverse() {
                TraversalStatus::Exhausted => break,
                TraversalStatus::Suspended if self.traversal.walker().reached => break,
                TraversalStatus::Suspended => {}
            }
        }
        self.calculated = true;

        tracing::debug!(
            reached = self.traversal.walker().reached,
            visited = self.traversal.stats().visited,
            "path_search_complete"
        );
        Ok(())
    }

    /// The cheapest route found, source first
    pub fn path(&self) -> Result<Path> {
        if !self.calculated {
            return Err(WalkError::NotCalculated);
        }
        let no_path = || WalkError::NoPath {
            from: self.source,
            to: self.target,
        };
        if !self.traversal.marks().is_visited(self.target) {
            return Err(no_path());
        }

        let limit = self.traversal.graph().node_count();
        let mut nodes = vec![self.target];
        let mut edges = Vec::new();
        let mut current = self.target;
        while let Some(parent) = self.traversal.parent(current)? {
            edges.push(self.traversal.via(current)?.ok_or_else(no_path)?);
            nodes.push(parent);
            if nodes.len() > limit {
                return Err(no_path());
            }
            current = parent;
        }
        if current != self.source {
            return Err(no_path());
        }
        nodes.reverse();
        edges.reverse();

        let cost = self.traversal.cost(self.target)?;
        Ok(Path::new(nodes, edges, cost))
    }

    /// Final cost of a node settled during `calculate`
    pub fn cost(&self, node: NodeId) -> Result<f64> {
        if !self.calculated {
            return Err(WalkError::NotCalculated);
        }
        self.traversal.cost(node)
    }

    pub fn is_calculated(&self) -> bool {
        self.calculated
    }

    pub fn reached(&self) -> bool {
        self.traversal.walker().reached
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn stats(&self) -> TraversalStats {
        self.traversal.stats()
    }

    pub fn iterator(&self) -> &I {
        self.traversal.iterator()
    }
}
