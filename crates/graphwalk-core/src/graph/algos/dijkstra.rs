use crate::error::{Result, WalkError};
use crate::graph::frontier::PriorityFrontier;
use crate::graph::iterator::{CostIterator, GraphIterator};
use crate::graph::marks::Marks;
use crate::graph::types::{Edge, EdgeId, Graph, NodeId};
use std::collections::HashMap;


/// Cost of crossing one edge
///
/// Negative costs break the cheapest-first invariant and are not checked.
pub trait EdgeWeigher<P> {
    fn weight(&self, edge: &Edge<P>) -> f64;
}

impl<P, F> EdgeWeigher<P> for F
where
    F: Fn(&Edge<P>) -> f64,
{
    fn weight(&self, edge: &Edge<P>) -> f64 {
        self(edge)
    }
}

/// Uses the weight stored on each edge
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeWeight;

impl<P> EdgeWeigher<P> for EdgeWeight {
    fn weight(&self, edge: &Edge<P>) -> f64 {
        edge.weight()
    }
}

/// Every edge costs 1, so cost is hop count
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformWeight;

impl<P> EdgeWeigher<P> for UniformWeight {
    fn weight(&self, _edge: &Edge<P>) -> f64 {
        1.0
    }
}

/// Tentative state of a reached node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEntry {
    pub cost: f64,
    pub parent: Option<NodeId>,
    /// Edge the cheapest known path arrives through
    pub via: Option<EdgeId>,
}

/// Uniform-cost search
///
/// Nodes are popped cheapest first. A node is re-pushed whenever a cheaper
/// path to it turns up; older entries stay in the heap and are skipped by the
/// driver once the node is visited.
#[derive(Debug, Clone)]
pub struct DijkstraIterator<W> {
    weigher: W,
    frontier: PriorityFrontier,
    entries: HashMap<NodeId, CostEntry>,
}

impl<W> DijkstraIterator<W> {
    pub fn new(weigher: W) -> Self {
        Self {
            weigher,
            frontier: PriorityFrontier::default(),
            entries: HashMap::new(),
        }
    }

    /// Tentative entry, whether or not the node has been finalised
    pub fn entry(&self, node: NodeId) -> Option<&CostEntry> {
        self.entries.get(&node)
    }

    pub fn reached(&self) -> usize {
        self.entries.len()
    }

    fn finalised(&self, node: NodeId, marks: &Marks) -> Result<&CostEntry> {
        if !marks.is_visited(node) {
            return Err(WalkError::NotVisited { node });
        }
        self.entries.get(&node).ok_or(WalkError::NotVisited { node })
    }
}

impl<P, W: EdgeWeigher<P>> GraphIterator<P> for DijkstraIterator<W> {
    fn init(&mut self, _graph: &Graph<P>, _marks: &Marks) {}

    fn set_source(&mut self, _graph: &Graph<P>, source: NodeId) {
        self.entries.insert(
            source,
            CostEntry {
                cost: 0.0,
                parent: None,
                via: None,
            },
        );
        self.frontier.push(source, 0.0);
    }

    fn has_next(&self) -> bool {
        !self.frontier.is_empty()
    }

    fn next(&mut self) -> Option<NodeId> {
        self.frontier.pop().map(|entry| entry.node)
    }

    fn cont(&mut self, graph: &Graph<P>, current: NodeId, marks: &Marks) {
        let Some(base) = self.entries.get(&current).map(|e| e.cost) else {
            return;
        };

        for (edge, related) in graph.out_edges(current) {
            if marks.is_visited(related) {
                continue;
            }
            let candidate = base + self.weigher.weight(edge);
            let improves = self
                .entries
                .get(&related)
                .is_none_or(|known| candidate < known.cost);
            if improves {
                self.entries.insert(
                    related,
                    CostEntry {
                        cost: candidate,
                        parent: Some(current),
                        via: Some(edge.id()),
                    },
                );
                self.frontier.push(related, candidate);
            }
        }
    }
}

impl<P, W: EdgeWeigher<P>> CostIterator<P> for DijkstraIterator<W> {
    fn cost(&self, node: NodeId, marks: &Marks) -> Result<f64> {
        self.finalised(node, marks).map(|e| e.cost)
    }

    fn parent(&self, node: NodeId, marks: &Marks) -> Result<Option<NodeId>> {
        self.finalised(node, marks).map(|e| e.parent)
    }

    fn via(&self, node: NodeId, marks: &Marks) -> Result<Option<EdgeId>> {
        self.finalised(node, marks).map(|e| e.via)
    }

    fn related(&self, graph: &Graph<P>, node: NodeId) -> Vec<NodeId> {
        graph.out_related(node).collect()
    }
}
