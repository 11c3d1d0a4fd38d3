//! Heuristic-guided shortest path
//!
//! Same relaxation as [`super::dijkstra`], but the heap is keyed by
//! `f = g + h`, where `g` is the cost so far and `h` the caller's estimate
//! of the remaining cost to a fixed target. `h` is taken on trust: an
//! overestimating heuristic may yield a longer path, never a failure.

use crate::error::{Result, WalkError};
use crate::graph::frontier::PriorityFrontier;
use crate::graph::iterator::{CostIterator, GraphIterator};
use crate::graph::marks::Marks;
use crate::graph::types::{Edge, EdgeId, Graph, Node, NodeId};
use std::collections::HashMap;


/// Cost and heuristic callbacks for [`AStarIterator`]
pub trait AStarFunctions<P> {
    /// Cost of stepping from `from` to the adjacent `to`
    fn cost(&self, from: &Node<P>, to: &Node<P>) -> f64;

    /// Cost of crossing one particular edge from `from` to `to`
    ///
    /// Defaults to the node-pair [`cost`](Self::cost). Override it when
    /// parallel edges between the same pair can cost different amounts.
    fn step_cost(&self, _edge: &Edge<P>, from: &Node<P>, to: &Node<P>) -> f64 {
        self.cost(from, to)
    }

    /// Estimated remaining cost from `node` to the target
    fn heuristic(&self, node: &Node<P>) -> f64;
}

/// Payloads that carry a planar position
pub trait Coordinates {
    fn coordinates(&self) -> Option<(f64, f64)>;
}

impl Coordinates for (f64, f64) {
    fn coordinates(&self) -> Option<(f64, f64)> {
        Some(*self)
    }
}

fn euclid<P: Coordinates>(a: &Node<P>, b: &Node<P>) -> Option<f64> {
    let (ax, ay) = a.payload.coordinates()?;
    let (bx, by) = b.payload.coordinates()?;
    Some((ax - bx).hypot(ay - by))
}

/// Straight-line distance for both the step cost and the estimate
///
/// Nodes without coordinates cost 0 to reach and estimate 0, and so does
/// every node when `target` is not in the graph.
#[derive(Debug, Clone, Copy)]
pub struct EuclideanDistance<'g, P> {
    target: Option<&'g Node<P>>,
}

impl<'g, P> EuclideanDistance<'g, P> {
    pub fn new(graph: &'g Graph<P>, target: NodeId) -> Self {
        Self {
            target: graph.get_node(target),
        }
    }
}

impl<P: Coordinates> AStarFunctions<P> for EuclideanDistance<'_, P> {
    fn cost(&self, from: &Node<P>, to: &Node<P>) -> f64 {
        euclid(from, to).unwrap_or(0.0)
    }

    fn heuristic(&self, node: &Node<P>) -> f64 {
        self.target
            .and_then(|target| euclid(node, target))
            .unwrap_or(0.0)
    }
}

/// Edge weights for the step cost, straight-line distance for the estimate
///
/// Relaxation prices each edge by its own weight. The node-pair cost is the
/// lightest edge joining the pair. The estimate only stays admissible if no
/// edge weighs less than the distance between its endpoints.
#[derive(Debug, Clone, Copy)]
pub struct WeightedEuclidean<'g, P> {
    graph: &'g Graph<P>,
    target: NodeId,
}

impl<'g, P> WeightedEuclidean<'g, P> {
    pub fn new(graph: &'g Graph<P>, target: NodeId) -> Self {
        Self { graph, target }
    }
}

impl<P: Coordinates> AStarFunctions<P> for WeightedEuclidean<'_, P> {
    fn cost(&self, from: &Node<P>, to: &Node<P>) -> f64 {
        self.graph
            .out_edges(from.id())
            .filter(|(_, other)| *other == to.id())
            .map(|(edge, _)| edge.weight())
            .fold(f64::INFINITY, f64::min)
    }

    fn step_cost(&self, edge: &Edge<P>, _from: &Node<P>, _to: &Node<P>) -> f64 {
        edge.weight()
    }

    fn heuristic(&self, node: &Node<P>) -> f64 {
        self.graph
            .get_node(self.target)
            .and_then(|target| euclid(node, target))
            .unwrap_or(0.0)
    }
}

/// Per-node A* bookkeeping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AStarEntry {
    pub g: f64,
    pub h: f64,
    pub f: f64,
    pub parent: Option<NodeId>,
    /// Edge the cheapest known path arrives through
    pub via: Option<EdgeId>,
}

#[derive(Debug, Clone)]
pub struct AStarIterator<H> {
    functions: H,
    target: NodeId,
    frontier: PriorityFrontier,
    entries: HashMap<NodeId, AStarEntry>,
}

impl<H> AStarIterator<H> {
    pub fn new(target: NodeId, functions: H) -> Self {
        Self {
            functions,
            target,
            frontier: PriorityFrontier::default(),
            entries: HashMap::new(),
        }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn entry(&self, node: NodeId) -> Option<&AStarEntry> {
        self.entries.get(&node)
    }

    /// Size of the open set, stale entries included
    pub fn open_len(&self) -> usize {
        self.frontier.len()
    }

    fn finalised(&self, node: NodeId, marks: &Marks) -> Result<&AStarEntry> {
        if !marks.is_visited(node) {
            return Err(WalkError::NotVisited { node });
        }
        self.entries.get(&node).ok_or(WalkError::NotVisited { node })
    }
}

impl<P, H: AStarFunctions<P>> GraphIterator<P> for AStarIterator<H> {
    fn init(&mut self, _graph: &Graph<P>, _marks: &Marks) {}

    fn set_source(&mut self, graph: &Graph<P>, source: NodeId) {
        let h = self.functions.heuristic(graph.node(source));
        self.entries.insert(
            source,
            AStarEntry {
                g: 0.0,
                h,
                f: h,
                parent: None,
                via: None,
            },
        );
        self.frontier.push(source, h);
    }

    fn has_next(&self) -> bool {
        !self.frontier.is_empty()
    }

    fn next(&mut self) -> Option<NodeId> {
        self.frontier.pop().map(|entry| entry.node)
    }

    fn cont(&mut self, graph: &Graph<P>, current: NodeId, marks: &Marks) {
        let Some(base) = self.entries.get(&current).map(|e| e.g) else {
            return;
        };
        let from = graph.node(current);

        for (edge, related) in graph.out_edges(current) {
            if marks.is_visited(related) {
                continue;
            }
            let to = graph.node(related);
            let g = base + self.functions.step_cost(edge, from, to);
            if self.entries.get(&related).is_some_and(|known| g >= known.g) {
                continue;
            }
            let h = self.functions.heuristic(to);
            let f = g + h;
            self.entries.insert(
                related,
                AStarEntry {
                    g,
                    h,
                    f,
                    parent: Some(current),
                    via: Some(edge.id()),
                },
            );
            self.frontier.push(related, f);
        }
    }
}

impl<P, H: AStarFunctions<P>> CostIterator<P> for AStarIterator<H> {
    /// Cost so far (`g`) of a visited node
    fn cost(&self, node: NodeId, marks: &Marks) -> Result<f64> {
        self.finalised(node, marks).map(|e| e.g)
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
