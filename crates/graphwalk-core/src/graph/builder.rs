//! Graph construction
//!
//! Ids are handed out densely in insertion order and never change once the
//! graph is built.

use crate::error::{Result, WalkError};
use crate::graph::types::{Edge, EdgeId, Graph, Node, NodeId};

/// Default weight of edges added without an explicit one
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Incrementally assembles a [`Graph`]
#[derive(Debug)]
pub struct GraphBuilder<P> {
    directed: bool,
    nodes: Vec<Node<P>>,
    edges: Vec<Edge<P>>,
}

impl<P> GraphBuilder<P> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_node(&mut self, payload: P) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            edges: Vec::new(),
            payload,
        });
        id
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId, payload: P) -> Result<EdgeId> {
        self.add_weighted_edge(a, b, DEFAULT_EDGE_WEIGHT, payload)
    }

    pub fn add_weighted_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: f64,
        payload: P,
    ) -> Result<EdgeId> {
        for endpoint in [a, b] {
            if endpoint.0 >= self.nodes.len() {
                return Err(WalkError::unknown_node(endpoint));
            }
        }
        Ok(self.link(a, b, weight, payload))
    }

    /// Append an edge between two existing nodes
    fn link(&mut self, a: NodeId, b: NodeId, weight: f64, payload: P) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            id,
            a,
            b,
            weight,
            payload,
        });
        self.nodes[a.0].edges.push(id);
        if a != b {
            self.nodes[b.0].edges.push(id);
        }
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn build(self) -> Graph<P> {
        tracing::trace!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            directed = self.directed,
            "graph_built"
        );
        Graph {
            directed: self.directed,
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

impl<P: Default> GraphBuilder<P> {
    /// Chain of `n` nodes `0 - 1 - ... - n-1`
    pub fn chain(n: usize, directed: bool) -> Graph<P> {
        let mut builder = GraphBuilder::new(directed);
        let ids: Vec<NodeId> = (0..n).map(|_| builder.add_node(P::default())).collect();
        for pair in ids.windows(2) {
            builder.link(pair[0], pair[1], DEFAULT_EDGE_WEIGHT, P::default());
        }
        builder.build()
    }

    /// Cycle of `n` nodes: a chain whose last node links back to the first
    pub fn cycle(n: usize, directed: bool) -> Graph<P> {
        let mut builder = GraphBuilder::new(directed);
        let ids: Vec<NodeId> = (0..n).map(|_| builder.add_node(P::default())).collect();
        for i in 0..n {
            let next = ids[(i + 1) % n];
            builder.link(ids[i], next, DEFAULT_EDGE_WEIGHT, P::default());
        }
        builder.build()
    }

    /// Perfect binary tree of the given depth, ids assigned in level order
    /// (children of `i` are `2i + 1` and `2i + 2`)
    pub fn binary_tree(depth: u32, directed: bool) -> Graph<P> {
        let mut builder = GraphBuilder::new(directed);
        let count = (1usize << (depth + 1)) - 1;
        for _ in 0..count {
            builder.add_node(P::default());
        }
        for parent in 0..count {
            for child in [2 * parent + 1, 2 * parent + 2] {
                if child < count {
                    builder.link(NodeId(parent), NodeId(child), DEFAULT_EDGE_WEIGHT, P::default());
                }
            }
        }
        builder.build()
    }
}
