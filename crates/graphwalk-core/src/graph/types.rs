use serde::Serialize;
use std::fmt;

/// Dense index of a node inside its owning [`Graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

/// Dense index of an edge inside its owning [`Graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A graph node: its id, the ids of its incident edges and an opaque payload
#[derive(Debug, Clone)]
pub struct Node<P> {
    pub(crate) id: NodeId,
    pub(crate) edges: Vec<EdgeId>,
    pub payload: P,
}

impl<P> Node<P> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Incident edges in insertion order
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

/// An edge joining two nodes
///
/// For directed graphs `a` is the tail and `b` the head.
#[derive(Debug, Clone)]
pub struct Edge<P> {
    pub(crate) id: EdgeId,
    pub(crate) a: NodeId,
    pub(crate) b: NodeId,
    pub(crate) weight: f64,
    pub payload: P,
}

impl<P> Edge<P> {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn a(&self) -> NodeId {
        self.a
    }

    pub fn b(&self) -> NodeId {
        self.b
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The endpoint opposite to `node`
    ///
    /// A self-loop returns the node itself.
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.a == node {
            self.b
        } else {
            self.a
        }
    }
}

/// Result of a three-way node predicate used by [`Graph::query_nodes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryControl {
    /// Keep the node and continue
    Pass,
    /// Skip the node and continue
    Fail,
    /// Stop the query; the current node is not kept
    Stop,
}

/// Read-only node/edge container produced by [`super::GraphBuilder`]
///
/// Traversals never mutate a graph; all per-run state lives in
/// [`super::Marks`] and in the iterators themselves.
#[derive(Debug, Clone)]
pub struct Graph<P> {
    pub(crate) directed: bool,
    pub(crate) nodes: Vec<Node<P>>,
    pub(crate) edges: Vec<Edge<P>>,
}

impl<P> Graph<P> {
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// # Panics
    /// Panics if `id` does not belong to this graph.
    pub fn node(&self, id: NodeId) -> &Node<P> {
        &self.nodes[id.0]
    }

    /// # Panics
    /// Panics if `id` does not belong to this graph.
    pub fn edge(&self, id: EdgeId) -> &Edge<P> {
        &self.edges[id.0]
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node<P>> {
        self.nodes.get(id.0)
    }

    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge<P>> {
        self.edges.get(id.0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<P>> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<P>> {
        self.edges.iter()
    }

    /// Nodes across every incident edge, regardless of direction,
    /// in adjacency (edge insertion) order
    pub fn related(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id.0]
            .edges
            .iter()
            .map(move |&e| self.edges[e.0].other(id))
    }

    /// Heads of outgoing edges on directed graphs, [`Graph::related`] otherwise
    pub fn out_related(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let directed = self.directed;
        self.nodes[id.0].edges.iter().filter_map(move |&e| {
            let edge = &self.edges[e.0];
            if !directed {
                Some(edge.other(id))
            } else if edge.a == id {
                Some(edge.b)
            } else {
                None
            }
        })
    }

    /// Tails of incoming edges on directed graphs, [`Graph::related`] otherwise
    pub fn in_related(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let directed = self.directed;
        self.nodes[id.0].edges.iter().filter_map(move |&e| {
            let edge = &self.edges[e.0];
            if !directed {
                Some(edge.other(id))
            } else if edge.b == id {
                Some(edge.a)
            } else {
                None
            }
        })
    }

    /// Outgoing edges paired with the node they lead to
    pub fn out_edges(&self, id: NodeId) -> impl Iterator<Item = (&Edge<P>, NodeId)> + '_ {
        let directed = self.directed;
        self.nodes[id.0].edges.iter().filter_map(move |&e| {
            let edge = &self.edges[e.0];
            if !directed || edge.a == id {
                Some((edge, edge.other(id)))
            } else {
                None
            }
        })
    }

    /// Total number of relations (both directions)
    pub fn degree(&self, id: NodeId) -> usize {
        self.nodes[id.0].edges.len()
    }

    /// First edge leading from `from` to `to`, honouring direction on directed graphs
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<&Edge<P>> {
        self.out_edges(from)
            .find(|(_, other)| *other == to)
            .map(|(edge, _)| edge)
    }

    /// Apply `visitor` to every node in id order
    pub fn visit_nodes<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node<P>),
    {
        for node in &self.nodes {
            visitor(node);
        }
    }

    /// Collect the nodes a three-way predicate passes, halting at the first `Stop`
    pub fn query_nodes<F>(&self, mut predicate: F) -> Vec<NodeId>
    where
        F: FnMut(&Node<P>) -> QueryControl,
    {
        let mut selected = Vec::new();
        for node in &self.nodes {
            match predicate(node) {
                QueryControl::Pass => selected.push(node.id),
                QueryControl::Fail => {}
                QueryControl::Stop => break,
            }
        }
        selected
    }
}
