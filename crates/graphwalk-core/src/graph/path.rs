use serde::Serialize;

use crate::graph::types::{Edge, EdgeId, Graph, NodeId};

/// Source-to-target node sequence produced by a shortest-path search
///
/// `edges[i]` is the edge the search crossed from `nodes[i]` to
/// `nodes[i + 1]`, so parallel edges are told apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(nodes: Vec<NodeId>, edges: Vec<EdgeId>, cost: f64) -> Self {
        Self { nodes, edges, cost }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Total cost as reported by the search that produced the path
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Edges crossed between consecutive nodes
    ///
    /// Ids that do not belong to `graph` are skipped.
    pub fn edges<'g, P>(&self, graph: &'g Graph<P>) -> Vec<&'g Edge<P>> {
        self.edges
            .iter()
            .filter_map(|id| graph.get_edge(*id))
            .collect()
    }

    /// Every step crosses its recorded edge, in the edge's direction on
    /// directed graphs
    pub fn is_valid<P>(&self, graph: &Graph<P>) -> bool {
        self.nodes.iter().all(|n| graph.contains(*n))
            && self.edges.len() + 1 == self.nodes.len().max(1)
            && self.nodes.windows(2).zip(&self.edges).all(|(pair, id)| {
                graph
                    .out_edges(pair[0])
                    .any(|(edge, other)| edge.id() == *id && other == pair[1])
            })
    }

    /// The same route, target to source
    pub fn reversed(&self) -> Path {
        let mut nodes = self.nodes.clone();
        nodes.reverse();
        let mut edges = self.edges.clone();
        edges.reverse();
        Path::new(nodes, edges, self.cost)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, GraphBuilder};

    /// Path over `GraphBuilder::chain`, where edge `i` joins nodes `i` and `i + 1`
    fn along_chain(nodes: &[usize]) -> Path {
        let edges: Vec<EdgeId> = nodes.windows(2).map(|p| EdgeId(p[0].min(p[1]))).collect();
        let cost = edges.len() as f64;
        Path::new(nodes.iter().copied().map(NodeId).collect(), edges, cost)
    }

    #[test]
    fn test_accessors() {
        let path = along_chain(&[0, 1, 2]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(NodeId(0)));
        assert_eq!(path.last(), Some(NodeId(2)));
        assert_eq!(path.get(1), Some(NodeId(1)));
        assert_eq!(path.get(3), None);
        assert_eq!(path.edge_ids(), &[EdgeId(0), EdgeId(1)]);

        let back = path.reversed();
        assert_eq!(back.nodes(), &[NodeId(2), NodeId(1), NodeId(0)]);
        assert_eq!(back.edge_ids(), &[EdgeId(1), EdgeId(0)]);
        assert_eq!((&path).into_iter().count(), 3);
    }

    #[test]
    fn test_edges_follow_direction() {
        let g: Graph<()> = GraphBuilder::chain(3, true);
        let forward = along_chain(&[0, 1, 2]);
        assert_eq!(forward.edges(&g).len(), 2);
        assert!(forward.is_valid(&g));
        assert!(!forward.reversed().is_valid(&g));

        let undirected: Graph<()> = GraphBuilder::chain(3, false);
        assert!(forward.reversed().is_valid(&undirected));
    }

    #[test]
    fn test_recorded_edge_must_join_its_step() {
        let mut b = GraphBuilder::new(false);
        let (a, c) = (b.add_node(()), b.add_node(()));
        b.add_weighted_edge(a, c, 5.0, ()).unwrap();
        let light = b.add_weighted_edge(a, c, 1.0, ()).unwrap();
        let g = b.build();

        let path = Path::new(vec![a, c], vec![light], 1.0);
        assert!(path.is_valid(&g));
        let weights: Vec<f64> = path.edges(&g).iter().map(|e| e.weight()).collect();
        assert_eq!(weights, vec![1.0]);

        assert!(!Path::new(vec![a, c], vec![], 1.0).is_valid(&g));
        assert!(!Path::new(vec![a, c], vec![EdgeId(7)], 1.0).is_valid(&g));
    }

    #[test]
    fn test_single_node_path_is_valid() {
        let g: Graph<()> = GraphBuilder::chain(1, false);
        let path = along_chain(&[0]);
        assert!(path.is_valid(&g));
        assert!(path.edges(&g).is_empty());
    }

    #[test]
    fn test_serializes_nodes_edges_and_cost() {
        let path = Path::new(vec![NodeId(3), NodeId(4)], vec![EdgeId(6)], 1.5);
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"nodes": [3, 4], "edges": [6], "cost": 1.5})
        );
    }
}
