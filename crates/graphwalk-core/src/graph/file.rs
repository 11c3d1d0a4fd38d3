//! JSON graph descriptions
//!
//! ```json
//! {
//!   "directed": false,
//!   "nodes": [{ "id": 10, "label": "a", "x": 0.0, "y": 0.0 }, { "id": 20 }],
//!   "edges": [{ "from": 10, "to": 20, "weight": 2.5 }]
//! }
//! ```
//!
//! File ids are arbitrary integers; they map onto dense [`NodeId`]s in the
//! order the nodes are declared.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path as FsPath;

use crate::error::{Result, WalkError};
use crate::graph::algos::Coordinates;
use crate::graph::builder::GraphBuilder;
use crate::graph::types::{Graph, NodeId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: u64,
    pub to: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Payload of loaded nodes and edges
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attributes {
    pub label: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Coordinates for Attributes {
    fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }
}

/// A built graph plus the mapping back to file ids
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: Graph<Attributes>,
    ids: HashMap<u64, NodeId>,
    file_ids: Vec<u64>,
}

impl LoadedGraph {
    /// Node id for a file id
    pub fn resolve(&self, file_id: u64) -> Result<NodeId> {
        self.ids
            .get(&file_id)
            .copied()
            .ok_or_else(|| WalkError::unknown_node(file_id))
    }

    /// File id a node was declared with
    pub fn file_id(&self, node: NodeId) -> u64 {
        self.file_ids[node.index()]
    }

    pub fn file_ids<'a>(&self, nodes: impl IntoIterator<Item = &'a NodeId>) -> Vec<u64> {
        nodes.into_iter().map(|n| self.file_id(*n)).collect()
    }
}

impl GraphFile {
    pub fn load(path: &FsPath) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: GraphFile = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            nodes = file.nodes.len(),
            edges = file.edges.len(),
            "graph_file_loaded"
        );
        Ok(file)
    }

    /// Build the graph, using `default_weight` for edges without one
    pub fn into_graph(self, default_weight: f64) -> Result<LoadedGraph> {
        let mut builder = GraphBuilder::new(self.directed);
        let mut ids = HashMap::with_capacity(self.nodes.len());
        let mut file_ids = Vec::with_capacity(self.nodes.len());

        for spec in self.nodes {
            if ids.contains_key(&spec.id) {
                return Err(WalkError::invalid_graph(format!(
                    "duplicate node id {}",
                    spec.id
                )));
            }
            let id = builder.add_node(Attributes {
                label: spec.label,
                x: spec.x,
                y: spec.y,
            });
            ids.insert(spec.id, id);
            file_ids.push(spec.id);
        }

        for spec in self.edges {
            let endpoint = |file_id: u64| {
                ids.get(&file_id).copied().ok_or_else(|| {
                    WalkError::invalid_graph(format!(
                        "edge {} -> {} references undeclared node {}",
                        spec.from, spec.to, file_id
                    ))
                })
            };
            let (a, b) = (endpoint(spec.from)?, endpoint(spec.to)?);
            let weight = spec.weight.unwrap_or(default_weight);
            if !weight.is_finite() {
                return Err(WalkError::invalid_graph(format!(
                    "edge {} -> {} has non-finite weight",
                    spec.from, spec.to
                )));
            }
            builder.add_weighted_edge(
                a,
                b,
                weight,
                Attributes {
                    label: spec.label,
                    x: None,
                    y: None,
                },
            )?;
        }

        Ok(LoadedGraph {
            graph: builder.build(),
            ids,
            file_ids,
        })
    }
}
