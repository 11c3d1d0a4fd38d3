//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WalkError;
use crate::graph::{Strategy, DEFAULT_EDGE_WEIGHT};

/// Top-level `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkConfig {
    #[serde(default)]
    pub traversal: TraversalConfig,

    #[serde(default)]
    pub path: PathConfig,
}

/// `[traversal]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Strategy used when `--strategy` is not given
    #[serde(default)]
    pub strategy: Strategy,

    /// Suspend after this many visits (unset = walk everything reachable)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_visits: Option<usize>,
}

/// `[path]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default)]
    pub algorithm: PathAlgorithm,

    /// Weight of graph-file edges declared without one
    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            algorithm: PathAlgorithm::default(),
            default_weight: default_weight(),
        }
    }
}

fn default_weight() -> f64 {
    DEFAULT_EDGE_WEIGHT
}

/// Shortest-path search used by the `path` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathAlgorithm {
    #[default]
    Dijkstra,
    Astar,
}

impl FromStr for PathAlgorithm {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(PathAlgorithm::Dijkstra),
            "astar" | "a*" => Ok(PathAlgorithm::Astar),
            other => Err(WalkError::invalid_value("path algorithm", other)),
        }
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathAlgorithm::Dijkstra => write!(f, "dijkstra"),
            PathAlgorithm::Astar => write!(f, "astar"),
        }
    }
}
