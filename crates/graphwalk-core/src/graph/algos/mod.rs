//! Traversal strategies
//!
//! Every strategy is a [`crate::graph::GraphIterator`]; they differ only in
//! the frontier they keep and in what expanding a node pushes onto it:
//! - `dfs`: stack over all relations, or outgoing relations only
//! - `bfs`: queue over all relations
//! - `topological`: self-seeding degree peeling, queue or stack
//! - `no_bifurcation`: queue that refuses nodes with more than two relations
//! - `dijkstra`: priority queue keyed by accumulated edge cost
//! - `astar`: priority queue keyed by cost plus a heuristic estimate

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod no_bifurcation;
pub mod shared;
pub mod topological;

pub use astar::{
    AStarEntry, AStarFunctions, AStarIterator, Coordinates, EuclideanDistance, WeightedEuclidean,
};
pub use bfs::{breadth_first, BreadthFirstIterator};
pub use dfs::{depth_first, directed_depth_first, DepthFirstIterator};
pub use dijkstra::{CostEntry, DijkstraIterator, EdgeWeigher, EdgeWeight, UniformWeight};
pub use no_bifurcation::{NoBifurcationIterator, MAX_CHAIN_DEGREE};
pub use shared::{FrontierIterator, Relations};
pub use topological::{
    BreadthFirstTopologicalIterator, DepthFirstTopologicalIterator, TopologicalIterator,
};
