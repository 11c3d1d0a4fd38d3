//! Graph model, traversal driver and strategies
//!
//! - `types`/`builder`: read-only graph built once, addressed by dense ids
//! - `marks`: per-run visited flags and walker count tags
//! - `control`/`iterator`/`traversal`: walker protocol and the resumable driver
//! - `algos`: the traversal strategies
//! - `finder`/`path`: shortest paths between two nodes
//! - `file`: JSON graph descriptions

pub mod algos;
pub mod builder;
pub mod control;
pub mod file;
pub mod finder;
pub mod frontier;
pub mod iterator;
pub mod marks;
pub mod path;
pub mod strategy;
pub mod traversal;
pub mod types;

pub use algos::{
    AStarFunctions, AStarIterator, BreadthFirstIterator, BreadthFirstTopologicalIterator,
    Coordinates, DepthFirstIterator, DepthFirstTopologicalIterator, DijkstraIterator,
    EdgeWeigher, EdgeWeight, EuclideanDistance, NoBifurcationIterator, UniformWeight,
    WeightedEuclidean,
};
pub use builder::{GraphBuilder, DEFAULT_EDGE_WEIGHT};
pub use control::{OrderWalker, VisitControl, Walker};
pub use file::{Attributes, GraphFile, LoadedGraph};
pub use finder::ShortestPathFinder;
pub use frontier::{Frontier, PriorityFrontier, Queue, Stack};
pub use iterator::{CostIterator, GraphIterator};
pub use marks::Marks;
pub use path::Path;
pub use strategy::Strategy;
pub use traversal::{Traversal, TraversalStats, TraversalStatus};
pub use types::{Edge, EdgeId, Graph, Node, NodeId, QueryControl};
