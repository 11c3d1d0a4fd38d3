//! Graphwalk Core Library
//!
//! Resumable graph traversal: interchangeable strategies driven by one
//! walker protocol, plus Dijkstra and A* shortest-path finders.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
