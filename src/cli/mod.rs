//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graphwalk_core::config::PathAlgorithm;
use graphwalk_core::graph::Strategy;
pub use output::OutputFormat;
use parse::{parse_algorithm, parse_strategy};

/// Graphwalk - resumable graph traversal and shortest paths
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = output::parse_format)]
    pub format: OutputFormat,

    /// Configuration file (default: $GRAPHWALK_CONFIG_DIR or ~/.config/graphwalk/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk a graph and print node ids in visitation order
    Traverse {
        /// Graph description (JSON)
        graph: PathBuf,

        /// Traversal strategy (default from config, else breadth-first)
        #[arg(long, short, value_parser = parse_strategy)]
        strategy: Option<Strategy>,

        /// Start node id (repeatable; ignored by topological strategies)
        #[arg(long, action = clap::ArgAction::Append)]
        source: Vec<u64>,

        /// Stop after this many visits
        #[arg(long)]
        max_visits: Option<usize>,
    },

    /// Find the cheapest path between two nodes
    Path {
        /// Graph description (JSON)
        graph: PathBuf,

        /// Source node id
        #[arg(long)]
        from: u64,

        /// Target node id
        #[arg(long)]
        to: u64,

        /// Search algorithm (default from config, else dijkstra)
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<PathAlgorithm>,
    },

    /// List nodes with at most one relation
    Leaves {
        /// Graph description (JSON)
        graph: PathBuf,
    },
}
