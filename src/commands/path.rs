//! `graphwalk path`

use std::path::Path as FsPath;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_graph, print_json};
use graphwalk_core::config::PathAlgorithm;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{EdgeWeight, ShortestPathFinder, WeightedEuclidean};

#[derive(Serialize)]
struct PathOutput {
    algorithm: PathAlgorithm,
    from: u64,
    to: u64,
    nodes: Vec<u64>,
    cost: f64,
    visited: usize,
}

pub fn execute(
    ctx: &CommandContext,
    graph_path: &FsPath,
    from: u64,
    to: u64,
    algorithm: Option<PathAlgorithm>,
) -> Result<()> {
    let algorithm = algorithm.unwrap_or(ctx.config.path.algorithm);
    let loaded = load_graph(ctx, graph_path)?;
    let graph = &loaded.graph;
    let (source, target) = (loaded.resolve(from)?, loaded.resolve(to)?);

    let (path, visited) = match algorithm {
        PathAlgorithm::Dijkstra => {
            let mut finder = ShortestPathFinder::dijkstra(graph, source, target, EdgeWeight);
            finder.calculate()?;
            (finder.path()?, finder.stats().visited)
        }
        PathAlgorithm::Astar => {
            let functions = WeightedEuclidean::new(graph, target);
            let mut finder = ShortestPathFinder::astar(graph, source, target, functions);
            finder.calculate()?;
            (finder.path()?, finder.stats().visited)
        }
    };

    tracing::debug!(%algorithm, hops = path.len(), visited, "path");

    let output = PathOutput {
        algorithm,
        from,
        to,
        nodes: loaded.file_ids(&path),
        cost: path.cost(),
        visited,
    };

    match ctx.cli.format {
        OutputFormat::Json => print_json(&serde_json::to_value(&output)?)?,
        OutputFormat::Human => {
            let rendered: Vec<String> = output.nodes.iter().map(|id| id.to_string()).collect();
            println!("{}", rendered.join(" -> "));
            if !ctx.cli.quiet {
                println!("cost: {}", output.cost);
            }
        }
    }
    Ok(())
}
