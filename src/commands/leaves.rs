//! `graphwalk leaves`

use std::path::Path;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_graph, print_json};
use graphwalk_core::error::Result;
use graphwalk_core::graph::QueryControl;

#[derive(Serialize)]
struct Leaf {
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    degree: usize,
}

pub fn execute(ctx: &CommandContext, graph_path: &Path) -> Result<()> {
    let loaded = load_graph(ctx, graph_path)?;
    let graph = &loaded.graph;

    let selected = graph.query_nodes(|node| {
        if graph.degree(node.id()) <= 1 {
            QueryControl::Pass
        } else {
            QueryControl::Fail
        }
    });

    let leaves: Vec<Leaf> = selected
        .into_iter()
        .map(|id| Leaf {
            id: loaded.file_id(id),
            label: graph.node(id).payload.label.clone(),
            degree: graph.degree(id),
        })
        .collect();

    match ctx.cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({ "leaves": leaves }))?,
        OutputFormat::Human => {
            for leaf in &leaves {
                match &leaf.label {
                    Some(label) => println!("{} {}", leaf.id, label),
                    None => println!("{}", leaf.id),
                }
            }
        }
    }
    Ok(())
}
