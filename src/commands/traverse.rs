//! `graphwalk traverse`

use std::path::Path;
use std::sync::atomic::Ordering;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{interrupt_flag, load_graph, print_json};
use graphwalk_core::error::Result;
use graphwalk_core::graph::{
    Attributes, Marks, Node, NodeId, Strategy, Traversal, TraversalStats, TraversalStatus,
    VisitControl,
};
use graphwalk_core::{bail_invalid, bail_usage};

pub struct TraverseArgs<'a> {
    pub graph: &'a Path,
    pub strategy: Option<Strategy>,
    pub sources: &'a [u64],
    pub max_visits: Option<usize>,
}

#[derive(Serialize)]
struct TraverseOutput {
    strategy: Strategy,
    visited: Vec<u64>,
    suspended: bool,
    stats: TraversalStats,
}

pub fn execute(ctx: &CommandContext, args: &TraverseArgs) -> Result<()> {
    let strategy = args.strategy.unwrap_or(ctx.config.traversal.strategy);
    let max_visits = args.max_visits.or(ctx.config.traversal.max_visits);
    if max_visits == Some(0) {
        bail_invalid!("--max-visits", 0);
    }

    let loaded = load_graph(ctx, args.graph)?;
    let sources = args
        .sources
        .iter()
        .map(|id| loaded.resolve(*id))
        .collect::<Result<Vec<NodeId>>>()?;

    if strategy.needs_source() && sources.is_empty() {
        bail_usage!(format!("strategy {} needs at least one --source", strategy));
    }
    if !strategy.needs_source() && !sources.is_empty() {
        tracing::warn!(%strategy, "sources are ignored by topological strategies");
    }

    let interrupted = interrupt_flag();
    let mut order: Vec<NodeId> = Vec::new();
    let walker = |node: &Node<Attributes>, _marks: &mut Marks| {
        order.push(node.id());
        let limit_reached = max_visits.is_some_and(|max| order.len() >= max);
        if limit_reached || interrupted.load(Ordering::SeqCst) {
            VisitControl::Suspend
        } else {
            VisitControl::Continue
        }
    };

    let mut traversal = Traversal::new(&loaded.graph, strategy.iterator(), walker);
    traversal.init();
    if strategy.needs_source() {
        for source in &sources {
            traversal.set_source(*source)?;
        }
    }
    let status = traversal.traverse();
    let stats = traversal.stats();
    drop(traversal);

    tracing::debug!(
        %strategy,
        visited = order.len(),
        elapsed = ?ctx.start.elapsed(),
        "traverse"
    );

    let output = TraverseOutput {
        strategy,
        visited: loaded.file_ids(&order),
        suspended: status == TraversalStatus::Suspended,
        stats,
    };

    match ctx.cli.format {
        OutputFormat::Json => print_json(&serde_json::to_value(&output)?)?,
        OutputFormat::Human => {
            for id in &output.visited {
                println!("{}", id);
            }
            if output.suspended && !ctx.cli.quiet {
                eprintln!("stopped after {} visits", output.visited.len());
            }
        }
    }
    Ok(())
}
