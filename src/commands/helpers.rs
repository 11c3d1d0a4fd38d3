//! Helper functions shared across commands

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use graphwalk_core::error::{Result, WalkError};
use graphwalk_core::graph::{GraphFile, LoadedGraph};
use graphwalk_core::trace_time;

use super::dispatch::CommandContext;

/// Read a JSON graph description and build it with the configured default weight
pub fn load_graph(ctx: &CommandContext, path: &Path) -> Result<LoadedGraph> {
    let start = Instant::now();
    let loaded = GraphFile::load(path)?.into_graph(ctx.config.path.default_weight)?;
    trace_time!(
        start,
        "load_graph",
        nodes = loaded.graph.node_count(),
        edges = loaded.graph.edge_count()
    );
    Ok(loaded)
}

/// Flag raised by Ctrl-C
///
/// Only the first handler installed in a process takes effect; later calls
/// get a flag that never fires.
pub fn interrupt_flag() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    interrupted
}

/// Pretty-print a JSON value on stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(WalkError::from)?;
    println!("{}", rendered);
    Ok(())
}
