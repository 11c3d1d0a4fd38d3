use assert_cmd::{cargo::cargo_bin_cmd, Command};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for graphwalk with config discovery confined to `dir`
pub fn graphwalk(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.env("GRAPHWALK_CONFIG_DIR", dir)
        .env_remove("RUST_LOG")
        .env_remove("GRAPHWALK_LOG");
    cmd
}

/// Write a graph description into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, graph: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(graph).unwrap()).unwrap();
    path
}

/// Undirected chain with file ids 1..=n
pub fn chain(n: u64) -> Value {
    let nodes: Vec<Value> = (1..=n).map(|id| json!({ "id": id })).collect();
    let edges: Vec<Value> = (1..n).map(|id| json!({ "from": id, "to": id + 1 })).collect();
    json!({ "directed": false, "nodes": nodes, "edges": edges })
}

/// Undirected cycle with file ids 1..=n
pub fn cycle(n: u64) -> Value {
    let mut graph = chain(n);
    if let Some(edges) = graph["edges"].as_array_mut() {
        edges.push(json!({ "from": n, "to": 1 }));
    }
    graph
}

/// Chain 1..=n with an extra node 100 hanging off `fork`
#[allow(dead_code)]
pub fn chain_with_spur(n: u64, fork: u64) -> Value {
    let mut graph = chain(n);
    if let Some(nodes) = graph["nodes"].as_array_mut() {
        nodes.push(json!({ "id": 100, "label": "spur" }));
    }
    if let Some(edges) = graph["edges"].as_array_mut() {
        edges.push(json!({ "from": fork, "to": 100 }));
    }
    graph
}

/// Temp dir plus a graph file inside it
#[allow(dead_code)]
pub fn setup_graph(graph: &Value) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_graph(dir.path(), "graph.json", graph);
    (dir, path)
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
