//! Integration tests for the graphwalk CLI
//!
//! These tests run the graphwalk binary against small graph files.

mod support;

use predicates::prelude::*;
use serde_json::json;
use std::fs;
use support::{chain, chain_with_spur, cycle, graphwalk, setup_graph, stdout_json, write_graph};
use tempfile::tempdir;

// ============================================================================
// Help, version and exit codes
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    graphwalk(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphwalk"))
        .stdout(predicate::str::contains("traverse"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("leaves"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    graphwalk(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    graphwalk(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk --help"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    let (dir, graph) = setup_graph(&chain(3));
    graphwalk(dir.path())
        .args(["--format", "records", "leaves"])
        .arg(&graph)
        .assert()
        .code(2);
}

#[test]
fn test_unknown_strategy_exit_code_2() {
    let (dir, graph) = setup_graph(&chain(3));
    graphwalk(dir.path())
        .args(["traverse", "--strategy", "sideways", "--source", "1"])
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no-bifurcation"));
}

#[test]
fn test_missing_graph_file_exit_code_1() {
    let dir = tempdir().unwrap();
    graphwalk(dir.path())
        .args(["leaves"])
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn test_json_error_envelope() {
    let (dir, graph) = setup_graph(&chain(3));
    let output = graphwalk(dir.path())
        .args(["--format", "json", "traverse", "--source", "42"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "unknown_node");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_json_envelope_for_clap_errors() {
    let dir = tempdir().unwrap();
    let output = graphwalk(dir.path())
        .args(["--format", "json", "path"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

// ============================================================================
// traverse
// ============================================================================

#[test]
fn test_traverse_chain_in_order() {
    let (dir, graph) = setup_graph(&chain(5));
    graphwalk(dir.path())
        .args(["traverse", "--source", "1"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("1\n2\n3\n4\n5\n");
}

#[test]
fn test_traverse_depth_first_from_far_end() {
    let (dir, graph) = setup_graph(&chain(4));
    graphwalk(dir.path())
        .args(["traverse", "--strategy", "depth-first", "--source", "4"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("4\n3\n2\n1\n");
}

#[test]
fn test_traverse_requires_source() {
    let (dir, graph) = setup_graph(&chain(3));
    graphwalk(dir.path())
        .args(["traverse", "--strategy", "depth-first"])
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--source"));
}

#[test]
fn test_traverse_json_output() {
    let (dir, graph) = setup_graph(&chain(4));
    let output = graphwalk(dir.path())
        .args(["--format", "json", "traverse", "--source", "1"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["strategy"], "breadth-first");
    assert_eq!(value["visited"], json!([1, 2, 3, 4]));
    assert_eq!(value["suspended"], false);
    assert_eq!(value["stats"]["visited"], 4);
}

#[test]
fn test_traverse_max_visits_suspends() {
    let (dir, graph) = setup_graph(&chain(10));
    let output = graphwalk(dir.path())
        .args(["--format", "json", "traverse", "--source", "1", "--max-visits", "3"])
        .arg(&graph)
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(value["visited"], json!([1, 2, 3]));
    assert_eq!(value["suspended"], true);
}

#[test]
fn test_traverse_zero_max_visits_rejected() {
    let (dir, graph) = setup_graph(&chain(3));
    graphwalk(dir.path())
        .args(["traverse", "--source", "1", "--max-visits", "0"])
        .arg(&graph)
        .assert()
        .code(2);
}

#[test]
fn test_topological_on_cycle_visits_nothing() {
    let (dir, graph) = setup_graph(&cycle(6));
    graphwalk(dir.path())
        .args(["traverse", "--strategy", "breadth-first-topological"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_topological_peels_chain_from_both_ends() {
    let (dir, graph) = setup_graph(&chain(4));
    graphwalk(dir.path())
        .args(["traverse", "--strategy", "breadth-first-topological"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("1\n4\n2\n3\n");
}

#[test]
fn test_no_bifurcation_stops_before_fork() {
    let (dir, graph) = setup_graph(&chain_with_spur(8, 5));
    graphwalk(dir.path())
        .args(["traverse", "--strategy", "no-bifurcation", "--source", "1"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("1\n2\n3\n4\n");
}

#[test]
fn test_strategy_from_config() {
    let (dir, graph) = setup_graph(&chain(3));
    fs::write(
        dir.path().join("config.toml"),
        "[traversal]\nstrategy = \"depth-first\"\n",
    )
    .unwrap();
    graphwalk(dir.path())
        .args(["--format", "json", "traverse", "--source", "3"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"depth-first\""));
}

#[test]
fn test_explicit_config_flag() {
    let (dir, graph) = setup_graph(&chain(6));
    let config_path = dir.path().join("walk.toml");
    let mut traversal = toml::Table::new();
    traversal.insert("max_visits".to_string(), toml::Value::Integer(2));
    let mut config = toml::Table::new();
    config.insert("traversal".to_string(), toml::Value::Table(traversal));
    fs::write(&config_path, toml::to_string(&config).unwrap()).unwrap();

    graphwalk(dir.path())
        .args(["traverse", "--source", "1", "--config"])
        .arg(&config_path)
        .arg(&graph)
        .assert()
        .success()
        .stdout("1\n2\n")
        .stderr(predicate::str::contains("stopped after 2 visits"));
}

// ============================================================================
// path
// ============================================================================

fn weighted_square() -> serde_json::Value {
    // 1 -(10)- 2, 1 -(1)- 3 -(1)- 4 -(1)- 2
    json!({
        "directed": false,
        "nodes": [
            { "id": 1, "x": 0.0, "y": 0.0 },
            { "id": 2, "x": 1.0, "y": 0.0 },
            { "id": 3, "x": 0.0, "y": 1.0 },
            { "id": 4, "x": 1.0, "y": 1.0 }
        ],
        "edges": [
            { "from": 1, "to": 2, "weight": 10.0 },
            { "from": 1, "to": 3, "weight": 1.0 },
            { "from": 3, "to": 4, "weight": 1.0 },
            { "from": 4, "to": 2, "weight": 1.0 }
        ]
    })
}

#[test]
fn test_path_dijkstra_human() {
    let (dir, graph) = setup_graph(&weighted_square());
    graphwalk(dir.path())
        .args(["path", "--from", "1", "--to", "2"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 3 -> 4 -> 2"))
        .stdout(predicate::str::contains("cost: 3"));
}

#[test]
fn test_path_astar_json() {
    let (dir, graph) = setup_graph(&weighted_square());
    let output = graphwalk(dir.path())
        .args(["--format", "json", "path", "--from", "1", "--to", "2"])
        .args(["--algorithm", "astar"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["algorithm"], "astar");
    assert_eq!(value["nodes"], json!([1, 3, 4, 2]));
    assert_eq!(value["cost"], 3.0);
}

#[test]
fn test_path_unreachable_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "split.json",
        &json!({
            "nodes": [{ "id": 1 }, { "id": 2 }, { "id": 3 }],
            "edges": [{ "from": 1, "to": 2 }]
        }),
    );
    graphwalk(dir.path())
        .args(["path", "--from", "1", "--to", "3"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no path"));
}

#[test]
fn test_path_respects_direction() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "arrow.json",
        &json!({
            "directed": true,
            "nodes": [{ "id": 1 }, { "id": 2 }],
            "edges": [{ "from": 1, "to": 2 }]
        }),
    );
    graphwalk(dir.path())
        .args(["path", "--from", "1", "--to", "2"])
        .arg(&graph)
        .assert()
        .success();
    graphwalk(dir.path())
        .args(["path", "--from", "2", "--to", "1"])
        .arg(&graph)
        .assert()
        .code(3);
}

#[test]
fn test_path_takes_lightest_parallel_edge() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "parallel.json",
        &json!({
            "nodes": [{ "id": 1, "x": 0.0, "y": 0.0 }, { "id": 2, "x": 1.0, "y": 0.0 }],
            "edges": [
                { "from": 1, "to": 2, "weight": 5.0 },
                { "from": 1, "to": 2, "weight": 1.0 }
            ]
        }),
    );
    for algorithm in ["dijkstra", "astar"] {
        let output = graphwalk(dir.path())
            .args(["--format", "json", "path", "--from", "1", "--to", "2"])
            .args(["--algorithm", algorithm])
            .arg(&graph)
            .output()
            .unwrap();
        assert!(output.status.success());
        assert_eq!(stdout_json(&output)["cost"], 1.0, "{algorithm}");
    }
}

#[test]
fn test_default_weight_from_config() {
    let (dir, graph) = setup_graph(&chain(3));
    fs::write(
        dir.path().join("config.toml"),
        "[path]\ndefault_weight = 2.5\n",
    )
    .unwrap();
    let output = graphwalk(dir.path())
        .args(["--format", "json", "path", "--from", "1", "--to", "3"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["cost"], 5.0);
}

// ============================================================================
// leaves
// ============================================================================

#[test]
fn test_leaves_of_chain() {
    let (dir, graph) = setup_graph(&chain(5));
    graphwalk(dir.path())
        .arg("leaves")
        .arg(&graph)
        .assert()
        .success()
        .stdout("1\n5\n");
}

#[test]
fn test_leaves_json_includes_labels() {
    let (dir, graph) = setup_graph(&chain_with_spur(4, 2));
    let output = graphwalk(dir.path())
        .args(["--format", "json", "leaves"])
        .arg(&graph)
        .output()
        .unwrap();
    let value = stdout_json(&output);
    let leaves = value["leaves"].as_array().unwrap();
    assert_eq!(leaves.len(), 3);
    assert_eq!(leaves[2]["id"], 100);
    assert_eq!(leaves[2]["label"], "spur");
    assert_eq!(leaves[2]["degree"], 1);
}

#[test]
fn test_invalid_graph_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "bad.json",
        &json!({ "nodes": [{ "id": 1 }], "edges": [{ "from": 1, "to": 9 }] }),
    );
    graphwalk(dir.path())
        .arg("leaves")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("undeclared node 9"));
}
