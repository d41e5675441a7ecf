//! Integration tests for the pathkit CLI
//!
//! These tests run the pathkit binary against graph and maze files.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

/// Get a Command for pathkit
fn pathkit() -> Command {
    cargo_bin_cmd!("pathkit")
}

const DIAMOND: &str = r#"
directed = false
start = "A"
goal = "E"

[[nodes]]
name = "A"
position = [0.0, 0.0]

[[nodes]]
name = "E"
position = [3.0, 0.0]

[[edges]]
from = "A"
to = "B"
weight = 4.0

[[edges]]
from = "A"
to = "C"
weight = 2.0

[[edges]]
from = "B"
to = "D"
weight = 5.0

[[edges]]
from = "C"
to = "D"
weight = 1.0

[[edges]]
from = "D"
to = "E"
weight = 3.0
"#;

const MAZE: &str = "\
S.#
#.#
#.G
";

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    pathkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathkit"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("maze"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn test_version_flag() {
    pathkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathkit"));
}

#[test]
fn test_no_command_prints_banner() {
    pathkit()
        .assert()
        .success()
        .stdout(predicate::str::contains("pathkit"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    pathkit()
        .args(["--format", "records", "demo", "cities"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_algorithm_exit_code_2() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", DIAMOND);

    pathkit()
        .arg("search")
        .arg("--graph")
        .arg(&graph)
        .args(["--algorithm", "greedy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("greedy"));
}

#[test]
fn test_unknown_algorithm_json_envelope() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", DIAMOND);

    let output = pathkit()
        .args(["--format", "json", "search", "--algorithm", "greedy", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
    assert_eq!(err["error"]["code"], 2);
}

#[test]
fn test_uppercase_json_format_gets_json_envelope() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", DIAMOND);

    let output = pathkit()
        .args(["--format", "JSON", "search", "--algorithm", "greedy", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_missing_graph_file_exit_code_1() {
    let dir = tempdir().unwrap();

    pathkit()
        .arg("search")
        .arg("--graph")
        .arg(dir.path().join("missing.toml"))
        .args(["--algorithm", "bfs"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_missing_graph_file_json_error() {
    let dir = tempdir().unwrap();

    let output = pathkit()
        .args(["--format", "json", "compare", "--graph"])
        .arg(dir.path().join("missing.toml"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "io_error");
}

#[test]
fn test_malformed_graph_file_exit_code_1() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", "directed = maybe\n");

    pathkit()
        .arg("compare")
        .arg("--graph")
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML"));
}

#[test]
fn test_negative_weight_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "g.toml",
        "start = \"A\"\ngoal = \"B\"\n\n[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = -2.0\n",
    );

    pathkit()
        .arg("search")
        .arg("--graph")
        .arg(&graph)
        .args(["--algorithm", "dijkstra"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edge weight"));
}

#[test]
fn test_missing_goal_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "g.toml",
        "[[edges]]\nfrom = \"A\"\nto = \"B\"\n",
    );

    pathkit()
        .arg("search")
        .arg("--graph")
        .arg(&graph)
        .args(["--algorithm", "bfs", "--from", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no goal node"));
}

// ============================================================================
// search
// ============================================================================

#[test]
fn test_search_dijkstra_human() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", DIAMOND);

    pathkit()
        .arg("search")
        .arg("--graph")
        .arg(&graph)
        .args(["--algorithm", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dijkstra: A -> C -> D -> E"))
        .stdout(predicate::str::contains("cost: 6.0"))
        .stdout(predicate::str::contains("nodes explored: 5"));
}

#[test]
fn test_search_quiet_prints_path_only() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", DIAMOND);

    pathkit()
        .arg("--quiet")
        .arg("search")
        .arg("--graph")
        .arg(&graph)
        .args(["--algorithm", "dijkstra"])
        .assert()
        .success()
        .stdout("Dijkstra: A -> C -> D -> E\n");
}

#[test]
fn test_search_verbose_lists_visited() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", DIAMOND);

    pathkit()
        .arg("--verbose")
        .arg("search")
        .arg("--graph")
        .arg(&graph)
        .args(["--algorithm", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visited: A, C, D, B, E"));
}

#[test]
fn test_search_bfs_json() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", DIAMOND);

    let output = pathkit()
        .args(["--format", "json", "search", "--algorithm", "bfs", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "D", "E"]));
    assert!(json.get("cost").is_none());
}

#[test]
fn test_search_flags_override_file_endpoints() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", DIAMOND);

    pathkit()
        .arg("search")
        .arg("--graph")
        .arg(&graph)
        .args(["--algorithm", "astar", "--from", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A*: B -> D -> E"))
        .stdout(predicate::str::contains("cost: 8.0"));
}

#[test]
fn test_search_astar_with_heuristic_flag() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", DIAMOND);

    let output = pathkit()
        .args(["--format", "json", "search", "--algorithm", "a*"])
        .args(["--heuristic", "manhattan", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "astar");
    assert_eq!(json["cost"], 6.0);
}

#[test]
fn test_search_unknown_node_is_not_found() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", DIAMOND);

    pathkit()
        .arg("search")
        .arg("--graph")
        .arg(&graph)
        .args(["--algorithm", "dijkstra", "--to", "Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dijkstra: no path from A to Z"))
        .stdout(predicate::str::contains("nodes explored: 0"))
        .stderr(predicate::str::contains("node not found: Z"));
}

#[test]
fn test_search_unreachable_json_cost_is_null() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "g.toml",
        "directed = true\nstart = \"B\"\ngoal = \"A\"\n\n[[edges]]\nfrom = \"A\"\nto = \"B\"\n",
    );

    let output = pathkit()
        .args(["--format", "json", "search", "--algorithm", "dijkstra", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert!(json["cost"].is_null());
    assert_eq!(json["nodes_explored"], 1);
}

// ============================================================================
// compare
// ============================================================================

#[test]
fn test_compare_human_table() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", DIAMOND);

    pathkit()
        .arg("compare")
        .arg("--graph")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm"))
        .stdout(predicate::str::contains("BFS"))
        .stdout(predicate::str::contains("DFS"))
        .stdout(predicate::str::contains("Dijkstra"))
        .stdout(predicate::str::contains("A*"));
}

#[test]
fn test_compare_json() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "g.toml", DIAMOND);

    let output = pathkit()
        .args(["--format", "json", "compare", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["start"], "A");
    assert_eq!(json["goal"], "E");
    assert_eq!(json["heuristic"], "euclidean");

    let results = json["results"].as_array().unwrap();
    let algorithms: Vec<_> = results.iter().map(|r| r["algorithm"].clone()).collect();
    assert_eq!(
        algorithms,
        vec!["bfs", "dfs", "dijkstra", "astar"]
            .into_iter()
            .map(serde_json::Value::from)
            .collect::<Vec<_>>()
    );
    assert_eq!(results[2]["cost"], 6.0);
    assert_eq!(results[3]["cost"], 6.0);
    assert!(results.iter().all(|r| r["elapsed_us"].is_u64()));
}

// ============================================================================
// maze
// ============================================================================

#[test]
fn test_maze_solution_rendered() {
    let dir = tempdir().unwrap();
    let maze = write_file(dir.path(), "maze.txt", MAZE);

    pathkit()
        .arg("maze")
        .arg("--file")
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("S*#\n#*#\n#*G"))
        .stdout(predicate::str::contains("A*: 4 moves"));
}

#[test]
fn test_maze_json() {
    let dir = tempdir().unwrap();
    let maze = write_file(dir.path(), "maze.txt", MAZE);

    let output = pathkit()
        .args(["--format", "json", "maze", "--algorithm", "bfs", "--file"])
        .arg(&maze)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["path"].as_array().unwrap().len(), 5);
    assert_eq!(json["path"][0], serde_json::json!([0, 0]));
    assert!(json["rendered"].as_str().unwrap().contains('*'));
}

#[test]
fn test_maze_without_goal_exit_code_3() {
    let dir = tempdir().unwrap();
    let maze = write_file(dir.path(), "maze.txt", "S..\n...\n");

    pathkit()
        .arg("maze")
        .arg("--file")
        .arg(&maze)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no goal"));
}

// ============================================================================
// demo
// ============================================================================

#[test]
fn test_demo_cities() {
    pathkit()
        .args(["demo", "cities"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Optimal path (Dijkstra): London -> Amsterdam -> Berlin -> Vienna",
        ))
        .stdout(predicate::str::contains("Total distance: 1458.0 km"));
}

#[test]
fn test_demo_cities_runs_astar_with_both_heuristics() {
    pathkit()
        .args(["demo", "cities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A* (Euclidean)"))
        .stdout(predicate::str::contains("A* (Manhattan)"));
}

#[test]
fn test_demo_cities_json_labels() {
    let output = pathkit()
        .args(["--format", "json", "demo", "cities"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    let labels: Vec<&str> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["BFS", "DFS", "Dijkstra", "A* (Euclidean)", "A* (Manhattan)"]
    );
    assert_eq!(json["results"][4]["cost"], 1458.0);
}

#[test]
fn test_demo_maze_json() {
    let output = pathkit()
        .args(["--format", "json", "demo", "maze"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["problem"], "maze");
    assert_eq!(json["rows"], 9);
    assert_eq!(json["results"].as_array().unwrap().len(), 4);
    assert!(json["solution"].as_str().unwrap().contains("*****"));
}

#[test]
fn test_demo_unknown_problem() {
    pathkit().args(["demo", "scheduling"]).assert().code(2);
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_json_emits_structured_logs() {
    pathkit()
        .args(["--log-json", "--log-level", "debug", "demo", "cities"])
        .env_remove("RUST_LOG")
        .env_remove("PATHKIT_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("search_complete"));
}
