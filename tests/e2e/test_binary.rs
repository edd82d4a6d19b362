//! Integration tests for the netvis binary.
//!
//! These tests run the compiled binary on node-link JSON and inspect the
//! emitted wire document.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

/// Path to the binary built by `cargo test`.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_netvis"))
}

/// Run the binary with the given stdin input and extra CLI args.
fn run_raw(input: &str, extra_args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

/// Run the binary and parse stdout as JSON. Panics on a non-zero exit.
fn run_binary(input: &str, extra_args: &[&str]) -> Value {
    let output = run_raw(input, extra_args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).expect("Non-UTF8 output");
    serde_json::from_str(&stdout).expect("Output is not JSON")
}

const TRIANGLE: &str = r#"{
    "nodes": [
        {"id": "A", "color": "red", "name": "Node A", "size": 1},
        {"id": "B", "color": "blue", "name": "Node B", "size": 2},
        {"id": "C", "color": "red", "name": "Node C", "size": 3}
    ],
    "links": [
        {"source": "A", "target": "B", "relationship": "connects"},
        {"source": "B", "target": "C"},
        {"source": "C", "target": "A"}
    ]
}"#;

// ─── Basic conversion ───────────────────────────────────────────────────────

#[test]
fn test_converts_stdin() {
    let doc = run_binary(TRIANGLE, &["--seed", "1"]);
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(doc["links"].as_array().unwrap().len(), 3);
    for node in doc["nodes"].as_array().unwrap() {
        assert!(node["x"].as_f64().unwrap().is_finite());
        assert!(node["y"].as_f64().unwrap().is_finite());
        assert!(node.get("category").is_none());
    }
}

#[test]
fn test_empty_graph() {
    let doc = run_binary(r#"{"nodes": [], "links": []}"#, &[]);
    assert_eq!(doc, serde_json::json!({"nodes": [], "links": []}));
}

#[test]
fn test_title_flag() {
    let doc = run_binary(TRIANGLE, &["--title", "Triangle", "--seed", "1"]);
    assert_eq!(doc["title"], "Triangle");
}

#[test]
fn test_styling_flags() {
    let doc = run_binary(
        TRIANGLE,
        &[
            "--node-color", "color",
            "--node-label", "name",
            "--edge-label", "relationship",
            "--layout", "circular",
        ],
    );
    assert_eq!(doc["nodes"][0]["category"], "red");
    assert_eq!(doc["nodes"][0]["name"], "Node A");
    assert_eq!(doc["links"][0]["label"], "connects");
    assert!(doc["links"][1].get("label").is_none());
}

#[test]
fn test_color_scale_flag() {
    let doc = run_binary(
        TRIANGLE,
        &[
            "--node-color", "size",
            "--color-scale",
            "--low-color", "#000000",
            "--high-color", "#ffffff",
            "--layout", "random",
            "--seed", "3",
        ],
    );
    assert_eq!(doc["nodes"][0]["category"], "#000000");
    assert_eq!(doc["nodes"][1]["category"], "#808080");
    assert_eq!(doc["nodes"][2]["category"], "#ffffff");
}

#[test]
fn test_seed_is_reproducible() {
    let a = run_binary(TRIANGLE, &["--layout", "random", "--seed", "9"]);
    let b = run_binary(TRIANGLE, &["--layout", "random", "--seed", "9"]);
    assert_eq!(a, b);
}

#[test]
fn test_directed_multigraph_markers() {
    let src = r#"{"directed": true, "multigraph": true,
        "nodes": [{"id": 1}, {"id": 2}],
        "links": [{"source": 1, "target": 2}, {"source": 1, "target": 2}]}"#;
    let doc = run_binary(src, &["--layout", "circular"]);
    let links = doc["links"].as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["metadata"]["directed"], true);
    assert_eq!(links[0]["metadata"]["edge_key"], 0);
    assert_eq!(links[1]["metadata"]["edge_key"], 1);
}

#[test]
fn test_pretty_flag() {
    let output = run_raw(r#"{"nodes": [{"id": 1}], "links": []}"#, &["--pretty"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_end().lines().count() > 1);
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[test]
fn test_non_graph_input_fails() {
    let output = run_raw(r#"[1, 2, 3]"#, &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Expected graph object"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_json_fails() {
    let output = run_raw("{not json", &[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unknown_layout_fails() {
    let output = run_raw(TRIANGLE, &["--layout", "sideways"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown layout"));
}

#[test]
fn test_unavailable_layout_fails() {
    let output = run_raw(TRIANGLE, &["--layout", "spectral"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Layout computation failed"));
}

// ─── Files ──────────────────────────────────────────────────────────────────

#[test]
fn test_reads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_file = dir.path().join("graph.json");
    fs::write(&input_file, TRIANGLE).unwrap();

    let output = Command::new(binary_path())
        .args([input_file.to_str().unwrap(), "--seed", "2"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    let doc: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 3);
}

#[test]
fn test_output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_file = dir.path().join("scene.json");

    let output = run_raw(TRIANGLE, &["--output", out_file.to_str().unwrap(), "--seed", "2"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let content = fs::read_to_string(&out_file).unwrap();
    let doc: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(doc["links"].as_array().unwrap().len(), 3);
}

#[test]
fn test_missing_input_file_fails() {
    let output = Command::new(binary_path())
        .arg("/nonexistent/graph.json")
        .output()
        .expect("Failed to run binary");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}
