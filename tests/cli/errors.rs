use crate::cli::support::{airnet, write_network};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Exit code and error envelope tests
// ============================================================================

#[test]
fn test_invalid_start_node_exit_code() {
    let dir = tempdir().unwrap();

    airnet(dir.path())
        .args(["dfs", "--start", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "error: invalid start node 9 (graph has 9 nodes)",
        ));
}

#[test]
fn test_invalid_start_node_json_envelope() {
    let dir = tempdir().unwrap();

    let output = airnet(dir.path())
        .args(["--format", "json", "paths", "--start", "42"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "invalid_start_node");
}

#[test]
fn test_unknown_airport_code() {
    let dir = tempdir().unwrap();

    airnet(dir.path())
        .args(["bfs", "--start", "XYZ"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown node: XYZ"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();

    airnet(dir.path())
        .args(["--quiet", "mst", "--root", "XYZ"])
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_edge_out_of_range_is_data_error() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), "bad.toml", &["AAA", "BBB"], &[(0, 5, 3)]);

    airnet(dir.path())
        .arg("--network")
        .arg(&network)
        .arg("network")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid edge 0 -> 5"));
}

#[test]
fn test_negative_endpoint_is_data_error() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), "bad.toml", &["AAA", "BBB"], &[(-1, 1, 3)]);

    let output = airnet(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["--format", "json", "dfs"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_edge");
}

#[test]
fn test_negative_weight_is_data_error() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), "bad.toml", &[], &[(0, 1, -4)]);

    airnet(dir.path())
        .arg("--network")
        .arg(&network)
        .arg("paths")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid weight -4"));
}

#[test]
fn test_malformed_toml_is_data_error() {
    let dir = tempdir().unwrap();
    let network = dir.path().join("broken.toml");
    fs::write(&network, "name = \"unterminated\nedges = [").unwrap();

    airnet(dir.path())
        .arg("--network")
        .arg(&network)
        .arg("network")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_duplicate_codes_rejected() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), "dup.toml", &["AAA", "aaa"], &[(0, 1, 1)]);

    airnet(dir.path())
        .arg("--network")
        .arg(&network)
        .arg("network")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate airport code aaa"));
}

#[test]
fn test_missing_network_file() {
    let dir = tempdir().unwrap();

    airnet(dir.path())
        .args(["--network", "nowhere.toml", "network"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read network from nowhere.toml"));
}

#[test]
fn test_weight_too_large_is_data_error() {
    let dir = tempdir().unwrap();
    let network = write_network(
        dir.path(),
        "big.toml",
        &[],
        &[(0, 1, i64::MAX), (1, 2, i64::MAX), (2, 0, i64::MAX)],
    );

    let output = airnet(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["--format", "json", "network"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_weight");
}

#[test]
fn test_parse_error_json_envelope() {
    let dir = tempdir().unwrap();

    let output = airnet(dir.path())
        .args(["--format", "json", "route", "SFO"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_parse_error_json_envelope_from_env() {
    let dir = tempdir().unwrap();

    let output = airnet(dir.path())
        .env("AIRNET_FORMAT", "json")
        .args(["mst", "--no-such-flag"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
}
