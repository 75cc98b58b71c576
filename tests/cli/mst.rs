use crate::cli::support::{airnet, record_lines, stdout_json, write_network};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Minimum spanning tree tests
// ============================================================================

#[test]
fn test_mst_human() {
    let dir = tempdir().unwrap();

    airnet(dir.path())
        .arg("mst")
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum Spanning Tree:"))
        .stdout(predicate::str::contains("SFO - LAX (cost: 8)"))
        .stdout(predicate::str::contains("JFK - DFW (cost: 5)"))
        .stdout(predicate::str::contains("ORD - ATL (cost: 3)"))
        .stdout(predicate::str::contains("Total cost: 46"))
        .stdout(predicate::str::contains("Unreachable").not());
}

#[test]
fn test_mst_records_edges() {
    let dir = tempdir().unwrap();

    let output = airnet(dir.path())
        .args(["--format", "records", "mst"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let mut edges = record_lines(&output);
    edges.sort();
    assert_eq!(
        edges,
        [
            "E 0 1 weight=8",
            "E 1 2 weight=6",
            "E 1 3 weight=5",
            "E 1 4 weight=4",
            "E 2 8 weight=8",
            "E 6 7 weight=3",
            "E 8 5 weight=5",
            "E 8 6 weight=7",
        ]
    );
}

#[test]
fn test_mst_json_from_other_root() {
    let dir = tempdir().unwrap();

    let output = airnet(dir.path())
        .args(["--format", "json", "mst", "--root", "ATL"])
        .output()
        .unwrap();
    let json = stdout_json(&output);

    assert_eq!(json["root"], 7);
    assert_eq!(json["total_weight"], 46);
    assert_eq!(json["spanning"], true);
    assert_eq!(json["edges"].as_array().unwrap().len(), 8);
}

#[test]
fn test_mst_disconnected_network() {
    let dir = tempdir().unwrap();
    let network = write_network(
        dir.path(),
        "split.toml",
        &["AAA", "BBB", "CCC", "DDD"],
        &[(0, 1, 4), (2, 3, 1)],
    );

    airnet(dir.path())
        .arg("--network")
        .arg(&network)
        .arg("mst")
        .assert()
        .success()
        .stdout(predicate::str::contains("AAA - BBB (cost: 4)"))
        .stdout(predicate::str::contains("Total cost: 4"))
        .stdout(predicate::str::contains("Unreachable: CCC, DDD"))
        .stderr(predicate::str::contains("spanning tree is partial"));
}
