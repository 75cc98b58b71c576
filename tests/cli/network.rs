use crate::cli::support::{airnet, record_lines, stdout_json, write_network};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Network listing and discovery tests
// ============================================================================

#[test]
fn test_network_human() {
    let dir = tempdir().unwrap();

    airnet(dir.path())
        .arg("network")
        .assert()
        .success()
        .stdout(predicate::str::contains("Airport Transportation Network:"))
        .stdout(predicate::str::contains("SFO - San Francisco connects to:"))
        .stdout(predicate::str::contains("  → LAX - Los Angeles (8 minutes)"))
        .stdout(predicate::str::contains("  → SFO - San Francisco (8 minutes)"));
}

#[test]
fn test_network_json() {
    let dir = tempdir().unwrap();

    let output = airnet(dir.path())
        .args(["--format", "json", "network"])
        .output()
        .unwrap();
    let json = stdout_json(&output);

    assert_eq!(json["node_count"], 9);
    assert_eq!(json["edges"].as_array().unwrap().len(), 14);
    assert_eq!(json["total_weight"], 123);
    // SEA connects to SFO, LAX, ATL and JFK
    assert_eq!(json["nodes"][2]["neighbors"].as_array().unwrap().len(), 4);
}

#[test]
fn test_network_records() {
    let dir = tempdir().unwrap();

    let output = airnet(dir.path())
        .args(["--format", "records", "network"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(
        "H airnet=1 network=\"Airport Transportation Network\" command=network"
    ));

    let lines = record_lines(&output);
    assert_eq!(lines.iter().filter(|l| l.starts_with("N ")).count(), 9);
    assert_eq!(lines.iter().filter(|l| l.starts_with("E ")).count(), 14);
    assert!(lines.contains(&"E 6 7 weight=3".to_string()));
}

#[test]
fn test_format_from_env() {
    let dir = tempdir().unwrap();

    airnet(dir.path())
        .env("AIRNET_FORMAT", "records")
        .arg("network")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H airnet=1"));
}

#[test]
fn test_local_network_file_is_discovered() {
    let dir = tempdir().unwrap();
    write_network(dir.path(), "airnet.toml", &["AAA", "BBB"], &[(0, 1, 7)]);

    airnet(dir.path())
        .arg("network")
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Network:"))
        .stdout(predicate::str::contains("  → BBB - BBB City (7 minutes)"));
}

#[test]
fn test_env_network_beats_local_file() {
    let dir = tempdir().unwrap();
    write_network(dir.path(), "airnet.toml", &["AAA", "BBB"], &[(0, 1, 7)]);
    let other = write_network(dir.path(), "other.toml", &["XXX", "YYY"], &[(0, 1, 2)]);

    airnet(dir.path())
        .env("AIRNET_NETWORK", &other)
        .arg("network")
        .assert()
        .success()
        .stdout(predicate::str::contains("XXX - XXX City connects to:"))
        .stdout(predicate::str::contains("AAA").not());
}

#[test]
fn test_user_config_dir_network() {
    let dir = tempdir().unwrap();
    write_network(
        &dir.path().join("config"),
        "network.toml",
        &["UUU", "VVV"],
        &[(0, 1, 3)],
    );

    airnet(dir.path())
        .args(["--format", "records", "paths", "--start", "UUU"])
        .assert()
        .success()
        .stdout(predicate::str::contains("D 1 3"));
}

#[test]
fn test_hand_written_network_file() {
    let dir = tempdir().unwrap();
    let network = dir.path().join("tiny.toml");
    fs::write(
        &network,
        r#"name = "Tiny"

[[airports]]
code = "ONE"
name = "First"

[[airports]]
code = "TWO"
name = "Second"

[[edges]]
src = 0
dest = 1
weight = 12
"#,
    )
    .unwrap();

    airnet(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["route", "one", "two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route ONE -> TWO (12 minutes):"));
}

#[test]
fn test_heaviest_weights_sum_without_overflow() {
    let dir = tempdir().unwrap();
    let heavy = i64::from(u32::MAX);
    let network = write_network(
        dir.path(),
        "heavy.toml",
        &[],
        &[(0, 1, heavy), (1, 2, heavy), (2, 3, heavy)],
    );

    let output = airnet(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["--format", "json", "network"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["total_weight"], 3 * u64::from(u32::MAX));

    let output = airnet(dir.path())
        .arg("--network")
        .arg(&network)
        .args(["--format", "json", "route", "0", "3"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["cost"], 3 * u64::from(u32::MAX));
}
