use crate::cli::support::airnet;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_default_logging_is_quiet() {
    let dir = tempdir().unwrap();

    airnet(dir.path())
        .arg("dfs")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_network_source() {
    let dir = tempdir().unwrap();

    airnet(dir.path())
        .args(["--verbose", "dfs"])
        .assert()
        .success()
        .stderr(predicate::str::contains("network_source"))
        .stderr(predicate::str::contains("built-in network"));
}

#[test]
fn test_log_level_flag() {
    let dir = tempdir().unwrap();

    airnet(dir.path())
        .args(["--log-level", "debug", "paths"])
        .assert()
        .success()
        .stderr(predicate::str::contains("network_source"))
        .stdout(predicate::str::contains("SFO -> JFK : 22"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();

    let output = airnet(dir.path())
        .args(["--verbose", "--log-json", "bfs"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(event.get("level").is_some());
}

#[test]
fn test_airnet_log_env() {
    let dir = tempdir().unwrap();

    airnet(dir.path())
        .env("AIRNET_LOG", "airnet=debug")
        .arg("network")
        .assert()
        .success()
        .stderr(predicate::str::contains("network_source"));
}
