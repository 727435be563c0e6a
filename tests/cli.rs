use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("covid").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("covid"))
        .stdout(predicate::str::contains("dashboard"));
}

#[test]
fn blank_country_is_rejected_without_network() {
    let mut cmd = Command::cargo_bin("covid").unwrap();
    // An unroutable base URL proves no request is attempted.
    cmd.args(["--base-url", "http://127.0.0.1:9", "country", "   "]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a country name"));
}

#[test]
fn unreachable_api_fails_cleanly() {
    let mut cmd = Command::cargo_bin("covid").unwrap();
    cmd.args(["--base-url", "http://127.0.0.1:9", "--timeout", "2", "summary"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("fetch global summary"));
}

#[test]
fn dashboard_export_survives_unreachable_api() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dash.html");
    let mut cmd = Command::cargo_bin("covid").unwrap();
    cmd.args(["--base-url", "http://127.0.0.1:9", "--timeout", "2", "dashboard", "--out"])
        .arg(&out);
    cmd.assert().success();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Please try again later."));
    assert!(html.contains(r#"id="loading" class="text-center text-gray-600 mb-4 hidden""#));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn country_online_germany() {
    let mut cmd = Command::cargo_bin("covid").unwrap();
    cmd.args(["country", "Germany"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Germany"));
}
