// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the list toggle commands and `reel list` in local mode.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn reel(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("reel");
    cmd.env("REEL_DATA_DIR", temp.path().join("data"))
        .env("REEL_CONFIG", temp.path().join("config.toml"))
        .env("REEL_API_URL", "http://127.0.0.1:9")
        .env_remove("REEL_PASSWORD")
        .env_remove("REEL_LOG_FILE")
        .env("RUST_LOG", "warn");
    cmd
}

fn ids(temp: &TempDir, kind: &str) -> Vec<String> {
    let output = reel(temp)
        .args(["list", "--kind", kind, "-o", "ids"])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Toggles
// =============================================================================

#[yare::parameterized(
    watchlist = { "watchlist", "watchlist" },
    favorite = { "favorite", "favorites" },
    fav_alias = { "fav", "favorites" },
)]
fn toggle_adds_then_removes(cmd: &str, kind: &str) {
    let temp = TempDir::new().unwrap();

    reel(&temp)
        .args([cmd, "550"])
        .assert()
        .success()
        .stdout(format!("Added 550 to {}\n", kind));
    assert_eq!(ids(&temp, kind), vec!["550"]);

    reel(&temp)
        .args([cmd, "550"])
        .assert()
        .success()
        .stdout(format!("Removed 550 from {}\n", kind));
    assert!(ids(&temp, kind).is_empty());
}

#[test]
fn lists_are_independent() {
    let temp = TempDir::new().unwrap();

    reel(&temp).args(["watchlist", "1"]).assert().success();
    reel(&temp).args(["favorite", "2"]).assert().success();

    assert_eq!(ids(&temp, "watchlist"), vec!["1"]);
    assert_eq!(ids(&temp, "favorites"), vec!["2"]);
}

#[test]
fn watched_toggles_marker() {
    let temp = TempDir::new().unwrap();

    reel(&temp)
        .args(["watched", "13"])
        .assert()
        .success()
        .stdout("Marked 13 as watched\n");
    reel(&temp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Watched (1):\n  13"));

    reel(&temp)
        .args(["watched", "13"])
        .assert()
        .success()
        .stdout("Marked 13 as not watched\n");
}

#[yare::parameterized(
    word = { "abc" },
    float = { "1.5" },
)]
fn toggle_rejects_non_numeric_id(id: &str) {
    let temp = TempDir::new().unwrap();
    reel(&temp).args(["watchlist", id]).assert().failure();
}

// =============================================================================
// reel list
// =============================================================================

#[test]
fn list_empty_store() {
    let temp = TempDir::new().unwrap();

    reel(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout("Watchlist (0):\nFavorites (0):\nWatched (0):\nReviews (0):\n");
}

#[test]
fn list_json_matches_stored_document() {
    let temp = TempDir::new().unwrap();
    reel(&temp).args(["watchlist", "680"]).assert().success();
    reel(&temp).args(["watchlist", "550"]).assert().success();
    reel(&temp).args(["favorite", "550"]).assert().success();

    let output = reel(&temp).args(["list", "-o", "json"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["watchlist"], serde_json::json!([550, 680]));
    assert_eq!(value["favorites"], serde_json::json!([550]));
    assert_eq!(value["watched"], serde_json::json!([]));
    assert_eq!(value["reviews"], serde_json::json!([]));
}

#[test]
fn list_json_single_kind() {
    let temp = TempDir::new().unwrap();
    reel(&temp).args(["favorite", "7"]).assert().success();

    reel(&temp)
        .args(["list", "-k", "favorites", "-o", "json"])
        .assert()
        .success()
        .stdout("{\"kind\":\"favorites\",\"movies\":[7]}\n");
}

#[test]
fn list_rejects_unknown_kind() {
    let temp = TempDir::new().unwrap();
    reel(&temp)
        .args(["list", "--kind", "later"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("later"));
}
