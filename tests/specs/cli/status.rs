// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `reel status`, `reel login` and `reel logout` without a server.

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
        .env_remove("REEL_LOG_FILE");
    cmd
}

#[test]
fn fresh_status_is_local_and_empty() {
    let temp = TempDir::new().unwrap();

    reel(&temp)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: local"))
        .stdout(predicate::str::contains("API: http://127.0.0.1:9/api"))
        .stdout(predicate::str::contains("Watchlist: 0"));
}

#[test]
fn status_json_counts_local_lists() {
    let temp = TempDir::new().unwrap();
    reel(&temp).args(["watchlist", "1"]).assert().success();
    reel(&temp).args(["watchlist", "2"]).assert().success();
    reel(&temp).args(["review", "2", "-r", "4"]).assert().success();

    let output = reel(&temp).args(["status", "-o", "json"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["mode"], "local");
    assert!(value.get("user").is_none());
    assert_eq!(value["watchlist"], 2);
    assert_eq!(value["favorites"], 0);
    assert_eq!(value["reviews"], 1);
}

#[test]
fn logout_without_session() {
    let temp = TempDir::new().unwrap();

    reel(&temp)
        .arg("logout")
        .assert()
        .success()
        .stdout("Not logged in\n");
}

#[test]
fn login_requires_password() {
    let temp = TempDir::new().unwrap();

    reel(&temp)
        .args(["login", "--email", "me@example.com"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("password required"));
}

#[test]
fn login_against_unreachable_server_fails_and_stays_local() {
    let temp = TempDir::new().unwrap();
    reel(&temp).args(["favorite", "3"]).assert().success();

    reel(&temp)
        .args(["login", "--email", "me@example.com"])
        .env("REEL_PASSWORD", "secret")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("login failed"));

    reel(&temp)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: local"))
        .stdout(predicate::str::contains("Favorites: 1"));
}

#[test]
fn log_file_receives_debug_output() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("reel.log");

    reel(&temp)
        .args(["login", "--email", "me@example.com", "--password", "x"])
        .env("REEL_LOG_FILE", &log)
        .env("RUST_LOG", "debug")
        .assert()
        .failure();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("opened context"));
}
