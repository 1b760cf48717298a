// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `reel review`.

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

fn reviews(temp: &TempDir) -> serde_json::Value {
    let output = reel(temp).args(["list", "-o", "json"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    value["reviews"].clone()
}

#[test]
fn review_is_stored() {
    let temp = TempDir::new().unwrap();

    reel(&temp)
        .args(["review", "550", "--rating", "5", "--text", "Rule one"])
        .assert()
        .success()
        .stdout("Reviewed 550: ★★★★★ Rule one\n");

    assert_eq!(
        reviews(&temp),
        serde_json::json!([{"movieId": 550, "rating": 5, "text": "Rule one"}])
    );
}

#[test]
fn second_review_replaces_first() {
    let temp = TempDir::new().unwrap();
    reel(&temp).args(["review", "1", "-r", "2", "-t", "meh"]).assert().success();
    reel(&temp).args(["review", "2", "-r", "4"]).assert().success();
    reel(&temp).args(["review", "1", "-r", "5", "-t", "grew on me"]).assert().success();

    let reviews = reviews(&temp);
    let reviews = reviews.as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["movieId"], 2);
    assert_eq!(reviews[1]["movieId"], 1);
    assert_eq!(reviews[1]["rating"], 5);
    assert_eq!(reviews[1]["text"], "grew on me");
}

#[yare::parameterized(
    zero = { "0" },
    six = { "6" },
    negative = { "-2" },
)]
fn out_of_range_rating_fails(rating: &str) {
    let temp = TempDir::new().unwrap();

    reel(&temp)
        .args(["review", "550", "--rating", rating])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error:"))
        .stderr(predicate::str::contains("1 to 5"));

    assert_eq!(reviews(&temp), serde_json::json!([]));
}

#[test]
fn review_shows_in_text_list() {
    let temp = TempDir::new().unwrap();
    reel(&temp).args(["review", "13", "-r", "3", "-t", "ok"]).assert().success();

    reel(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reviews (1):\n  13 ★★★☆☆ ok"));
}
