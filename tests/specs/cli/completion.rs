// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `reel completion`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

fn reel() -> Command {
    cargo_bin_cmd!("reel")
}

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = reel().args(["completion", shell]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("reel"));
    assert!(stdout.contains("watchlist"));
}

#[test]
fn completion_without_shell_shows_help() {
    let output = reel().arg("completion").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn completion_invalid_shell_fails() {
    reel().args(["completion", "tcsh"]).assert().failure();
}
