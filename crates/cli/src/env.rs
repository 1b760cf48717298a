// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `REEL_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    non_empty(vars::REEL_CONFIG).map(PathBuf::from)
}

/// Returns the value of `REEL_DATA_DIR` if set.
pub fn data_dir() -> Option<PathBuf> {
    non_empty(vars::REEL_DATA_DIR).map(PathBuf::from)
}

/// Returns the value of `REEL_API_URL` if set.
pub fn api_url() -> Option<String> {
    non_empty(vars::REEL_API_URL)
}

/// Returns the value of `REEL_PASSWORD` if set.
pub fn password() -> Option<String> {
    non_empty(vars::REEL_PASSWORD)
}

/// Returns the value of `REEL_LOG_FILE` if set.
pub fn log_file() -> Option<PathBuf> {
    non_empty(vars::REEL_LOG_FILE).map(PathBuf::from)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
