// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use reel_core::{ListKind, MovieId};

use crate::api::ApiError;
use crate::storage::StorageError;

/// All possible errors that can occur in the reelrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not logged in\n  hint: run 'reel login --email <address>' first")]
    NotLoggedIn,

    #[error("login failed: {0}")]
    LoginFailed(String),

    #[error("password required\n  hint: pass --password or set REEL_PASSWORD")]
    PasswordRequired,

    #[error("server rejected change to {kind} for movie {movie_id}; the change was rolled back\n  hint: run 'reel status' to check the connection")]
    ToggleRolledBack { kind: ListKind, movie_id: MovieId },

    #[error("{action} are only kept in local storage and are not saved while logged in\n  hint: run 'reel logout' to record them locally")]
    LocalOnly { action: &'static str },

    #[error("no data directory available\n  hint: set REEL_DATA_DIR or data_dir in the config file")]
    NoDataDir,

    #[error("{0}")]
    Core(#[from] reel_core::Error),

    #[error("api error: {0}")]
    Api(#[from] ApiError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for reelrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
