// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for reel-core operations.

use thiserror::Error;

/// All possible errors that can occur in reel-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid list kind: '{0}'\n  hint: valid kinds are: watchlist, favorites")]
    InvalidListKind(String),

    #[error("invalid rating: {0}\n  hint: ratings range from 1 to 5")]
    InvalidRating(i64),

    #[error("invalid movie id: '{0}'\n  hint: movie ids are positive integers")]
    InvalidMovieId(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for reel-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
