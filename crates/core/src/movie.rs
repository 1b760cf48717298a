// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Movie identifiers, list kinds, and reviews.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// External movie identifier, as issued by the metadata provider.
pub type MovieId = u64;

/// Lowest accepted review rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted review rating.
pub const MAX_RATING: u8 = 5;

/// Parse a movie id from user input.
pub fn parse_movie_id(s: &str) -> Result<MovieId> {
    s.trim()
        .parse()
        .map_err(|_| Error::InvalidMovieId(s.to_string()))
}

/// A membership list that is mirrored to the remote list API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Movies the user intends to watch.
    Watchlist,
    /// Movies the user marked as favorite.
    Favorites,
}

impl ListKind {
    /// All mirrored kinds, in hydration order.
    pub const ALL: [ListKind; 2] = [ListKind::Watchlist, ListKind::Favorites];

    /// Returns the string used in URLs and request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Watchlist => "watchlist",
            ListKind::Favorites => "favorites",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "watchlist" => Ok(ListKind::Watchlist),
            "favorites" | "favorite" => Ok(ListKind::Favorites),
            _ => Err(Error::InvalidListKind(s.to_string())),
        }
    }
}

/// A user's rating and comment for one movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    pub rating: u8,
    pub text: String,
}

impl Review {
    /// Creates a review, rejecting ratings outside 1..=5.
    pub fn new(movie_id: MovieId, rating: i64, text: impl Into<String>) -> Result<Self> {
        let rating = u8::try_from(rating)
            .ok()
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .ok_or(Error::InvalidRating(rating))?;
        Ok(Review {
            movie_id,
            rating,
            text: text.into(),
        })
    }
}

#[cfg(test)]
#[path = "movie_tests.rs"]
mod tests;
