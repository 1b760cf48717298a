// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The in-memory aggregate of a user's movie lists.
//!
//! [`ListState`] serializes to the JSON document kept in local storage:
//!
//! ```text
//! {"watchlist":[1,2],"favorites":[],"watched":[3],"reviews":[{"movieId":3,"rating":4,"text":"good"}]}
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use crate::error::Result;
use crate::movie::{ListKind, MovieId, Review, MAX_RATING, MIN_RATING};

/// Watchlist, favorites, watched markers, and reviews for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    #[serde(default)]
    pub watchlist: BTreeSet<MovieId>,
    #[serde(default)]
    pub favorites: BTreeSet<MovieId>,
    #[serde(default)]
    pub watched: BTreeSet<MovieId>,
    /// Entries that fail to parse or carry a rating outside 1..=5 are
    /// dropped on load; the rest of the document is kept.
    #[serde(default, deserialize_with = "lenient_reviews")]
    pub reviews: Vec<Review>,
}

fn lenient_reviews<'de, D>(deserializer: D) -> std::result::Result<Vec<Review>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<serde_json::Value> = Vec::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| serde_json::from_value::<Review>(value).ok())
        .filter(|review| (MIN_RATING..=MAX_RATING).contains(&review.rating))
        .collect())
}

impl ListState {
    /// Parses a persisted state document.
    ///
    /// Duplicate ids collapse into the set fields. If several reviews share a
    /// movie id, the last one wins.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut state: ListState = serde_json::from_str(json)?;
        let mut seen = BTreeSet::new();
        let mut reviews = Vec::with_capacity(state.reviews.len());
        for review in state.reviews.into_iter().rev() {
            if seen.insert(review.movie_id) {
                reviews.push(review);
            }
        }
        reviews.reverse();
        state.reviews = reviews;
        Ok(state)
    }

    /// Serializes the state for local storage.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns the members of a mirrored list.
    pub fn members(&self, kind: ListKind) -> &BTreeSet<MovieId> {
        match kind {
            ListKind::Watchlist => &self.watchlist,
            ListKind::Favorites => &self.favorites,
        }
    }

    fn members_mut(&mut self, kind: ListKind) -> &mut BTreeSet<MovieId> {
        match kind {
            ListKind::Watchlist => &mut self.watchlist,
            ListKind::Favorites => &mut self.favorites,
        }
    }

    pub fn contains(&self, kind: ListKind, movie_id: MovieId) -> bool {
        self.members(kind).contains(&movie_id)
    }

    /// Sets membership of `movie_id` in `kind`. Returns true if anything changed.
    pub fn set_membership(&mut self, kind: ListKind, movie_id: MovieId, present: bool) -> bool {
        let members = self.members_mut(kind);
        if present {
            members.insert(movie_id)
        } else {
            members.remove(&movie_id)
        }
    }

    /// Replaces a whole list, as done when hydrating from the remote store.
    pub fn replace(&mut self, kind: ListKind, ids: impl IntoIterator<Item = MovieId>) {
        *self.members_mut(kind) = ids.into_iter().collect();
    }

    /// Flips the watched marker. Returns the new marker value.
    pub fn toggle_watched(&mut self, movie_id: MovieId) -> bool {
        if self.watched.remove(&movie_id) {
            false
        } else {
            self.watched.insert(movie_id);
            true
        }
    }

    /// Inserts a review, replacing any existing review for the same movie.
    pub fn upsert_review(&mut self, review: Review) {
        self.reviews.retain(|r| r.movie_id != review.movie_id);
        self.reviews.push(review);
    }

    pub fn review(&self, movie_id: MovieId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.movie_id == movie_id)
    }

    pub fn is_empty(&self) -> bool {
        self.watchlist.is_empty()
            && self.favorites.is_empty()
            && self.watched.is_empty()
            && self.reviews.is_empty()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
