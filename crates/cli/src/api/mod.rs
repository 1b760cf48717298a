// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote collaborators of the list store.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  ListStore  │────►│  ListApi    │────►│  list API   │
//! │             │     │  (trait)    │     │  server     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲
//!        │ Session
//! ┌─────────────┐     ┌─────────────┐
//! │  Session    │────►│  AuthApi    │
//! │  Provider   │     │  (trait)    │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! The traits keep the store testable with mock collaborators;
//! [`HttpClient`] implements all three over HTTP.

mod http;

pub use http::{normalize_api_base, HttpClient};

use std::future::Future;
use std::pin::Pin;

use reel_core::protocol::{LoginResponse, Movie, MovieDetails, RefreshResponse};
use reel_core::{ListEntry, ListKind, ListState, MovieId, Session};

/// Error type for remote calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect failure, reset, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// True when the server refused the credentials.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

/// Result type for remote calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Boxed future returned by the collaborator traits.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = ApiResult<T>> + Send + 'a>>;

/// Per-user list memberships on the remote store.
pub trait ListApi {
    /// Fetches every member of `kind` for the session's user.
    fn fetch_list<'a>(&'a self, session: &'a Session, kind: ListKind)
        -> ApiFuture<'a, Vec<ListEntry>>;

    /// Adds `movie_id` to `kind`.
    fn add<'a>(&'a self, session: &'a Session, movie_id: MovieId, kind: ListKind)
        -> ApiFuture<'a, ()>;

    /// Removes `movie_id` from `kind`.
    fn remove<'a>(&'a self, session: &'a Session, movie_id: MovieId, kind: ListKind)
        -> ApiFuture<'a, ()>;

    /// Uploads anonymous local data into the user's account.
    fn migrate<'a>(&'a self, session: &'a Session, state: &'a ListState) -> ApiFuture<'a, ()>;
}

impl<T: ListApi + ?Sized> ListApi for &T {
    fn fetch_list<'a>(&'a self, session: &'a Session, kind: ListKind)
        -> ApiFuture<'a, Vec<ListEntry>> {
        (**self).fetch_list(session, kind)
    }

    fn add<'a>(&'a self, session: &'a Session, movie_id: MovieId, kind: ListKind)
        -> ApiFuture<'a, ()> {
        (**self).add(session, movie_id, kind)
    }

    fn remove<'a>(&'a self, session: &'a Session, movie_id: MovieId, kind: ListKind)
        -> ApiFuture<'a, ()> {
        (**self).remove(session, movie_id, kind)
    }

    fn migrate<'a>(&'a self, session: &'a Session, state: &'a ListState) -> ApiFuture<'a, ()> {
        (**self).migrate(session, state)
    }
}

/// Credential exchange with the auth endpoints.
pub trait AuthApi {
    fn login<'a>(&'a self, email: &'a str, password: &'a str) -> ApiFuture<'a, LoginResponse>;

    fn refresh<'a>(&'a self, refresh_token: &'a str) -> ApiFuture<'a, RefreshResponse>;
}

/// Display metadata for movies. Never consulted for list correctness.
pub trait MetadataApi {
    fn details(&self, movie_id: MovieId) -> ApiFuture<'_, MovieDetails>;

    fn search<'a>(&'a self, query: &'a str) -> ApiFuture<'a, Vec<Movie>>;

    fn popular(&self) -> ApiFuture<'_, Vec<Movie>>;
}

#[cfg(test)]
pub(crate) mod test_helpers;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
