// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mock collaborators for store and session tests.

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use reel_core::protocol::{LoginResponse, RefreshResponse};
use reel_core::{ListEntry, ListKind, ListState, Movie, MovieDetails, MovieId, Session, User};

use super::{ApiError, ApiFuture, ApiResult, AuthApi, ListApi, MetadataApi};

/// A call observed by [`MockListApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCall {
    Fetch(u64, ListKind),
    Add(u64, MovieId, ListKind),
    Remove(u64, MovieId, ListKind),
    Migrate(u64, ListState),
}

/// In-memory list API that records calls and can be told to fail.
///
/// A successful migration merges the uploaded watchlist and favorites into
/// the remote lists.
#[derive(Clone, Default)]
pub struct MockListApi {
    lists: Arc<Mutex<HashMap<ListKind, Vec<MovieId>>>>,
    calls: Arc<Mutex<Vec<ListCall>>>,
    failing_fetches: Arc<Mutex<HashSet<ListKind>>>,
    fail_mutations: Arc<AtomicBool>,
    fail_migrate: Arc<AtomicBool>,
    gate: Option<Arc<Notify>>,
}

impl MockListApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutations wait for the returned notifier before answering.
    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let api = MockListApi {
            gate: Some(Arc::clone(&gate)),
            ..Self::default()
        };
        (api, gate)
    }

    pub fn with_list(self, kind: ListKind, ids: &[MovieId]) -> Self {
        self.lists.lock().unwrap().insert(kind, ids.to_vec());
        self
    }

    pub fn fail_fetch(&self, kind: ListKind) {
        self.failing_fetches.lock().unwrap().insert(kind);
    }

    pub fn set_fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_migrate(&self, fail: bool) {
        self.fail_migrate.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<ListCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Add and remove calls only.
    pub fn mutation_calls(&self) -> Vec<ListCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, ListCall::Add(..) | ListCall::Remove(..)))
            .collect()
    }

    pub fn migrations(&self) -> Vec<ListState> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ListCall::Migrate(_, state) => Some(state),
                _ => None,
            })
            .collect()
    }

    pub fn remote_list(&self, kind: ListKind) -> Vec<MovieId> {
        self.lists
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, call: ListCall) {
        self.calls.lock().unwrap().push(call);
    }

    async fn mutate(&self, kind: ListKind, movie_id: MovieId, add: bool) -> Result<(), ApiError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 500,
                body: "mock failure".into(),
            });
        }
        let mut lists = self.lists.lock().unwrap();
        let list = lists.entry(kind).or_default();
        list.retain(|id| *id != movie_id);
        if add {
            list.insert(0, movie_id);
        }
        Ok(())
    }
}

impl ListApi for MockListApi {
    fn fetch_list<'a>(
        &'a self,
        session: &'a Session,
        kind: ListKind,
    ) -> ApiFuture<'a, Vec<ListEntry>> {
        Box::pin(async move {
            self.record(ListCall::Fetch(session.user_id(), kind));
            if self.failing_fetches.lock().unwrap().contains(&kind) {
                return Err(ApiError::Transport("mock fetch failure".into()));
            }
            Ok(self
                .remote_list(kind)
                .into_iter()
                .map(|movie_id| ListEntry {
                    movie_id,
                    added_at: None,
                })
                .collect())
        })
    }

    fn add<'a>(
        &'a self,
        session: &'a Session,
        movie_id: MovieId,
        kind: ListKind,
    ) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            self.record(ListCall::Add(session.user_id(), movie_id, kind));
            self.mutate(kind, movie_id, true).await
        })
    }

    fn remove<'a>(
        &'a self,
        session: &'a Session,
        movie_id: MovieId,
        kind: ListKind,
    ) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            self.record(ListCall::Remove(session.user_id(), movie_id, kind));
            self.mutate(kind, movie_id, false).await
        })
    }

    fn migrate<'a>(&'a self, session: &'a Session, state: &'a ListState) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            self.record(ListCall::Migrate(session.user_id(), state.clone()));
            if self.fail_migrate.load(Ordering::SeqCst) {
                return Err(ApiError::Status {
                    status: 422,
                    body: "mock failure".into(),
                });
            }
            let mut lists = self.lists.lock().unwrap();
            for kind in ListKind::ALL {
                let list = lists.entry(kind).or_default();
                for id in state.members(kind) {
                    if !list.contains(id) {
                        list.push(*id);
                    }
                }
            }
            Ok(())
        })
    }
}

/// Auth API accepting a single email/password pair.
#[derive(Clone)]
pub struct MockAuthApi {
    user: User,
    password: String,
    refresh_ok: Arc<AtomicBool>,
    offline: Arc<AtomicBool>,
}

impl MockAuthApi {
    pub fn new(user: User, password: &str) -> Self {
        MockAuthApi {
            user,
            password: password.to_string(),
            refresh_ok: Arc::new(AtomicBool::new(true)),
            offline: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_refresh_ok(&self, ok: bool) {
        self.refresh_ok.store(ok, Ordering::SeqCst);
    }

    /// Makes every call fail as if the server were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> ApiResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(ApiError::Transport("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

impl AuthApi for MockAuthApi {
    fn login<'a>(&'a self, email: &'a str, password: &'a str) -> ApiFuture<'a, LoginResponse> {
        Box::pin(async move {
            self.check_online()?;
            if email != self.user.email || password != self.password {
                return Err(ApiError::Status {
                    status: 401,
                    body: r#"{"detail":"Invalid credentials"}"#.into(),
                });
            }
            Ok(LoginResponse {
                access_token: "access-1".into(),
                refresh_token: "refresh-1".into(),
                user: self.user.clone(),
            })
        })
    }

    fn refresh<'a>(&'a self, refresh_token: &'a str) -> ApiFuture<'a, RefreshResponse> {
        Box::pin(async move {
            self.check_online()?;
            if self.refresh_ok.load(Ordering::SeqCst) && refresh_token == "refresh-1" {
                Ok(RefreshResponse {
                    access_token: "access-2".into(),
                })
            } else {
                Err(ApiError::Status {
                    status: 401,
                    body: "expired".into(),
                })
            }
        })
    }
}

/// Metadata provider serving a fixed catalog.
#[derive(Clone, Default)]
pub struct MockMetadataApi {
    movies: Vec<Movie>,
}

impl MockMetadataApi {
    pub fn new(movies: Vec<Movie>) -> Self {
        MockMetadataApi { movies }
    }
}

impl MetadataApi for MockMetadataApi {
    fn details(&self, movie_id: MovieId) -> ApiFuture<'_, MovieDetails> {
        Box::pin(async move {
            self.movies
                .iter()
                .find(|m| m.id == movie_id)
                .map(|movie| MovieDetails {
                    movie: movie.clone(),
                    runtime: None,
                    genres: Vec::new(),
                })
                .ok_or_else(|| ApiError::Status {
                    status: 404,
                    body: "not found".into(),
                })
        })
    }

    fn search<'a>(&'a self, query: &'a str) -> ApiFuture<'a, Vec<Movie>> {
        Box::pin(async move {
            let query = query.to_lowercase();
            Ok(self
                .movies
                .iter()
                .filter(|m| m.title.to_lowercase().contains(&query))
                .cloned()
                .collect())
        })
    }

    fn popular(&self) -> ApiFuture<'_, Vec<Movie>> {
        Box::pin(async move { Ok(self.movies.clone()) })
    }
}

pub fn test_movie(id: MovieId, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: String::new(),
        poster_path: None,
        release_date: None,
        vote_average: None,
    }
}

pub fn test_user(id: u64) -> User {
    User {
        id,
        email: format!("user{}@example.com", id),
        display_name: Some(format!("User {}", id)),
    }
}

pub fn test_session(id: u64) -> Session {
    Session::new(test_user(id), "token")
}
