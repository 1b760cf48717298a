// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The list-sync store.
//!
//! Owns the user's [`ListState`] and picks its backing store from the
//! injected session:
//! - No session: state is loaded from and written to local storage
//! - Session: watchlist and favorites are hydrated from, and mirrored to,
//!   the remote list API; local storage is left alone
//!
//! Remote failures never escape the store. A failed hydration leaves the
//! affected list unchanged and a failed toggle is rolled back.

use tokio::sync::watch;

use reel_core::{ListKind, ListState, MovieId, MutationLog, PendingMutation, Review, Session, Settled};

use crate::api::ListApi;
use crate::storage::{LocalStorage, LIST_STATE_KEY};

/// How a membership toggle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Anonymous mode; the change is final.
    Local,
    /// The remote accepted the change.
    Confirmed,
    /// The remote call failed and the old membership was restored.
    RolledBack,
    /// A newer toggle on the same movie owns the key; nothing was reverted.
    Superseded,
}

impl From<Settled> for ToggleOutcome {
    fn from(settled: Settled) -> Self {
        match settled {
            Settled::Confirmed => ToggleOutcome::Confirmed,
            Settled::RolledBack => ToggleOutcome::RolledBack,
            Settled::Superseded => ToggleOutcome::Superseded,
        }
    }
}

/// Single source of truth for a user's movie lists.
pub struct ListStore<A: ListApi, S: LocalStorage> {
    api: A,
    storage: S,
    session: Option<Session>,
    state: ListState,
    log: MutationLog,
    updates: watch::Sender<ListState>,
}

impl<A: ListApi, S: LocalStorage> ListStore<A, S> {
    /// Creates a store with empty state. Call [`hydrate`](Self::hydrate)
    /// (or use [`open`](Self::open)) to load data.
    pub fn new(api: A, storage: S, session: Option<Session>) -> Self {
        let (updates, _) = watch::channel(ListState::default());
        ListStore {
            api,
            storage,
            session,
            state: ListState::default(),
            log: MutationLog::new(),
            updates,
        }
    }

    /// Creates a store and runs the initialization branch for `session`.
    pub async fn open(api: A, storage: S, session: Option<Session>) -> Self {
        let mut store = Self::new(api, storage, session);
        store.hydrate().await;
        store
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Receives a snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.updates.subscribe()
    }

    /// Number of toggles applied locally but not yet settled.
    pub fn in_flight(&self) -> usize {
        self.log.in_flight()
    }

    /// Loads state from the backing store selected by the current session.
    pub async fn hydrate(&mut self) {
        self.log.invalidate_all();

        let Some(session) = self.session.clone() else {
            self.state = self.load_local();
            tracing::debug!("hydrated list state from local storage");
            self.publish();
            return;
        };

        for kind in ListKind::ALL {
            match self.api.fetch_list(&session, kind).await {
                Ok(entries) => {
                    tracing::debug!(%kind, count = entries.len(), "hydrated list from remote");
                    self.state.replace(kind, entries.into_iter().map(|e| e.movie_id));
                }
                Err(e) => {
                    tracing::warn!(%kind, user_id = session.user_id(), "failed to fetch list: {}", e);
                }
            }
        }
        self.publish();
    }

    /// Applies an auth transition.
    ///
    /// Re-hydrates when the user changes (login, logout, or switching
    /// accounts). A new token for the same user only replaces the session.
    pub async fn set_session(&mut self, session: Option<Session>) {
        let same_user = self.session.as_ref().map(Session::user_id)
            == session.as_ref().map(Session::user_id);
        self.session = session;
        if !same_user {
            self.hydrate().await;
        }
    }

    /// Waits for the next auth notification and applies it.
    ///
    /// Returns `false` once the session provider has gone away.
    pub async fn follow_session(&mut self, auth: &mut watch::Receiver<Option<Session>>) -> bool {
        if auth.changed().await.is_err() {
            return false;
        }
        let session = auth.borrow_and_update().clone();
        self.set_session(session).await;
        true
    }

    /// Apply phase of a toggle: flips membership locally and returns the
    /// pending mutation to settle later.
    pub fn begin_toggle(&mut self, kind: ListKind, movie_id: MovieId) -> PendingMutation {
        let pending = self.log.apply(&mut self.state, kind, movie_id);
        self.changed();
        pending
    }

    /// Settles a toggle the remote accepted.
    pub fn confirm(&mut self, pending: &PendingMutation) -> ToggleOutcome {
        self.log.confirm(pending).into()
    }

    /// Settles a toggle the remote rejected.
    pub fn reject(&mut self, pending: &PendingMutation) -> ToggleOutcome {
        let settled = self.log.reject(&mut self.state, pending);
        if settled == Settled::RolledBack {
            self.changed();
        }
        settled.into()
    }

    /// Toggles `movie_id` in `kind`, mirroring the change remotely when a
    /// session is present.
    pub async fn toggle_membership(&mut self, kind: ListKind, movie_id: MovieId) -> ToggleOutcome {
        let pending = self.begin_toggle(kind, movie_id);

        let Some(session) = self.session.clone() else {
            self.log.confirm(&pending);
            return ToggleOutcome::Local;
        };

        let result = if pending.is_present() {
            self.api.add(&session, movie_id, kind).await
        } else {
            self.api.remove(&session, movie_id, kind).await
        };

        match result {
            Ok(()) => self.confirm(&pending),
            Err(e) => {
                let outcome = self.reject(&pending);
                tracing::warn!(%kind, movie_id, ?outcome, "remote toggle failed: {}", e);
                outcome
            }
        }
    }

    /// Flips the watched marker. Local only.
    pub fn toggle_watched(&mut self, movie_id: MovieId) -> bool {
        let watched = self.state.toggle_watched(movie_id);
        self.changed();
        watched
    }

    /// Adds or replaces the review for `movie_id`. Local only.
    pub fn add_review(
        &mut self,
        movie_id: MovieId,
        rating: i64,
        text: impl Into<String>,
    ) -> reel_core::Result<()> {
        let review = Review::new(movie_id, rating, text)?;
        self.state.upsert_review(review);
        self.changed();
        Ok(())
    }

    fn load_local(&self) -> ListState {
        match self.storage.get(LIST_STATE_KEY) {
            Ok(Some(json)) => ListState::from_json(&json).unwrap_or_else(|e| {
                tracing::warn!("ignoring unreadable local list state: {}", e);
                ListState::default()
            }),
            Ok(None) => ListState::default(),
            Err(e) => {
                tracing::warn!("failed to read local storage: {}", e);
                ListState::default()
            }
        }
    }

    fn changed(&mut self) {
        self.persist();
        self.publish();
    }

    /// Writes the whole state to local storage in anonymous mode.
    fn persist(&self) {
        if self.session.is_some() {
            return;
        }
        let result = self
            .state
            .to_json()
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .set(LIST_STATE_KEY, &json)
                    .map_err(|e| e.to_string())
            });
        if let Err(e) = result {
            tracing::warn!("failed to persist list state: {}", e);
        }
    }

    fn publish(&self) {
        self.updates.send_replace(self.state.clone());
    }
}
