// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Two-phase optimistic mutations with version-stamped rollback.
//!
//! A membership toggle is applied to [`ListState`] immediately
//! ([`MutationLog::apply`]) and later settled with either
//! [`MutationLog::confirm`] or [`MutationLog::reject`].
//!
//! Every applied mutation is stamped with a value from a single monotonic
//! counter, and the log remembers the newest stamp per `(kind, movie)` key.
//! A rejection only restores the pre-mutation membership while its stamp is
//! still the newest for that key; once a later toggle on the same key has been
//! applied, the older rejection is reported as [`Settled::Superseded`] and the
//! state is left alone.

use std::collections::HashMap;

use crate::movie::{ListKind, MovieId};
use crate::state::ListState;

/// An applied but not yet settled membership toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMutation {
    pub kind: ListKind,
    pub movie_id: MovieId,
    /// Membership before the toggle was applied.
    pub was_present: bool,
    stamp: u64,
}

impl PendingMutation {
    /// Membership after the toggle was applied.
    pub fn is_present(&self) -> bool {
        !self.was_present
    }
}

/// How a pending mutation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// The remote accepted the change; local state already matches.
    Confirmed,
    /// The remote rejected the change and the old membership was restored.
    RolledBack,
    /// A newer mutation on the same key was applied first; nothing changed.
    Superseded,
}

/// Tracks the newest stamp per key so stale settlements can be detected.
#[derive(Debug, Default)]
pub struct MutationLog {
    next_stamp: u64,
    newest: HashMap<(ListKind, MovieId), u64>,
}

impl MutationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the inverse membership of `movie_id` in `kind` to `state`.
    pub fn apply(&mut self, state: &mut ListState, kind: ListKind, movie_id: MovieId) -> PendingMutation {
        let was_present = state.contains(kind, movie_id);
        state.set_membership(kind, movie_id, !was_present);

        self.next_stamp += 1;
        let stamp = self.next_stamp;
        self.newest.insert((kind, movie_id), stamp);

        PendingMutation {
            kind,
            movie_id,
            was_present,
            stamp,
        }
    }

    /// Returns true if no later mutation on the same key has been applied.
    fn is_current(&self, pending: &PendingMutation) -> bool {
        self.newest.get(&(pending.kind, pending.movie_id)) == Some(&pending.stamp)
    }

    /// Settles a mutation the remote accepted.
    pub fn confirm(&mut self, pending: &PendingMutation) -> Settled {
        if self.settle(pending) {
            Settled::Confirmed
        } else {
            Settled::Superseded
        }
    }

    /// Settles a mutation the remote rejected, restoring the old membership.
    pub fn reject(&mut self, state: &mut ListState, pending: &PendingMutation) -> Settled {
        if !self.settle(pending) {
            return Settled::Superseded;
        }
        state.set_membership(pending.kind, pending.movie_id, pending.was_present);
        Settled::RolledBack
    }

    /// Number of keys with an unsettled mutation.
    pub fn in_flight(&self) -> usize {
        self.newest.len()
    }

    /// Forgets every pending mutation, e.g. after the state was re-hydrated.
    ///
    /// Settling a forgotten mutation afterwards reports `Superseded`.
    pub fn invalidate_all(&mut self) {
        self.newest.clear();
    }

    fn settle(&mut self, pending: &PendingMutation) -> bool {
        if self.is_current(pending) {
            self.newest.remove(&(pending.kind, pending.movie_id));
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "mutation_tests.rs"]
mod tests;
