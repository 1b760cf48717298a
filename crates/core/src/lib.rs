// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! reel-core: Shared library for the reel movie-list client
//!
//! This crate provides the data model, the optimistic mutation log, and the
//! wire types used by the reel store and CLI. It performs no I/O.

pub mod error;
pub mod movie;
pub mod mutation;
pub mod protocol;
pub mod session;
pub mod state;

pub use error::{Error, Result};
pub use movie::{parse_movie_id, ListKind, MovieId, Review};
pub use mutation::{MutationLog, PendingMutation, Settled};
pub use protocol::{ListEntry, Movie, MovieDetails, User};
pub use session::Session;
pub use state::ListState;
