// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! List synchronization between local storage and the remote list API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  ListStore  │────►│  ListApi    │────►│   Remote    │
//! │  (state)    │◄────│  (trait)    │◄────│   Server    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ LocalStorage│  (anonymous mode only)
//! └─────────────┘
//! ```
//!
//! # Features
//!
//! - Anonymous mode: state lives in local storage under a fixed key
//! - Authenticated mode: watchlist and favorites mirror the remote list API
//! - Optimistic toggles with version-stamped rollback on remote failure
//! - Re-hydration on every auth transition
//! - Injectable API and storage for testing

mod store;

pub use store::{ListStore, ToggleOutcome};
