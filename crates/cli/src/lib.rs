// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! reelrs - movie lists that live locally or sync with your account.
//!
//! This crate provides the functionality behind the `reel` CLI.
//!
//! # Main Components
//!
//! - [`ListStore`] - Single source of truth for watchlist, favorites, watched
//!   markers and reviews, with optimistic remote sync and rollback
//! - [`SessionProvider`] - Login, logout, token refresh and auth-change
//!   notifications
//! - [`storage`] - Durable key/value storage ([`SqliteStorage`])
//! - [`api`] - Remote list, auth and metadata collaborators
//! - [`Config`] - Client configuration
//!
//! # Usage
//!
//! ```rust,ignore
//! use reelrs::{HttpClient, ListStore, SessionProvider, SqliteStorage};
//!
//! let storage = SqliteStorage::open(&path)?;
//! let sessions = SessionProvider::new(&storage);
//! let mut store = ListStore::open(&client, &storage, sessions.current()).await;
//!
//! store.toggle_membership(ListKind::Watchlist, 550).await;
//! ```

mod cli;
mod commands;
mod display;
mod logging;

pub mod api;
pub mod config;
pub mod env;
pub mod error;
pub mod session;
pub mod storage;
pub mod sync;

pub use api::{ApiError, HttpClient};
pub use cli::{Cli, Command, ConfigCommand, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::setup_logging;
pub use session::SessionProvider;
pub use storage::{LocalStorage, SqliteStorage};
pub use sync::{ListStore, ToggleOutcome};

use clap::CommandFactory;
use clap_complete::generate;
use reel_core::ListKind;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match command {
        Command::Watchlist { id } => {
            runtime.block_on(commands::lists::toggle(ListKind::Watchlist, id))
        }
        Command::Favorite { id } => {
            runtime.block_on(commands::lists::toggle(ListKind::Favorites, id))
        }
        Command::Watched { id } => runtime.block_on(commands::lists::watched(id)),
        Command::Review { id, rating, text } => {
            runtime.block_on(commands::lists::review(id, rating, &text))
        }
        Command::List { kind, output } => runtime.block_on(commands::lists::list(kind, output)),
        Command::Show { id, output } => runtime.block_on(commands::discover::show(id, output)),
        Command::Search { query, output } => {
            runtime.block_on(commands::discover::search(&query, output))
        }
        Command::Popular { output } => runtime.block_on(commands::discover::popular(output)),
        Command::Login { email, password } => {
            runtime.block_on(commands::auth::login(&email, password))
        }
        Command::Logout => commands::auth::logout(),
        Command::Status { output } => runtime.block_on(commands::auth::status(output)),
        Command::Config(cmd) => commands::config::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "reel", &mut std::io::stdout());
            Ok(())
        }
    }
}
