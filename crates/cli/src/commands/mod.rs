// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod auth;
pub mod config;
pub mod discover;
pub mod lists;

use crate::api::HttpClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::SessionProvider;
use crate::storage::SqliteStorage;
use crate::sync::ListStore;

/// Local storage and the remote client, opened from configuration.
pub struct Context {
    pub storage: SqliteStorage,
    pub client: HttpClient,
}

impl Context {
    /// Loads configuration from its default location and opens storage.
    pub fn open() -> Result<Self> {
        Self::from_config(Config::load_default()?)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let db_path = config.db_path()?;
        let storage = SqliteStorage::open(&db_path)?;
        let client = HttpClient::new(
            &config.api_base(),
            &config.metadata_base(),
            config.request_timeout(),
        )?;
        tracing::debug!(db = %db_path.display(), api = client.api_base(), "opened context");
        Ok(Context { storage, client })
    }

    pub fn sessions(&self) -> SessionProvider<&SqliteStorage> {
        SessionProvider::new(&self.storage)
    }

    /// Opens and hydrates the list store for the stored session.
    pub async fn store(&self) -> ListStore<&HttpClient, &SqliteStorage> {
        let session = self.sessions().current();
        ListStore::open(&self.client, &self.storage, session).await
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
