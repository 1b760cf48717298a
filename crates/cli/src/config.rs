// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration management.
//!
//! Configuration is stored in `<config_dir>/reel/config.toml` (or the file
//! named by `REEL_CONFIG`) and includes:
//! - `api_url`: Base URL of the list/auth API (normalized to end in `/api`)
//! - `metadata_url`: Base URL of the movie metadata proxy
//! - `request_timeout_secs`: Timeout applied to every remote call
//! - `data_dir`: Where local storage lives
//!
//! A missing file means defaults; `REEL_API_URL` and `REEL_DATA_DIR`
//! override the corresponding fields.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::normalize_api_base;
use crate::env;
use crate::error::{Error, Result};
use crate::storage::DB_FILE_NAME;

const APP_DIR_NAME: &str = "reel";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the list and auth API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Base URL of the metadata proxy (default: `<api>/tmdb`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_url: Option<String>,
    /// Timeout for each remote call in seconds (default: 10).
    /// An expired request counts as a failure and rolls back the toggle.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Directory holding local storage (default: `<data_dir>/reel`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_api_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            metadata_url: None,
            request_timeout_secs: default_request_timeout_secs(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Loads configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if config.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(config)
    }

    /// Loads the configuration from its default location and applies
    /// environment overrides.
    pub fn load_default() -> Result<Self> {
        let config = match config_path() {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };
        Ok(config.with_overrides(env::api_url(), env::data_dir()))
    }

    /// Replaces fields with explicitly provided values.
    pub fn with_overrides(mut self, api_url: Option<String>, data_dir: Option<PathBuf>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(dir) = data_dir {
            self.data_dir = Some(dir);
        }
        self
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The normalized API base URL.
    pub fn api_base(&self) -> String {
        normalize_api_base(&self.api_url)
    }

    /// The metadata proxy base URL.
    pub fn metadata_base(&self) -> String {
        match &self.metadata_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("{}/tmdb", self.api_base()),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The directory holding local storage.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .ok_or(Error::NoDataDir)
    }

    /// Path of the local storage database.
    pub fn db_path(&self) -> Result<PathBuf> {
        Ok(self.resolve_data_dir()?.join(DB_FILE_NAME))
    }
}

/// Path of the config file: `REEL_CONFIG` or `<config_dir>/reel/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    env::config_path().or_else(|| {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
