// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use crate::cli::ConfigCommand;
use crate::config::{config_path, Config};
use crate::error::{Error, Result};

pub fn run(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show(&Config::load_default()?, &mut io::stdout()),
        ConfigCommand::Path => path(&mut io::stdout()),
    }
}

/// Print the effective configuration, with derived URLs filled in.
pub(crate) fn show(config: &Config, out: &mut impl Write) -> Result<()> {
    let mut effective = config.clone();
    effective.api_url = config.api_base();
    effective.metadata_url = Some(config.metadata_base());
    if effective.data_dir.is_none() {
        effective.data_dir = config.resolve_data_dir().ok();
    }
    let content = toml::to_string_pretty(&effective)
        .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
    write!(out, "{}", content)?;
    Ok(())
}

pub(crate) fn path(out: &mut impl Write) -> Result<()> {
    let path = config_path()
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
