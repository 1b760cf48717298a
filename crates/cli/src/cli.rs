// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use reel_core::{parse_movie_id, ListKind, MovieId};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn movie_id(s: &str) -> Result<MovieId, String> {
    parse_movie_id(s).map_err(|e| e.to_string())
}

fn list_kind(s: &str) -> Result<ListKind, String> {
    s.parse().map_err(|e: reel_core::Error| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "id")]
    Ids,
}

const HELP_TEMPLATE: &str = "\
{about-with-newline}
{usage-heading} {usage}

Commands:
{subcommands}

Options:
{options}{after-help}";

#[derive(Parser)]
#[command(name = "reel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Keep a movie watchlist and favorites, locally or synced to your account")]
#[command(
    long_about = "Keep a movie watchlist and favorites, locally or synced to your account.\n\n\
    Without a login, lists are stored on this machine. After 'reel login', list changes are \
    applied immediately and mirrored to the server, and rolled back if the server rejects them."
)]
#[command(help_template = HELP_TEMPLATE)]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Lists
    // ─────────────────────────────────────────────────────────────────────────
    /// Add or remove a movie from the watchlist
    #[command(after_help = "\
Examples:
  reel watchlist 550      Toggle Fight Club on the watchlist")]
    Watchlist {
        /// Movie ID
        #[arg(value_parser = movie_id)]
        id: MovieId,
    },

    /// Add or remove a movie from favorites
    #[command(visible_alias = "fav")]
    Favorite {
        /// Movie ID
        #[arg(value_parser = movie_id)]
        id: MovieId,
    },

    /// Mark or unmark a movie as watched (stored locally)
    Watched {
        /// Movie ID
        #[arg(value_parser = movie_id)]
        id: MovieId,
    },

    /// Rate and review a movie, replacing any earlier review
    #[command(after_help = "\
Examples:
  reel review 550 --rating 5                 Rate only
  reel review 550 -r 4 -t \"Great twist\"      Rate with a comment")]
    Review {
        /// Movie ID
        #[arg(value_parser = movie_id)]
        id: MovieId,

        /// Rating from 1 to 5
        #[arg(long, short, allow_negative_numbers = true)]
        rating: i64,

        /// Review text
        #[arg(long, short, default_value = "")]
        text: String,
    },

    /// List watchlist, favorites, watched movies and reviews
    #[command(after_help = "\
Examples:
  reel list                    Show everything
  reel list --kind favorites   Show favorites only
  reel list -o ids             Output movie IDs only")]
    List {
        /// Only show one list (watchlist, favorites)
        #[arg(long, short, value_parser = list_kind)]
        kind: Option<ListKind>,

        /// Output format (text, json, ids)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Discovery
    // ─────────────────────────────────────────────────────────────────────────
    /// Show movie details and where it appears in your lists
    Show {
        /// Movie ID
        #[arg(value_parser = movie_id)]
        id: MovieId,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Search movies by title
    Search {
        /// Search query
        #[arg(value_parser = non_empty_string)]
        query: String,

        /// Output format (text, json, ids)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show popular movies
    Popular {
        /// Output format (text, json, ids)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Account & Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Log in and sync lists with your account
    #[command(after_help = "\
Examples:
  reel login --email me@example.com             Prompt-free login via REEL_PASSWORD
  reel login --email me@example.com -p secret   Pass the password explicitly

Lists stored locally before the first login are uploaded to the account.")]
    Login {
        /// Account email
        #[arg(long, short, value_parser = non_empty_string)]
        email: String,

        /// Account password (defaults to REEL_PASSWORD)
        #[arg(long, short)]
        password: Option<String>,
    },

    /// Log out; lists are read from local storage again
    Logout,

    /// Show storage mode, logged-in user, and list sizes
    Status {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
