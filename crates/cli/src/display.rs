// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use reel_core::{ListKind, ListState, Movie, MovieDetails, MovieId, Review};

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 76;

/// Where a movie appears in the user's lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Membership {
    pub watchlist: bool,
    pub favorite: bool,
    pub watched: bool,
}

impl Membership {
    pub fn of(state: &ListState, movie_id: MovieId) -> Self {
        Membership {
            watchlist: state.contains(ListKind::Watchlist, movie_id),
            favorite: state.contains(ListKind::Favorites, movie_id),
            watched: state.watched.contains(&movie_id),
        }
    }

    /// Three-column flag marker, e.g. `[w-x]`.
    pub fn marker(&self) -> String {
        format!(
            "[{}{}{}]",
            if self.watchlist { 'w' } else { '-' },
            if self.favorite { 'f' } else { '-' },
            if self.watched { 'x' } else { '-' },
        )
    }
}

/// Wrap text at word boundaries if it's a single line.
///
/// Multi-line content is returned as-is to preserve user formatting.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

fn indented(content: &str) -> Vec<String> {
    wrap_text(content, WRAP_WIDTH)
        .lines()
        .map(|line| format!("    {}", line))
        .collect()
}

fn year(release_date: Option<&str>) -> Option<&str> {
    release_date
        .and_then(|d| d.get(..4))
        .filter(|y| y.chars().all(|c| c.is_ascii_digit()))
}

/// Format a review as `★★★★☆ text`.
pub fn format_review(review: &Review) -> String {
    let filled = usize::from(review.rating);
    let stars = format!("{}{}", "★".repeat(filled), "☆".repeat(5usize.saturating_sub(filled)));
    if review.text.is_empty() {
        stars
    } else {
        format!("{} {}", stars, review.text)
    }
}

/// Format the hydrated state, optionally restricted to one list.
///
/// Output format:
/// ```text
/// Watchlist (2):
///   550
///   680
/// ```
pub fn format_state(state: &ListState, kind: Option<ListKind>) -> Vec<String> {
    let mut lines = Vec::new();
    let kinds: &[ListKind] = match kind {
        Some(ref k) => std::slice::from_ref(k),
        None => &ListKind::ALL,
    };

    for kind in kinds {
        let members = state.members(*kind);
        let title = match kind {
            ListKind::Watchlist => "Watchlist",
            ListKind::Favorites => "Favorites",
        };
        lines.push(format!("{} ({}):", title, members.len()));
        lines.extend(members.iter().map(|id| format!("  {}", id)));
    }

    if kind.is_none() {
        lines.push(format!("Watched ({}):", state.watched.len()));
        lines.extend(state.watched.iter().map(|id| format!("  {}", id)));
        lines.push(format!("Reviews ({}):", state.reviews.len()));
        for review in &state.reviews {
            lines.push(format!("  {} {}", review.movie_id, format_review(review)));
        }
    }

    lines
}

/// One id per line: the selected list, or every id referenced by the state.
pub fn format_ids(state: &ListState, kind: Option<ListKind>) -> Vec<String> {
    let ids: std::collections::BTreeSet<MovieId> = match kind {
        Some(kind) => state.members(kind).clone(),
        None => state
            .watchlist
            .iter()
            .chain(&state.favorites)
            .chain(&state.watched)
            .copied()
            .chain(state.reviews.iter().map(|r| r.movie_id))
            .collect(),
    };
    ids.iter().map(|id| id.to_string()).collect()
}

/// Format a single movie line: `[w--] 550  Fight Club (1999)`.
pub fn format_movie_line(movie: &Movie, membership: Membership) -> String {
    match year(movie.release_date.as_deref()) {
        Some(year) => format!("{} {}  {} ({})", membership.marker(), movie.id, movie.title, year),
        None => format!("{} {}  {}", membership.marker(), movie.id, movie.title),
    }
}

/// Format full movie details with list flags and the user's review.
pub fn format_movie_details(
    details: &MovieDetails,
    membership: Membership,
    review: Option<&Review>,
) -> Vec<String> {
    let movie = &details.movie;
    let mut lines = vec![format_movie_line(movie, membership)];

    let mut facts = Vec::new();
    if let Some(runtime) = details.runtime {
        facts.push(format!("{} min", runtime));
    }
    if let Some(vote) = movie.vote_average {
        facts.push(format!("rated {:.1}/10", vote));
    }
    if !details.genres.is_empty() {
        let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
        facts.push(genres.join(", "));
    }
    if !facts.is_empty() {
        lines.push(format!("  {}", facts.join(" · ")));
    }

    if !movie.overview.is_empty() {
        lines.push(String::new());
        lines.push("Overview:".to_string());
        lines.extend(indented(&movie.overview));
    }

    if let Some(review) = review {
        lines.push(String::new());
        lines.push("Your review:".to_string());
        lines.extend(indented(&format_review(review)));
    }

    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
