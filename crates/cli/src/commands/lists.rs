// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use serde::Serialize;

use reel_core::{ListKind, ListState, MovieId};

use crate::api::ListApi;
use crate::cli::OutputFormat;
use crate::display::{format_ids, format_review, format_state};
use crate::error::{Error, Result};
use crate::storage::LocalStorage;
use crate::sync::{ListStore, ToggleOutcome};

use super::Context;

pub async fn toggle(kind: ListKind, movie_id: MovieId) -> Result<()> {
    let ctx = Context::open()?;
    let mut store = ctx.store().await;
    toggle_impl(&mut store, kind, movie_id, &mut io::stdout()).await
}

pub(crate) async fn toggle_impl<A: ListApi, S: LocalStorage>(
    store: &mut ListStore<A, S>,
    kind: ListKind,
    movie_id: MovieId,
    out: &mut impl Write,
) -> Result<()> {
    match store.toggle_membership(kind, movie_id).await {
        ToggleOutcome::RolledBack => Err(Error::ToggleRolledBack { kind, movie_id }),
        ToggleOutcome::Local | ToggleOutcome::Confirmed | ToggleOutcome::Superseded => {
            if store.state().contains(kind, movie_id) {
                writeln!(out, "Added {} to {}", movie_id, kind)?;
            } else {
                writeln!(out, "Removed {} from {}", movie_id, kind)?;
            }
            Ok(())
        }
    }
}

pub async fn watched(movie_id: MovieId) -> Result<()> {
    let ctx = Context::open()?;
    let mut store = ctx.store().await;
    watched_impl(&mut store, movie_id, &mut io::stdout())
}

pub(crate) fn watched_impl<A: ListApi, S: LocalStorage>(
    store: &mut ListStore<A, S>,
    movie_id: MovieId,
    out: &mut impl Write,
) -> Result<()> {
    if store.is_authenticated() {
        return Err(Error::LocalOnly {
            action: "watched marks",
        });
    }
    if store.toggle_watched(movie_id) {
        writeln!(out, "Marked {} as watched", movie_id)?;
    } else {
        writeln!(out, "Marked {} as not watched", movie_id)?;
    }
    Ok(())
}

pub async fn review(movie_id: MovieId, rating: i64, text: &str) -> Result<()> {
    let ctx = Context::open()?;
    let mut store = ctx.store().await;
    review_impl(&mut store, movie_id, rating, text, &mut io::stdout())
}

pub(crate) fn review_impl<A: ListApi, S: LocalStorage>(
    store: &mut ListStore<A, S>,
    movie_id: MovieId,
    rating: i64,
    text: &str,
    out: &mut impl Write,
) -> Result<()> {
    if store.is_authenticated() {
        return Err(Error::LocalOnly { action: "reviews" });
    }
    store.add_review(movie_id, rating, text)?;
    if let Some(review) = store.state().review(movie_id) {
        writeln!(out, "Reviewed {}: {}", movie_id, format_review(review))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct KindListing {
    kind: ListKind,
    movies: Vec<MovieId>,
}

pub async fn list(kind: Option<ListKind>, output: OutputFormat) -> Result<()> {
    let ctx = Context::open()?;
    let store = ctx.store().await;
    list_impl(store.state(), kind, output, &mut io::stdout())
}

pub(crate) fn list_impl(
    state: &ListState,
    kind: Option<ListKind>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match output {
        OutputFormat::Text => {
            for line in format_state(state, kind) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Ids => {
            for line in format_ids(state, kind) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            let json = match kind {
                Some(kind) => serde_json::to_string(&KindListing {
                    kind,
                    movies: state.members(kind).iter().copied().collect(),
                })?,
                None => state.to_json()?,
            };
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "lists_tests.rs"]
mod tests;
