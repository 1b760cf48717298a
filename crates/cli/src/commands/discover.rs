// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Metadata lookups annotated with the user's list membership.
//!
//! Metadata failures are reported to the user but never touch list state.

use std::io::{self, Write};

use serde::Serialize;

use reel_core::{ListState, Movie, MovieDetails, MovieId, Review};

use crate::api::MetadataApi;
use crate::cli::OutputFormat;
use crate::display::{format_movie_details, format_movie_line, Membership};
use crate::error::Result;

use super::Context;

#[derive(Serialize)]
struct ShowOutput<'a> {
    #[serde(flatten)]
    details: &'a MovieDetails,
    membership: Membership,
    #[serde(skip_serializing_if = "Option::is_none")]
    review: Option<&'a Review>,
}

#[derive(Serialize)]
struct MovieOutput<'a> {
    #[serde(flatten)]
    movie: &'a Movie,
    membership: Membership,
}

pub async fn show(movie_id: MovieId, output: OutputFormat) -> Result<()> {
    let ctx = Context::open()?;
    let store = ctx.store().await;
    show_impl(&ctx.client, store.state(), movie_id, output, &mut io::stdout()).await
}

pub(crate) async fn show_impl<M: MetadataApi + ?Sized>(
    metadata: &M,
    state: &ListState,
    movie_id: MovieId,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let details = metadata.details(movie_id).await?;
    let membership = Membership::of(state, movie_id);
    let review = state.review(movie_id);

    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string(&ShowOutput {
                details: &details,
                membership,
                review,
            })?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Ids => writeln!(out, "{}", details.movie.id)?,
        OutputFormat::Text => {
            for line in format_movie_details(&details, membership, review) {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}

pub async fn search(query: &str, output: OutputFormat) -> Result<()> {
    let ctx = Context::open()?;
    let store = ctx.store().await;
    let movies = ctx.client.search(query).await?;
    print_movies(&movies, store.state(), output, &mut io::stdout())
}

pub async fn popular(output: OutputFormat) -> Result<()> {
    let ctx = Context::open()?;
    let store = ctx.store().await;
    let movies = ctx.client.popular().await?;
    print_movies(&movies, store.state(), output, &mut io::stdout())
}

pub(crate) fn print_movies(
    movies: &[Movie],
    state: &ListState,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match output {
        OutputFormat::Json => {
            let rows: Vec<MovieOutput<'_>> = movies
                .iter()
                .map(|movie| MovieOutput {
                    movie,
                    membership: Membership::of(state, movie.id),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string(&rows)?)?;
        }
        OutputFormat::Ids => {
            for movie in movies {
                writeln!(out, "{}", movie.id)?;
            }
        }
        OutputFormat::Text => {
            if movies.is_empty() {
                writeln!(out, "No movies found")?;
            }
            for movie in movies {
                writeln!(out, "{}", format_movie_line(movie, Membership::of(state, movie.id)))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
