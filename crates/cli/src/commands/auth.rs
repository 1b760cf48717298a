// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use serde::Serialize;

use reel_core::{ListState, User};

use crate::api::{AuthApi, ListApi};
use crate::cli::OutputFormat;
use crate::env;
use crate::error::{Error, Result};
use crate::session::SessionProvider;
use crate::storage::LocalStorage;
use crate::sync::ListStore;

use super::Context;

pub async fn login(email: &str, password: Option<String>) -> Result<()> {
    let password = password.or_else(env::password).ok_or(Error::PasswordRequired)?;
    let ctx = Context::open()?;
    let sessions = ctx.sessions();
    login_impl(&sessions, &ctx.client, &ctx.client, email, &password, &mut io::stdout()).await
}

pub(crate) async fn login_impl<S, Au, L>(
    sessions: &SessionProvider<S>,
    auth: &Au,
    lists: &L,
    email: &str,
    password: &str,
    out: &mut impl Write,
) -> Result<()>
where
    S: LocalStorage,
    Au: AuthApi + ?Sized,
    L: ListApi + ?Sized,
{
    let session = sessions.login(auth, lists, email, password).await?;
    writeln!(out, "Logged in as {}", session.user.label())?;
    Ok(())
}

pub fn logout() -> Result<()> {
    let ctx = Context::open()?;
    logout_impl(&ctx.sessions(), &mut io::stdout())
}

pub(crate) fn logout_impl<S: LocalStorage>(
    sessions: &SessionProvider<S>,
    out: &mut impl Write,
) -> Result<()> {
    if sessions.current().is_none() {
        writeln!(out, "Not logged in")?;
        return Ok(());
    }
    sessions.logout()?;
    writeln!(out, "Logged out; lists are stored locally again")?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusReport {
    mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<User>,
    api_url: String,
    watchlist: usize,
    favorites: usize,
    watched: usize,
    reviews: usize,
}

impl StatusReport {
    fn new(user: Option<User>, api_url: String, state: &ListState) -> Self {
        StatusReport {
            mode: if user.is_some() { "remote" } else { "local" },
            user,
            api_url,
            watchlist: state.watchlist.len(),
            favorites: state.favorites.len(),
            watched: state.watched.len(),
            reviews: state.reviews.len(),
        }
    }
}

pub async fn status(output: OutputFormat) -> Result<()> {
    let ctx = Context::open()?;
    let sessions = ctx.sessions();
    status_impl(
        &sessions,
        &ctx.client,
        &ctx.client,
        &ctx.storage,
        ctx.client.api_base(),
        output,
        &mut io::stdout(),
    )
    .await
}

/// Refreshes the stored session token, then reports the hydrated state. A
/// rejected token logs out; an unreachable server keeps the session.
pub(crate) async fn status_impl<S, Au, A, LS>(
    sessions: &SessionProvider<S>,
    auth: &Au,
    lists: A,
    storage: LS,
    api_url: &str,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()>
where
    S: LocalStorage,
    Au: AuthApi + ?Sized,
    A: ListApi,
    LS: LocalStorage,
{
    let expired = sessions.current().is_some() && !sessions.refresh(auth).await?;
    let store = ListStore::open(lists, storage, sessions.current()).await;

    let user = store.session().map(|s| s.user.clone());
    let report = StatusReport::new(user, api_url.to_string(), store.state());

    match output {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
        OutputFormat::Text | OutputFormat::Ids => {
            if expired {
                writeln!(out, "Session expired; logged out")?;
            }
            match &report.user {
                Some(user) => writeln!(out, "Mode: remote (logged in as {})", user.label())?,
                None => writeln!(out, "Mode: local")?,
            }
            writeln!(out, "API: {}", report.api_url)?;
            writeln!(out, "Watchlist: {}", report.watchlist)?;
            writeln!(out, "Favorites: {}", report.favorites)?;
            writeln!(out, "Watched: {}", report.watched)?;
            writeln!(out, "Reviews: {}", report.reviews)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
