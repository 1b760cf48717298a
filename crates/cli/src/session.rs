// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session provider: credentials in local storage plus auth-change
//! notifications.
//!
//! The logged-in user and tokens live under [`USER_KEY`],
//! [`ACCESS_TOKEN_KEY`] and [`REFRESH_TOKEN_KEY`]. Every login, logout or
//! token refresh is published on a [`watch`] channel so a
//! [`ListStore`](crate::sync::ListStore) can follow it.

use tokio::sync::watch;

use reel_core::{ListState, Session, User};

use crate::api::{AuthApi, ListApi};
use crate::error::{Error, Result};
use crate::storage::{
    LocalStorage, ACCESS_TOKEN_KEY, LIST_STATE_KEY, REFRESH_TOKEN_KEY, USER_KEY,
};

const SESSION_KEYS: [&str; 3] = [USER_KEY, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY];

pub struct SessionProvider<S: LocalStorage> {
    storage: S,
    updates: watch::Sender<Option<Session>>,
}

impl<S: LocalStorage> SessionProvider<S> {
    /// Restores the stored session, if any.
    pub fn new(storage: S) -> Self {
        let current = load_session(&storage);
        let (updates, _) = watch::channel(current);
        SessionProvider { storage, updates }
    }

    pub fn current(&self) -> Option<Session> {
        self.updates.borrow().clone()
    }

    /// Notified on every auth change.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.updates.subscribe()
    }

    /// Logs in and, if anonymous data exists locally, uploads it to the
    /// new account before announcing the session.
    pub async fn login<Au, L>(
        &self,
        auth: &Au,
        lists: &L,
        email: &str,
        password: &str,
    ) -> Result<Session>
    where
        Au: AuthApi + ?Sized,
        L: ListApi + ?Sized,
    {
        let response = auth
            .login(email, password)
            .await
            .map_err(|e| Error::LoginFailed(e.to_string()))?;

        let session = Session {
            user: response.user,
            auth_token: response.access_token,
            refresh_token: Some(response.refresh_token),
        };
        self.save(&session)?;
        tracing::debug!(user_id = session.user_id(), "logged in");

        self.migrate_local_data(lists, &session).await;
        self.updates.send_replace(Some(session.clone()));
        Ok(session)
    }

    /// Clears the stored session. Local list data is kept.
    pub fn logout(&self) -> Result<()> {
        clear_session(&self.storage)?;
        self.updates.send_replace(None);
        Ok(())
    }

    /// Exchanges the refresh token for a new access token.
    ///
    /// Returns whether a session remains afterwards. Only a rejected token
    /// (401 or 403) logs out; an unreachable server or a session without a
    /// refresh token keeps the stored session as is.
    pub async fn refresh<Au: AuthApi + ?Sized>(&self, auth: &Au) -> Result<bool> {
        let Some(mut session) = self.current() else {
            return Ok(false);
        };
        let Some(refresh_token) = session.refresh_token.clone() else {
            return Ok(true);
        };

        match auth.refresh(&refresh_token).await {
            Ok(response) => {
                self.storage.set(ACCESS_TOKEN_KEY, &response.access_token)?;
                session.auth_token = response.access_token;
                self.updates.send_replace(Some(session));
                Ok(true)
            }
            Err(e) if e.is_auth_rejection() => {
                tracing::warn!("refresh token rejected, logging out: {}", e);
                self.logout()?;
                Ok(false)
            }
            Err(e) => {
                tracing::warn!("token refresh failed, keeping session: {}", e);
                Ok(true)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set(USER_KEY, &user)?;
        self.storage.set(ACCESS_TOKEN_KEY, &session.auth_token)?;
        match &session.refresh_token {
            Some(token) => self.storage.set(REFRESH_TOKEN_KEY, token)?,
            None => self.storage.remove(REFRESH_TOKEN_KEY)?,
        }
        Ok(())
    }

    async fn migrate_local_data<L: ListApi + ?Sized>(&self, lists: &L, session: &Session) {
        let json = match self.storage.get(LIST_STATE_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("failed to read local data for migration: {}", e);
                return;
            }
        };
        let state = match ListState::from_json(&json) {
            Ok(state) if state.is_empty() => return,
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("skipping migration of unreadable local data: {}", e);
                return;
            }
        };
        match lists.migrate(session, &state).await {
            Ok(()) => tracing::debug!(user_id = session.user_id(), "migrated local data"),
            Err(e) => tracing::warn!("failed to migrate local data: {}", e),
        }
    }
}

fn load_session<S: LocalStorage>(storage: &S) -> Option<Session> {
    let user = match storage.get(USER_KEY) {
        Ok(Some(user)) => user,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("failed to read stored session: {}", e);
            return None;
        }
    };
    let token = storage.get(ACCESS_TOKEN_KEY).ok().flatten();

    match (serde_json::from_str::<User>(&user), token) {
        (Ok(user), Some(token)) => Some(Session {
            user,
            auth_token: token,
            refresh_token: storage.get(REFRESH_TOKEN_KEY).ok().flatten(),
        }),
        (Ok(_), None) => {
            tracing::warn!("stored user has no access token, clearing session");
            discard(storage);
            None
        }
        (Err(e), _) => {
            tracing::warn!("clearing unreadable stored user: {}", e);
            discard(storage);
            None
        }
    }
}

fn clear_session<S: LocalStorage>(storage: &S) -> Result<()> {
    for key in SESSION_KEYS {
        storage.remove(key)?;
    }
    Ok(())
}

fn discard<S: LocalStorage>(storage: &S) {
    if let Err(e) = clear_session(storage) {
        tracing::warn!("failed to clear stored session: {}", e);
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
