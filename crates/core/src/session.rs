// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The authenticated session read by the list store.

use crate::protocol::User;

/// A logged-in user and the credentials used for remote calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub auth_token: String,
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn new(user: User, auth_token: impl Into<String>) -> Self {
        Session {
            user,
            auth_token: auth_token.into(),
            refresh_token: None,
        }
    }

    pub fn user_id(&self) -> u64 {
        self.user.id
    }
}
