// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of the remote collaborators using reqwest.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use reel_core::protocol::{
    ListItemRequest, LoginRequest, LoginResponse, MigrateRequest, Movie, MovieDetails,
    RefreshRequest, RefreshResponse, SearchResults,
};
use reel_core::{ListEntry, ListKind, ListState, MovieId, Session};

use super::{ApiError, ApiFuture, ApiResult, AuthApi, ListApi, MetadataApi};

/// Normalizes an API base URL: no trailing slash, always ending in `/api`.
pub fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.ends_with("/api") {
        trimmed.to_string()
    } else {
        format!("{}/api", trimmed)
    }
}

/// HTTP client for the list, auth, and metadata endpoints.
pub struct HttpClient {
    client: reqwest::Client,
    api_base: String,
    metadata_base: String,
}

impl HttpClient {
    /// Builds a client. `api_base` is normalized; `metadata_base` is used
    /// as given apart from a trailing slash.
    pub fn new(api_base: &str, metadata_base: &str, timeout: Duration) -> ApiResult<Self> {
        for url in [api_base, metadata_base] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ApiError::InvalidUrl(url.to_string()));
            }
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpClient {
            client,
            api_base: normalize_api_base(api_base),
            metadata_base: metadata_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn metadata_url(&self, path: &str) -> String {
        format!("{}{}", self.metadata_base, path)
    }
}

fn with_auth(request: RequestBuilder, session: &Session) -> RequestBuilder {
    if session.auth_token.is_empty() {
        request
    } else {
        request.bearer_auth(&session.auth_token)
    }
}

fn classify(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}

/// Sends `request` and turns non-2xx statuses into [`ApiError::Status`].
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request.send().await.map_err(classify)?;
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let response = send(request).await?;
    let bytes = response.bytes().await.map_err(classify)?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

impl ListApi for HttpClient {
    fn fetch_list<'a>(
        &'a self,
        session: &'a Session,
        kind: ListKind,
    ) -> ApiFuture<'a, Vec<ListEntry>> {
        Box::pin(async move {
            let url = self.api_url(&format!("/lists/{}/{}", session.user_id(), kind));
            tracing::debug!(%url, "fetching list");
            send_json(with_auth(self.client.get(url), session)).await
        })
    }

    fn add<'a>(
        &'a self,
        session: &'a Session,
        movie_id: MovieId,
        kind: ListKind,
    ) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            let body = ListItemRequest {
                user_id: session.user_id(),
                movie_id,
                kind,
            };
            let request = self.client.post(self.api_url("/lists/")).json(&body);
            send(with_auth(request, session)).await.map(|_| ())
        })
    }

    fn remove<'a>(
        &'a self,
        session: &'a Session,
        movie_id: MovieId,
        kind: ListKind,
    ) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            let query = ListItemRequest {
                user_id: session.user_id(),
                movie_id,
                kind,
            };
            let request = self.client.delete(self.api_url("/lists/")).query(&query);
            send(with_auth(request, session)).await.map(|_| ())
        })
    }

    fn migrate<'a>(&'a self, session: &'a Session, state: &'a ListState) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            let body = MigrateRequest {
                user_id: session.user_id(),
                state,
            };
            let request = self.client.post(self.api_url("/migrate/")).json(&body);
            send(with_auth(request, session)).await.map(|_| ())
        })
    }
}

impl AuthApi for HttpClient {
    fn login<'a>(&'a self, email: &'a str, password: &'a str) -> ApiFuture<'a, LoginResponse> {
        Box::pin(async move {
            let body = LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            };
            send_json(self.client.post(self.api_url("/login")).json(&body)).await
        })
    }

    fn refresh<'a>(&'a self, refresh_token: &'a str) -> ApiFuture<'a, RefreshResponse> {
        Box::pin(async move {
            let body = RefreshRequest {
                refresh_token: refresh_token.to_string(),
            };
            send_json(self.client.post(self.api_url("/refresh")).json(&body)).await
        })
    }
}

impl MetadataApi for HttpClient {
    fn details(&self, movie_id: MovieId) -> ApiFuture<'_, MovieDetails> {
        Box::pin(async move {
            let url = self.metadata_url(&format!("/movie/{}", movie_id));
            send_json(self.client.get(url)).await
        })
    }

    fn search<'a>(&'a self, query: &'a str) -> ApiFuture<'a, Vec<Movie>> {
        Box::pin(async move {
            let request = self
                .client
                .get(self.metadata_url("/search"))
                .query(&[("query", query)]);
            let results: SearchResults = send_json(request).await?;
            Ok(results.results)
        })
    }

    fn popular(&self) -> ApiFuture<'_, Vec<Movie>> {
        Box::pin(async move {
            let request = self.client.get(self.metadata_url("/movie/popular"));
            let results: SearchResults = send_json(request).await?;
            Ok(results.results)
        })
    }
}
