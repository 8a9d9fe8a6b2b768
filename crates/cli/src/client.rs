// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Authenticated request pipeline: attach, attempt, detect 401, refresh,
//! replay once.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::refresh::RefreshCoordinator;
use crate::store::CredentialStore;

/// An outgoing API request the pipeline can re-dispatch.
///
/// Requests are built fresh for every attempt, so a replay never reuses a
/// consumed request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::GET, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::POST, path: path.into(), body: Some(body) }
    }

    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::PUT, path: path.into(), body: Some(body) }
    }

    pub fn patch(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::PATCH, path: path.into(), body: Some(body) }
    }
}

/// Decorator around `reqwest` that manages bearer credentials.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<CredentialStore>,
    refresher: Arc<RefreshCoordinator>,
}

impl AuthClient {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        store: Arc<CredentialStore>,
        refresher: Arc<RefreshCoordinator>,
    ) -> Self {
        Self { http, base_url: base_url.trim_end_matches('/').to_owned(), store, refresher }
    }

    /// Dispatch a request with the current access token attached.
    ///
    /// On a 401 the refresh coordinator is consulted and the request is
    /// replayed exactly once with the fresh token; the replay's response is
    /// returned as-is, no third attempt. Any non-401 response, success or
    /// error, passes through untouched. When no token is present the request
    /// is sent unmodified.
    pub async fn execute(&self, req: &ApiRequest) -> anyhow::Result<reqwest::Response> {
        let token = self.store.access_token();
        let resp = self.dispatch(req, token.as_deref()).await?;
        if resp.status() != StatusCode::UNAUTHORIZED {
            return Ok(resp);
        }

        debug!(path = %req.path, "unauthorized, attempting credential refresh");
        match self.refresher.refresh_access_token().await {
            Ok(fresh) => Ok(self.dispatch(req, Some(&fresh)).await?),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("request to {} was unauthorized", req.path))),
        }
    }

    /// Execute a request and parse the JSON body, treating non-2xx as an
    /// error carrying the response body.
    pub async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        req: &ApiRequest,
    ) -> anyhow::Result<T> {
        let resp = self.execute(req).await?;
        read_json(resp).await
    }

    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        self.send_json(&ApiRequest::get(path)).await
    }

    async fn dispatch(
        &self,
        req: &ApiRequest,
        token: Option<&str>,
    ) -> reqwest::Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, req.path);
        let mut builder = self.http.request(req.method.clone(), url);
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder.send().await
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> anyhow::Result<T> {
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        anyhow::bail!("API error ({status}): {text}");
    }
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
