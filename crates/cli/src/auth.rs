// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Explicitly constructed session wiring: one store, one cache, one refresh
//! coordinator, one pipeline. No module-level singletons, so tests and
//! callers own their instances outright.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::client::{ApiRequest, AuthClient};
use crate::gate::SessionGate;
use crate::identity::{LoginRequest, Profile, RegisterRequest, TokenPair, LOGIN_PATH, REGISTER_PATH};
use crate::refresh::RefreshCoordinator;
use crate::session::SessionCache;
use crate::store::CredentialStore;

pub struct Auth {
    pub store: Arc<CredentialStore>,
    pub cache: Arc<SessionCache>,
    pub gate: SessionGate,
    pub client: AuthClient,
}

impl Auth {
    /// Wire the session components against `api_url`, restoring any persisted
    /// credential pair from `state_dir`.
    pub fn new(api_url: &str, state_dir: &Path) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(Duration::from_secs(30)).build()?;

        let store = Arc::new(CredentialStore::new(state_dir));
        store.load();
        let cache = Arc::new(SessionCache::new(Arc::clone(&store)));
        let refresher = Arc::new(RefreshCoordinator::new(
            Arc::clone(&store),
            Arc::clone(&cache),
            http.clone(),
            api_url,
        ));
        let client = AuthClient::new(http, api_url, Arc::clone(&store), refresher);
        let gate = SessionGate::new(Arc::clone(&cache));

        Ok(Self { store, cache, gate, client })
    }

    /// Log in and derive the profile for the new session.
    pub async fn login(&self, email: &str, password: &str) -> anyhow::Result<Profile> {
        let req = ApiRequest::post(
            LOGIN_PATH,
            serde_json::to_value(LoginRequest {
                email: email.to_owned(),
                password: password.to_owned(),
            })?,
        );
        let pair: TokenPair = self.client.send_json(&req).await?;
        self.store.save(pair)?;
        self.cache.invalidate();
        info!(email, "logged in");

        self.cache
            .refresh(&self.client)
            .await
            .ok_or_else(|| anyhow::anyhow!("logged in but the profile fetch failed"))
    }

    /// Register a new account, then log in with the same credentials.
    pub async fn register(&self, req: RegisterRequest) -> anyhow::Result<Profile> {
        let request = ApiRequest::post(REGISTER_PATH, serde_json::to_value(&req)?);
        let _: Profile = self.client.send_json(&request).await?;
        self.login(&req.email, &req.password).await
    }

    /// Drop the session: persisted credentials and cached profile. Idempotent.
    pub fn logout(&self) {
        self.store.clear();
        self.cache.invalidate();
        info!("logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.cache.current().is_some() || self.store.access_token().is_some()
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
