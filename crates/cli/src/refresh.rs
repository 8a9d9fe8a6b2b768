// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-flight refresh coordination.
//!
//! Turns N concurrent "credential is invalid" signals into exactly one
//! network refresh call, and delivers its outcome to every caller in the
//! round. Success replaces the stored pair and publishes the new access
//! token; failure of any kind logs the session out and publishes the same
//! error to all waiters.

use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use crate::error::AuthError;
use crate::identity::{RefreshRequest, TokenPair, REFRESH_PATH};
use crate::session::SessionCache;
use crate::store::CredentialStore;

/// Outcome of one refresh round: the fresh access token, or the error every
/// waiter in the round receives.
type RoundOutcome = Result<String, AuthError>;

/// Tagged refresh state. Each round owns its broadcast slot, so waiters can
/// only ever observe the round they joined.
enum RefreshState {
    Idle,
    Refreshing { outcome_tx: broadcast::Sender<RoundOutcome> },
}

/// Serializes credential refresh for the whole process.
///
/// Only this coordinator and explicit logout mutate the credential store;
/// that single-writer discipline is what makes the single-flight guarantee
/// hold without any further locking.
pub struct RefreshCoordinator {
    state: Mutex<RefreshState>,
    store: Arc<CredentialStore>,
    cache: Arc<SessionCache>,
    http: reqwest::Client,
    refresh_url: String,
}

impl RefreshCoordinator {
    pub fn new(
        store: Arc<CredentialStore>,
        cache: Arc<SessionCache>,
        http: reqwest::Client,
        base_url: &str,
    ) -> Self {
        Self {
            state: Mutex::new(RefreshState::Idle),
            store,
            cache,
            http,
            refresh_url: format!("{}{}", base_url.trim_end_matches('/'), REFRESH_PATH),
        }
    }

    /// Obtain a fresh access token after observing an authentication failure.
    ///
    /// If a round is already in flight the caller joins it and waits for its
    /// outcome; otherwise the caller leads a new round and performs the one
    /// network refresh call. On failure the session is fully logged out
    /// before the outcome is published, so every waiter observes consistent
    /// state.
    pub async fn refresh_access_token(&self) -> Result<String, AuthError> {
        let joined = {
            let mut state = self.state.lock().await;
            match &*state {
                RefreshState::Refreshing { outcome_tx } => Some(outcome_tx.subscribe()),
                RefreshState::Idle => {
                    // Fresh slot per round: a joiner can never consume a
                    // value published by a previous round.
                    let (tx, _) = broadcast::channel(1);
                    *state = RefreshState::Refreshing { outcome_tx: tx };
                    None
                }
            }
        };

        if let Some(mut rx) = joined {
            debug!("refresh already in flight, joining round");
            return match rx.recv().await {
                Ok(outcome) => outcome,
                // Closed without a value: the leader's task was torn down
                // mid-round.
                Err(_) => Err(AuthError::Transport("refresh round abandoned".to_owned())),
            };
        }

        let outcome = self.run_round().await;

        // Resolve the round before publishing: once the state is Idle, a new
        // arrival starts a fresh round instead of joining this one.
        let outcome_tx = {
            let mut state = self.state.lock().await;
            match std::mem::replace(&mut *state, RefreshState::Idle) {
                RefreshState::Refreshing { outcome_tx } => Some(outcome_tx),
                RefreshState::Idle => None,
            }
        };
        if let Some(tx) = outcome_tx {
            // Send only fails when no waiter joined the round.
            let _ = tx.send(outcome.clone());
        }
        outcome
    }

    /// Perform the network refresh for the round the caller leads.
    async fn run_round(&self) -> RoundOutcome {
        let Some(refresh_token) = self.store.refresh_token() else {
            // Never logged in or already logged out: short-circuit without
            // touching the network.
            debug!("refresh requested without a refresh token");
            self.force_logout();
            return Err(AuthError::LoggedOut);
        };

        match self.call_refresh(&refresh_token).await {
            Ok(pair) => {
                let access = pair.access.clone();
                if let Err(e) = self.store.save(pair) {
                    warn!(err = %e, "failed to persist refreshed credentials");
                }
                // The profile is re-derived lazily under the new credential.
                self.cache.invalidate();
                info!("access token refreshed");
                Ok(access)
            }
            Err(err) => {
                // Any refresh failure is fatal to the session, including a
                // transport error or timeout during the refresh call itself.
                warn!(err = %err, "refresh failed, clearing session");
                self.force_logout();
                Err(err)
            }
        }
    }

    async fn call_refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let resp = self
            .http
            .post(&self.refresh_url)
            .json(&RefreshRequest { refresh: refresh_token.to_owned() })
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AuthError::Unauthorized);
        }

        resp.json::<TokenPair>()
            .await
            .map_err(|e| AuthError::Transport(format!("invalid refresh response: {e}")))
    }

    /// Full logout: clear both shared mutable resources. Idempotent.
    fn force_logout(&self) {
        self.store.clear();
        self.cache.invalidate();
    }
}

#[cfg(test)]
#[path = "refresh_tests.rs"]
mod tests;
