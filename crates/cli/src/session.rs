// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cached authenticated identity derived from the credential pair.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::client::AuthClient;
use crate::identity::{Profile, PROFILE_PATH};
use crate::store::CredentialStore;

/// Most recently fetched user profile.
///
/// Not time-based: invalidated only by logout or credential replacement,
/// never by expiry. A cached profile may go stale if the server revokes the
/// session between fetches; the pipeline's 401 handling catches that lazily
/// on the next authenticated call.
pub struct SessionCache {
    store: Arc<CredentialStore>,
    profile: RwLock<Option<Profile>>,
}

impl SessionCache {
    pub fn new(store: Arc<CredentialStore>) -> Self {
        Self { store, profile: RwLock::new(None) }
    }

    /// Synchronous read of the last-known profile.
    pub fn current(&self) -> Option<Profile> {
        self.profile.read().clone()
    }

    /// Return the cached profile, fetching it if necessary.
    ///
    /// No credential pair → `None` without a network call. A failed profile
    /// fetch means the session is unusable regardless of cause: the
    /// credential store is cleared and `None` is returned.
    pub async fn refresh(&self, client: &AuthClient) -> Option<Profile> {
        if let Some(profile) = self.current() {
            return Some(profile);
        }
        self.store.access_token()?;

        match client.get_json::<Profile>(PROFILE_PATH).await {
            Ok(profile) => {
                debug!(email = %profile.email, "profile fetched");
                *self.profile.write() = Some(profile.clone());
                Some(profile)
            }
            Err(e) => {
                warn!(err = %e, "profile fetch failed, treating session as unauthenticated");
                self.store.clear();
                self.invalidate();
                None
            }
        }
    }

    /// Drop the cached profile without touching the credential store.
    pub fn invalidate(&self) {
        *self.profile.write() = None;
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
