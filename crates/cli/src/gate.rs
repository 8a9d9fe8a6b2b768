// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command guard over the session cache.

use std::sync::Arc;

use crate::client::AuthClient;
use crate::session::SessionCache;

/// Elevated role a protected operation may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Staff,
}

/// Advisory guard consulted before protected commands run.
///
/// The server stays the source of truth; the pipeline's 401 handling is the
/// enforcement backstop for individual calls.
pub struct SessionGate {
    cache: Arc<SessionCache>,
}

impl SessionGate {
    pub fn new(cache: Arc<SessionCache>) -> Self {
        Self { cache }
    }

    /// Permit or deny a protected operation, fetching the profile if needed.
    pub async fn allow(&self, client: &AuthClient, required: Option<Role>) -> bool {
        let Some(profile) = self.cache.refresh(client).await else {
            return false;
        };
        match required {
            Some(Role::Staff) => profile.is_staff,
            None => true,
        }
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
