// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable credential storage: one JSON record, write-through, atomic.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::identity::TokenPair;

/// File name of the persisted credential record inside the state directory.
const TOKEN_FILE: &str = "auth_tokens.json";

/// Holds the current access/refresh pair and mirrors it to disk.
///
/// Every `save`/`clear` writes through synchronously before returning, so a
/// crash immediately after a call leaves storage consistent with the last
/// completed call. Refresh-time serialization is the coordinator's job, not
/// the store's.
pub struct CredentialStore {
    path: PathBuf,
    pair: RwLock<Option<TokenPair>>,
}

/// Permissive on-disk shape, used to detect partial records.
#[derive(Deserialize)]
struct StoredPair {
    #[serde(default)]
    access: Option<String>,
    #[serde(default)]
    refresh: Option<String>,
}

impl CredentialStore {
    pub fn new(state_dir: &Path) -> Self {
        Self { path: state_dir.join(TOKEN_FILE), pair: RwLock::new(None) }
    }

    /// Restore the last-saved pair from disk into memory.
    ///
    /// A missing file is "no session". A corrupted record (unparsable JSON,
    /// or either token missing or empty) is also "no session", and the bad
    /// record is removed so a half-populated pair can never reach runtime
    /// state.
    pub fn load(&self) -> Option<TokenPair> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(_) => {
                *self.pair.write() = None;
                return None;
            }
        };

        let stored: Option<StoredPair> = serde_json::from_str(&data).ok();
        let pair = stored.and_then(|s| match (s.access, s.refresh) {
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
                Some(TokenPair { access, refresh })
            }
            _ => None,
        });

        if pair.is_none() {
            warn!(path = %self.path.display(), "corrupted credential record, clearing");
            let _ = std::fs::remove_file(&self.path);
        }

        *self.pair.write() = pair.clone();
        pair
    }

    /// Persist `pair` as the current session, replacing any prior value.
    pub fn save(&self, pair: TokenPair) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&pair)?;
        write_atomic(&self.path, &json)?;
        *self.pair.write() = Some(pair);
        debug!(path = %self.path.display(), "credentials saved");
        Ok(())
    }

    /// Remove the persisted pair and revert to "no session". Idempotent.
    pub fn clear(&self) {
        *self.pair.write() = None;
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "credentials cleared"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %self.path.display(), err = %e, "failed to remove credential file");
            }
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.pair.read().as_ref().map(|p| p.access.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.pair.read().as_ref().map(|p| p.refresh.clone())
    }

    pub fn pair(&self) -> Option<TokenPair> {
        self.pair.read().clone()
    }
}

/// Atomic write: unique temp file (PID + counter) then rename, so concurrent
/// saves racing on the same `.tmp` path cannot interleave partial contents.
fn write_atomic(path: &Path, contents: &str) -> anyhow::Result<()> {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(
        "{}.{}.{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy(),
        std::process::id(),
        seq,
    );
    let tmp_path = path.with_file_name(tmp_name);
    std::fs::write(&tmp_path, contents)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
