// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

/// Session-level errors from the credential machinery.
///
/// `Clone` so one refresh round can deliver the same failure to every queued
/// waiter. Business-logic failures from non-auth endpoints never take this
/// form; they pass through the pipeline untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No session: never logged in, or already logged out. No refresh call
    /// is attempted in this state.
    LoggedOut,
    /// The server rejected the credentials and refresh could not recover.
    Unauthorized,
    /// Network or protocol failure talking to the identity API.
    Transport(String),
}

impl AuthError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoggedOut => "LOGGED_OUT",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Transport(_) => "TRANSPORT",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedOut => f.write_str("no active session"),
            Self::Unauthorized => f.write_str("session rejected by the server"),
            Self::Transport(msg) => write!(f, "transport failure: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
