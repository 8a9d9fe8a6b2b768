// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

pub mod auth;
pub mod billing;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod gate;
pub mod identity;
pub mod refresh;
pub mod session;
pub mod store;

#[cfg(test)]
pub mod test_support;
