// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI subcommands. Each `run` returns a process exit code.

pub mod account;
pub mod cargo;
pub mod clients;
pub mod invoices;
pub mod products;
pub mod stats;

use crate::auth::Auth;
use crate::gate::Role;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Log in and persist the session.
    Login(account::LoginArgs),
    /// Register a new account and log in.
    Register(account::RegisterArgs),
    /// Drop the persisted session.
    Logout,
    /// Show the profile of the active session.
    Whoami,
    /// Manage billing clients.
    Clients(clients::ClientsArgs),
    /// Manage products.
    Products(products::ProductsArgs),
    /// Issue, list, and send electronic invoices.
    Invoices(invoices::InvoicesArgs),
    /// Cargo-manifest lookups and shipment listings.
    Cargo(cargo::CargoArgs),
    /// Staff-only statistics.
    Stats(stats::StatsArgs),
}

/// Dispatch a parsed subcommand.
pub async fn run(command: &Command, auth: &Auth) -> i32 {
    match command {
        Command::Login(args) => account::login(auth, args).await,
        Command::Register(args) => account::register(auth, args).await,
        Command::Logout => account::logout(auth),
        Command::Whoami => account::whoami(auth).await,
        Command::Clients(args) => clients::run(auth, args).await,
        Command::Products(args) => products::run(auth, args).await,
        Command::Invoices(args) => invoices::run(auth, args).await,
        Command::Cargo(args) => cargo::run(auth, args).await,
        Command::Stats(args) => stats::run(auth, args).await,
    }
}

/// Check the session gate before a protected command, printing the denial.
pub(crate) async fn require_session(auth: &Auth, role: Option<Role>) -> bool {
    if auth.gate.allow(&auth.client, role).await {
        return true;
    }
    match role {
        Some(Role::Staff) if auth.is_authenticated() => {
            eprintln!("error: staff access required");
        }
        _ => {
            eprintln!("error: not logged in (run `folio login`)");
        }
    }
    false
}
