// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `folio clients` — list, create, and update billing clients.

use crate::auth::Auth;
use crate::billing::{client_path, BillingClient, NewBillingClient, CLIENTS_PATH};
use crate::client::ApiRequest;
use crate::command::require_session;

#[derive(Debug, clap::Args)]
pub struct ClientsArgs {
    #[command(subcommand)]
    pub command: ClientsCommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum ClientsCommand {
    /// List billing clients.
    List,
    /// Create a billing client.
    New(NewArgs),
    /// Replace an existing billing client.
    Update(UpdateArgs),
}

#[derive(Debug, clap::Args)]
pub struct NewArgs {
    /// Client name.
    pub name: String,
    /// Tax identifier (CUIT).
    #[arg(long)]
    pub tax_id: String,
    /// Contact email.
    #[arg(long)]
    pub email: Option<String>,
    /// Fiscal address.
    #[arg(long)]
    pub fiscal_address: Option<String>,
    /// IVA condition code (4, 5, or 6).
    #[arg(long)]
    pub tax_condition: Option<u8>,
}

#[derive(Debug, clap::Args)]
pub struct UpdateArgs {
    /// Client id.
    pub id: i64,
    #[command(flatten)]
    pub fields: NewArgs,
}

pub async fn run(auth: &Auth, args: &ClientsArgs) -> i32 {
    if !require_session(auth, None).await {
        return 2;
    }
    match &args.command {
        ClientsCommand::List => cmd_list(auth).await,
        ClientsCommand::New(new) => cmd_new(auth, new).await,
        ClientsCommand::Update(update) => cmd_update(auth, update).await,
    }
}

fn payload(args: &NewArgs) -> NewBillingClient {
    NewBillingClient {
        name: args.name.clone(),
        email: args.email.clone(),
        tax_id: args.tax_id.clone(),
        fiscal_address: args.fiscal_address.clone(),
        tax_condition: args.tax_condition,
    }
}

async fn cmd_list(auth: &Auth) -> i32 {
    let clients: Vec<BillingClient> = match auth.client.get_json(CLIENTS_PATH).await {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e:#}");
            return 1;
        }
    };

    if clients.is_empty() {
        println!("No clients.");
        return 0;
    }
    println!("{:<6} {:<28} {:<14} {:<20}", "ID", "NAME", "TAX ID", "CONDITION");
    println!("{}", "-".repeat(68));
    for c in &clients {
        let condition = match (&c.tax_condition_display, c.tax_condition) {
            (Some(display), _) => display.clone(),
            (None, Some(code)) => code.to_string(),
            (None, None) => "-".to_owned(),
        };
        println!("{:<6} {:<28} {:<14} {:<20}", c.id, c.name, c.tax_id, condition);
    }
    0
}

async fn cmd_new(auth: &Auth, args: &NewArgs) -> i32 {
    let req = match serde_json::to_value(payload(args)) {
        Ok(v) => ApiRequest::post(CLIENTS_PATH, v),
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    match auth.client.send_json::<BillingClient>(&req).await {
        Ok(created) => {
            println!("Created client '{}' (id {}).", created.name, created.id);
            0
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}

async fn cmd_update(auth: &Auth, args: &UpdateArgs) -> i32 {
    let req = match serde_json::to_value(payload(&args.fields)) {
        Ok(v) => ApiRequest::put(client_path(args.id), v),
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    match auth.client.send_json::<BillingClient>(&req).await {
        Ok(updated) => {
            println!("Updated client '{}' (id {}).", updated.name, updated.id);
            0
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}
