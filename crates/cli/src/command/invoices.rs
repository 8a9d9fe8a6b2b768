// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `folio invoices` — list, emit, and send electronic invoices.

use crate::auth::Auth;
use crate::billing::{invoice_send_path, Invoice, InvoicePayload, INVOICES_PATH, INVOICE_EMIT_PATH};
use crate::client::ApiRequest;
use crate::command::require_session;

#[derive(Debug, clap::Args)]
pub struct InvoicesArgs {
    #[command(subcommand)]
    pub command: InvoicesCommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum InvoicesCommand {
    /// List issued invoices.
    List,
    /// Issue a new electronic invoice.
    Emit(EmitArgs),
    /// Email an issued invoice to its client.
    Send(SendArgs),
}

#[derive(Debug, clap::Args)]
pub struct EmitArgs {
    /// Invoice amount.
    #[arg(long)]
    pub amount: String,
    /// Point of sale number.
    #[arg(long, default_value_t = 1)]
    pub pto_vta: u32,
    /// Receipt type code.
    #[arg(long, default_value_t = 11)]
    pub cbte_tipo: u32,
    /// Recipient document type code.
    #[arg(long, default_value_t = 99)]
    pub doc_tipo: u32,
    /// Recipient document number.
    #[arg(long, default_value_t = 0)]
    pub doc_nro: u64,
    /// Billing client id to attach.
    #[arg(long)]
    pub client_id: Option<i64>,
    /// Concept code (products, services, both).
    #[arg(long)]
    pub concepto: Option<u32>,
    /// Issue date (YYYY-MM-DD, defaults to today server-side).
    #[arg(long)]
    pub issue_date: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct SendArgs {
    /// Invoice id.
    pub id: i64,
}

pub async fn run(auth: &Auth, args: &InvoicesArgs) -> i32 {
    if !require_session(auth, None).await {
        return 2;
    }
    match &args.command {
        InvoicesCommand::List => cmd_list(auth).await,
        InvoicesCommand::Emit(emit) => cmd_emit(auth, emit).await,
        InvoicesCommand::Send(send) => cmd_send(auth, send).await,
    }
}

async fn cmd_list(auth: &Auth) -> i32 {
    let invoices: Vec<Invoice> = match auth.client.get_json(INVOICES_PATH).await {
        Ok(i) => i,
        Err(e) => {
            eprintln!("error: {e:#}");
            return 1;
        }
    };

    if invoices.is_empty() {
        println!("No invoices.");
        return 0;
    }
    println!(
        "{:<6} {:<20} {:<12} {:<16} {:<10}",
        "ID", "CLIENT", "AMOUNT", "CAE", "CAE DUE"
    );
    println!("{}", "-".repeat(66));
    for i in &invoices {
        println!(
            "{:<6} {:<20} {:<12} {:<16} {:<10}",
            i.id,
            i.client_name.as_deref().unwrap_or("-"),
            i.amount,
            i.cae.as_deref().unwrap_or("-"),
            i.cae_due.as_deref().unwrap_or("-"),
        );
    }
    0
}

async fn cmd_emit(auth: &Auth, args: &EmitArgs) -> i32 {
    let payload = InvoicePayload {
        client_id: args.client_id,
        amount: args.amount.clone(),
        pto_vta: args.pto_vta,
        cbte_tipo: args.cbte_tipo,
        doc_tipo: args.doc_tipo,
        doc_nro: args.doc_nro,
        concepto: args.concepto,
        issue_date: args.issue_date.clone(),
    };
    let req = match serde_json::to_value(&payload) {
        Ok(v) => ApiRequest::post(INVOICE_EMIT_PATH, v),
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    match auth.client.send_json::<Invoice>(&req).await {
        Ok(invoice) => {
            match invoice.cae {
                Some(ref cae) => println!("Invoice {} issued, CAE {cae}.", invoice.id),
                None => println!("Invoice {} issued.", invoice.id),
            }
            0
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}

async fn cmd_send(auth: &Auth, args: &SendArgs) -> i32 {
    let req = ApiRequest::post(invoice_send_path(args.id), serde_json::json!({}));
    match auth.client.execute(&req).await {
        Ok(resp) if resp.status().is_success() => {
            println!("Invoice {} sent.", args.id);
            0
        }
        Ok(resp) => {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            eprintln!("error ({status}): {text}");
            1
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}
