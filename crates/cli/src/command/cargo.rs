// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `folio cargo` — cargo-manifest lookups and shipment listings.

use crate::auth::Auth;
use crate::billing::{CpeQuery, ShipmentSummary, CPE_LOOKUP_PATH, SHIPMENTS_PATH};
use crate::client::ApiRequest;
use crate::command::require_session;

#[derive(Debug, clap::Args)]
pub struct CargoArgs {
    #[command(subcommand)]
    pub command: CargoCommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum CargoCommand {
    /// Query a cargo manifest by its tracking code.
    Lookup(LookupArgs),
    /// List registered shipments.
    Shipments,
}

#[derive(Debug, clap::Args)]
pub struct LookupArgs {
    /// Cargo tracking code (CTG number, kept as text to preserve leading
    /// zeros).
    pub nro_ctg: String,
    /// Gross unload weight in kilograms.
    #[arg(long)]
    pub peso_bruto_descarga: Option<f64>,
}

pub async fn run(auth: &Auth, args: &CargoArgs) -> i32 {
    if !require_session(auth, None).await {
        return 2;
    }
    match &args.command {
        CargoCommand::Lookup(lookup) => cmd_lookup(auth, lookup).await,
        CargoCommand::Shipments => cmd_shipments(auth).await,
    }
}

async fn cmd_lookup(auth: &Auth, args: &LookupArgs) -> i32 {
    let query = CpeQuery {
        nro_ctg: args.nro_ctg.clone(),
        peso_bruto_descarga: args.peso_bruto_descarga,
    };
    let req = match serde_json::to_value(&query) {
        Ok(v) => ApiRequest::post(CPE_LOOKUP_PATH, v),
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    // The manifest payload shape varies by manifest type; print it verbatim.
    match auth.client.send_json::<serde_json::Value>(&req).await {
        Ok(manifest) => {
            match serde_json::to_string_pretty(&manifest) {
                Ok(text) => println!("{text}"),
                Err(_) => println!("{manifest}"),
            }
            0
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}

async fn cmd_shipments(auth: &Auth) -> i32 {
    let shipments: Vec<ShipmentSummary> = match auth.client.get_json(SHIPMENTS_PATH).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e:#}");
            return 1;
        }
    };

    if shipments.is_empty() {
        println!("No shipments.");
        return 0;
    }
    println!(
        "{:<6} {:<14} {:<10} {:<12} {:<10}",
        "ID", "CTG", "STATE", "ISSUED", "VEHICLE"
    );
    println!("{}", "-".repeat(52));
    for s in &shipments {
        println!(
            "{:<6} {:<14} {:<10} {:<12} {:<10}",
            s.id,
            s.nro_ctg,
            s.estado.as_deref().unwrap_or("-"),
            s.fecha_emision.as_deref().unwrap_or("-"),
            s.vehicle_domain.as_deref().unwrap_or("-"),
        );
    }
    0
}
