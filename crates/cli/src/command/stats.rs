// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `folio stats` — staff-only aggregates.

use crate::auth::Auth;
use crate::billing::{DomainStat, DomainStatsResponse, DOMAIN_STATS_PATH};
use crate::command::require_session;
use crate::gate::Role;

#[derive(Debug, clap::Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum StatsCommand {
    /// Vehicle-domain rankings by movement count and billed total.
    Domains,
}

pub async fn run(auth: &Auth, args: &StatsArgs) -> i32 {
    if !require_session(auth, Some(Role::Staff)).await {
        return 2;
    }
    match &args.command {
        StatsCommand::Domains => cmd_domains(auth).await,
    }
}

async fn cmd_domains(auth: &Auth) -> i32 {
    let stats: DomainStatsResponse = match auth.client.get_json(DOMAIN_STATS_PATH).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e:#}");
            return 1;
        }
    };

    println!("Most movements:");
    print_rows(&stats.mayores_movimientos);
    println!();
    println!("Highest billing:");
    print_rows(&stats.mayor_facturacion);
    0
}

fn print_rows(rows: &[DomainStat]) {
    if rows.is_empty() {
        println!("  (none)");
        return;
    }
    println!(
        "  {:<12} {:>10} {:>12} {:>14}",
        "VEHICLE", "MOVEMENTS", "TOTAL CTG", "BILLED"
    );
    for s in rows {
        println!(
            "  {:<12} {:>10} {:>12.2} {:>14.2}",
            s.dominio, s.movimientos, s.total_ctg, s.facturacion
        );
    }
}
