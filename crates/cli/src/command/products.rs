// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `folio products` — list and create products, adjust the default tariff.

use crate::auth::Auth;
use crate::billing::{product_path, NewProduct, Product, PRODUCTS_PATH};
use crate::client::ApiRequest;
use crate::command::require_session;

#[derive(Debug, clap::Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum ProductsCommand {
    /// List products.
    List,
    /// Create a product.
    New(NewArgs),
    /// Change a product's default tariff.
    SetTariff(SetTariffArgs),
}

#[derive(Debug, clap::Args)]
pub struct NewArgs {
    /// Product name.
    pub name: String,
    /// AFIP product code.
    #[arg(long)]
    pub afip_code: Option<String>,
    /// Default tariff.
    #[arg(long)]
    pub default_tariff: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct SetTariffArgs {
    /// Product id.
    pub id: i64,
    /// New default tariff.
    pub tariff: String,
}

pub async fn run(auth: &Auth, args: &ProductsArgs) -> i32 {
    if !require_session(auth, None).await {
        return 2;
    }
    match &args.command {
        ProductsCommand::List => cmd_list(auth).await,
        ProductsCommand::New(new) => cmd_new(auth, new).await,
        ProductsCommand::SetTariff(set) => cmd_set_tariff(auth, set).await,
    }
}

async fn cmd_list(auth: &Auth) -> i32 {
    let products: Vec<Product> = match auth.client.get_json(PRODUCTS_PATH).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e:#}");
            return 1;
        }
    };

    if products.is_empty() {
        println!("No products.");
        return 0;
    }
    println!("{:<6} {:<28} {:<12} {:<12}", "ID", "NAME", "AFIP CODE", "TARIFF");
    println!("{}", "-".repeat(58));
    for p in &products {
        println!(
            "{:<6} {:<28} {:<12} {:<12}",
            p.id,
            p.name,
            p.afip_code.as_deref().unwrap_or("-"),
            p.default_tariff.as_deref().unwrap_or("-"),
        );
    }
    0
}

async fn cmd_new(auth: &Auth, args: &NewArgs) -> i32 {
    let body = NewProduct {
        name: args.name.clone(),
        afip_code: args.afip_code.clone(),
        default_tariff: args.default_tariff.clone(),
    };
    let req = match serde_json::to_value(&body) {
        Ok(v) => ApiRequest::post(PRODUCTS_PATH, v),
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    match auth.client.send_json::<Product>(&req).await {
        Ok(created) => {
            println!("Created product '{}' (id {}).", created.name, created.id);
            0
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}

async fn cmd_set_tariff(auth: &Auth, args: &SetTariffArgs) -> i32 {
    // Partial update: only the tariff field travels.
    let body = serde_json::json!({ "default_tariff": args.tariff });
    let req = ApiRequest::patch(product_path(args.id), body);
    match auth.client.send_json::<Product>(&req).await {
        Ok(updated) => {
            println!(
                "Set tariff for product '{}' (id {}) to {}.",
                updated.name,
                updated.id,
                updated.default_tariff.as_deref().unwrap_or("-"),
            );
            0
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}
