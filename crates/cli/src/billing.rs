// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire types for the billing API: clients, products, invoices, cargo
//! manifests, and staff statistics.

use serde::{Deserialize, Serialize};

pub const CLIENTS_PATH: &str = "/clientes/";
pub const PRODUCTS_PATH: &str = "/productos/";
pub const INVOICES_PATH: &str = "/facturas/";
pub const INVOICE_EMIT_PATH: &str = "/facturas/emitir/";
pub const SHIPMENTS_PATH: &str = "/envios/";
pub const CPE_LOOKUP_PATH: &str = "/cpe/consultar/";
pub const DOMAIN_STATS_PATH: &str = "/estadisticas/dominios/";

pub fn invoice_send_path(invoice_id: i64) -> String {
    format!("/{invoice_id}/facturas/enviar/")
}

pub fn client_path(client_id: i64) -> String {
    format!("/clientes/{client_id}/")
}

pub fn product_path(product_id: i64) -> String {
    format!("/productos/{product_id}/")
}

#[derive(Debug, Clone, Deserialize)]
pub struct BillingClient {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub tax_id: String,
    #[serde(default)]
    pub fiscal_address: Option<String>,
    /// IVA condition code (4 = Responsable Inscripto, 5 = Consumidor Final,
    /// 6 = Monotributo). The server sends it as a number.
    #[serde(default)]
    pub tax_condition: Option<u8>,
    #[serde(default)]
    pub tax_condition_display: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewBillingClient {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub tax_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_condition: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub afip_code: Option<String>,
    #[serde(default)]
    pub default_tariff: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tariff: Option<String>,
}

/// Payload for issuing an electronic invoice.
#[derive(Debug, Clone, Serialize)]
pub struct InvoicePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    pub amount: String,
    pub pto_vta: u32,
    pub cbte_tipo: u32,
    pub doc_tipo: u32,
    pub doc_nro: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepto: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    pub id: i64,
    #[serde(default)]
    pub client_name: Option<String>,
    pub amount: String,
    #[serde(default)]
    pub cbte_nro: Option<i64>,
    #[serde(default)]
    pub cae: Option<String>,
    /// CAE expiry, YYYYMMDD.
    #[serde(default)]
    pub cae_due: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One cargo manifest as listed by the shipments endpoint.
///
/// `nro_ctg` is a string on the wire: CTG numbers are an up-to-14-digit
/// identifier that may carry leading zeros.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentSummary {
    pub id: i64,
    pub nro_ctg: String,
    #[serde(default)]
    pub tipo_carta_porte: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub fecha_emision: Option<String>,
    #[serde(default)]
    pub fecha_vencimiento: Option<String>,
    #[serde(default)]
    pub vehicle_domain: Option<String>,
}

/// Query for a cargo-manifest lookup by tracking code.
#[derive(Debug, Clone, Serialize)]
pub struct CpeQuery {
    pub nro_ctg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peso_bruto_descarga: Option<f64>,
}

/// Per-vehicle-domain aggregate row in the statistics response.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainStat {
    pub dominio: String,
    pub movimientos: u64,
    pub total_ctg: f64,
    pub facturacion: f64,
}

/// Response of the domain statistics endpoint: two ranked lists over the
/// same row shape.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainStatsResponse {
    pub mayores_movimientos: Vec<DomainStat>,
    pub mayor_facturacion: Vec<DomainStat>,
}

#[cfg(test)]
#[path = "billing_tests.rs"]
mod tests;
