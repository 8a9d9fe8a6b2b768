// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use axum::routing::get;
use axum::Router;

use super::*;
use crate::identity::TokenPair;
use crate::test_support::{profile_body, serve, Harness};

async fn identity_server(is_staff: bool) -> std::net::SocketAddr {
    let app = Router::new().route(
        "/auth/profile/",
        get(move || async move {
            (axum::http::StatusCode::OK, profile_body(7, "ops@example.com", is_staff))
        }),
    );
    serve(app).await
}

fn seed(h: &Harness) {
    h.store
        .save(TokenPair { access: "A1".to_owned(), refresh: "R1".to_owned() })
        .expect("seed pair");
}

#[tokio::test]
async fn denies_without_session() {
    let addr = identity_server(false).await;
    let h = Harness::new(&format!("http://{addr}"));
    assert!(!h.gate.allow(&h.client, None).await);
    assert!(!h.gate.allow(&h.client, Some(Role::Staff)).await);
}

#[tokio::test]
async fn allows_authenticated_user() {
    let addr = identity_server(false).await;
    let h = Harness::new(&format!("http://{addr}"));
    seed(&h);
    assert!(h.gate.allow(&h.client, None).await);
}

#[tokio::test]
async fn staff_role_requires_staff_flag() {
    let addr = identity_server(false).await;
    let h = Harness::new(&format!("http://{addr}"));
    seed(&h);
    assert!(!h.gate.allow(&h.client, Some(Role::Staff)).await);
}

#[tokio::test]
async fn staff_user_passes_staff_gate() {
    let addr = identity_server(true).await;
    let h = Harness::new(&format!("http://{addr}"));
    seed(&h);
    assert!(h.gate.allow(&h.client, Some(Role::Staff)).await);
    // The plain gate also passes for staff.
    assert!(h.gate.allow(&h.client, None).await);
}
