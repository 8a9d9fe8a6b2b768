// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::error::AuthError;
use crate::test_support::{mock_refresh_server, pair_body, Harness};

fn seed(h: &Harness, access: &str, refresh: &str) {
    h.store
        .save(TokenPair { access: access.to_owned(), refresh: refresh.to_owned() })
        .expect("seed pair");
}

#[tokio::test]
async fn refresh_success_replaces_pair() {
    let (addr, calls) = mock_refresh_server(vec![(200, pair_body("A2", "R2"))], None).await;
    let h = Harness::new(&format!("http://{addr}"));
    seed(&h, "A1", "R1");

    let token = h.refresher.refresh_access_token().await.expect("refresh");
    assert_eq!(token, "A2");
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    // Both tokens rotate and land on disk.
    assert_eq!(h.store.access_token().as_deref(), Some("A2"));
    assert_eq!(h.store.refresh_token().as_deref(), Some("R2"));
    let reloaded = CredentialStore::new(h.dir.path());
    assert_eq!(
        reloaded.load(),
        Some(TokenPair { access: "A2".to_owned(), refresh: "R2".to_owned() })
    );
}

#[tokio::test]
async fn no_refresh_token_short_circuits() {
    let (addr, calls) = mock_refresh_server(vec![(200, pair_body("A2", "R2"))], None).await;
    let h = Harness::new(&format!("http://{addr}"));

    let err = h.refresher.refresh_access_token().await.expect_err("must fail");
    assert_eq!(err, AuthError::LoggedOut);
    // Never touched the network.
    assert_eq!(calls.load(Ordering::Relaxed), 0);
}

#[tokio::test]
async fn rejected_refresh_logs_out() {
    let (addr, calls) =
        mock_refresh_server(vec![(401, r#"{"detail":"token expired"}"#.to_owned())], None).await;
    let h = Harness::new(&format!("http://{addr}"));
    seed(&h, "A1", "R1");
    h.cache.invalidate();

    let err = h.refresher.refresh_access_token().await.expect_err("must fail");
    assert_eq!(err, AuthError::Unauthorized);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    // Session fully torn down: memory, disk, cached profile.
    assert!(h.store.pair().is_none());
    assert!(h.cache.current().is_none());
    assert!(!h.dir.path().join("auth_tokens.json").exists());
}

#[tokio::test]
async fn malformed_refresh_body_is_transport_failure() {
    let (addr, _calls) = mock_refresh_server(vec![(200, "not json".to_owned())], None).await;
    let h = Harness::new(&format!("http://{addr}"));
    seed(&h, "A1", "R1");

    let err = h.refresher.refresh_access_token().await.expect_err("must fail");
    assert_eq!(err.as_str(), "TRANSPORT");
    // Treated like any other refresh failure.
    assert!(h.store.pair().is_none());
}

#[tokio::test]
async fn concurrent_callers_share_one_round() {
    // Delay the mock so all callers arrive while the round is in flight.
    let (addr, calls) =
        mock_refresh_server(vec![(200, pair_body("A2", "R2"))], Some(Duration::from_millis(100)))
            .await;
    let h = Arc::new(Harness::new(&format!("http://{addr}")));
    seed(&h, "A1", "R1");

    let mut tasks = Vec::new();
    for _ in 0..5 {
        let h = Arc::clone(&h);
        tasks.push(tokio::spawn(async move { h.refresher.refresh_access_token().await }));
    }

    for task in tasks {
        let outcome = task.await.expect("join");
        assert_eq!(outcome.expect("refresh"), "A2");
    }
    // Five callers, one network call.
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn concurrent_callers_share_one_failure() {
    let (addr, calls) = mock_refresh_server(
        vec![(403, r#"{"detail":"revoked"}"#.to_owned())],
        Some(Duration::from_millis(100)),
    )
    .await;
    let h = Arc::new(Harness::new(&format!("http://{addr}")));
    seed(&h, "A1", "R1");

    let mut tasks = Vec::new();
    for _ in 0..4 {
        let h = Arc::clone(&h);
        tasks.push(tokio::spawn(async move { h.refresher.refresh_access_token().await }));
    }

    for task in tasks {
        let outcome = task.await.expect("join");
        assert_eq!(outcome.expect_err("must fail"), AuthError::Unauthorized);
    }
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert!(h.store.pair().is_none());
}

#[tokio::test]
async fn sequential_rounds_each_hit_the_network() {
    let (addr, calls) = mock_refresh_server(
        vec![(200, pair_body("A2", "R2")), (200, pair_body("A3", "R3"))],
        None,
    )
    .await;
    let h = Harness::new(&format!("http://{addr}"));
    seed(&h, "A1", "R1");

    assert_eq!(h.refresher.refresh_access_token().await.expect("first"), "A2");
    // The first round is fully resolved, so this starts a new one instead of
    // observing a stale outcome.
    assert_eq!(h.refresher.refresh_access_token().await.expect("second"), "A3");
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    assert_eq!(h.store.refresh_token().as_deref(), Some("R3"));
}
