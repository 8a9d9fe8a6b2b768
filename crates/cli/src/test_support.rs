// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test infrastructure: mock API servers and a wired session harness.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

use crate::client::AuthClient;
use crate::gate::SessionGate;
use crate::refresh::RefreshCoordinator;
use crate::session::SessionCache;
use crate::store::CredentialStore;

/// Bind a router on an ephemeral port and serve it in the background.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    addr
}

/// Start a mock refresh endpoint that plays back `responses` in order,
/// repeating the last one, optionally pausing before each reply.
pub async fn mock_refresh_server(
    responses: Vec<(u16, String)>,
    delay: Option<Duration>,
) -> (SocketAddr, Arc<AtomicU32>) {
    let call_count = Arc::new(AtomicU32::new(0));
    let call_count_clone = Arc::clone(&call_count);
    let responses = Arc::new(responses);

    let app = Router::new().route(
        "/auth/refresh/",
        post(move |_body: String| {
            let count = Arc::clone(&call_count_clone);
            let resps = Arc::clone(&responses);
            async move {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                let idx = count.fetch_add(1, Ordering::Relaxed) as usize;
                let (status, body) = if idx < resps.len() {
                    resps[idx].clone()
                } else {
                    resps.last().cloned().unwrap_or((500, "{}".to_owned()))
                };
                (
                    axum::http::StatusCode::from_u16(status)
                        .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
                    body,
                )
            }
        }),
    );

    (serve(app).await, call_count)
}

/// A fully wired session stack against an arbitrary base URL, with its
/// credential file in a temp dir.
pub struct Harness {
    pub dir: tempfile::TempDir,
    pub store: Arc<CredentialStore>,
    pub cache: Arc<SessionCache>,
    pub refresher: Arc<RefreshCoordinator>,
    pub client: AuthClient,
    pub gate: SessionGate,
}

impl Harness {
    pub fn new(base_url: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("client");

        let store = Arc::new(CredentialStore::new(dir.path()));
        store.load();
        let cache = Arc::new(SessionCache::new(Arc::clone(&store)));
        let refresher = Arc::new(RefreshCoordinator::new(
            Arc::clone(&store),
            Arc::clone(&cache),
            http.clone(),
            base_url,
        ));
        let client = AuthClient::new(http, base_url, Arc::clone(&store), Arc::clone(&refresher));
        let gate = SessionGate::new(Arc::clone(&cache));

        Self { dir, store, cache, refresher, client, gate }
    }
}

/// JSON body for a token pair response.
pub fn pair_body(access: &str, refresh: &str) -> String {
    serde_json::json!({ "access": access, "refresh": refresh }).to_string()
}

/// JSON body for a profile response.
pub fn profile_body(id: i64, email: &str, is_staff: bool) -> String {
    serde_json::json!({ "id": id, "email": email, "is_staff": is_staff }).to_string()
}
