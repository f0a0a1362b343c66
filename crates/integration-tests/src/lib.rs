//! Integration test support for the Jollibee ordering client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p jollibee-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `remote_client` - every endpoint against an in-process recording backend
//! - `local_seed` - demo-data seeding against a file-backed store
//!
//! [`MockBackend`] is a throwaway axum server on `127.0.0.1:0`. It answers
//! every request with one canned response and records what it received, so
//! tests can assert the exact method, path, headers and body the client sent.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::{Bytes, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use jollibee_client::JollibeeClient;
use serde_json::Value;

/// Path prefix the mock backend is mounted under, like a hosted `/api`.
pub const API_PREFIX: &str = "/api";

/// A request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path with [`API_PREFIX`] removed.
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    /// A header value as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The body parsed as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

struct BackendState {
    requests: Mutex<Vec<RecordedRequest>>,
    status: StatusCode,
    body: String,
}

/// In-process backend that records requests and replies with a fixed response.
pub struct MockBackend {
    base_url: String,
    state: Arc<BackendState>,
}

impl MockBackend {
    /// Start a backend answering `200 {"ok": true}`.
    pub async fn start() -> Self {
        Self::with_json(StatusCode::OK, &serde_json::json!({"ok": true})).await
    }

    /// Start a backend answering `status` with a JSON body.
    pub async fn with_json(status: StatusCode, body: &Value) -> Self {
        Self::with_raw(status, body.to_string()).await
    }

    /// Start a backend answering `status` with an arbitrary body.
    pub async fn with_raw(status: StatusCode, body: impl Into<String>) -> Self {
        let state = Arc::new(BackendState {
            requests: Mutex::new(Vec::new()),
            status,
            body: body.into(),
        });

        let app = Router::new().fallback(record).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend");
        });

        Self {
            base_url: format!("http://{addr}{API_PREFIX}"),
            state,
        }
    }

    /// Base URL including [`API_PREFIX`].
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A client pointed at this backend.
    #[must_use]
    pub fn client(&self) -> JollibeeClient {
        JollibeeClient::new(&self.base_url).expect("valid mock base URL")
    }

    /// Every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }

    /// The only request received; fails if there were zero or several.
    #[must_use]
    pub fn single_request(&self) -> RecordedRequest {
        let mut requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

async fn record(State(state): State<Arc<BackendState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap_or_default();

    let path = parts.uri.path();
    let path = path.strip_prefix(API_PREFIX).unwrap_or(path).to_string();

    state
        .requests
        .lock()
        .expect("requests lock")
        .push(RecordedRequest {
            method: parts.method,
            path,
            headers: parts.headers,
            body,
        });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
        .into_response()
}
