//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process router
//! backed by a mock feed source, and a fixture HTTP server that serves an RSS
//! document for tests exercising the real `HttpFeedFetcher`.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::task::JoinHandle;
use tower::ServiceExt;

use multisubs_core::{
    testing::MockFeedSource, Addon, FeedSource, RawFeedItem, ResolverConfig,
};
use multisubs_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use multisubs_core::testing::fixtures;

/// Test fixture for E2E testing with a mock feed.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_catalog() {
///     let fixture = TestFixture::with_items(vec![fixtures::feed_item("abc", "Show")]);
///     let response = fixture.get("/catalog/series/nyaa-multisubs.json").await;
///     assert_eq!(response.body["metas"][0]["name"], "Show");
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock feed - configure items or failures
    pub feed: Arc<MockFeedSource>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Create a new test fixture with an empty feed.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a test fixture serving the given feed items.
    pub fn with_items(items: Vec<RawFeedItem>) -> Self {
        Self::with_resolver(items, ResolverConfig::default())
    }

    /// Create a test fixture with a custom resolver configuration.
    pub fn with_resolver(items: Vec<RawFeedItem>, resolver: ResolverConfig) -> Self {
        let feed = Arc::new(MockFeedSource::with_items(items));
        let addon = Addon::new(Arc::clone(&feed) as Arc<dyn FeedSource>, resolver);
        let state = Arc::new(AppState::new(addon));

        Self {
            router: create_router(state),
            feed,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        send(self.router.clone(), request).await
    }

    /// Send a GET request with an Origin header (for CORS checks).
    pub async fn get_with_origin(&self, path: &str, origin: &str) -> axum::http::Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }
}

async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let body_bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect body")
        .to_bytes();

    let text = String::from_utf8_lossy(&body_bytes).into_owned();
    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        content_type,
        body,
        text,
    }
}

/// An in-process HTTP server standing in for the upstream feed.
pub struct FeedServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FeedServer {
    /// Serve `body` with `status` at `/rss`.
    pub async fn start(status: StatusCode, body: String) -> Self {
        let app = Router::new().route(
            "/rss",
            get(move || {
                let body = body.clone();
                async move { (status, [(header::CONTENT_TYPE, "application/rss+xml")], body) }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind feed server");
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr, handle }
    }

    /// Serve items as an RSS document.
    pub async fn with_items(items: &[RawFeedItem]) -> Self {
        Self::start(StatusCode::OK, fixtures::rss_document(items)).await
    }

    pub fn url(&self) -> String {
        format!("http://{}/rss", self.addr)
    }
}

impl Drop for FeedServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status, $response.status, $response.text
        );
    };
}
