//! Tests for the HTTP feed fetcher against an in-process feed server.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use multisubs_core::{
    Addon, FeedConfig, FeedSource, FetchError, HttpFeedFetcher, ResolverConfig,
};

use common::{fixtures, FeedServer};

const HASH: &str = "0123456789abcdef0123456789abcdef01234567";

fn fetcher(server: &FeedServer) -> HttpFeedFetcher {
    HttpFeedFetcher::new(FeedConfig {
        url: server.url(),
        timeout_secs: 5,
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_parses_served_feed() {
    let items = vec![
        fixtures::hashed_item("https://nyaa.si/view/1", "First [1080p]", HASH),
        fixtures::snippet_item("https://nyaa.si/view/2", "Second & Third", "plain snippet"),
    ];
    let server = FeedServer::with_items(&items).await;

    let fetched = fetcher(&server).fetch().await.unwrap();
    assert_eq!(fetched, items);
}

#[tokio::test]
async fn test_fetch_empty_channel() {
    let server = FeedServer::with_items(&[]).await;
    let fetched = fetcher(&server).fetch().await.unwrap();
    assert!(fetched.is_empty());
}

#[tokio::test]
async fn test_fetch_http_error_status() {
    let server = FeedServer::start(StatusCode::SERVICE_UNAVAILABLE, "down".to_string()).await;
    let result = fetcher(&server).fetch().await;
    assert!(matches!(result, Err(FetchError::HttpStatus(503))));
}

#[tokio::test]
async fn test_fetch_non_rss_body_is_parse_error() {
    let server = FeedServer::start(StatusCode::OK, "<html><body>hi</body></html>".to_string()).await;
    let result = fetcher(&server).fetch().await;
    assert!(matches!(result, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_truncated_document_is_parse_error() {
    let mut body = fixtures::rss_document(&[fixtures::feed_item("abc", "Show")]);
    body.truncate(body.len() / 2);
    let server = FeedServer::start(StatusCode::OK, body).await;

    let result = fetcher(&server).fetch().await;
    assert!(matches!(result, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_body_over_limit() {
    let server = FeedServer::with_items(&[fixtures::feed_item("abc", "Show")]).await;
    let fetcher = HttpFeedFetcher::new(FeedConfig {
        url: server.url(),
        max_body_bytes: 16,
        ..Default::default()
    })
    .unwrap();

    let result = fetcher.fetch().await;
    assert!(matches!(result, Err(FetchError::ResponseTooLarge(16))));
}

#[tokio::test]
async fn test_fetch_unreachable_host_is_network_error() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let fetcher = HttpFeedFetcher::new(FeedConfig {
        url: format!("http://127.0.0.1:{}/rss", port),
        timeout_secs: 5,
        ..Default::default()
    })
    .unwrap();

    let result = fetcher.fetch().await;
    assert!(matches!(result, Err(FetchError::Network(_))));
}

#[tokio::test]
async fn test_addon_over_http_feed() {
    let server = FeedServer::with_items(&[
        fixtures::hashed_item("https://nyaa.si/view/1", "Show", HASH),
        fixtures::feed_item("https://nyaa.si/view/2", "No Hash"),
    ])
    .await;
    let source: Arc<dyn FeedSource> = Arc::new(fetcher(&server));
    let addon = Addon::new(source, ResolverConfig::default());

    let catalog = addon.catalog("series", "nyaa-multisubs").await.unwrap();
    assert_eq!(catalog.len(), 2);

    let stream = addon.stream("series", &catalog[0].id).await.unwrap();
    assert!(stream.locator.starts_with(&format!("magnet:?xt=urn:btih:{}", HASH)));

    assert!(addon.stream("series", &catalog[1].id).await.is_err());
}
