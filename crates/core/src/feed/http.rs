//! reqwest-backed feed fetcher.

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::config::FeedConfig;
use crate::metrics::{FEED_FETCHES, FEED_FETCH_DURATION, FEED_ITEMS};

use super::{parse_feed, FeedSource, FetchError, RawFeedItem};

/// Fetches the configured feed URL over HTTP, once per call.
///
/// No caching and no retries: every call performs exactly one request and
/// either returns the full item list or an error. Dropping the returned future
/// aborts the in-flight request.
pub struct HttpFeedFetcher {
    client: Client,
    config: FeedConfig,
}

impl HttpFeedFetcher {
    /// Create a new fetcher for the given feed configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// The URL this fetcher reads.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    async fn fetch_body(&self) -> Result<String, FetchError> {
        let mut response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let limit = self.config.max_body_bytes;
        if let Some(len) = response.content_length() {
            if len > limit as u64 {
                return Err(FetchError::ResponseTooLarge(limit));
            }
        }

        // Content-Length is advisory; enforce the limit while streaming.
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(map_reqwest_error)? {
            if body.len() + chunk.len() > limit {
                return Err(FetchError::ResponseTooLarge(limit));
            }
            body.extend_from_slice(&chunk);
        }

        String::from_utf8(body)
            .map_err(|e| FetchError::Parse(format!("Feed body is not valid UTF-8: {}", e)))
    }
}

#[async_trait]
impl FeedSource for HttpFeedFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self) -> Result<Vec<RawFeedItem>, FetchError> {
        let start = Instant::now();
        debug!(url = %self.config.url, "Fetching feed");

        let result = match self.fetch_body().await {
            Ok(body) => parse_feed(&body),
            Err(e) => Err(e),
        };

        let outcome = match &result {
            Ok(_) => "success",
            Err(FetchError::Parse(_)) => "parse_error",
            Err(FetchError::Timeout) => "timeout",
            Err(_) => "error",
        };
        FEED_FETCHES.with_label_values(&[outcome]).inc();
        FEED_FETCH_DURATION
            .with_label_values(&[outcome])
            .observe(start.elapsed().as_secs_f64());

        match &result {
            Ok(items) => {
                FEED_ITEMS.observe(items.len() as f64);
                debug!(
                    items = items.len(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Feed fetched"
                );
            }
            Err(e) => warn!(url = %self.config.url, error = %e, "Feed fetch failed"),
        }

        result
    }
}

fn map_reqwest_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(e.to_string())
    }
}
