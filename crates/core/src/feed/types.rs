//! Types for the feed fetcher.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// One `<item>` of the upstream feed, as delivered.
///
/// Every field is optional: the parser normalizes missing and blank elements to
/// `None` and performs no further validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeedItem {
    /// Feed-assigned unique token (`<guid>`).
    pub guid: Option<String>,
    /// Release title (`<title>`).
    pub title: Option<String>,
    /// Plain-text rendering of `<description>` with markup removed.
    pub description_snippet: Option<String>,
    /// Content hash from the `nyaa:infoHash` extension element.
    pub info_hash: Option<String>,
    /// Direct URL to the resource (`<link>`).
    pub link: Option<String>,
    /// Publication time (`<pubDate>`).
    pub published: Option<DateTime<Utc>>,
    /// Seeder count from `nyaa:seeders`.
    pub seeders: Option<u32>,
    /// Leecher count from `nyaa:leechers`.
    pub leechers: Option<u32>,
    /// Human readable size from `nyaa:size` (e.g. "1.4 GiB").
    pub size: Option<String>,
}

/// Errors that can occur while fetching or parsing the feed.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Feed request failed: {0}")]
    Network(String),

    #[error("Feed request timed out")]
    Timeout,

    #[error("Feed returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Feed body exceeds {0} bytes")]
    ResponseTooLarge(usize),

    #[error("Failed to parse feed: {0}")]
    Parse(String),
}

/// Trait for feed backends.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Source name for logging/metrics.
    fn name(&self) -> &str;

    /// Fetch and parse the feed, returning items in feed order.
    ///
    /// Either the complete item list or an error; never a partial list.
    async fn fetch(&self) -> Result<Vec<RawFeedItem>, FetchError>;
}
