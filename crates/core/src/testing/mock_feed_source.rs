//! Mock feed source for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::feed::{FeedSource, FetchError, RawFeedItem};

/// Mock implementation of the FeedSource trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable item list
/// - Fail every fetch with a configured error
/// - Count fetches for assertions
///
/// # Example
///
/// ```rust,ignore
/// use multisubs_core::testing::{MockFeedSource, fixtures};
///
/// let source = MockFeedSource::with_items(vec![fixtures::feed_item("abc", "Show S01")]);
/// let items = source.fetch().await?;
/// assert_eq!(items.len(), 1);
/// assert_eq!(source.fetch_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockFeedSource {
    items: Arc<RwLock<Vec<RawFeedItem>>>,
    error: Arc<RwLock<Option<FetchError>>>,
    fetches: AtomicUsize,
}

impl MockFeedSource {
    /// Create a new mock source with an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source serving the given items.
    pub fn with_items(items: Vec<RawFeedItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            ..Default::default()
        }
    }

    /// Replace the items returned by subsequent fetches.
    pub async fn set_items(&self, items: Vec<RawFeedItem>) {
        *self.items.write().await = items;
    }

    /// Make every subsequent fetch fail with `error`.
    pub async fn set_error(&self, error: FetchError) {
        *self.error.write().await = Some(error);
    }

    /// Clear a configured error.
    pub async fn clear_error(&self) {
        *self.error.write().await = None;
    }

    /// Number of fetches performed.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<Vec<RawFeedItem>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.error.read().await.clone() {
            return Err(error);
        }

        Ok(self.items.read().await.clone())
    }
}
