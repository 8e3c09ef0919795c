//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Feed fetches (count and latency by outcome, items per feed)
//! - Catalog projection and stream resolution outcomes

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, HistogramVec, IntCounterVec, Opts};

// =============================================================================
// Feed Metrics
// =============================================================================

/// Feed fetches total by outcome.
pub static FEED_FETCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("multisubs_feed_fetches_total", "Total upstream feed fetches"),
        &["outcome"], // "success", "parse_error", "timeout", "error"
    )
    .unwrap()
});

/// Feed fetch duration in seconds.
pub static FEED_FETCH_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "multisubs_feed_fetch_duration_seconds",
            "Duration of upstream feed fetches",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["outcome"],
    )
    .unwrap()
});

/// Items per fetched feed.
pub static FEED_ITEMS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new("multisubs_feed_items", "Number of items per fetched feed")
            .buckets(vec![0.0, 1.0, 10.0, 25.0, 50.0, 75.0, 100.0, 250.0]),
    )
    .unwrap()
});

// =============================================================================
// Resolution Metrics
// =============================================================================

/// Items dropped from the catalog for lacking a guid or title.
pub static CATALOG_ITEMS_DROPPED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "multisubs_catalog_items_dropped_total",
            "Feed items excluded from the catalog",
        ),
        &["reason"], // "missing_guid", "missing_title"
    )
    .unwrap()
});

/// Stream resolutions total by outcome.
pub static STREAM_RESOLUTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "multisubs_stream_resolutions_total",
            "Total stream resolutions",
        ),
        // "info_hash", "snippet", "link", "not_found", "hash_not_found", "encoding"
        &["outcome"],
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(FEED_FETCHES.clone()),
        Box::new(FEED_FETCH_DURATION.clone()),
        Box::new(FEED_ITEMS.clone()),
        Box::new(CATALOG_ITEMS_DROPPED.clone()),
        Box::new(STREAM_RESOLUTIONS.clone()),
    ]
}
