//! Upstream feed retrieval.
//!
//! This module provides a `FeedSource` trait for obtaining the ordered list of
//! raw feed items, an RSS parser that understands the Nyaa extension elements,
//! and the reqwest-backed `HttpFeedFetcher`.

mod http;
mod parser;
mod types;

pub use http::HttpFeedFetcher;
pub use parser::parse_feed;
pub use types::*;
