//! Types for the resolution engine.

use thiserror::Error;

/// Media kind of every catalog entry.
pub const MEDIA_KIND: &str = "series";

/// Summary used when a feed item carries no description.
pub const FALLBACK_DESCRIPTION: &str = "Anime with multiple subtitles";

/// One browsable catalog item, derived from an eligible feed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Percent-encoded feed guid.
    pub id: String,
    /// Feed title, unmodified.
    pub display_name: String,
    /// Description snippet, or [`FALLBACK_DESCRIPTION`].
    pub summary: String,
    /// Always [`MEDIA_KIND`].
    pub kind: &'static str,
    /// Publication year, when the feed dates the item.
    pub release_info: Option<String>,
}

/// Where a stream locator came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorSource {
    /// The feed's dedicated infoHash element.
    InfoHash,
    /// A 40-hex run found in the description snippet.
    Snippet,
    /// The item's direct link (opt-in fallback).
    Link,
}

impl LocatorSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InfoHash => "info_hash",
            Self::Snippet => "snippet",
            Self::Link => "link",
        }
    }
}

/// Resolved, playable representation of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDescriptor {
    /// Echoes the originating item's title.
    pub display_title: String,
    /// Magnet URI, or a direct URL when resolved through the link fallback.
    pub locator: String,
    pub source: LocatorSource,
    /// Size and swarm summary, when the feed provides them.
    pub details: Option<String>,
}

/// Errors that can occur while resolving a stream.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No feed item with guid {0:?}")]
    NotFound(String),

    #[error("No content hash derivable for guid {0:?}")]
    HashNotFound(String),

    #[error("Malformed identifier: {0}")]
    Encoding(String),
}
