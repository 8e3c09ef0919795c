//! Content hash extraction.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::feed::RawFeedItem;

use super::LocatorSource;

/// A run of exactly 40 hex digits, bounded by non-hex characters or the text
/// edges. Longer runs never match.
static HEX_HASH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^0-9A-Fa-f])([0-9A-Fa-f]{40})(?:[^0-9A-Fa-f]|$)").unwrap()
});

/// True for exactly 40 ASCII hex digits.
pub fn is_info_hash(value: &str) -> bool {
    value.len() == 40 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// First exact 40-hex run in `text`, case-insensitive, returned as written.
pub fn find_hex_hash(text: &str) -> Option<&str> {
    HEX_HASH
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Derive the content hash of a feed item.
///
/// A well-formed `info_hash` wins; otherwise the description snippet is
/// scanned. Returns `None` rather than guessing.
pub fn extract_info_hash(item: &RawFeedItem) -> Option<(String, LocatorSource)> {
    if let Some(hash) = item.info_hash.as_deref().filter(|h| is_info_hash(h)) {
        return Some((hash.to_string(), LocatorSource::InfoHash));
    }

    item.description_snippet
        .as_deref()
        .and_then(find_hex_hash)
        .map(|hash| (hash.to_string(), LocatorSource::Snippet))
}
