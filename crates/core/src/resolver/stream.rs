use tracing::debug;

use crate::config::ResolverConfig;
use crate::feed::RawFeedItem;

use super::{
    build_magnet, decode_id, extract_info_hash, LocatorSource, ResolveError, StreamDescriptor,
};

/// Resolve a catalog id to a stream.
///
/// The id is percent-decoded back to a guid and matched against the items in
/// feed order (first match wins). When nothing matches the decoded guid, the
/// id itself is tried verbatim: a transport that already decoded the catalog
/// id once hands over the guid, and decoding it again would mangle a literal
/// `%XX` in it. The locator is a magnet built from the
/// derived content hash; with `link_fallback` enabled an item without a hash
/// resolves to its direct link instead.
pub fn resolve_stream(
    items: &[RawFeedItem],
    requested_id: &str,
    config: &ResolverConfig,
) -> Result<StreamDescriptor, ResolveError> {
    let decoded = decode_id(requested_id);

    let found = decoded
        .as_deref()
        .ok()
        .and_then(|guid| find_by_guid(items, guid))
        .or_else(|| find_by_guid(items, requested_id));

    let item = match found {
        Some(item) => item,
        None => return Err(decoded.map_or_else(|e| e, ResolveError::NotFound)),
    };
    let guid = item.guid.clone().unwrap_or_default();

    // Eligible catalog items always have a title; a titleless match resolves
    // with an empty display name.
    let title = item.title.clone().unwrap_or_default();

    let (locator, source) = match extract_info_hash(item) {
        Some((hash, source)) => (build_magnet(&hash, &title), source),
        None => match item.link.as_ref().filter(|_| config.link_fallback) {
            Some(link) => (link.clone(), LocatorSource::Link),
            None => return Err(ResolveError::HashNotFound(guid)),
        },
    };

    debug!(guid = %guid, source = source.as_str(), "Resolved stream");

    Ok(StreamDescriptor {
        display_title: title,
        locator,
        source,
        details: details(item),
    })
}

fn find_by_guid<'a>(items: &'a [RawFeedItem], guid: &str) -> Option<&'a RawFeedItem> {
    items.iter().find(|item| item.guid.as_deref() == Some(guid))
}

/// "1.4 GiB | 12 seeders | 3 leechers", omitting whatever the feed lacks.
fn details(item: &RawFeedItem) -> Option<String> {
    let parts: Vec<String> = [
        item.size.clone(),
        item.seeders.map(|s| format!("{} seeders", s)),
        item.leechers.map(|l| format!("{} leechers", l)),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}
