use chrono::Datelike;
use tracing::warn;

use crate::feed::RawFeedItem;
use crate::metrics::CATALOG_ITEMS_DROPPED;

use super::{encode_id, CatalogEntry, FALLBACK_DESCRIPTION, MEDIA_KIND};

/// Project feed items into catalog entries.
///
/// Items without a guid or a title are dropped; everything else maps to one
/// entry in feed order, duplicates included.
pub fn build_catalog(items: &[RawFeedItem]) -> Vec<CatalogEntry> {
    items.iter().filter_map(catalog_entry).collect()
}

fn catalog_entry(item: &RawFeedItem) -> Option<CatalogEntry> {
    let (guid, title) = match (item.guid.as_deref(), item.title.as_deref()) {
        (Some(guid), Some(title)) => (guid, title),
        (guid, _) => {
            let reason = if guid.is_none() {
                "missing_guid"
            } else {
                "missing_title"
            };
            warn!(
                guid = ?item.guid,
                title = ?item.title,
                reason,
                "Skipping ineligible feed item"
            );
            CATALOG_ITEMS_DROPPED.with_label_values(&[reason]).inc();
            return None;
        }
    };

    Some(CatalogEntry {
        id: encode_id(guid),
        display_name: title.to_string(),
        summary: item
            .description_snippet
            .clone()
            .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
        kind: MEDIA_KIND,
        release_info: item.published.map(|p| p.year().to_string()),
    })
}
