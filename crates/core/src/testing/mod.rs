//! Testing utilities and mock implementations.
//!
//! This module provides a mock [`FeedSource`](crate::feed::FeedSource) and
//! fixtures for building feed items and RSS documents, so the addon can be
//! exercised end to end without reaching the real upstream feed.

mod mock_feed_source;

pub use mock_feed_source::MockFeedSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use quick_xml::escape::escape;

    use crate::feed::RawFeedItem;

    /// A feed item with a guid and title and nothing else.
    pub fn feed_item(guid: &str, title: &str) -> RawFeedItem {
        RawFeedItem {
            guid: Some(guid.to_string()),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    /// A feed item whose content hash is carried by the infoHash extension.
    pub fn hashed_item(guid: &str, title: &str, info_hash: &str) -> RawFeedItem {
        RawFeedItem {
            info_hash: Some(info_hash.to_string()),
            size: Some("1.4 GiB".to_string()),
            seeders: Some(42),
            leechers: Some(3),
            ..feed_item(guid, title)
        }
    }

    /// A feed item whose content hash only appears in the description.
    pub fn snippet_item(guid: &str, title: &str, snippet: &str) -> RawFeedItem {
        RawFeedItem {
            description_snippet: Some(snippet.to_string()),
            ..feed_item(guid, title)
        }
    }

    /// Render items as a Nyaa-style RSS document.
    pub fn rss_document(items: &[RawFeedItem]) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss xmlns:atom="http://www.w3.org/2005/Atom" xmlns:nyaa="https://nyaa.si/xmlns/nyaa" version="2.0">
<channel>
<title>Nyaa - "Multi Subs" - Torrent File RSS</title>
<link>https://nyaa.si/</link>
"#,
        );

        for item in items {
            xml.push_str("<item>\n");
            push_element(&mut xml, "title", item.title.as_deref());
            push_element(&mut xml, "link", item.link.as_deref());
            push_element(&mut xml, "guid", item.guid.as_deref());
            let pub_date = item.published.map(|p| p.to_rfc2822());
            push_element(&mut xml, "pubDate", pub_date.as_deref());
            let seeders = item.seeders.map(|s| s.to_string());
            push_element(&mut xml, "nyaa:seeders", seeders.as_deref());
            let leechers = item.leechers.map(|l| l.to_string());
            push_element(&mut xml, "nyaa:leechers", leechers.as_deref());
            push_element(&mut xml, "nyaa:infoHash", item.info_hash.as_deref());
            push_element(&mut xml, "nyaa:size", item.size.as_deref());
            push_element(&mut xml, "description", item.description_snippet.as_deref());
            xml.push_str("</item>\n");
        }

        xml.push_str("</channel>\n</rss>\n");
        xml
    }

    fn push_element(xml: &mut String, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            xml.push_str(&format!("<{name}>{}</{name}>\n", escape(value)));
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::feed::parse_feed;

        #[test]
        fn test_rss_document_parses_back() {
            let items = vec![
                hashed_item(
                    "https://nyaa.si/view/1",
                    "A & B",
                    "0123456789abcdef0123456789abcdef01234567",
                ),
                snippet_item("https://nyaa.si/view/2", "<C>", "snippet text"),
            ];
            let parsed = parse_feed(&rss_document(&items)).unwrap();
            assert_eq!(parsed, items);
        }
    }
}
