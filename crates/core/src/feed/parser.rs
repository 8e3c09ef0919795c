//! RSS 2.0 parser for the upstream feed.
//!
//! Elements are matched on their local name, so the Nyaa namespace extension
//! (`nyaa:infoHash`, `nyaa:seeders`, `nyaa:leechers`, `nyaa:size`) maps onto
//! [`RawFeedItem`] whenever the feed carries it and is simply absent otherwise.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::name::QName;
use quick_xml::Reader;
use regex_lite::Regex;

use super::{FetchError, RawFeedItem};

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Item child elements we map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Guid,
    Title,
    Description,
    Link,
    PubDate,
    InfoHash,
    Seeders,
    Leechers,
    Size,
}

impl Field {
    /// Map an element name to a field. Core RSS elements must be unprefixed;
    /// extension elements match with any prefix.
    fn from_name(name: QName<'_>) -> Option<Self> {
        let field = match name.local_name().as_ref() {
            b"guid" => Self::Guid,
            b"title" => Self::Title,
            b"description" => Self::Description,
            b"link" => Self::Link,
            b"pubDate" => Self::PubDate,
            b"infoHash" => Self::InfoHash,
            b"seeders" => Self::Seeders,
            b"leechers" => Self::Leechers,
            b"size" => Self::Size,
            _ => return None,
        };
        if field.is_core() && name.prefix().is_some() {
            return None;
        }
        Some(field)
    }

    fn is_core(self) -> bool {
        matches!(
            self,
            Self::Guid | Self::Title | Self::Description | Self::Link | Self::PubDate
        )
    }
}

/// Parse an RSS document into items, in document order.
///
/// Fails on malformed XML, on a document whose root is not `<rss>`, and on a
/// truncated document; a failure never yields a partial item list.
pub fn parse_feed(content: &str) -> Result<Vec<RawFeedItem>, FetchError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut buf = Vec::new();

    let mut saw_root = false;
    let mut root_closed = false;
    let mut current: Option<RawFeedItem> = None;
    // Open elements below the current <item>; fields are its direct children.
    let mut depth = 0usize;
    let mut field: Option<Field> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if !saw_root {
                    let name = e.local_name();
                    if name.as_ref() != b"rss" {
                        return Err(FetchError::Parse(format!(
                            "expected <rss> root element, found <{}>",
                            String::from_utf8_lossy(name.as_ref())
                        )));
                    }
                    saw_root = true;
                } else if current.is_some() {
                    depth += 1;
                    if depth == 1 {
                        field = Field::from_name(e.name());
                        text.clear();
                    } else if field == Some(Field::Description) {
                        word_break(&mut text);
                    }
                } else if e.local_name().as_ref() == b"item" {
                    current = Some(RawFeedItem::default());
                    depth = 0;
                    field = None;
                }
            }
            Ok(Event::Empty(e)) => {
                if !saw_root {
                    return Err(FetchError::Parse(format!(
                        "expected <rss> root element, found <{}/>",
                        String::from_utf8_lossy(e.local_name().as_ref())
                    )));
                }
                if depth >= 1 && field == Some(Field::Description) {
                    word_break(&mut text);
                }
            }
            Ok(Event::Text(t)) if collecting(field, depth) => {
                let decoded = t
                    .unescape()
                    .map_err(|e| FetchError::Parse(format!("invalid text content: {}", e)))?;
                text.push_str(&decoded);
            }
            Ok(Event::CData(c)) if collecting(field, depth) => {
                text.push_str(&String::from_utf8_lossy(&c));
            }
            Ok(Event::End(e)) => {
                if current.is_none() {
                    if e.local_name().as_ref() == b"rss" {
                        root_closed = true;
                    }
                } else if depth == 0 {
                    // End names are checked by the reader, so this closes <item>.
                    items.extend(current.take());
                    field = None;
                } else {
                    if depth == 1 {
                        if let (Some(f), Some(item)) = (field.take(), current.as_mut()) {
                            assign(item, f, std::mem::take(&mut text));
                        }
                    } else if field == Some(Field::Description) {
                        word_break(&mut text);
                    }
                    depth -= 1;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FetchError::Parse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(FetchError::Parse("document has no root element".to_string()));
    }
    if !root_closed {
        return Err(FetchError::Parse("document ended before </rss>".to_string()));
    }

    Ok(items)
}

/// Text is kept for a direct child of `<item>`, and for anything nested in
/// `<description>`, whose inline markup still carries readable text.
fn collecting(field: Option<Field>, depth: usize) -> bool {
    match field {
        Some(Field::Description) => depth >= 1,
        Some(_) => depth == 1,
        None => false,
    }
}

/// Inline element boundaries separate words.
fn word_break(text: &mut String) {
    if !text.is_empty() && !text.ends_with(' ') {
        text.push(' ');
    }
}

fn assign(item: &mut RawFeedItem, field: Field, raw: String) {
    let value = non_blank(&raw);
    match field {
        Field::Guid => item.guid = value,
        Field::Title => item.title = value,
        Field::Description => item.description_snippet = value.and_then(|v| snippet(&v)),
        Field::Link => item.link = value,
        Field::PubDate => item.published = value.and_then(|v| parse_pub_date(&v)),
        Field::InfoHash => item.info_hash = value,
        Field::Seeders => item.seeders = value.and_then(|v| v.parse().ok()),
        Field::Leechers => item.leechers = value.and_then(|v| v.parse().ok()),
        Field::Size => item.size = value,
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Plain-text rendering of an HTML description: tags removed, entities
/// decoded, whitespace collapsed.
fn snippet(html: &str) -> Option<String> {
    let stripped = MARKUP_TAG.replace_all(html, "");
    let decoded = quick_xml::escape::unescape(&stripped)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| stripped.into_owned());
    let collapsed = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    non_blank(&collapsed)
}

/// RSS dates are RFC 2822 (Nyaa uses `-0000` as the zone).
fn parse_pub_date(date_str: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(date_str)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
