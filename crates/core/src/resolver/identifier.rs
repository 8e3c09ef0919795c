//! Catalog identifier codec.
//!
//! Catalog ids are feed guids percent-encoded over everything outside the
//! RFC 3986 unreserved set, so a guid such as `https://nyaa.si/view/1` travels
//! as a single path segment.

use super::ResolveError;

/// Encode a feed guid as a catalog id.
pub fn encode_id(guid: &str) -> String {
    urlencoding::encode(guid).into_owned()
}

/// Recover the feed guid from a catalog id.
///
/// Fails when the decoded bytes are not valid UTF-8.
pub fn decode_id(id: &str) -> Result<String, ResolveError> {
    urlencoding::decode(id)
        .map(|guid| guid.into_owned())
        .map_err(|e| ResolveError::Encoding(format!("{:?}: {}", id, e)))
}
