//! Resolution engine: turns fetched feed items into catalog entries and
//! resolves a catalog id back into a playable magnet locator.
//!
//! Everything here is synchronous and operates on an already-fetched item
//! list; the only suspension point of a request is the feed fetch.

mod catalog;
mod hash;
mod identifier;
mod magnet;
mod stream;
mod types;

pub use catalog::build_catalog;
pub use hash::{extract_info_hash, find_hex_hash, is_info_hash};
pub use identifier::{decode_id, encode_id};
pub use magnet::{build_magnet, TRACKERS};
pub use stream::resolve_stream;
pub use types::*;
