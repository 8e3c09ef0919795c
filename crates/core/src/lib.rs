pub mod addon;
pub mod config;
pub mod feed;
pub mod metrics;
pub mod resolver;
pub mod testing;

pub use addon::{manifest, Addon, AddonError, Manifest, CATALOG_ID, CATALOG_TYPE};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, FeedConfig,
    ResolverConfig, ServerConfig, DEFAULT_FEED_URL,
};
pub use feed::{parse_feed, FeedSource, FetchError, HttpFeedFetcher, RawFeedItem};
pub use resolver::{
    build_catalog, build_magnet, decode_id, encode_id, resolve_stream, CatalogEntry,
    LocatorSource, ResolveError, StreamDescriptor,
};
