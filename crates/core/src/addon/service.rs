use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::ResolverConfig;
use crate::feed::{FeedSource, FetchError};
use crate::metrics::STREAM_RESOLUTIONS;
use crate::resolver::{build_catalog, resolve_stream, CatalogEntry, ResolveError, StreamDescriptor};

use super::{CATALOG_ID, CATALOG_TYPE};

/// Errors surfaced by addon requests.
#[derive(Debug, Error)]
pub enum AddonError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl AddonError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Resolve(ResolveError::NotFound(_)) => "not_found",
            Self::Resolve(ResolveError::HashNotFound(_)) => "hash_not_found",
            Self::Resolve(ResolveError::Encoding(_)) => "encoding",
        }
    }
}

/// Catalog and stream entry points.
///
/// Holds no feed state: every call performs its own fetch, so a catalog and
/// a later stream request may observe different feed snapshots.
pub struct Addon {
    source: Arc<dyn FeedSource>,
    resolver: ResolverConfig,
}

impl Addon {
    pub fn new(source: Arc<dyn FeedSource>, resolver: ResolverConfig) -> Self {
        Self { source, resolver }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Catalog for `(kind, id)`.
    ///
    /// Any pair other than the advertised catalog yields an empty list without
    /// touching the feed.
    pub async fn catalog(&self, kind: &str, id: &str) -> Result<Vec<CatalogEntry>, AddonError> {
        if kind != CATALOG_TYPE || id != CATALOG_ID {
            debug!(kind, id, "Unsupported catalog requested");
            return Ok(Vec::new());
        }

        let items = self.source.fetch().await?;
        let catalog = build_catalog(&items);
        info!(
            items = items.len(),
            entries = catalog.len(),
            "Catalog built"
        );
        Ok(catalog)
    }

    /// Resolve the stream for a catalog id. `kind` is not constrained.
    pub async fn stream(&self, kind: &str, id: &str) -> Result<StreamDescriptor, AddonError> {
        debug!(kind, id, "Stream requested");

        let items = self.source.fetch().await?;
        let result = resolve_stream(&items, id, &self.resolver);

        let outcome = match &result {
            Ok(stream) => stream.source.as_str(),
            Err(ResolveError::NotFound(_)) => "not_found",
            Err(ResolveError::HashNotFound(_)) => "hash_not_found",
            Err(ResolveError::Encoding(_)) => "encoding",
        };
        STREAM_RESOLUTIONS.with_label_values(&[outcome]).inc();

        let stream = result?;
        info!(title = %stream.display_title, source = outcome, "Stream resolved");
        Ok(stream)
    }
}
