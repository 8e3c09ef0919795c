//! Addon protocol handlers: manifest, catalog and stream.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use multisubs_core::{
    manifest, AddonError, CatalogEntry, Manifest, ResolveError, StreamDescriptor,
};
use serde::Serialize;

use super::boundary::fault_boundary;
use crate::state::AppState;

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Default, Serialize)]
pub struct CatalogResponse {
    pub metas: Vec<MetaPreview>,
}

/// Catalog entry as a meta preview.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaPreview {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_info: Option<String>,
}

impl From<CatalogEntry> for MetaPreview {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id,
            kind: entry.kind.to_string(),
            name: entry.display_name,
            description: entry.summary,
            release_info: entry.release_info,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct StreamResponse {
    pub streams: Vec<StreamItem>,
}

#[derive(Debug, Serialize)]
pub struct StreamItem {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<StreamDescriptor> for StreamItem {
    fn from(stream: StreamDescriptor) -> Self {
        Self {
            name: stream.display_title,
            url: stream.locator,
            description: stream.details,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /manifest.json
pub async fn get_manifest() -> Json<Manifest> {
    Json(manifest())
}

/// GET /catalog/{type}/{id}.json
///
/// Empty `metas` for unsupported catalogs and on any failure.
pub async fn get_catalog(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Json<CatalogResponse> {
    Json(fault_boundary("catalog", catalog(&state, path).await))
}

/// GET /stream/{type}/{id}.json
///
/// One stream on success; empty `streams` when the id is unknown, the item
/// has no derivable hash, the path is malformed or the feed fetch fails.
pub async fn get_stream(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Json<StreamResponse> {
    Json(fault_boundary("stream", stream(&state, path).await))
}

async fn catalog(
    state: &AppState,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<CatalogResponse, AddonError> {
    let (kind, file) = path_params(path)?;
    // Without the .json suffix no catalog matches.
    let Some(id) = file.strip_suffix(".json") else {
        return Ok(CatalogResponse::default());
    };

    let entries = state.addon().catalog(&kind, id).await?;
    Ok(CatalogResponse {
        metas: entries.into_iter().map(MetaPreview::from).collect(),
    })
}

async fn stream(
    state: &AppState,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<StreamResponse, AddonError> {
    let (kind, file) = path_params(path)?;
    let id = file
        .strip_suffix(".json")
        .ok_or_else(|| ResolveError::NotFound(file.clone()))?;

    let stream = state.addon().stream(&kind, id).await?;
    Ok(StreamResponse {
        streams: vec![StreamItem::from(stream)],
    })
}

/// Path segments arrive percent-decoded; a segment that does not decode to
/// UTF-8 is an encoding error.
fn path_params(
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<(String, String), AddonError> {
    path.map(|Path(params)| params)
        .map_err(|rejection| ResolveError::Encoding(rejection.body_text()).into())
}
