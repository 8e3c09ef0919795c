//! Addon orchestration.
//!
//! Composes one feed fetch with one resolution step per request, and exposes
//! the static manifest that advertises what the addon serves.

mod manifest;
mod service;

pub use manifest::{manifest, CatalogDescriptor, Manifest, CATALOG_ID, CATALOG_TYPE};
pub use service::{Addon, AddonError};
