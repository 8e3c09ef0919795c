//! Fault boundary for addon endpoints.
//!
//! Every addon endpoint answers with well-formed JSON. A failed fetch, an
//! unknown or unresolvable id and a malformed path all collapse into the
//! endpoint's empty collection here, and nowhere else.

use multisubs_core::AddonError;
use tracing::warn;

use crate::metrics::EMPTY_RESPONSES_TOTAL;

/// Unwrap an endpoint result, replacing any error with `T::default()`.
pub fn fault_boundary<T: Default>(endpoint: &'static str, result: Result<T, AddonError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(
                endpoint,
                kind = e.kind(),
                error = %e,
                "Request failed, answering with an empty result"
            );
            EMPTY_RESPONSES_TOTAL
                .with_label_values(&[endpoint, e.kind()])
                .inc();
            T::default()
        }
    }
}
