//! Error types for taxis.
//!
//! This module provides the [`OrderingError`] type, returned when the hosting
//! pipeline hands over a malformed attachment record. Ordering itself is a
//! pure computation with no transient failure modes, so every error here is
//! an invalid-argument fault: it means the caller violated its own contract,
//! and there is nothing to retry.

use thiserror::Error;

/// Result type alias using [`OrderingError`].
pub type OrderingResult<T> = Result<T, OrderingError>;

/// Errors raised while ingesting filter attachment records.
///
/// Malformed records are rejected immediately rather than coerced to a
/// default placement. A filter that silently landed in the wrong tier would
/// run at the wrong point of the request lifecycle, which is much harder to
/// diagnose than a failed ordering call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingError {
    /// An attachment carried a scope code outside the known tiers.
    #[error("Unknown filter scope code {code}: expected 0 (global), 10 (container), or 20 (operation)")]
    UnknownScope {
        /// The scope code as received from the hosting pipeline.
        code: u8,
    },
}
