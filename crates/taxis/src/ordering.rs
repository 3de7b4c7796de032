//! The ordering pass.
//!
//! The hosting pipeline collects every filter applicable to a request, in
//! whatever order its attachment walk produced, and hands the list to
//! [`order_filters`]. Each record is validated on the way in; the list is
//! then sorted with [`FilterCandidate::compare`] and handed back as
//! execution-ready [`FilterInfo`] records.
//!
//! The pass is synchronous and touches no shared state, so independent
//! requests can order their filter lists concurrently without coordination.

use crate::candidate::FilterCandidate;
use crate::error::OrderingResult;
use crate::types::{FilterAttachment, FilterInfo};

/// Orders a request's filter attachments into execution order.
///
/// The output is a permutation of the input: nothing is dropped, nothing is
/// duplicated, and the same input set always yields the same order. The one
/// exception is two entries of the same concrete type in the same tier with
/// the same (or no) declared order, whose relative placement is unspecified.
/// The current implementation preserves their arrival order, but that is
/// incidental.
///
/// # Errors
///
/// Fails with [`OrderingError::UnknownScope`] if any attachment carries a
/// scope code outside the known tiers. Validation is fail-fast: the first
/// bad record aborts the call and no partial result is returned.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use taxis::fixtures::{AuditFilter, QuotaFilter};
/// use taxis::{order_filters, Filter, FilterAttachment, FilterScope};
///
/// let attachments = vec![
///     FilterAttachment::new(Arc::new(AuditFilter), FilterScope::Operation.code()),
///     FilterAttachment::new(Arc::new(QuotaFilter::new(5)), FilterScope::Operation.code()),
/// ];
///
/// let ordered = order_filters(attachments).unwrap();
///
/// // The quota filter declares an order, so it runs before the audit
/// // filter, which does not.
/// assert!(ordered[0].instance.type_name().ends_with("QuotaFilter"));
/// assert!(ordered[1].instance.type_name().ends_with("AuditFilter"));
/// ```
///
/// [`OrderingError::UnknownScope`]: crate::OrderingError::UnknownScope
pub fn order_filters(attachments: Vec<FilterAttachment>) -> OrderingResult<Vec<FilterInfo>> {
    tracing::trace!(candidates = attachments.len(), "Ordering filter candidates");

    let mut candidates = attachments
        .into_iter()
        .map(FilterCandidate::from_attachment)
        .collect::<OrderingResult<Vec<_>>>()?;

    candidates.sort_by(FilterCandidate::compare);

    if tracing::enabled!(tracing::Level::DEBUG) {
        let order: Vec<&'static str> = candidates
            .iter()
            .map(|candidate| candidate.instance().type_name())
            .collect();
        tracing::debug!(order = ?order, "Filter execution order resolved");
    }

    Ok(candidates
        .into_iter()
        .map(FilterCandidate::into_filter_info)
        .collect())
}
