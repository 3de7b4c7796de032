//! Host-boundary record types.
//!
//! The hosting pipeline hands filters over as [`FilterAttachment`] records
//! and receives them back as [`FilterInfo`] records once ordering is done.
//! Everything in between runs on [`FilterCandidate`], the validated internal
//! form.
//!
//! [`FilterCandidate`]: crate::FilterCandidate

use crate::filter::SharedFilter;
use crate::scope::FilterScope;
use std::fmt;

/// A raw filter attachment record, as collected by the hosting pipeline.
///
/// The scope travels as the host's numeric tier code rather than a
/// [`FilterScope`]: attachment metadata originates outside this crate, so
/// nothing about the record is trusted until it passes through
/// [`FilterCandidate::from_attachment`].
///
/// [`FilterCandidate::from_attachment`]: crate::FilterCandidate::from_attachment
#[derive(Clone)]
pub struct FilterAttachment {
    /// The attached filter instance.
    pub instance: SharedFilter,
    /// The hosting pipeline's numeric tier code for this attachment.
    pub scope_code: u8,
}

impl FilterAttachment {
    /// Creates an attachment record.
    #[must_use]
    pub fn new(instance: SharedFilter, scope_code: u8) -> Self {
        Self {
            instance,
            scope_code,
        }
    }
}

impl fmt::Debug for FilterAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterAttachment")
            .field("instance", &self.instance.type_name())
            .field("scope_code", &self.scope_code)
            .finish()
    }
}

/// An execution-ready filter record.
///
/// This is the shape the hosting pipeline's execution stage consumes: the
/// instance to run paired with the scope it was attached at, in a list whose
/// order is final.
#[derive(Clone)]
pub struct FilterInfo {
    /// The filter instance to execute.
    pub instance: SharedFilter,
    /// The scope the filter was attached at.
    pub scope: FilterScope,
}

impl FilterInfo {
    /// Creates an execution record.
    #[must_use]
    pub fn new(instance: SharedFilter, scope: FilterScope) -> Self {
        Self { instance, scope }
    }
}

impl fmt::Debug for FilterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterInfo")
            .field("instance", &self.instance.type_name())
            .field("scope", &self.scope)
            .finish()
    }
}
