//! Test fixtures for taxis development and testing.
//!
//! This module provides a small set of pre-built filter types, two with a
//! declared order and two without, plus helpers for building attachment
//! records. Their type names were picked so the four sort alphabetically,
//! which keeps name-tie-break assertions readable.
//!
//! # Example
//!
//! ```
//! use taxis::fixtures::{attachment, AuditFilter};
//! use taxis::FilterScope;
//!
//! let record = attachment(AuditFilter, FilterScope::Global);
//! assert_eq!(record.scope_code, 0);
//! ```

use crate::candidate::FilterCandidate;
use crate::filter::{Filter, OrderKey, SharedFilter};
use crate::scope::FilterScope;
use crate::types::FilterAttachment;
use std::sync::Arc;

/// An unordered filter, standing in for passive observation of requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditFilter;

impl Filter for AuditFilter {}

/// An unordered filter, standing in for response-body rewriting.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressionFilter;

impl Filter for CompressionFilter {}

/// An ordered filter, standing in for admission control that must run
/// early.
#[derive(Debug, Clone, Copy)]
pub struct QuotaFilter {
    order: i32,
}

impl QuotaFilter {
    /// Creates a quota filter with the given order value.
    #[must_use]
    pub const fn new(order: i32) -> Self {
        Self { order }
    }
}

impl OrderKey for QuotaFilter {
    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

impl Filter for QuotaFilter {
    fn order_key(&self) -> Option<&dyn OrderKey> {
        Some(self)
    }
}

/// An ordered filter, standing in for retry wrapping that must enclose
/// later filters.
#[derive(Debug, Clone, Copy)]
pub struct RetryFilter {
    order: i32,
}

impl RetryFilter {
    /// Creates a retry filter with the given order value.
    #[must_use]
    pub const fn new(order: i32) -> Self {
        Self { order }
    }
}

impl OrderKey for RetryFilter {
    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

impl Filter for RetryFilter {
    fn order_key(&self) -> Option<&dyn OrderKey> {
        Some(self)
    }
}

/// Builds a raw attachment record for `filter` at `scope`, using the
/// numeric tier code the hosting pipeline would send.
#[must_use]
pub fn attachment(filter: impl Filter, scope: FilterScope) -> FilterAttachment {
    FilterAttachment::new(Arc::new(filter), scope.code())
}

/// Builds a validated candidate for `filter` at `scope`.
#[must_use]
pub fn candidate(filter: impl Filter, scope: FilterScope) -> FilterCandidate {
    FilterCandidate::new(shared(filter), scope)
}

/// Wraps a concrete filter as a [`SharedFilter`].
#[must_use]
pub fn shared(filter: impl Filter) -> SharedFilter {
    Arc::new(filter)
}
