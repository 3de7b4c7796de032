//! Filter candidates and the ordering comparator.
//!
//! A [`FilterCandidate`] pairs one filter instance with the scope it was
//! attached at. The hosting pipeline's own record type is closed to
//! extension, so ordering runs entirely on this internal structure and
//! converts back at the boundary via [`into_filter_info`].
//!
//! # Precedence Rules
//!
//! [`compare`] evaluates these rules in strict order. The first applicable
//! rule decides; later rules only break ties left by earlier ones.
//!
//! 1. A global-scope candidate places before any non-global candidate,
//!    regardless of order values and type names.
//! 2. Two ordered candidates compare by order value, ascending. Equal values
//!    fall through to the type-name tie-break.
//! 3. An ordered candidate places before an unordered one, whatever its
//!    value: `order = i32::MAX` still precedes a filter with no declared
//!    preference.
//! 4. Two unordered candidates compare by fully-qualified type name,
//!    ordinal and ascending. Insertion order and hash order are never
//!    consulted.
//!
//! Two candidates of the same concrete type, in the same tier, with the same
//! declared order (or both undeclared) compare as `Equal`; their relative
//! placement is unspecified. [`order_filters`] happens to preserve arrival
//! order for that one case, but callers must not rely on it.
//!
//! [`compare`]: FilterCandidate::compare
//! [`into_filter_info`]: FilterCandidate::into_filter_info
//! [`order_filters`]: crate::order_filters

use crate::error::OrderingResult;
use crate::filter::SharedFilter;
use crate::scope::FilterScope;
use crate::types::{FilterAttachment, FilterInfo};
use std::cmp::Ordering;
use std::fmt;

/// One filter awaiting placement in the execution order.
///
/// Both fields are fixed at construction: candidates are compared and moved,
/// never edited. There is deliberately no `Ord` implementation, because two
/// distinct candidates can compare as `Equal` without being the same filter;
/// sorting goes through [`compare`] with [`slice::sort_by`].
///
/// [`compare`]: Self::compare
#[derive(Clone)]
pub struct FilterCandidate {
    /// The filter being placed.
    instance: SharedFilter,
    /// The scope the filter was attached at.
    scope: FilterScope,
}

impl FilterCandidate {
    /// Creates a candidate from an already-validated instance and scope.
    #[must_use]
    pub fn new(instance: SharedFilter, scope: FilterScope) -> Self {
        Self { instance, scope }
    }

    /// Ingests a raw attachment record from the hosting pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::UnknownScope`] when the record carries a
    /// scope code outside the known tiers.
    ///
    /// [`OrderingError::UnknownScope`]: crate::OrderingError::UnknownScope
    pub fn from_attachment(attachment: FilterAttachment) -> OrderingResult<Self> {
        let scope = FilterScope::from_code(attachment.scope_code)?;
        Ok(Self::new(attachment.instance, scope))
    }

    /// Returns the filter instance.
    #[must_use]
    pub fn instance(&self) -> &SharedFilter {
        &self.instance
    }

    /// Returns the attachment scope.
    #[must_use]
    pub fn scope(&self) -> FilterScope {
        self.scope
    }

    /// Compares two candidates for execution order.
    ///
    /// `Less` means `self` executes before `other`. The result is a pure
    /// function of the two candidates, with no internal state and no side
    /// effects, so it can drive any comparison sort. See the module docs for
    /// the precedence rules.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        // Rule 1: global wraps everything else. Container vs operation is
        // the host's own nesting and does not participate here.
        match (self.scope.is_global(), other.scope.is_global()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        // Rules 2 through 4, keyed on which side declares an order.
        match (self.instance.order_key(), other.instance.order_key()) {
            (Some(this), Some(that)) => this
                .order()
                .cmp(&that.order())
                .then_with(|| self.compare_type_names(other)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.compare_type_names(other),
        }
    }

    /// Ordinal comparison of the two concrete type names.
    fn compare_type_names(&self, other: &Self) -> Ordering {
        self.instance.type_name().cmp(other.instance.type_name())
    }

    /// Converts this candidate into the execution record the hosting
    /// pipeline expects.
    ///
    /// Total: a candidate is well-formed by construction, so the conversion
    /// has no failure path.
    #[must_use]
    pub fn into_filter_info(self) -> FilterInfo {
        FilterInfo::new(self.instance, self.scope)
    }
}

impl fmt::Debug for FilterCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCandidate")
            .field("instance", &self.instance.type_name())
            .field("scope", &self.scope)
            .field("order", &self.instance.order_key().map(|key| key.order()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderingError;
    use crate::filter::{Filter, OrderKey};
    use std::sync::Arc;

    // Unordered probes; ProbeA sorts before ProbeB by type name.
    struct ProbeA;
    struct ProbeB;

    impl Filter for ProbeA {}
    impl Filter for ProbeB {}

    // Ordered probes; RankedA sorts before RankedB by type name.
    struct RankedA {
        order: i32,
    }

    struct RankedB {
        order: i32,
    }

    impl OrderKey for RankedA {
        fn order(&self) -> i32 {
            self.order
        }

        fn set_order(&mut self, order: i32) {
            self.order = order;
        }
    }

    impl Filter for RankedA {
        fn order_key(&self) -> Option<&dyn OrderKey> {
            Some(self)
        }
    }

    impl OrderKey for RankedB {
        fn order(&self) -> i32 {
            self.order
        }

        fn set_order(&mut self, order: i32) {
            self.order = order;
        }
    }

    impl Filter for RankedB {
        fn order_key(&self) -> Option<&dyn OrderKey> {
            Some(self)
        }
    }

    fn candidate(instance: impl Filter, scope: FilterScope) -> FilterCandidate {
        FilterCandidate::new(Arc::new(instance), scope)
    }

    #[test]
    fn test_global_precedes_non_global() {
        let global = candidate(ProbeB, FilterScope::Global);
        let operation = candidate(ProbeA, FilterScope::Operation);

        assert_eq!(global.compare(&operation), Ordering::Less);
        assert_eq!(operation.compare(&global), Ordering::Greater);
    }

    #[test]
    fn test_global_precedes_ordered_non_global() {
        // An unordered global filter still beats an aggressively ordered
        // operation filter.
        let global = candidate(ProbeA, FilterScope::Global);
        let ordered = candidate(RankedA { order: i32::MIN }, FilterScope::Operation);

        assert_eq!(global.compare(&ordered), Ordering::Less);
        assert_eq!(ordered.compare(&global), Ordering::Greater);
    }

    #[test]
    fn test_container_and_operation_rank_alike() {
        // Within the non-global tier the scope is not consulted; the
        // ordered container filter loses to the lower-ordered operation one.
        let container = candidate(RankedA { order: 5 }, FilterScope::Container);
        let operation = candidate(RankedB { order: 1 }, FilterScope::Operation);

        assert_eq!(container.compare(&operation), Ordering::Greater);
    }

    #[test]
    fn test_ordered_pair_compares_by_value() {
        let first = candidate(RankedB { order: -3 }, FilterScope::Operation);
        let second = candidate(RankedA { order: 7 }, FilterScope::Operation);

        assert_eq!(first.compare(&second), Ordering::Less);
        assert_eq!(second.compare(&first), Ordering::Greater);
    }

    #[test]
    fn test_equal_orders_fall_back_to_type_name() {
        let a = candidate(RankedA { order: 5 }, FilterScope::Operation);
        let b = candidate(RankedB { order: 5 }, FilterScope::Operation);

        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
    }

    #[test]
    fn test_same_type_same_order_is_equal() {
        let one = candidate(RankedA { order: 5 }, FilterScope::Operation);
        let two = candidate(RankedA { order: 5 }, FilterScope::Operation);

        assert_eq!(one.compare(&two), Ordering::Equal);
        assert_eq!(two.compare(&one), Ordering::Equal);
    }

    #[test]
    fn test_ordered_precedes_unordered() {
        let ordered = candidate(RankedB { order: i32::MAX }, FilterScope::Operation);
        let unordered = candidate(ProbeA, FilterScope::Operation);

        assert_eq!(ordered.compare(&unordered), Ordering::Less);
        assert_eq!(unordered.compare(&ordered), Ordering::Greater);
    }

    #[test]
    fn test_unordered_pair_compares_by_type_name() {
        let a = candidate(ProbeA, FilterScope::Container);
        let b = candidate(ProbeB, FilterScope::Container);

        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);

        let twin = candidate(ProbeA, FilterScope::Container);
        assert_eq!(a.compare(&twin), Ordering::Equal);
    }

    #[test]
    fn test_from_attachment_accepts_known_codes() {
        let attachment = FilterAttachment::new(Arc::new(ProbeA), FilterScope::Container.code());
        let candidate = FilterCandidate::from_attachment(attachment).unwrap();
        assert_eq!(candidate.scope(), FilterScope::Container);
    }

    #[test]
    fn test_from_attachment_rejects_unknown_codes() {
        let attachment = FilterAttachment::new(Arc::new(ProbeA), 42);
        let error = FilterCandidate::from_attachment(attachment).unwrap_err();
        assert_eq!(error, OrderingError::UnknownScope { code: 42 });
    }

    #[test]
    fn test_into_filter_info_preserves_instance_and_scope() {
        let instance: SharedFilter = Arc::new(RankedA { order: 2 });
        let candidate = FilterCandidate::new(Arc::clone(&instance), FilterScope::Global);

        let info = candidate.into_filter_info();
        assert!(Arc::ptr_eq(&info.instance, &instance));
        assert_eq!(info.scope, FilterScope::Global);
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let candidates = [
            candidate(ProbeA, FilterScope::Global),
            candidate(ProbeB, FilterScope::Container),
            candidate(RankedA { order: 0 }, FilterScope::Operation),
            candidate(RankedB { order: 0 }, FilterScope::Global),
            candidate(RankedA { order: -9 }, FilterScope::Operation),
        ];

        for left in &candidates {
            for right in &candidates {
                assert_eq!(
                    left.compare(right),
                    right.compare(left).reverse(),
                    "Antisymmetry violated for {left:?} vs {right:?}"
                );
            }
        }
    }

    #[test]
    fn test_debug_includes_placement_inputs() {
        let candidate = candidate(RankedA { order: 4 }, FilterScope::Container);
        let debug = format!("{candidate:?}");
        assert!(debug.contains("RankedA"), "Got: {debug}");
        assert!(debug.contains("Container"));
        assert!(debug.contains('4'));
    }
}
