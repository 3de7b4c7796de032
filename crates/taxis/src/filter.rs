//! Core filter traits.
//!
//! This module defines the [`Filter`] trait that all pipeline filters
//! implement, and the [`OrderKey`] capability a filter additionally
//! implements to declare an explicit execution-order preference.
//!
//! # Design Philosophy
//!
//! Ordering never inspects what a filter does. Execution semantics belong to
//! the hosting pipeline; the only facts consumed here are a filter's concrete
//! type name and, when declared, its order value. Keeping [`Filter`] this
//! narrow lets any host-side filter representation participate by wrapping.
//!
//! Declaring an order is an opt-in capability, not a field with a default.
//! A filter that does not implement [`OrderKey`] is *unordered*, which is a
//! distinct state from `order() == 0`: an unordered filter always yields to
//! an ordered one, however large or small the ordered value is.
//!
//! # Example
//!
//! ```
//! use taxis::{Filter, OrderKey};
//!
//! struct DeadlineFilter {
//!     order: i32,
//! }
//!
//! impl OrderKey for DeadlineFilter {
//!     fn order(&self) -> i32 {
//!         self.order
//!     }
//!
//!     fn set_order(&mut self, order: i32) {
//!         self.order = order;
//!     }
//! }
//!
//! impl Filter for DeadlineFilter {
//!     fn order_key(&self) -> Option<&dyn OrderKey> {
//!         Some(self)
//!     }
//! }
//!
//! let filter = DeadlineFilter { order: -5 };
//! assert_eq!(filter.order_key().map(|key| key.order()), Some(-5));
//! ```

use std::sync::Arc;

/// A shared, type-erased filter instance.
///
/// Attachment records and execution records both hold the instance through
/// this alias, so ordering a set of filters never clones or re-creates them.
pub type SharedFilter = Arc<dyn Filter>;

/// The trait all pipeline filters implement.
///
/// # Invariants
///
/// - `type_name` MUST be stable for the life of the process; the comparator
///   uses it as a deterministic tie-break key
/// - `order_key` MUST consistently return `Some` or `None` for a given
///   instance; flapping between the two makes the comparator intransitive
pub trait Filter: Send + Sync + 'static {
    /// Returns the fully-qualified name of the concrete filter type.
    ///
    /// Names compare ordinally (byte-wise), never by any locale or
    /// case-folding rule, so placement is reproducible across runs and
    /// platforms. The default returns [`std::any::type_name`] for the
    /// implementing type, which is the right answer for every ordinary
    /// filter.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns this filter's [`OrderKey`] capability, if it declares one.
    ///
    /// The default returns `None`, placing the filter after every ordered
    /// filter in its tier. Implementations that also implement [`OrderKey`]
    /// return `Some(self)`:
    ///
    /// ```ignore
    /// impl Filter for MyFilter {
    ///     fn order_key(&self) -> Option<&dyn OrderKey> {
    ///         Some(self)
    ///     }
    /// }
    /// ```
    fn order_key(&self) -> Option<&dyn OrderKey> {
        None
    }
}

/// Capability trait: an explicit integer execution-order preference.
///
/// Smaller values execute earlier. The value is an arbitrary `i32`:
/// negative, zero, and positive are all legal, no range is enforced, and
/// equal values across distinct filter types are resolved by the type-name
/// tie-break.
pub trait OrderKey {
    /// Returns the declared execution-order value.
    fn order(&self) -> i32;

    /// Replaces the declared order value.
    ///
    /// Mutation happens while the filter author still owns the instance;
    /// once wrapped in a [`SharedFilter`] the value is fixed.
    fn set_order(&mut self, order: i32);
}
