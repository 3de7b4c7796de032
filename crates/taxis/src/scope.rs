//! Filter attachment scopes.
//!
//! A filter attaches to the hosting pipeline at one of three nested tiers:
//! pipeline-wide, on a handler-grouping type, or on a single operation. The
//! host encodes the tier as a numeric code on its attachment records;
//! [`FilterScope`] is the typed form used everywhere inside this crate.
//!
//! | Scope | Code | Attached to |
//! |---|---|---|
//! | [`Global`] | 0 | The whole pipeline |
//! | [`Container`] | 10 | A handler-grouping type |
//! | [`Operation`] | 20 | One specific operation |
//!
//! [`Global`]: FilterScope::Global
//! [`Container`]: FilterScope::Container
//! [`Operation`]: FilterScope::Operation

use crate::error::{OrderingError, OrderingResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The attachment tier of a filter.
///
/// Discriminants match the hosting pipeline's wire codes. The codes are
/// spaced so the host can introduce intermediate tiers without renumbering
/// existing attachments.
///
/// # Example
///
/// ```
/// use taxis::FilterScope;
///
/// let scope = FilterScope::from_code(10).unwrap();
/// assert_eq!(scope, FilterScope::Container);
/// assert!(!scope.is_global());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum FilterScope {
    /// Attached pipeline-wide; wraps every container and operation filter.
    Global = 0,
    /// Attached to a handler-grouping type.
    Container = 10,
    /// Attached to one specific operation.
    Operation = 20,
}

impl FilterScope {
    /// Parses the hosting pipeline's numeric scope code.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::UnknownScope`] if `code` is not one of the
    /// three defined tier codes. Unknown codes are never coerced to a
    /// default tier.
    pub const fn from_code(code: u8) -> OrderingResult<Self> {
        match code {
            0 => Ok(Self::Global),
            10 => Ok(Self::Container),
            20 => Ok(Self::Operation),
            _ => Err(OrderingError::UnknownScope { code }),
        }
    }

    /// Returns the numeric code used on attachment records.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the scope name as a static string.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Container => "container",
            Self::Operation => "operation",
        }
    }

    /// Returns `true` for the pipeline-wide tier.
    ///
    /// Global filters always execute before container and operation filters.
    /// This is the only scope distinction the ordering comparator makes; the
    /// container/operation split is the host's own nesting.
    #[must_use]
    pub const fn is_global(self) -> bool {
        matches!(self, Self::Global)
    }

    /// Returns all scopes, outermost first.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Global, Self::Container, Self::Operation]
    }
}

impl fmt::Display for FilterScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for FilterScope {
    type Error = OrderingError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<FilterScope> for u8 {
    fn from(scope: FilterScope) -> Self {
        scope.code()
    }
}
