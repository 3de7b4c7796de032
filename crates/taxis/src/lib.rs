//! # Taxis
//!
//! Deterministic filter ordering for request-processing pipelines.
//!
//! A pipeline runs cross-cutting behaviors ("filters") around each handler.
//! Filters attach at three nested scopes, and the hosting framework collects
//! every filter applicable to a request into one unordered list. Taxis
//! decides the execution order of that list and nothing else; discovery,
//! invocation, and lifecycle stay with the hosting framework.
//!
//! ```text
//! host collects              taxis                    host executes
//! [attachments] → validate → sort → [FilterInfo, FilterInfo, ...]
//! ```
//!
//! ## Precedence Rules
//!
//! The comparator applies these rules in strict order; the first applicable
//! rule decides.
//!
//! | Rule | Applies when                        | Outcome                        |
//! |------|-------------------------------------|--------------------------------|
//! | 1    | Exactly one side is global scope    | Global filter first            |
//! | 2    | Both declare an [`OrderKey`]        | Ascending order, then name     |
//! | 3    | Exactly one declares an [`OrderKey`]| Ordered filter first           |
//! | 4    | Neither declares an [`OrderKey`]    | Ascending type name            |
//!
//! Type names compare ordinally (byte-wise), so the fallback placement is
//! reproducible across runs and platforms. Insertion order and hash order
//! never decide placement.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use taxis::fixtures::{AuditFilter, QuotaFilter, RetryFilter};
//! use taxis::{order_filters, Filter, FilterAttachment, FilterScope};
//!
//! // Collected in arbitrary order by the host.
//! let attachments = vec![
//!     FilterAttachment::new(Arc::new(RetryFilter::new(5)), FilterScope::Operation.code()),
//!     FilterAttachment::new(Arc::new(AuditFilter), FilterScope::Global.code()),
//!     FilterAttachment::new(Arc::new(QuotaFilter::new(5)), FilterScope::Operation.code()),
//! ];
//!
//! let ordered = order_filters(attachments).unwrap();
//!
//! let names: Vec<_> = ordered
//!     .iter()
//!     .map(|info| info.instance.type_name().rsplit("::").next().unwrap())
//!     .collect();
//!
//! // The global audit filter leads, then the two order-5 filters tied by
//! // value and placed by type name.
//! assert_eq!(names, ["AuditFilter", "QuotaFilter", "RetryFilter"]);
//! ```

#![doc(html_root_url = "https://docs.rs/taxis/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod candidate;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod ordering;
pub mod scope;
pub mod types;

// Re-export main types at crate root
pub use candidate::FilterCandidate;
pub use error::{OrderingError, OrderingResult};
pub use filter::{Filter, OrderKey, SharedFilter};
pub use ordering::order_filters;
pub use scope::FilterScope;
pub use types::{FilterAttachment, FilterInfo};
