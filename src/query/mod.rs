//! Query construction and validation
//!
//! A query captures every active facet (text, category, price range,
//! minimum rating, status) plus the sort key, in one immutable value. Call
//! sites construct a fresh query per user interaction and hand it, together
//! with a catalog slice, to the engine.
//!
//! Two construction modes are provided:
//!
//! - **Lenient** (default): unknown sort keys and status strings degrade to
//!   no-ops, and malformed numeric ranges are repaired at build time. This
//!   matches data arriving from trusted UI controls.
//! - **Strict**: `FromStr` on `SortKey`, `StatusFilter::try_from_keys`, and
//!   `Query::validate_strict` reject bad values with a [`QueryError`] for
//!   adapters facing external input.

pub mod error;
pub mod types;

pub use error::QueryError;
pub use types::{CategoryFilter, Query, QueryBuilder, SortKey, StatusFilter};
