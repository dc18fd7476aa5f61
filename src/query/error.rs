//! Error types for strict query validation
//!
//! The default query construction path is lenient: unknown sort keys and
//! status strings degrade to no-ops because they originate from trusted UI
//! controls. Adapters that accept external input use the strict parsers in
//! `query::types`, which surface these errors instead.

use thiserror::Error;

/// Errors that can occur when validating a query strictly
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Sort key string is not one of the supported keys
    #[error("Unknown sort key '{0}'")]
    UnknownSortKey(String),

    /// Status string is not a recognized worker/task/product status
    #[error("Unknown status '{0}'")]
    UnknownStatus(String),

    /// Numeric range is malformed (e.g. minimum above maximum)
    #[error("Invalid range: {0}")]
    InvalidRange(String),
}
