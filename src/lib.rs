//! Bazr - a catalog discovery engine for marketplace listings
//!
//! This library provides the shared search core of a labor-marketplace
//! front end: one facet filter, one stable ranker, and one session
//! selection store, consumed by every discovery surface (worker search,
//! task board, product browsing, category drill-down) instead of each
//! surface re-implementing its own.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod listing;
pub mod output;
pub mod query;
pub mod session;

#[cfg(test)]
pub mod testing;

pub use catalog::{Catalog, CatalogError, ListingRecord};
pub use engine::{FacetFilterExt, discover, filter, rank};
pub use listing::{Listing, ListingDetails, ListingKind, Urgency};
pub use query::{Query, QueryError, SortKey, StatusFilter};
pub use session::{SelectionState, SelectionView};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BazrError {
    /// Catalog ingestion error
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Strict query validation error
    #[error("Query error: {0}")]
    Query(#[from] query::QueryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
