//! The listing store: an immutable, validated catalog of listings
//!
//! A `Catalog` is populated once per session — from an in-memory record
//! set or a JSON document — and is read-only thereafter. The engine only
//! ever borrows slices from it, so filtering and ranking can never mutate
//! the source of truth.
//!
//! Ingestion goes through [`ListingRecord`], a flat serde type matching
//! the catalog JSON shape. Conversion to the domain [`Listing`] validates
//! status strings per kind, clamps ratings into range, and derives the
//! lower-cased searchable text exactly once.

use crate::listing::{
    CategoryDetails, Listing, ListingDetails, ListingKind, ProductDetails, ProductStatus,
    TaskDetails, TaskStatus, Urgency, WorkerDetails, WorkerStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records share an id; ids are unique and never reused
    #[error("Duplicate listing id '{0}'")]
    DuplicateId(String),

    /// A record failed domain validation
    #[error("Invalid listing '{id}': {reason}")]
    InvalidListing {
        /// Id of the offending record
        id: String,
        /// What was wrong with it
        reason: String,
    },

    /// Catalog file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Flat wire/record shape for one listing, as it appears in catalog JSON
///
/// Kind-specific fields are optional and defaulted; `TryFrom` sorts them
/// into the right [`ListingDetails`] variant and rejects combinations
/// that make no sense (an unknown status string for the record's kind).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Unique, stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Which of the four listing kinds this record is
    pub kind: ListingKind,
    /// Open-taxonomy category string
    pub category: String,
    /// Hourly rate, budget, or unit price
    #[serde(default)]
    pub price: f64,
    /// Rating in [0, 5]; absent means never rated
    #[serde(default)]
    pub rating: Option<f64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Free-text description, folded into the searchable text
    #[serde(default)]
    pub description: String,
    /// Skill tags (workers), folded into the searchable text
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-text location, folded into the searchable text
    #[serde(default)]
    pub location: String,
    /// Status key; defaults per kind when absent
    #[serde(default)]
    pub status: Option<String>,
    /// Task urgency; defaults to low when absent
    #[serde(default)]
    pub urgency: Option<Urgency>,
    /// Completed job count (workers)
    #[serde(default)]
    pub completed_jobs: u32,
    /// Applicant count (tasks)
    #[serde(default)]
    pub applicants: u32,
    /// Review count (products)
    #[serde(default)]
    pub reviews: u32,
    /// Listings filed under this category (category records)
    #[serde(default)]
    pub listing_count: usize,
}

impl TryFrom<ListingRecord> for Listing {
    type Error = CatalogError;

    fn try_from(record: ListingRecord) -> Result<Self, Self::Error> {
        let details = match record.kind {
            ListingKind::Worker => ListingDetails::Worker(WorkerDetails {
                status: parse_status(
                    &record.id,
                    record.status.as_deref(),
                    WorkerStatus::Available,
                    worker_status_from_key,
                )?,
                completed_jobs: record.completed_jobs,
                skills: record.skills.clone(),
                location: record.location.clone(),
            }),
            ListingKind::Task => ListingDetails::Task(TaskDetails {
                status: parse_status(
                    &record.id,
                    record.status.as_deref(),
                    TaskStatus::Posted,
                    task_status_from_key,
                )?,
                urgency: record.urgency.unwrap_or(Urgency::Low),
                applicants: record.applicants,
                location: record.location.clone(),
            }),
            ListingKind::Product => ListingDetails::Product(ProductDetails {
                status: parse_status(
                    &record.id,
                    record.status.as_deref(),
                    ProductStatus::InStock,
                    product_status_from_key,
                )?,
                reviews: record.reviews,
            }),
            ListingKind::Category => ListingDetails::Category(CategoryDetails {
                listing_count: record.listing_count,
            }),
        };

        let skills = record.skills.join(" ");
        let extra: Vec<&str> = vec![
            record.description.as_str(),
            skills.as_str(),
            record.location.as_str(),
        ];

        Ok(Self::new(
            record.id,
            record.name,
            record.category,
            record.price,
            record.rating.map(|r| r.clamp(0.0, 5.0)),
            record.created_at,
            details,
            &extra,
        ))
    }
}

/// Resolve an optional status key against one kind's status enum
fn parse_status<S: Copy>(
    id: &str,
    key: Option<&str>,
    default: S,
    from_key: fn(&str) -> Option<S>,
) -> Result<S, CatalogError> {
    match key {
        None => Ok(default),
        Some(key) => from_key(key).ok_or_else(|| CatalogError::InvalidListing {
            id: id.to_string(),
            reason: format!("unknown status '{key}'"),
        }),
    }
}

fn worker_status_from_key(key: &str) -> Option<WorkerStatus> {
    match key {
        "available" => Some(WorkerStatus::Available),
        "busy" => Some(WorkerStatus::Busy),
        "offline" => Some(WorkerStatus::Offline),
        _ => None,
    }
}

fn task_status_from_key(key: &str) -> Option<TaskStatus> {
    match key {
        "posted" => Some(TaskStatus::Posted),
        "assigned" => Some(TaskStatus::Assigned),
        "in-progress" => Some(TaskStatus::InProgress),
        "completed" => Some(TaskStatus::Completed),
        "cancelled" => Some(TaskStatus::Cancelled),
        _ => None,
    }
}

fn product_status_from_key(key: &str) -> Option<ProductStatus> {
    match key {
        "in-stock" => Some(ProductStatus::InStock),
        "out-of-stock" => Some(ProductStatus::OutOfStock),
        _ => None,
    }
}

/// Immutable source-of-truth collection of listings for a session
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-converted listings
    ///
    /// Preserves the given order; display order before ranking is
    /// ingestion order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two listings share an id.
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(listings.len());
        for (position, listing) in listings.iter().enumerate() {
            if index.insert(listing.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(listing.id.clone()));
            }
        }

        Ok(Self { listings, index })
    }

    /// Build a catalog from raw records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a record fails validation or an id is
    /// duplicated.
    pub fn from_records(records: Vec<ListingRecord>) -> Result<Self, CatalogError> {
        let listings: Result<Vec<Listing>, CatalogError> =
            records.into_iter().map(Listing::try_from).collect();
        Self::from_listings(listings?)
    }

    /// Build a catalog from a JSON array of records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed or a record fails
    /// validation.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ListingRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Build a catalog from a JSON file on disk
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// All listings, in ingestion order
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Look up one listing by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.index.get(id).map(|&position| &self.listings[position])
    }

    /// Listings of one kind, in ingestion order
    ///
    /// This is the per-kind projection each discovery surface starts
    /// from (worker search over workers, task board over tasks, ...).
    #[must_use]
    pub fn of_kind(&self, kind: ListingKind) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.kind() == kind).collect()
    }

    /// Distinct categories with listing counts, sorted by name
    ///
    /// Category-kind listings describe categories rather than belonging
    /// to one, so they are not counted here.
    #[must_use]
    pub fn categories(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for listing in &self.listings {
            if listing.kind() != ListingKind::Category {
                *counts.entry(listing.category.as_str()).or_default() += 1;
            }
        }

        let mut categories: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        categories.sort_by(|a, b| a.0.cmp(&b.0));
        categories
    }

    /// Number of listings in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the catalog holds no listings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
