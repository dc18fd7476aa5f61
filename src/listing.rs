//! Data models for catalog listings
//!
//! These are pure data structures with minimal logic. Kind-specific fields
//! live in the `ListingDetails` enum; common fields (id, name, category,
//! price, rating, creation time) live directly on `Listing`. Direct field
//! access is used for comparisons and filtering (idiomatic Rust style).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Core Domain Types
// ============================================================================

/// Universal domain entity representing one discoverable record
///
/// A listing may be a worker profile, a posted task, a product, or a
/// service category. This is the core type used throughout the engine.
///
/// # Design Philosophy
///
/// - **Data only**: no business logic methods beyond derived-field access
/// - **Direct access**: use `listing.price <= max` not helper methods
/// - **Type safety**: enum variants distinguish the four listing kinds
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Unique identifier, stable for the listing's lifetime, never reused
    pub id: String,

    /// Human-readable display name
    pub display_name: String,

    /// Category string from an open taxonomy (not a closed enum)
    pub category: String,

    /// Hourly rate (worker), budget (task), or unit price (product).
    /// Non-negative and unit-less at the engine boundary.
    pub price: f64,

    /// Rating in [0, 5]. `None` means the listing has never been rated.
    pub rating: Option<f64>,

    /// Creation timestamp, used for recency ranking
    pub created_at: DateTime<Utc>,

    /// Kind-specific fields
    pub details: ListingDetails,

    /// Concatenation of name, description, skills/tags, and location,
    /// lower-cased once at ingestion. Never recomputed per query.
    searchable_text: String,
}

impl Listing {
    /// Build a listing, deriving `searchable_text` from the given free-text
    /// fields plus the display name
    ///
    /// The searchable text is lower-cased here, at ingestion, so that each
    /// query only lower-cases its own input.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        rating: Option<f64>,
        created_at: DateTime<Utc>,
        details: ListingDetails,
        extra_text: &[&str],
    ) -> Self {
        let display_name = display_name.into();
        let mut text = display_name.clone();
        for part in extra_text {
            if !part.is_empty() {
                text.push(' ');
                text.push_str(part);
            }
        }

        Self {
            id: id.into(),
            display_name,
            category: category.into(),
            price: price.max(0.0),
            rating,
            created_at,
            details,
            searchable_text: text.to_lowercase(),
        }
    }

    /// The pre-lowered haystack for free-text matching
    #[must_use]
    pub fn searchable_text(&self) -> &str {
        &self.searchable_text
    }

    /// Which of the four listing kinds this is
    #[must_use]
    pub const fn kind(&self) -> ListingKind {
        match self.details {
            ListingDetails::Worker(_) => ListingKind::Worker,
            ListingDetails::Task(_) => ListingKind::Task,
            ListingDetails::Product(_) => ListingKind::Product,
            ListingDetails::Category(_) => ListingKind::Category,
        }
    }

    /// Rating with absent treated as 0, for ranking comparisons
    #[must_use]
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Popularity signal: completed jobs (worker), applicant count (task),
    /// or review count (product). Category listings report 0.
    #[must_use]
    pub const fn popularity(&self) -> u32 {
        match &self.details {
            ListingDetails::Worker(w) => w.completed_jobs,
            ListingDetails::Task(t) => t.applicants,
            ListingDetails::Product(p) => p.reviews,
            ListingDetails::Category(_) => 0,
        }
    }

    /// Urgency rank for sorting: high=3, medium=2, low=1, not-applicable=0
    #[must_use]
    pub const fn urgency_rank(&self) -> u8 {
        match &self.details {
            ListingDetails::Task(t) => t.urgency.rank(),
            _ => 0,
        }
    }

    /// The canonical lower-case status key, or `None` for category
    /// listings, which carry no status
    #[must_use]
    pub const fn status_key(&self) -> Option<&'static str> {
        match &self.details {
            ListingDetails::Worker(w) => Some(w.status.key()),
            ListingDetails::Task(t) => Some(t.status.key()),
            ListingDetails::Product(p) => Some(p.status.key()),
            ListingDetails::Category(_) => None,
        }
    }
}

/// Kind of a listing, for per-kind catalog projections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    /// A worker profile offering labor
    Worker,
    /// A task posted by a customer
    Task,
    /// A product in the e-commerce catalog
    Product,
    /// A browsable service category
    Category,
}

/// Kind-specific listing fields
#[derive(Debug, Clone, PartialEq)]
pub enum ListingDetails {
    /// Worker profile with availability and track record
    Worker(WorkerDetails),

    /// Posted task with lifecycle status and urgency
    Task(TaskDetails),

    /// Product with stock status and review count
    Product(ProductDetails),

    /// Service category with a count of listings under it
    Category(CategoryDetails),
}

/// Details for worker listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerDetails {
    /// Current availability
    pub status: WorkerStatus,
    /// Number of jobs completed through the platform
    pub completed_jobs: u32,
    /// Skill tags (already folded into the searchable text)
    pub skills: Vec<String>,
    /// Free-text location
    pub location: String,
}

/// Details for task listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    /// Lifecycle status
    pub status: TaskStatus,
    /// How soon the customer needs the work done
    pub urgency: Urgency,
    /// Number of workers who have applied
    pub applicants: u32,
    /// Free-text location
    pub location: String,
}

/// Details for product listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    /// Stock status
    pub status: ProductStatus,
    /// Number of customer reviews
    pub reviews: u32,
}

/// Details for category listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDetails {
    /// Number of listings filed under this category
    pub listing_count: usize,
}

// ============================================================================
// Status Enums
// ============================================================================

/// Availability of a worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerStatus {
    /// Accepting new work
    Available,
    /// Currently on a job
    Busy,
    /// Not reachable
    Offline,
}

impl WorkerStatus {
    /// Canonical lower-case key, as used in status filters
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
            Self::Offline => "offline",
        }
    }
}

/// Lifecycle status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Visible to workers, no one assigned yet
    Posted,
    /// A worker has been assigned
    Assigned,
    /// Work has started
    InProgress,
    /// Work finished and accepted
    Completed,
    /// Withdrawn by the customer
    Cancelled,
}

impl TaskStatus {
    /// Canonical lower-case key, as used in status filters
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Posted => "posted",
            Self::Assigned => "assigned",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Stock status of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductStatus {
    /// Orderable now
    InStock,
    /// Temporarily unavailable
    OutOfStock,
}

impl ProductStatus {
    /// Canonical lower-case key, as used in status filters
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::OutOfStock => "out-of-stock",
        }
    }
}

/// How urgently a task needs doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Flexible timing
    Low,
    /// Within the week
    Medium,
    /// As soon as possible
    High,
}

impl Urgency {
    /// Numeric rank for sorting: high=3, medium=2, low=1
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}
