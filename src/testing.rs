//! Testing utilities for bazr
//!
//! Fixture builders for listings of every kind, so unit tests can state
//! only the fields they care about. The category and location strings are
//! folded into the searchable text the same way real ingestion does.
//!
//! Only available when compiled with `cfg(test)`.

use crate::listing::{
    CategoryDetails, Listing, ListingDetails, ProductDetails, ProductStatus, TaskDetails,
    TaskStatus, Urgency, WorkerDetails, WorkerStatus,
};
use chrono::{DateTime, TimeZone, Utc};

/// A fixed ingestion time so recency tests control their own timestamps
#[must_use]
pub fn fixture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 15, 9, 0, 0).unwrap()
}

/// An available worker with the given rating, located in Mumbai
#[must_use]
pub fn worker(
    id: &str,
    name: &str,
    category: &str,
    price: f64,
    rating: Option<f64>,
) -> Listing {
    Listing::new(
        id,
        name,
        category,
        price,
        rating,
        fixture_time(),
        ListingDetails::Worker(WorkerDetails {
            status: WorkerStatus::Available,
            completed_jobs: 10,
            skills: vec![],
            location: "Mumbai".into(),
        }),
        &[category, "Mumbai"],
    )
}

/// A minimal worker created at a specific time, for recency ranking tests
#[must_use]
pub fn worker_at(id: &str, created_at: DateTime<Utc>) -> Listing {
    Listing::new(
        id,
        "Worker",
        "Misc",
        100.0,
        None,
        created_at,
        ListingDetails::Worker(WorkerDetails {
            status: WorkerStatus::Available,
            completed_jobs: 0,
            skills: vec![],
            location: String::new(),
        }),
        &[],
    )
}

/// A task with the given lifecycle status and medium urgency
#[must_use]
pub fn task(id: &str, name: &str, category: &str, budget: f64, status: TaskStatus) -> Listing {
    Listing::new(
        id,
        name,
        category,
        budget,
        None,
        fixture_time(),
        ListingDetails::Task(TaskDetails {
            status,
            urgency: Urgency::Medium,
            applicants: 2,
            location: "Pune".into(),
        }),
        &[category, "Pune"],
    )
}

/// A minimal task with the given urgency, for urgency ranking tests
#[must_use]
pub fn task_with_urgency(id: &str, urgency: Urgency, status: TaskStatus) -> Listing {
    Listing::new(
        id,
        "Task",
        "Misc",
        500.0,
        None,
        fixture_time(),
        ListingDetails::Task(TaskDetails {
            status,
            urgency,
            applicants: 0,
            location: String::new(),
        }),
        &[],
    )
}

/// An in-stock product with the given review count
#[must_use]
pub fn product(id: &str, name: &str, category: &str, price: f64, reviews: u32) -> Listing {
    Listing::new(
        id,
        name,
        category,
        price,
        Some(4.0),
        fixture_time(),
        ListingDetails::Product(ProductDetails {
            status: ProductStatus::InStock,
            reviews,
        }),
        &[category],
    )
}

/// A category listing with the given listing count
#[must_use]
pub fn category(id: &str, name: &str, listing_count: usize) -> Listing {
    Listing::new(
        id,
        name,
        name,
        0.0,
        None,
        fixture_time(),
        ListingDetails::Category(CategoryDetails { listing_count }),
        &[],
    )
}

/// Three workers matching the canonical discovery scenario: two Plumbing
/// (4.8 and 4.6) and one Electrical (4.9)
#[must_use]
pub fn sample_workers() -> Vec<Listing> {
    vec![
        worker("W001", "Rajesh Kumar", "Plumbing", 350.0, Some(4.8)),
        worker("W002", "Suresh Patel", "Plumbing", 400.0, Some(4.6)),
        worker("W003", "Asha Verma", "Electrical", 300.0, Some(4.9)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingKind;

    #[test]
    fn test_fixtures_have_expected_kinds() {
        assert_eq!(worker("W", "A", "Plumbing", 1.0, None).kind(), ListingKind::Worker);
        assert_eq!(
            task("T", "B", "Plumbing", 1.0, TaskStatus::Posted).kind(),
            ListingKind::Task
        );
        assert_eq!(product("P", "C", "Tools", 1.0, 0).kind(), ListingKind::Product);
        assert_eq!(category("C", "Plumbing", 3).kind(), ListingKind::Category);
    }

    #[test]
    fn test_worker_fixture_folds_category_into_text() {
        let listing = worker("W", "Rajesh Kumar", "Plumbing", 350.0, Some(4.8));
        assert!(listing.searchable_text().contains("plumbing"));
        assert!(listing.searchable_text().contains("mumbai"));
    }

    #[test]
    fn test_sample_workers_match_scenario() {
        let workers = sample_workers();
        assert_eq!(workers.len(), 3);
        assert_eq!(workers[0].rating, Some(4.8));
        assert_eq!(workers[2].category, "Electrical");
    }
}
