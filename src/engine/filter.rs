//! Facet filtering over in-memory listing collections
//!
//! This module provides the single filtering implementation shared by every
//! discovery surface (worker search, task board, product browsing, category
//! drill-down, work history). Each call site supplies a listing slice and a
//! [`Query`]; the scattered per-view filter logic this replaces is gone.
//!
//! # Iterator Adapter
//!
//! The [`FacetFilterExt`] extension trait adds fluent filtering to listing
//! slices:
//!
//! ```
//! use bazr::engine::FacetFilterExt;
//! use bazr::query::Query;
//! # let listings: Vec<bazr::Listing> = vec![];
//!
//! let query = Query::builder().text("plumb").build();
//! let visible: Vec<_> = listings.facet_filter(&query).collect();
//! ```

use crate::listing::Listing;
use crate::query::{CategoryFilter, Query};

/// Apply every active facet of `query` to `listings`, conjunctively
///
/// Pure function: the input slice is never mutated, the same query over the
/// same slice always yields the same id sequence, and the output preserves
/// the input order (the ranker's stability contract depends on this).
///
/// Facet semantics:
/// - **Text**: case-insensitive substring containment against the
///   listing's pre-lowered searchable text. No tokenization, no trimming;
///   a trailing space in the needle must appear verbatim in the haystack.
/// - **Category**: exact, case-sensitive string equality.
/// - **Price**: inclusive on both bounds; a missing bound is unbounded.
/// - **Minimum rating**: listings with no rating count as 0 for this
///   comparison only, so they still appear in result sets that do not
///   filter on rating.
/// - **Status**: membership in the query's allow-set; `All` passes
///   everything including statusless category listings.
///
/// An empty result is a valid, displayable state, not an error.
#[must_use]
pub fn filter<'a>(listings: &'a [Listing], query: &Query) -> Vec<&'a Listing> {
    let needle = if query.text.is_empty() {
        None
    } else {
        Some(query.text.to_lowercase())
    };

    listings
        .iter()
        .filter(|listing| matches(listing, query, needle.as_deref()))
        .collect()
}

/// Whether a single listing passes every active facet
///
/// `needle` is the pre-lowered text facet, or `None` when the query has no
/// text constraint. Callers lower the needle once per query, not per
/// listing.
fn matches(listing: &Listing, query: &Query, needle: Option<&str>) -> bool {
    if let Some(needle) = needle
        && !listing.searchable_text().contains(needle)
    {
        return false;
    }

    if let CategoryFilter::Exact(category) = &query.category
        && listing.category != *category
    {
        return false;
    }

    if let Some(min) = query.price_min
        && listing.price < min
    {
        return false;
    }

    if let Some(max) = query.price_max
        && listing.price > max
    {
        return false;
    }

    if let Some(min_rating) = query.min_rating
        && listing.rating_or_zero() < min_rating
    {
        return false;
    }

    query.status.allows(listing.status_key())
}

/// Extension trait adding fluent facet filtering to listing collections
///
/// Implemented for anything that can be viewed as a listing slice, so both
/// `Vec<Listing>` and `&[Listing]` call sites read the same way.
pub trait FacetFilterExt {
    /// Lazily filter this collection by every active facet of `query`
    ///
    /// Equivalent to [`filter`] but returns an iterator, for call sites
    /// that chain further adapters (limits, annotation lookups) before
    /// collecting.
    fn facet_filter<'a>(
        &'a self,
        query: &'a Query,
    ) -> impl Iterator<Item = &'a Listing>;
}

impl<T: AsRef<[Listing]>> FacetFilterExt for T {
    fn facet_filter<'a>(
        &'a self,
        query: &'a Query,
    ) -> impl Iterator<Item = &'a Listing> {
        let needle = if query.text.is_empty() {
            None
        } else {
            Some(query.text.to_lowercase())
        };

        self.as_ref()
            .iter()
            .filter(move |listing| matches(listing, query, needle.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SortKey, StatusFilter};
    use crate::testing::{product, sample_workers, task, worker};

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn test_unconstrained_query_keeps_everything_in_order() {
        let workers = sample_workers();
        let result = filter(&workers, &Query::unconstrained());

        assert_eq!(result.len(), workers.len());
        let expected: Vec<String> = workers.iter().map(|w| w.id.clone()).collect();
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn test_category_match_is_exact_and_case_sensitive() {
        let workers = sample_workers();

        let query = Query::builder().category("Plumbing").build();
        let result = filter(&workers, &query);
        assert!(result.iter().all(|l| l.category == "Plumbing"));
        assert_eq!(result.len(), 2);

        // Case differs: no match, unlike text search
        let query = Query::builder().category("plumbing").build();
        assert!(filter(&workers, &query).is_empty());
    }

    #[test]
    fn test_text_match_is_case_insensitive_substring() {
        let workers = sample_workers();

        let query = Query::builder().text("PLUMB").build();
        let result = filter(&workers, &query);
        assert_eq!(result.len(), 2);

        // Verbatim substring semantics: a trailing space must be present
        // in the stored text to match
        let query = Query::builder().text("plumb ").build();
        assert!(filter(&workers, &query).is_empty());
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let listings = vec![
            worker("W1", "A", "Misc", 100.0, None),
            worker("W2", "B", "Misc", 200.0, None),
            worker("W3", "C", "Misc", 300.0, None),
        ];

        let query = Query::builder().price_min(100.0).price_max(200.0).build();
        assert_eq!(ids(&filter(&listings, &query)), vec!["W1", "W2"]);

        // Missing bound is unbounded on that side
        let query = Query::builder().price_min(200.0).build();
        assert_eq!(ids(&filter(&listings, &query)), vec!["W2", "W3"]);
    }

    #[test]
    fn test_min_rating_treats_absent_as_zero() {
        let listings = vec![
            worker("W1", "A", "Misc", 100.0, Some(4.5)),
            worker("W2", "B", "Misc", 100.0, None),
        ];

        let query = Query::builder().min_rating(4.0).build();
        assert_eq!(ids(&filter(&listings, &query)), vec!["W1"]);

        // Without a rating facet, unrated listings are not excluded
        let result = filter(&listings, &Query::unconstrained());
        assert_eq!(result.len(), 2);

        // An unrated listing passes a 0.0 threshold
        let query = Query::builder().min_rating(0.0).build();
        assert_eq!(result.len(), filter(&listings, &query).len());
    }

    #[test]
    fn test_status_filter_allow_set() {
        let listings = vec![
            task("T1", "Fix sink", "Plumbing", 500.0, crate::listing::TaskStatus::Posted),
            task("T2", "Rewire", "Electrical", 900.0, crate::listing::TaskStatus::Completed),
        ];

        let query = Query::builder()
            .status(StatusFilter::AnyOf(vec!["posted".into()]))
            .build();
        assert_eq!(ids(&filter(&listings, &query)), vec!["T1"]);
    }

    #[test]
    fn test_facets_are_anded() {
        let listings = vec![
            worker("W1", "Rajesh Kumar", "Plumbing", 350.0, Some(4.8)),
            worker("W2", "Suresh Patel", "Plumbing", 600.0, Some(4.6)),
            worker("W3", "Rajesh Iyer", "Electrical", 300.0, Some(4.9)),
        ];

        let query = Query::builder()
            .text("rajesh")
            .category("Plumbing")
            .price_max(500.0)
            .build();
        assert_eq!(ids(&filter(&listings, &query)), vec!["W1"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let workers = sample_workers();
        let query = Query::builder().category("Plumbing").min_rating(4.0).build();

        let once: Vec<Listing> = filter(&workers, &query)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter(&once, &query);

        assert_eq!(once.len(), twice.len());
        let once_ids: Vec<String> = once.iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids(&twice), once_ids);
    }

    #[test]
    fn test_filter_output_is_subset_without_duplicates() {
        let workers = sample_workers();
        let query = Query::builder().min_rating(4.5).build();
        let result = filter(&workers, &query);

        let mut seen = std::collections::HashSet::new();
        for listing in &result {
            assert!(seen.insert(listing.id.clone()), "duplicated id");
            assert!(workers.iter().any(|w| w.id == listing.id), "invented id");
        }
    }

    #[test]
    fn test_empty_result_is_valid_state() {
        let workers = sample_workers();
        let query = Query::builder().text("no such worker anywhere").build();
        assert!(filter(&workers, &query).is_empty());
    }

    #[test]
    fn test_sort_key_does_not_affect_filtering() {
        let workers = sample_workers();
        let a = Query::builder().category("Plumbing").build();
        let b = Query::builder()
            .category("Plumbing")
            .sort(SortKey::PriceAsc)
            .build();

        assert_eq!(ids(&filter(&workers, &a)), ids(&filter(&workers, &b)));
    }

    #[test]
    fn test_extension_trait_matches_free_function() {
        let listings = vec![
            product("P1", "Pipe Wrench", "Tools", 499.0, 12),
            product("P2", "Drill", "Tools", 2999.0, 48),
        ];
        let query = Query::builder().price_max(1000.0).build();

        let via_fn = filter(&listings, &query);
        let via_ext: Vec<&Listing> = listings.facet_filter(&query).collect();
        assert_eq!(ids(&via_fn), ids(&via_ext));
    }
}
