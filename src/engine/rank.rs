//! Stable ranking of filtered listing sets
//!
//! The ranker reorders the facet filter's output by one selectable
//! comparator. Stability is an explicit contract here, not a platform
//! accident: listings that compare equal keep their filter-output order, so
//! a given (catalog, query) pair always produces the same id sequence.
//! `slice::sort_by` is a stable sort, which this module relies on and its
//! tests pin down.

use crate::listing::Listing;
use crate::query::{Query, SortKey};
use std::cmp::Ordering;

/// Reorder `listings` by `sort`, stably
///
/// Returns a new ordering over the same references; the multiset of ids is
/// preserved (ranking never drops or adds items). `SortKey::Unranked`
/// returns the input untouched.
///
/// Prices and ratings are compared numerically. The values are known
/// finite (non-negative prices, ratings in [0, 5]), so the comparator
/// treats any non-comparable pair as equal, which under a stable sort
/// preserves input order.
#[must_use]
pub fn rank<'a>(mut listings: Vec<&'a Listing>, sort: SortKey) -> Vec<&'a Listing> {
    match sort {
        SortKey::Unranked => {}
        SortKey::RatingDesc => {
            listings.sort_by(|a, b| f64_desc(a.rating_or_zero(), b.rating_or_zero()));
        }
        SortKey::RecencyDesc => {
            listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        SortKey::PriceAsc => {
            listings.sort_by(|a, b| f64_asc(a.price, b.price));
        }
        SortKey::PriceDesc => {
            listings.sort_by(|a, b| f64_desc(a.price, b.price));
        }
        SortKey::PopularityDesc => {
            listings.sort_by(|a, b| b.popularity().cmp(&a.popularity()));
        }
        SortKey::UrgencyDesc => {
            listings.sort_by(|a, b| b.urgency_rank().cmp(&a.urgency_rank()));
        }
    }

    listings
}

/// Filter then rank in one pass: the composition every discovery surface
/// uses
///
/// Equivalent to `rank(filter(listings, query), query.sort)`.
#[must_use]
pub fn discover<'a>(listings: &'a [Listing], query: &Query) -> Vec<&'a Listing> {
    rank(super::filter(listings, query), query.sort)
}

fn f64_asc(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn f64_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
