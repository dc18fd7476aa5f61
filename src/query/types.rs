//! Query data structures and types
//!
//! A `Query` is the full set of active search/filter/sort parameters at one
//! point in time. It is immutable once built and, together with a fixed
//! catalog snapshot, fully determines the filtered and ranked output — no
//! hidden state. Queries are cheap to construct: call sites build a fresh
//! one on every keystroke or control change.

use crate::query::error::QueryError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category facet: everything, or one exact category string
///
/// Category matching is exact and case-sensitive, unlike free-text search.
/// The category strings come from the same open taxonomy the listings use,
/// so no folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// No category constraint
    #[default]
    All,
    /// Exact, case-sensitive match against `listing.category`
    Exact(String),
}

impl CategoryFilter {
    /// Build from a UI control value, where `"all"` or empty means no
    /// constraint
    #[must_use]
    pub fn from_control(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            Self::All
        } else {
            Self::Exact(value.to_string())
        }
    }
}

/// Status facet: everything, or an allow-set of status keys
///
/// Keys are the canonical lower-case forms produced by the status enums'
/// `key()` methods (`"available"`, `"in-progress"`, `"out-of-stock"`, ...).
/// Listings without a status (categories) only pass the `All` variant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Every status passes
    #[default]
    All,
    /// Only listings whose status key is in this set pass
    AnyOf(Vec<String>),
}

impl StatusFilter {
    /// Whether a listing's status key passes this filter
    #[must_use]
    pub fn allows(&self, status_key: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::AnyOf(keys) => {
                status_key.is_some_and(|key| keys.iter().any(|k| k.as_str() == key))
            }
        }
    }

    /// Build from UI control values, dropping unrecognized keys
    ///
    /// An empty result set degrades to `All` rather than matching nothing,
    /// matching the trusted-control contract. Use [`StatusFilter::try_from_keys`]
    /// when the keys come from external input.
    #[must_use]
    pub fn from_keys_lenient(keys: &[String]) -> Self {
        let known: Vec<String> = keys
            .iter()
            .filter(|k| is_known_status(k.as_str()))
            .cloned()
            .collect();

        if known.is_empty() {
            Self::All
        } else {
            Self::AnyOf(known)
        }
    }

    /// Build from status keys, rejecting unrecognized ones
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownStatus` for the first key that is not a
    /// recognized worker, task, or product status.
    pub fn try_from_keys(keys: &[String]) -> Result<Self, QueryError> {
        for key in keys {
            if !is_known_status(key) {
                return Err(QueryError::UnknownStatus(key.clone()));
            }
        }

        if keys.is_empty() {
            Ok(Self::All)
        } else {
            Ok(Self::AnyOf(keys.to_vec()))
        }
    }
}

/// Every status key across the three statused listing kinds
const KNOWN_STATUS_KEYS: &[&str] = &[
    "available",
    "busy",
    "offline",
    "posted",
    "assigned",
    "in-progress",
    "completed",
    "cancelled",
    "in-stock",
    "out-of-stock",
];

fn is_known_status(key: &str) -> bool {
    KNOWN_STATUS_KEYS.contains(&key)
}

/// How to order the filtered candidate set
///
/// All comparators are applied as stable sorts: listings that compare equal
/// keep their filter-output order. `Unranked` performs no reordering at all
/// and is the lenient fallback for unknown sort-key strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep the filter output order as-is
    #[default]
    Unranked,
    /// Highest rating first (absent rating counts as 0)
    RatingDesc,
    /// Newest first
    RecencyDesc,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Most completed jobs / applicants / reviews first
    PopularityDesc,
    /// Most urgent task first (non-tasks rank lowest)
    UrgencyDesc,
}

impl SortKey {
    /// Parse a UI control value, degrading unknown keys to `Unranked`
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or(Self::Unranked)
    }

    /// Canonical kebab-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unranked => "unranked",
            Self::RatingDesc => "rating-desc",
            Self::RecencyDesc => "recency-desc",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::PopularityDesc => "popularity-desc",
            Self::UrgencyDesc => "urgency-desc",
        }
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unranked" => Ok(Self::Unranked),
            "rating-desc" => Ok(Self::RatingDesc),
            "recency-desc" => Ok(Self::RecencyDesc),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "popularity-desc" => Ok(Self::PopularityDesc),
            "urgency-desc" => Ok(Self::UrgencyDesc),
            other => Err(QueryError::UnknownSortKey(other.to_string())),
        }
    }
}

/// The full set of active search/filter/sort parameters
///
/// Build with [`Query::builder`]; construction normalizes the numeric
/// facets (swapped price bounds are reordered, negatives clamp to 0,
/// minimum rating clamps to [0, 5]) so the engine never sees a malformed
/// range. All facets are ANDed; there is no OR/NOT composition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Query {
    /// Free-text needle; empty means no text constraint. Matched as a
    /// case-insensitive substring, never tokenized or trimmed.
    pub text: String,

    /// Category facet
    pub category: CategoryFilter,

    /// Inclusive lower price bound; `None` is unbounded below
    pub price_min: Option<f64>,

    /// Inclusive upper price bound; `None` is unbounded above
    pub price_max: Option<f64>,

    /// Minimum rating; listings with no rating count as 0 here
    pub min_rating: Option<f64>,

    /// Status facet
    pub status: StatusFilter,

    /// Ranking comparator applied after filtering
    pub sort: SortKey,
}

impl Query {
    /// Start building a query
    #[must_use]
    pub fn builder() -> QueryBuilder {
        QueryBuilder::default()
    }

    /// A query with no constraints and no ranking
    #[must_use]
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Validate numeric ranges without the builder's normalization
    ///
    /// The builder silently repairs malformed ranges to keep interactive
    /// callers responsive; this check is for adapters that would rather
    /// reject bad external input.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidRange` if `price_min > price_max` or a
    /// bound is negative, or if `min_rating` falls outside [0, 5].
    pub fn validate_strict(&self) -> Result<(), QueryError> {
        if let (Some(min), Some(max)) = (self.price_min, self.price_max)
            && min > max
        {
            return Err(QueryError::InvalidRange(format!(
                "price minimum {min} exceeds maximum {max}"
            )));
        }

        for bound in [self.price_min, self.price_max].into_iter().flatten() {
            if bound < 0.0 {
                return Err(QueryError::InvalidRange(format!(
                    "negative price bound {bound}"
                )));
            }
        }

        if let Some(rating) = self.min_rating
            && !(0.0..=5.0).contains(&rating)
        {
            return Err(QueryError::InvalidRange(format!(
                "minimum rating {rating} outside [0, 5]"
            )));
        }

        Ok(())
    }
}

/// Builder for [`Query`] with construction-time normalization
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    text: String,
    category: CategoryFilter,
    price_min: Option<f64>,
    price_max: Option<f64>,
    min_rating: Option<f64>,
    status: StatusFilter,
    sort: SortKey,
}

impl QueryBuilder {
    /// Free-text needle (stored verbatim; lower-cased at match time)
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Category facet from a UI control value (`"all"`/empty = no constraint)
    #[must_use]
    pub fn category(mut self, value: &str) -> Self {
        self.category = CategoryFilter::from_control(value);
        self
    }

    /// Inclusive lower price bound
    #[must_use]
    pub const fn price_min(mut self, min: f64) -> Self {
        self.price_min = Some(min);
        self
    }

    /// Inclusive upper price bound
    #[must_use]
    pub const fn price_max(mut self, max: f64) -> Self {
        self.price_max = Some(max);
        self
    }

    /// Minimum rating facet
    #[must_use]
    pub const fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Status facet
    #[must_use]
    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Ranking comparator
    #[must_use]
    pub const fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Finish building, normalizing the numeric facets
    ///
    /// Repairs rather than rejects: swapped price bounds are reordered,
    /// negative bounds clamp to 0, and the minimum rating clamps to
    /// [0, 5]. A repaired query always passes `validate_strict`.
    #[must_use]
    pub fn build(self) -> Query {
        let mut price_min = self.price_min.map(|v| v.max(0.0));
        let mut price_max = self.price_max.map(|v| v.max(0.0));

        if let (Some(min), Some(max)) = (price_min, price_max)
            && min > max
        {
            (price_min, price_max) = (Some(max), Some(min));
        }

        Query {
            text: self.text,
            category: self.category,
            price_min,
            price_max,
            min_rating: self.min_rating.map(|v| v.clamp(0.0, 5.0)),
            status: self.status,
            sort: self.sort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_control() {
        assert_eq!(CategoryFilter::from_control("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_control(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_control("Plumbing"),
            CategoryFilter::Exact("Plumbing".into())
        );
    }

    #[test]
    fn test_status_filter_allows() {
        let all = StatusFilter::All;
        assert!(all.allows(Some("busy")));
        assert!(all.allows(None));

        let some = StatusFilter::AnyOf(vec!["available".into(), "posted".into()]);
        assert!(some.allows(Some("available")));
        assert!(!some.allows(Some("busy")));
        // Statusless listings only pass the All variant
        assert!(!some.allows(None));
    }

    #[test]
    fn test_status_filter_lenient_drops_unknown() {
        let filter = StatusFilter::from_keys_lenient(&[
            "available".into(),
            "bogus".into(),
        ]);
        assert_eq!(filter, StatusFilter::AnyOf(vec!["available".into()]));

        // Nothing recognized degrades to All, not to match-nothing
        let filter = StatusFilter::from_keys_lenient(&["bogus".into()]);
        assert_eq!(filter, StatusFilter::All);
    }

    #[test]
    fn test_status_filter_strict_rejects_unknown() {
        let err = StatusFilter::try_from_keys(&["bogus".into()]).unwrap_err();
        assert_eq!(err, QueryError::UnknownStatus("bogus".into()));

        let ok = StatusFilter::try_from_keys(&["in-stock".into()]).unwrap();
        assert_eq!(ok, StatusFilter::AnyOf(vec!["in-stock".into()]));
    }

    #[test]
    fn test_sort_key_round_trip() {
        for key in [
            SortKey::Unranked,
            SortKey::RatingDesc,
            SortKey::RecencyDesc,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::PopularityDesc,
            SortKey::UrgencyDesc,
        ] {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_sort_key_lenient_fallback() {
        assert_eq!(SortKey::parse_lenient("rating-desc"), SortKey::RatingDesc);
        assert_eq!(SortKey::parse_lenient("alphabetical"), SortKey::Unranked);
        assert_eq!(SortKey::parse_lenient(""), SortKey::Unranked);
    }

    #[test]
    fn test_sort_key_strict_rejects_unknown() {
        let err = "alphabetical".parse::<SortKey>().unwrap_err();
        assert_eq!(err, QueryError::UnknownSortKey("alphabetical".into()));
    }

    #[test]
    fn test_builder_swaps_inverted_price_range() {
        let query = Query::builder().price_min(500.0).price_max(100.0).build();
        assert_eq!(query.price_min, Some(100.0));
        assert_eq!(query.price_max, Some(500.0));
        assert!(query.validate_strict().is_ok());
    }

    #[test]
    fn test_builder_clamps_negative_and_out_of_range() {
        let query = Query::builder().price_min(-10.0).min_rating(7.5).build();
        assert_eq!(query.price_min, Some(0.0));
        assert_eq!(query.min_rating, Some(5.0));
    }

    #[test]
    fn test_validate_strict_flags_inverted_range() {
        let query = Query {
            price_min: Some(500.0),
            price_max: Some(100.0),
            ..Query::default()
        };
        assert!(matches!(
            query.validate_strict(),
            Err(QueryError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_unconstrained_query_is_default() {
        let query = Query::unconstrained();
        assert!(query.text.is_empty());
        assert_eq!(query.category, CategoryFilter::All);
        assert_eq!(query.status, StatusFilter::All);
        assert_eq!(query.sort, SortKey::Unranked);
    }
}
