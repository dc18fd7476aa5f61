//! Output formatting for CLI display
//!
//! This module provides utilities for formatting discovery results in the
//! CLI: listing rows annotated with selection state, category counts, and
//! result summaries.

use crate::listing::{Listing, ListingKind};
use crate::session::SelectionView;
use colored::Colorize;

/// Format a price for display, unit-less with two decimals
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// Format a rating for display, or a placeholder for unrated listings
#[must_use]
pub fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| "unrated".to_string(), |r| format!("{r:.1}"))
}

/// Short kind label for row prefixes
#[must_use]
pub const fn kind_label(kind: ListingKind) -> &'static str {
    match kind {
        ListingKind::Worker => "worker",
        ListingKind::Task => "task",
        ListingKind::Product => "product",
        ListingKind::Category => "category",
    }
}

/// Format one listing row with its selection annotations
///
/// In quiet mode only the id is printed, for scripting.
#[must_use]
pub fn listing_row(listing: &Listing, selection: &SelectionView, quiet: bool) -> String {
    if quiet {
        return listing.id.clone();
    }

    let mut row = format!(
        "  [{}] {} ({}) — {} · rating {}",
        kind_label(listing.kind()),
        listing.display_name,
        listing.category,
        format_price(listing.price),
        format_rating(listing.rating),
    );

    if let Some(status) = listing.status_key() {
        row.push_str(&format!(" · {}", colorize_status(status)));
    }

    if selection.quantity > 0 {
        row.push_str(&format!(" · in cart ×{}", selection.quantity));
    }
    if selection.bookmarked {
        row.push_str(" · bookmarked");
    }
    if selection.applied {
        row.push_str(" · applied");
    }

    row
}

/// Format a category with its listing count
#[must_use]
pub fn category_with_count(category: &str, count: usize, quiet: bool) -> String {
    if quiet {
        category.to_string()
    } else {
        format!("  {category} ({count} listing(s))")
    }
}

/// Summary line for a result set; an empty set is a data state, not an
/// error, so it gets its own wording rather than a failure message
#[must_use]
pub fn result_summary(count: usize, quiet: bool) -> Option<String> {
    if quiet {
        return None;
    }

    Some(if count == 0 {
        "No listings match".to_string()
    } else {
        format!("{count} listing(s) found")
    })
}

/// Color a status key by how actionable it is (green for ready,
/// yellow for in flight, red for unavailable)
#[must_use]
pub fn colorize_status(status: &str) -> String {
    match status {
        "available" | "posted" | "in-stock" => status.green().to_string(),
        "busy" | "assigned" | "in-progress" => status.yellow().to_string(),
        _ => status.red().to_string(),
    }
}
