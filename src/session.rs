//! Session-scoped selection state
//!
//! Tracks the per-listing bookkeeping that is orthogonal to discovery:
//! cart quantities, bookmarked categories, and "applied to" task markers.
//! One `SelectionState` is constructed per session and injected wherever
//! needed, replacing per-view mutable arrays with a defined lifecycle.
//!
//! Selection entries are keyed by listing id (or category key for
//! bookmarks) and live independently of the catalog: filtering a listing
//! out of view never touches its entry, and an entry may outlive the
//! listing it refers to. Cart entries capture the unit price at add time
//! so `total()` stays computable either way.
//!
//! All operations are synchronous and single-actor; nothing here needs
//! locking. Swapping the in-memory maps for a durable store is a drop-in
//! change behind the same operations.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One cart row: a quantity of a listing at its price when first added
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Number of units; always >= 1 (a would-be 0 removes the entry)
    pub quantity: u32,
    /// Unit price captured at first add
    pub unit_price: f64,
}

/// Row-annotation view of everything selection state knows about one id
///
/// The rendering layer merges this into displayed rows; it is never used
/// as a filter input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionView {
    /// Cart quantity, 0 when not in the cart
    pub quantity: u32,
    /// Whether the id is bookmarked
    pub bookmarked: bool,
    /// Whether the session has applied to this task
    pub applied: bool,
}

/// Session-local cart, bookmark, and applied-to state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionState {
    cart: HashMap<String, CartEntry>,
    bookmarks: HashSet<String>,
    applied: HashSet<String>,
}

impl SelectionState {
    /// Create empty selection state for a new session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// Add one unit of a listing to the cart, returning the new quantity
    ///
    /// First add creates the entry at quantity 1 and captures the unit
    /// price; further adds only bump the quantity (the captured price is
    /// kept, so a later catalog price change does not silently reprice
    /// rows already in the cart).
    pub fn increment(&mut self, id: &str, unit_price: f64) -> u32 {
        let entry = self
            .cart
            .entry(id.to_string())
            .and_modify(|e| e.quantity += 1)
            .or_insert(CartEntry {
                quantity: 1,
                unit_price: unit_price.max(0.0),
            });
        entry.quantity
    }

    /// Remove one unit of a listing from the cart, returning the remaining
    /// quantity
    ///
    /// Decrementing a quantity-1 entry removes the row entirely rather
    /// than leaving a zero-quantity row. Decrementing an id that is not in
    /// the cart is a no-op, not an error.
    pub fn decrement(&mut self, id: &str) -> u32 {
        match self.cart.get_mut(id) {
            Some(entry) if entry.quantity > 1 => {
                entry.quantity -= 1;
                entry.quantity
            }
            Some(_) => {
                self.cart.remove(id);
                0
            }
            None => 0,
        }
    }

    /// Cart quantity for an id, 0 when absent
    #[must_use]
    pub fn quantity(&self, id: &str) -> u32 {
        self.cart.get(id).map_or(0, |e| e.quantity)
    }

    /// Sum of `unit_price * quantity` across the cart
    ///
    /// Recomputed on every call; there is no cached total to go stale.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cart
            .values()
            .map(|e| e.unit_price * f64::from(e.quantity))
            .sum()
    }

    /// Number of distinct listings in the cart
    #[must_use]
    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    /// Iterate cart rows in arbitrary order
    pub fn cart_entries(&self) -> impl Iterator<Item = (&str, &CartEntry)> {
        self.cart.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    // ------------------------------------------------------------------
    // Bookmarks
    // ------------------------------------------------------------------

    /// Toggle bookmark membership for a listing id or category key
    ///
    /// Set-membership semantics, not a boolean flag: toggling twice always
    /// lands back on the starting state. Returns `true` if the key is
    /// bookmarked after the call.
    pub fn toggle_bookmark(&mut self, key: &str) -> bool {
        if self.bookmarks.remove(key) {
            false
        } else {
            self.bookmarks.insert(key.to_string());
            true
        }
    }

    /// Whether a key is currently bookmarked
    #[must_use]
    pub fn is_bookmarked(&self, key: &str) -> bool {
        self.bookmarks.contains(key)
    }

    /// Number of bookmarked keys
    #[must_use]
    pub fn bookmark_len(&self) -> usize {
        self.bookmarks.len()
    }

    // ------------------------------------------------------------------
    // Applied markers
    // ------------------------------------------------------------------

    /// Record that the session applied to a task
    ///
    /// One-way: once set, nothing in the engine unsets it (withdrawing an
    /// application is a business action outside this scope). Marking an
    /// already-marked id is a no-op.
    pub fn mark_applied(&mut self, id: &str) {
        self.applied.insert(id.to_string());
    }

    /// Whether the session has applied to a task
    #[must_use]
    pub fn has_applied(&self, id: &str) -> bool {
        self.applied.contains(id)
    }

    // ------------------------------------------------------------------
    // Row annotation
    // ------------------------------------------------------------------

    /// Everything known about one id, for annotating a displayed row
    #[must_use]
    pub fn get(&self, id: &str) -> SelectionView {
        SelectionView {
            quantity: self.quantity(id),
            bookmarked: self.is_bookmarked(id),
            applied: self.has_applied(id),
        }
    }
}
