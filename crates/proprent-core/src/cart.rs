//! # Cart Aggregator
//!
//! Builds a pending order from catalog items, bounded by current ledger
//! availability.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Operation               Cart Change           │
//! │  ───────────              ─────────               ───────────           │
//! │                                                                         │
//! │  Click Item ─────────────► add(&item) ──────────► qty + 1 (≤ stock)    │
//! │                                                                         │
//! │  Click Minus ────────────► decrement(id) ───────► qty - 1 (floor 1)    │
//! │                                                                         │
//! │  Click Remove ───────────► remove(id) ──────────► line removed         │
//! │                                                                         │
//! │  Checkout Succeeds ──────► clear() ─────────────► empty                │
//! │                                                                         │
//! │  NOTE: add() is judged against the ledger's live stock each time.      │
//! │        The cart never reserves stock ahead of checkout.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `item_id` (adding the same item increments quantity)
//! - For every line, `quantity <= stock` at the moment of each increment
//! - `decrement` floors at 1; removal is a distinct explicit action

use crate::error::{CoreError, CoreResult};
use crate::types::{CartLine, InventoryItem};

/// The rental cart.
///
/// The caller passes the ledger's current view of an item into [`Cart::add`];
/// the cart itself holds only frozen snapshots and quantities.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// The cart lines, in the order items were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds one unit of the given item to the cart.
    ///
    /// ## Behavior
    /// - If the item is already in the cart: increments its quantity by 1,
    ///   but only while `quantity < item.stock`
    /// - If not yet in the cart: inserts at quantity 1, but only if
    ///   `item.stock > 0`
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(CoreError::StockLimitReached)` if the ledger has no more units
    ///   to promise; the cart is left unchanged (no-op)
    ///
    /// `item` must be the ledger's *current* view: the stock ceiling is
    /// re-read on every increment, not just at checkout.
    pub fn add(&mut self, item: &InventoryItem) -> CoreResult<()> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            if line.quantity < item.stock {
                line.quantity += 1;
                return Ok(());
            }
            return Err(CoreError::StockLimitReached {
                name: item.name.clone(),
                stock: item.stock,
            });
        }

        if item.stock > 0 {
            self.lines.push(CartLine::from_item(item));
            Ok(())
        } else {
            Err(CoreError::StockLimitReached {
                name: item.name.clone(),
                stock: item.stock,
            })
        }
    }

    /// Decrements a line's quantity by 1, floored at 1.
    ///
    /// Decrementing never removes the line; use [`Cart::remove`] for that.
    ///
    /// ## Returns
    /// - `Ok(())` on success (including the floored no-op at quantity 1)
    /// - `Err(CoreError::ItemNotFound)` if the item has no line in the cart
    pub fn decrement(&mut self, item_id: &str) -> CoreResult<()> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.item_id == item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;

        if line.quantity > 1 {
            line.quantity -= 1;
        }
        Ok(())
    }

    /// Removes a line from the cart entirely.
    pub fn remove(&mut self, item_id: &str) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.item_id != item_id);

        if self.lines.len() == initial_len {
            Err(CoreError::ItemNotFound(item_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all lines. Called after a successful checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current quantity of the given item in the cart (0 if absent).
    pub fn quantity_of(&self, item_id: &str) -> i64 {
        self.lines
            .iter()
            .find(|l| l.item_id == item_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
