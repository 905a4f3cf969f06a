//! # Inventory Ledger
//!
//! Authoritative in-memory view of stock levels. Applies and validates
//! stock deltas; nothing else in the system is allowed to touch `stock`.
//!
//! ## Delta Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stock Update Strategy                                │
//! │                                                                         │
//! │  ❌ WRONG: absolute assignment from a cached value                     │
//! │     item.stock = cached_stock - quantity                               │
//! │                                                                         │
//! │  ✅ CORRECT: delta against the ledger's current state                  │
//! │     ledger.apply_delta(id, -quantity)                                  │
//! │                                                                         │
//! │  apply_delta re-reads current stock at the moment it runs, rejects     │
//! │  any delta that would go negative, and leaves stock untouched on       │
//! │  failure. Check-then-act sequences (undo-return) run on the single     │
//! │  session actor, so no other mutation can interleave.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use proprent_core::{CoreError, CoreResult, InventoryItem};

/// The in-memory stock ledger. Insertion order is preserved and is the
/// catalog's display order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    items: Vec<InventoryItem>,
}

impl Ledger {
    /// Creates a ledger over a loaded (or freshly seeded) catalog.
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Ledger { items }
    }

    /// Current catalog, insertion order preserved.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn get(&self, item_id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Current stock of an item; 0 if the item no longer exists.
    ///
    /// Used by undo-return, where a deleted item simply has nothing left
    /// to lend out.
    pub fn available(&self, item_id: &str) -> i64 {
        self.get(item_id).map(|i| i.stock).unwrap_or(0)
    }

    /// Adjusts an item's stock by `delta` (negative for lending out,
    /// positive for returns and restocking).
    ///
    /// ## Returns
    /// - `Err(CoreError::ItemNotFound)` if the id is unknown
    /// - `Err(CoreError::InsufficientStock)` if the result would be
    ///   negative; stock is left untouched
    pub fn apply_delta(&mut self, item_id: &str, delta: i64) -> CoreResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;

        let next = item.stock + delta;
        if next < 0 {
            return Err(CoreError::InsufficientStock {
                name: item.name.clone(),
                available: item.stock,
                requested: -delta,
            });
        }

        debug!(item_id = %item_id, delta = %delta, stock = %next, "Stock delta applied");
        item.stock = next;
        Ok(())
    }

    /// Inserts a new item or replaces an existing one by id.
    ///
    /// Direct catalog edit: no stock-delta validation beyond the caller
    /// having checked `stock >= 0` on input.
    pub fn upsert(&mut self, item: InventoryItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        } else {
            self.items.push(item);
        }
    }

    /// Removes an item from the catalog.
    pub fn remove(&mut self, item_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != item_id);

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotFound(item_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Deep copy of the catalog for a durable-write snapshot.
    pub fn snapshot(&self) -> Vec<InventoryItem> {
        self.items.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proprent_core::Category;

    fn item(id: &str, stock: i64) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            price: 40_000,
            stock,
            category: Category::Equipment,
        }
    }

    #[test]
    fn test_apply_delta_decrements_and_restores() {
        let mut ledger = Ledger::new(vec![item("a", 5)]);

        ledger.apply_delta("a", -2).unwrap();
        assert_eq!(ledger.available("a"), 3);

        ledger.apply_delta("a", 2).unwrap();
        assert_eq!(ledger.available("a"), 5);
    }

    #[test]
    fn test_apply_delta_rejects_negative_stock() {
        let mut ledger = Ledger::new(vec![item("a", 2)]);

        let err = ledger.apply_delta("a", -3).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 2,
                requested: 3,
                ..
            }
        ));

        // Stock untouched on failure
        assert_eq!(ledger.available("a"), 2);
    }

    #[test]
    fn test_apply_delta_unknown_item() {
        let mut ledger = Ledger::new(vec![]);
        assert!(matches!(
            ledger.apply_delta("ghost", 1),
            Err(CoreError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_available_is_zero_for_missing_item() {
        let ledger = Ledger::new(vec![item("a", 5)]);
        assert_eq!(ledger.available("deleted"), 0);
    }

    #[test]
    fn test_upsert_replaces_in_place_and_appends() {
        let mut ledger = Ledger::new(vec![item("a", 5), item("b", 3)]);

        let mut edited = item("a", 7);
        edited.name = "Edited".to_string();
        ledger.upsert(edited);

        // Replaced in place: order unchanged
        assert_eq!(ledger.items()[0].name, "Edited");
        assert_eq!(ledger.items()[0].stock, 7);
        assert_eq!(ledger.items()[1].id, "b");

        ledger.upsert(item("c", 1));
        assert_eq!(ledger.items().len(), 3);
        assert_eq!(ledger.items()[2].id, "c");
    }

    #[test]
    fn test_remove() {
        let mut ledger = Ledger::new(vec![item("a", 5)]);
        ledger.remove("a").unwrap();
        assert!(ledger.items().is_empty());
        assert!(matches!(
            ledger.remove("a"),
            Err(CoreError::ItemNotFound(_))
        ));
    }
}
