//! # Rental Session
//!
//! The session-scoped controller object. Owns all mutable state explicitly
//! (no ambient globals) and exposes the facade the UI collaborator consumes.
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       RentalSession                                     │
//! │                                                                         │
//! │  ┌───────────┐  ┌────────┐  ┌──────────────┐  ┌────────────────────┐  │
//! │  │  Ledger   │  │  Cart  │  │  Rental log  │  │  Write queues      │  │
//! │  │  (stock)  │  │        │  │ (append-only)│  │  inventory/rentals │  │
//! │  └───────────┘  └────────┘  └──────────────┘  └────────────────────┘  │
//! │                                                                         │
//! │  Sole authority for `stock`: the Ledger.                               │
//! │  Sole authority for `status`/`returned_at`: the lifecycle methods.     │
//! │  Both change together inside one facade call.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Logical Actor
//! All operations originate from one user-facing counter session, so the
//! facade takes `&mut self` and needs no interior locking. In-memory state
//! is mutated first; the durable write for the mutation is enqueued on the
//! affected collection's ordered queue and applied asynchronously (see
//! [`crate::persist`]). A caller that needs to share the session across
//! tasks wraps it in its own `Mutex`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use proprent_core::{
    pricing, rental_id_at, validation, Cart, CartLine, Category, CoreError, InventoryItem, Rental,
    RentalStatus, ValidationError, DEFAULT_DISCOUNT_PERCENT, DEFAULT_RENTAL_DAYS,
    MAX_DISCOUNT_PERCENT, MIN_RENTAL_DAYS,
};
use proprent_db::{Database, DbConfig, InventoryStore, RentalStore};

use crate::error::SessionResult;
use crate::ledger::Ledger;
use crate::persist::CollectionWriter;

// =============================================================================
// Form Types
// =============================================================================

/// Checkout form as submitted by the UI collaborator.
///
/// `days` and `discount_percent` default when the form leaves them blank
/// (1 day, 0%); values that are present but out of range fail validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default = "default_rental_days")]
    pub days: i64,
    #[serde(default = "default_discount_percent")]
    pub discount_percent: i64,
}

fn default_rental_days() -> i64 {
    DEFAULT_RENTAL_DAYS
}

fn default_discount_percent() -> i64 {
    DEFAULT_DISCOUNT_PERCENT
}

/// Inventory add/edit form.
///
/// `id` is absent for a new item (one is generated) and present when
/// editing an existing catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemForm {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub price: i64,
    pub stock: i64,
    pub category: Category,
}

/// Cart totals summary for live display while the checkout form is edited.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal: i64,
    pub total: i64,
}

// =============================================================================
// Seed Catalog
// =============================================================================

/// Fixed default catalog, written when the inventory collection is empty at
/// startup. A small prop-house starter set.
fn seed_catalog() -> Vec<InventoryItem> {
    let seed = [
        ("prop-001", "Lightsaber Replica", 50_000, 5, Category::Weapon),
        ("prop-002", "Batman Cowl", 35_000, 3, Category::Costume),
        (
            "prop-003",
            "Vintage 16mm Camera",
            150_000,
            2,
            Category::Equipment,
        ),
        ("prop-004", "Prop Revolver (Blank)", 40_000, 8, Category::Weapon),
    ];

    seed.into_iter()
        .map(|(id, name, price, stock, category)| InventoryItem {
            id: id.to_string(),
            name: name.to_string(),
            price,
            stock,
            category,
        })
        .collect()
}

// =============================================================================
// Rental Session
// =============================================================================

/// A running counter session: catalog, cart, rental log, and the durable
/// write queues that shadow them.
#[derive(Debug)]
pub struct RentalSession {
    db: Database,
    ledger: Ledger,
    cart: Cart,
    rentals: Vec<Rental>,
    inventory_writer: CollectionWriter<Vec<InventoryItem>>,
    rental_writer: CollectionWriter<Rental>,
}

impl RentalSession {
    /// Opens a session: connects, loads both collections, and seeds the
    /// default catalog if the inventory collection is empty.
    ///
    /// The seed write is awaited - the application does not become usable
    /// until the bootstrap snapshot is durable. Every later write is
    /// fire-and-forget through the queues.
    pub async fn open(config: DbConfig) -> SessionResult<Self> {
        let db = Database::new(config).await?;

        let mut items = db.inventory().load_all().await?;
        if items.is_empty() {
            items = seed_catalog();
            db.inventory().replace_all(&items).await?;
            info!(count = items.len(), "Inventory empty; seeded default catalog");
        }

        let rentals = db.rentals().load_all().await?;
        info!(
            items = items.len(),
            rentals = rentals.len(),
            "Session state loaded"
        );

        let inventory_store: InventoryStore = db.inventory();
        let inventory_writer =
            CollectionWriter::spawn("inventory", move |snapshot: Vec<InventoryItem>| {
                let store = inventory_store.clone();
                async move { store.replace_all(&snapshot).await }
            });

        let rental_store: RentalStore = db.rentals();
        let rental_writer = CollectionWriter::spawn("rentals", move |rental: Rental| {
            let store = rental_store.clone();
            async move { store.upsert(&rental).await }
        });

        Ok(RentalSession {
            db,
            ledger: Ledger::new(items),
            cart: Cart::new(),
            rentals,
            inventory_writer,
            rental_writer,
        })
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Current catalog, insertion order preserved.
    pub fn catalog(&self) -> &[InventoryItem] {
        self.ledger.items()
    }

    /// Catalog entries whose name contains `query`, case-insensitively.
    /// An empty query returns the whole catalog.
    pub fn search_catalog(&self, query: &str) -> Vec<&InventoryItem> {
        let needle = query.trim().to_lowercase();
        self.ledger
            .items()
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Current cart contents.
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Subtotal/total preview for the current cart and form values.
    ///
    /// This is a display helper, so it defaults out-of-range input the way
    /// the checkout form would (blank days → 1, discount clamped to 0-100)
    /// rather than failing.
    pub fn cart_totals(&self, days: i64, discount_percent: i64) -> CartTotals {
        let days = days.max(MIN_RENTAL_DAYS);
        let discount = discount_percent.clamp(0, MAX_DISCOUNT_PERCENT);
        CartTotals {
            line_count: self.cart.line_count(),
            total_quantity: self.cart.total_quantity(),
            subtotal: pricing::subtotal(self.cart.lines(), days),
            total: pricing::total(self.cart.lines(), days, discount),
        }
    }

    /// All rental transactions, newest first by creation time.
    pub fn rentals(&self) -> Vec<&Rental> {
        // The log is append-only, so index order is creation order; the
        // index breaks timestamp ties for same-millisecond checkouts.
        let mut list: Vec<(usize, &Rental)> = self.rentals.iter().enumerate().collect();
        list.sort_by(|(ia, a), (ib, b)| b.timestamp.cmp(&a.timestamp).then(ib.cmp(ia)));
        list.into_iter().map(|(_, r)| r).collect()
    }

    /// Looks up one rental by id.
    pub fn find_rental(&self, rental_id: &str) -> Option<&Rental> {
        self.rentals.iter().find(|r| r.id == rental_id)
    }

    /// The underlying database handle (diagnostics and tests).
    pub fn database(&self) -> &Database {
        &self.db
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds one unit of a catalog item to the cart, bounded by the ledger's
    /// current stock.
    pub fn add_to_cart(&mut self, item_id: &str) -> SessionResult<()> {
        let item = self
            .ledger
            .get(item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;

        self.cart.add(item)?;
        debug!(item_id = %item_id, quantity = self.cart.quantity_of(item_id), "Added to cart");
        Ok(())
    }

    /// Decrements a cart line's quantity, floored at 1.
    pub fn decrement_cart_line(&mut self, item_id: &str) -> SessionResult<()> {
        self.cart.decrement(item_id)?;
        Ok(())
    }

    /// Removes a cart line entirely.
    pub fn remove_cart_line(&mut self, item_id: &str) -> SessionResult<()> {
        self.cart.remove(item_id)?;
        Ok(())
    }

    /// Empties the cart without checking out.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // =========================================================================
    // Transaction Lifecycle
    // =========================================================================

    /// Commits the cart into a rental transaction.
    ///
    /// ## Atomicity
    /// Stock sufficiency is verified for ALL cart lines against the
    /// ledger's current state before ANY delta is applied; on failure the
    /// ledger, cart, and rental log are untouched. (The cart does not
    /// reserve stock, so a catalog edit between cart-build and checkout can
    /// still surface here as `InsufficientStock`.)
    pub fn checkout(&mut self, form: &CheckoutForm) -> SessionResult<Rental> {
        validation::validate_customer_name(&form.customer_name)?;
        validation::validate_customer_phone(&form.customer_phone)?;
        validation::validate_rental_days(form.days)?;
        validation::validate_discount_percent(form.discount_percent)?;

        if self.cart.is_empty() {
            return Err(CoreError::Validation(ValidationError::Required {
                field: "cart".to_string(),
            })
            .into());
        }

        // Validate first...
        for line in self.cart.lines() {
            let item = self
                .ledger
                .get(&line.item_id)
                .ok_or_else(|| CoreError::ItemNotFound(line.item_id.clone()))?;
            if item.stock < line.quantity {
                return Err(CoreError::InsufficientStock {
                    name: item.name.clone(),
                    available: item.stock,
                    requested: line.quantity,
                }
                .into());
            }
        }

        // ...mutate second.
        let lines = self.cart.lines().to_vec();
        for line in &lines {
            self.ledger.apply_delta(&line.item_id, -line.quantity)?;
        }

        let total = pricing::total(&lines, form.days, form.discount_percent);
        let now = Utc::now();
        let rental = Rental {
            id: self.unique_rental_id(now),
            timestamp: now,
            customer_name: form.customer_name.trim().to_string(),
            customer_phone: form.customer_phone.trim().to_string(),
            items: lines,
            days: form.days,
            discount_percent: form.discount_percent,
            total,
            status: RentalStatus::Borrowed,
            returned_at: None,
        };

        self.rentals.push(rental.clone());
        self.cart.clear();

        self.persist_inventory();
        self.rental_writer.enqueue(rental.clone());

        info!(
            rental_id = %rental.id,
            customer = %rental.customer_name,
            lines = rental.items.len(),
            total = rental.total,
            "Checkout complete"
        );
        Ok(rental)
    }

    /// Closes an open rental and restores its stock.
    ///
    /// A line whose item was deleted from the catalog since checkout is
    /// skipped (there is no ledger entry to restore into) and logged so the
    /// operator can reconcile inventory against history; the remaining
    /// lines still restore and the return succeeds.
    pub fn return_rental(&mut self, rental_id: &str) -> SessionResult<Rental> {
        let idx = self.rental_index(rental_id)?;

        if !self.rentals[idx].is_borrowed() {
            return Err(CoreError::InvalidRentalStatus {
                rental_id: rental_id.to_string(),
                current_status: self.rentals[idx].status.to_string(),
            }
            .into());
        }

        let lines = self.rentals[idx].items.clone();
        for line in &lines {
            match self.ledger.apply_delta(&line.item_id, line.quantity) {
                Ok(()) => {}
                Err(CoreError::ItemNotFound(_)) => {
                    warn!(
                        rental_id = %rental_id,
                        item_id = %line.item_id,
                        quantity = line.quantity,
                        "Item deleted since checkout; stock restoration skipped"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        let rental = &mut self.rentals[idx];
        rental.status = RentalStatus::Returned;
        rental.returned_at = Some(Utc::now());
        let updated = rental.clone();

        self.persist_inventory();
        self.rental_writer.enqueue(updated.clone());

        info!(rental_id = %rental_id, "Rental returned");
        Ok(updated)
    }

    /// Reverses a return, re-opening the rental and re-lending its stock.
    ///
    /// ## Atomicity
    /// Validates first, mutates second: every line's current ledger stock
    /// must cover its quantity (a deleted item counts as 0 available)
    /// before ANY decrement is applied. On failure the ledger and the
    /// rental are untouched.
    pub fn undo_return(&mut self, rental_id: &str) -> SessionResult<Rental> {
        let idx = self.rental_index(rental_id)?;

        if !self.rentals[idx].is_returned() {
            return Err(CoreError::InvalidRentalStatus {
                rental_id: rental_id.to_string(),
                current_status: self.rentals[idx].status.to_string(),
            }
            .into());
        }

        // Validate first...
        for line in &self.rentals[idx].items {
            let available = self.ledger.available(&line.item_id);
            if available < line.quantity {
                return Err(CoreError::InsufficientStockForUndo {
                    name: line.name.clone(),
                    available,
                    required: line.quantity,
                }
                .into());
            }
        }

        // ...mutate second.
        let lines = self.rentals[idx].items.clone();
        for line in &lines {
            self.ledger.apply_delta(&line.item_id, -line.quantity)?;
        }

        let rental = &mut self.rentals[idx];
        rental.status = RentalStatus::Borrowed;
        rental.returned_at = None;
        let updated = rental.clone();

        self.persist_inventory();
        self.rental_writer.enqueue(updated.clone());

        info!(rental_id = %rental_id, "Return undone");
        Ok(updated)
    }

    // =========================================================================
    // Inventory Management
    // =========================================================================

    /// Creates or edits a catalog item.
    pub fn upsert_inventory_item(&mut self, form: ItemForm) -> SessionResult<InventoryItem> {
        validation::validate_item_name(&form.name)?;
        validation::validate_price(form.price)?;
        validation::validate_stock(form.stock)?;

        let item = InventoryItem {
            id: form
                .id
                .unwrap_or_else(proprent_core::generate_item_id),
            name: form.name.trim().to_string(),
            price: form.price,
            stock: form.stock,
            category: form.category,
        };

        self.ledger.upsert(item.clone());
        self.persist_inventory();

        info!(item_id = %item.id, name = %item.name, "Inventory item saved");
        Ok(item)
    }

    /// Deletes a catalog item.
    ///
    /// Historical rentals keep their frozen snapshot of the item; a later
    /// return of such a rental skips the missing line (see
    /// [`RentalSession::return_rental`]).
    pub fn delete_inventory_item(&mut self, item_id: &str) -> SessionResult<()> {
        self.ledger.remove(item_id)?;
        self.persist_inventory();

        info!(item_id = %item_id, "Inventory item deleted");
        Ok(())
    }

    // =========================================================================
    // Durability
    // =========================================================================

    /// Waits for both write queues to drain.
    pub async fn flush(&self) {
        self.inventory_writer.flush().await;
        self.rental_writer.flush().await;
    }

    /// Flushes outstanding writes and closes the database pool.
    pub async fn close(self) {
        self.flush().await;
        self.db.close().await;
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn persist_inventory(&self) {
        self.inventory_writer.enqueue(self.ledger.snapshot());
    }

    fn rental_index(&self, rental_id: &str) -> SessionResult<usize> {
        self.rentals
            .iter()
            .position(|r| r.id == rental_id)
            .ok_or_else(|| CoreError::RentalNotFound(rental_id.to_string()).into())
    }

    /// Time-derived rental id, nudged forward if two checkouts land in the
    /// same millisecond.
    fn unique_rental_id(&self, now: DateTime<Utc>) -> String {
        let mut millis = now.timestamp_millis();
        let mut id = rental_id_at(now);
        while self.rentals.iter().any(|r| r.id == id) {
            millis += 1;
            id = format!("TRX-{}", millis);
        }
        id
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_form_defaults() {
        let form: CheckoutForm = serde_json::from_str(
            r#"{"customerName": "Budi", "customerPhone": "0812"}"#,
        )
        .unwrap();

        assert_eq!(form.days, 1);
        assert_eq!(form.discount_percent, 0);
    }

    #[test]
    fn test_item_form_id_optional() {
        let form: ItemForm = serde_json::from_str(
            r#"{"name": "Fog Machine", "price": 75000, "stock": 2, "category": "equipment"}"#,
        )
        .unwrap();

        assert!(form.id.is_none());
        assert_eq!(form.category, Category::Equipment);
    }

    #[test]
    fn test_seed_catalog_shape() {
        let seed = seed_catalog();
        assert_eq!(seed.len(), 4);
        assert!(seed.iter().all(|i| i.stock >= 0 && i.price >= 0));
        assert_eq!(seed[0].name, "Lightsaber Replica");
    }
}
