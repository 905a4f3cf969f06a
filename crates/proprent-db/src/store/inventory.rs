//! # Inventory Store
//!
//! Bulk read/rewrite of the inventory collection.
//!
//! ## Rewrite-on-Mutation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Inventory Persistence Strategy                          │
//! │                                                                         │
//! │  Ledger mutation (checkout, return, catalog edit)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Snapshot of the full in-memory catalog                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  replace_all(snapshot)   ← one SQL transaction:                        │
//! │       │                     DELETE FROM inventory                      │
//! │       │                     INSERT one row per item                    │
//! │       ▼                                                                 │
//! │  Durable state == in-memory ledger, exactly                            │
//! │                                                                         │
//! │  Deliberate simplification: the catalog is small (a prop house, not    │
//! │  a warehouse), so rewriting beats tracking per-row dirty state.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use proprent_core::InventoryItem;

/// Store for the inventory collection.
///
/// ## Usage
/// ```rust,ignore
/// let store = InventoryStore::new(pool);
///
/// let items = store.load_all().await?;
/// store.replace_all(&items).await?;
/// ```
#[derive(Debug, Clone)]
pub struct InventoryStore {
    pool: SqlitePool,
}

impl InventoryStore {
    /// Creates a new InventoryStore.
    pub fn new(pool: SqlitePool) -> Self {
        InventoryStore { pool }
    }

    /// Loads every inventory item, in insertion order.
    ///
    /// ## Returns
    /// * `Ok(Vec<InventoryItem>)` - may be empty on first launch; the
    ///   caller seeds the default catalog in that case
    pub async fn load_all(&self) -> DbResult<Vec<InventoryItem>> {
        debug!("Loading inventory collection");

        let payloads: Vec<String> =
            sqlx::query_scalar("SELECT payload FROM inventory ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        let items = payloads
            .iter()
            .map(|p| serde_json::from_str(p))
            .collect::<Result<Vec<InventoryItem>, _>>()?;

        debug!(count = items.len(), "Inventory collection loaded");
        Ok(items)
    }

    /// Replaces the whole collection with the given snapshot.
    ///
    /// ## Atomicity
    /// DELETE + INSERTs run inside one SQL transaction: a reader never
    /// observes a half-rewritten collection, and a crash mid-rewrite leaves
    /// the previous snapshot intact.
    pub async fn replace_all(&self, items: &[InventoryItem]) -> DbResult<()> {
        debug!(count = items.len(), "Rewriting inventory collection");

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM inventory").execute(&mut *tx).await?;

        for item in items {
            let payload = serde_json::to_string(item)?;
            sqlx::query("INSERT INTO inventory (id, payload) VALUES (?1, ?2)")
                .bind(&item.id)
                .bind(payload)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Counts persisted inventory items (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
