//! # Rental Store
//!
//! Per-record persistence of the rental transaction collection.
//!
//! Rentals are append-mostly: checkout inserts one record, return and
//! undo-return update that same record in place. Records are never deleted,
//! so the store exposes upsert rather than the inventory store's wholesale
//! rewrite.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use proprent_core::Rental;

/// Store for the rental transaction collection.
///
/// ## Usage
/// ```rust,ignore
/// let store = RentalStore::new(pool);
///
/// store.upsert(&rental).await?;
/// let rentals = store.load_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct RentalStore {
    pool: SqlitePool,
}

impl RentalStore {
    /// Creates a new RentalStore.
    pub fn new(pool: SqlitePool) -> Self {
        RentalStore { pool }
    }

    /// Loads every rental record, in insertion order.
    pub async fn load_all(&self) -> DbResult<Vec<Rental>> {
        debug!("Loading rental collection");

        let payloads: Vec<String> =
            sqlx::query_scalar("SELECT payload FROM rentals ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        let rentals = payloads
            .iter()
            .map(|p| serde_json::from_str(p))
            .collect::<Result<Vec<Rental>, _>>()?;

        debug!(count = rentals.len(), "Rental collection loaded");
        Ok(rentals)
    }

    /// Inserts or replaces one rental record.
    ///
    /// Covers both halves of the lifecycle: the insert at checkout and the
    /// in-place status updates from return / undo-return.
    pub async fn upsert(&self, rental: &Rental) -> DbResult<()> {
        debug!(id = %rental.id, status = ?rental.status, "Upserting rental");

        let payload = serde_json::to_string(rental)?;

        sqlx::query(
            "INSERT INTO rentals (id, payload) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET payload = excluded.payload",
        )
        .bind(&rental.id)
        .bind(payload)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts persisted rental records (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rentals")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Utc;
    use proprent_core::{CartLine, Category, RentalStatus};

    fn rental(id: &str) -> Rental {
        Rental {
            id: id.to_string(),
            timestamp: Utc::now(),
            customer_name: "Budi Santoso".to_string(),
            customer_phone: "0812-3456".to_string(),
            items: vec![CartLine {
                item_id: "prop-001".to_string(),
                name: "Lightsaber Replica".to_string(),
                price: 50_000,
                category: Category::Weapon,
                quantity: 2,
            }],
            days: 3,
            discount_percent: 10,
            total: 270_000,
            status: RentalStatus::Borrowed,
            returned_at: None,
        }
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_updates() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = db.rentals();

        let mut trx = rental("TRX-1");
        store.upsert(&trx).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);

        trx.status = RentalStatus::Returned;
        trx.returned_at = Some(Utc::now());
        store.upsert(&trx).await.unwrap();

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].status, RentalStatus::Returned);
        assert!(loaded[0].returned_at.is_some());
    }

    #[tokio::test]
    async fn test_load_all_preserves_insertion_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = db.rentals();

        store.upsert(&rental("TRX-1")).await.unwrap();
        store.upsert(&rental("TRX-2")).await.unwrap();

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded[0].id, "TRX-1");
        assert_eq!(loaded[1].id, "TRX-2");
    }
}
