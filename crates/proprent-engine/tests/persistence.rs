//! Durable-write tests: what the collections look like on disk after the
//! ordered write queues have drained.

use proprent_core::RentalStatus;
use proprent_db::DbConfig;
use proprent_engine::{CheckoutForm, RentalSession};

fn checkout_form(name: &str) -> CheckoutForm {
    CheckoutForm {
        customer_name: name.to_string(),
        customer_phone: "0812-3456-7890".to_string(),
        days: 1,
        discount_percent: 0,
    }
}

#[tokio::test]
async fn test_bootstrap_persists_seed_catalog() {
    let session = RentalSession::open(DbConfig::in_memory()).await.unwrap();

    // Seeding is awaited during open, so the collection is already durable
    let stored = session.database().inventory().load_all().await.unwrap();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored, session.catalog());
}

#[tokio::test]
async fn test_checkout_persists_both_collections() {
    let mut session = RentalSession::open(DbConfig::in_memory()).await.unwrap();

    session.add_to_cart("prop-001").unwrap();
    session.add_to_cart("prop-001").unwrap();
    let rental = session.checkout(&checkout_form("Budi")).unwrap();
    session.flush().await;

    let stored_items = session.database().inventory().load_all().await.unwrap();
    assert_eq!(stored_items[0].stock, 3);

    let stored_rentals = session.database().rentals().load_all().await.unwrap();
    assert_eq!(stored_rentals.len(), 1);
    assert_eq!(stored_rentals[0], rental);
}

#[tokio::test]
async fn test_return_updates_the_stored_rental_in_place() {
    let mut session = RentalSession::open(DbConfig::in_memory()).await.unwrap();

    session.add_to_cart("prop-002").unwrap();
    let rental = session.checkout(&checkout_form("Budi")).unwrap();
    session.return_rental(&rental.id).unwrap();
    session.flush().await;

    // Upsert by id: one record, now in the returned state
    let stored = session.database().rentals().load_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, rental.id);
    assert_eq!(stored[0].status, RentalStatus::Returned);
    assert!(stored[0].returned_at.is_some());

    let stored_items = session.database().inventory().load_all().await.unwrap();
    assert_eq!(stored_items[1].stock, 3);
}

#[tokio::test]
async fn test_rapid_mutations_converge_to_current_state() {
    let mut session = RentalSession::open(DbConfig::in_memory()).await.unwrap();

    // A burst of mutations with no intervening flush: every one enqueues an
    // inventory snapshot, and the queue must apply them in order so the
    // last durable state equals the live ledger.
    for _ in 0..10 {
        session.add_to_cart("prop-004").unwrap();
        let rental = session.checkout(&checkout_form("Budi")).unwrap();
        session.return_rental(&rental.id).unwrap();
    }
    session.add_to_cart("prop-004").unwrap();
    session.checkout(&checkout_form("Siti")).unwrap();
    session.flush().await;

    let stored_items = session.database().inventory().load_all().await.unwrap();
    assert_eq!(stored_items, session.catalog());
    assert_eq!(stored_items[3].stock, 7);

    let stored_rentals = session.database().rentals().load_all().await.unwrap();
    assert_eq!(stored_rentals.len(), 11);
}

#[tokio::test]
async fn test_mutation_succeeds_when_pool_is_closed() {
    let mut session = RentalSession::open(DbConfig::in_memory()).await.unwrap();

    // Kill the pool out from under the writer tasks
    session.database().close().await;

    // Durable writes now fail and are logged, but the session keeps working
    session.add_to_cart("prop-001").unwrap();
    let rental = session.checkout(&checkout_form("Budi")).unwrap();
    session.flush().await;

    assert_eq!(session.catalog()[0].stock, 4);
    assert!(session.find_rental(&rental.id).is_some());
}
