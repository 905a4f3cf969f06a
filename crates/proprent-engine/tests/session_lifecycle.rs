//! End-to-end lifecycle tests against a full in-memory session: bootstrap,
//! cart, checkout, return, undo-return, and inventory management.

use proprent_core::{Category, RentalStatus};
use proprent_db::DbConfig;
use proprent_engine::{CheckoutForm, ItemForm, RentalSession};

async fn open_session() -> RentalSession {
    RentalSession::open(DbConfig::in_memory()).await.unwrap()
}

fn checkout_form(name: &str) -> CheckoutForm {
    CheckoutForm {
        customer_name: name.to_string(),
        customer_phone: "0812-3456-7890".to_string(),
        days: 1,
        discount_percent: 0,
    }
}

#[tokio::test]
async fn test_bootstrap_seeds_default_catalog() {
    let session = open_session().await;

    let catalog = session.catalog();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog[0].id, "prop-001");
    assert_eq!(catalog[0].stock, 5);
    assert!(session.rentals().is_empty());
    assert!(session.cart_lines().is_empty());
}

#[tokio::test]
async fn test_add_to_cart_bounded_by_stock() {
    let mut session = open_session().await;

    // prop-001 has stock 5: five adds succeed, the sixth is rejected
    for _ in 0..5 {
        session.add_to_cart("prop-001").unwrap();
    }
    let err = session.add_to_cart("prop-001").unwrap_err();
    assert_eq!(err.code(), "STOCK_LIMIT_REACHED");

    // The cart itself is unchanged by the rejection
    assert_eq!(session.cart_lines().len(), 1);
    assert_eq!(session.cart_lines()[0].quantity, 5);
    // Stock is not reserved by the cart
    assert_eq!(session.catalog()[0].stock, 5);
}

#[tokio::test]
async fn test_add_unknown_item() {
    let mut session = open_session().await;
    let err = session.add_to_cart("ghost").unwrap_err();
    assert_eq!(err.code(), "ITEM_NOT_FOUND");
}

#[tokio::test]
async fn test_decrement_floors_at_one_and_remove_deletes() {
    let mut session = open_session().await;

    session.add_to_cart("prop-001").unwrap();
    session.add_to_cart("prop-001").unwrap();
    assert_eq!(session.cart_lines()[0].quantity, 2);

    session.decrement_cart_line("prop-001").unwrap();
    assert_eq!(session.cart_lines()[0].quantity, 1);

    // Floored at 1, not removed
    session.decrement_cart_line("prop-001").unwrap();
    assert_eq!(session.cart_lines()[0].quantity, 1);

    session.remove_cart_line("prop-001").unwrap();
    assert!(session.cart_lines().is_empty());
}

#[tokio::test]
async fn test_cart_totals_preview() {
    let mut session = open_session().await;

    // 2 × Lightsaber Replica @ 50 000/day
    session.add_to_cart("prop-001").unwrap();
    session.add_to_cart("prop-001").unwrap();

    let totals = session.cart_totals(3, 10);
    assert_eq!(totals.line_count, 1);
    assert_eq!(totals.total_quantity, 2);
    assert_eq!(totals.subtotal, 300_000);
    assert_eq!(totals.total, 270_000);

    // Display helper defaults out-of-range input instead of failing
    let totals = session.cart_totals(0, 150);
    assert_eq!(totals.subtotal, 100_000);
    assert_eq!(totals.total, 0);
}

#[tokio::test]
async fn test_checkout_creates_rental_and_decrements_stock() {
    let mut session = open_session().await;

    session.add_to_cart("prop-001").unwrap();
    session.add_to_cart("prop-001").unwrap();

    let mut form = checkout_form("Budi Santoso");
    form.days = 3;
    form.discount_percent = 10;
    let rental = session.checkout(&form).unwrap();

    assert!(rental.id.starts_with("TRX-"));
    assert_eq!(rental.status, RentalStatus::Borrowed);
    assert!(rental.returned_at.is_none());
    assert_eq!(rental.total, 270_000);
    assert_eq!(rental.items.len(), 1);
    assert_eq!(rental.items[0].quantity, 2);

    // Stock decremented, cart cleared, rental logged
    assert_eq!(session.catalog()[0].stock, 3);
    assert!(session.cart_lines().is_empty());
    assert_eq!(session.rentals().len(), 1);
}

#[tokio::test]
async fn test_checkout_empty_cart_rejected() {
    let mut session = open_session().await;
    let err = session.checkout(&checkout_form("Budi")).unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_checkout_validation_failure_leaves_state_untouched() {
    let mut session = open_session().await;
    session.add_to_cart("prop-001").unwrap();

    let mut form = checkout_form("");
    form.days = 3;
    let err = session.checkout(&form).unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");

    assert_eq!(session.catalog()[0].stock, 5);
    assert_eq!(session.cart_lines().len(), 1);
    assert!(session.rentals().is_empty());
}

#[tokio::test]
async fn test_checkout_is_all_or_nothing_against_current_stock() {
    let mut session = open_session().await;

    // Build a two-line cart, then shrink one item's stock behind it
    session.add_to_cart("prop-001").unwrap();
    session.add_to_cart("prop-002").unwrap();
    session.add_to_cart("prop-002").unwrap();
    session
        .upsert_inventory_item(ItemForm {
            id: Some("prop-002".to_string()),
            name: "Batman Cowl".to_string(),
            price: 35_000,
            stock: 1,
            category: Category::Costume,
        })
        .unwrap();

    let err = session.checkout(&checkout_form("Budi")).unwrap_err();
    assert_eq!(err.code(), "INSUFFICIENT_STOCK");

    // No delta was applied to either item
    assert_eq!(session.catalog()[0].stock, 5);
    assert_eq!(session.catalog()[1].stock, 1);
    assert_eq!(session.cart_lines().len(), 2);
    assert!(session.rentals().is_empty());
}

#[tokio::test]
async fn test_return_restores_stock_and_closes_rental() {
    let mut session = open_session().await;

    session.add_to_cart("prop-001").unwrap();
    session.add_to_cart("prop-001").unwrap();
    let rental = session.checkout(&checkout_form("Budi")).unwrap();
    assert_eq!(session.catalog()[0].stock, 3);

    let returned = session.return_rental(&rental.id).unwrap();
    assert_eq!(returned.status, RentalStatus::Returned);
    assert!(returned.returned_at.is_some());
    assert_eq!(session.catalog()[0].stock, 5);
}

#[tokio::test]
async fn test_return_twice_rejected() {
    let mut session = open_session().await;

    session.add_to_cart("prop-001").unwrap();
    let rental = session.checkout(&checkout_form("Budi")).unwrap();

    session.return_rental(&rental.id).unwrap();
    let err = session.return_rental(&rental.id).unwrap_err();
    assert_eq!(err.code(), "INVALID_RENTAL_STATUS");

    // Stock was restored exactly once
    assert_eq!(session.catalog()[0].stock, 5);
}

#[tokio::test]
async fn test_return_unknown_rental() {
    let mut session = open_session().await;
    let err = session.return_rental("TRX-0").unwrap_err();
    assert_eq!(err.code(), "RENTAL_NOT_FOUND");
}

#[tokio::test]
async fn test_undo_return_round_trip() {
    let mut session = open_session().await;

    session.add_to_cart("prop-001").unwrap();
    session.add_to_cart("prop-001").unwrap();
    let rental = session.checkout(&checkout_form("Budi")).unwrap();
    session.return_rental(&rental.id).unwrap();
    assert_eq!(session.catalog()[0].stock, 5);

    let reopened = session.undo_return(&rental.id).unwrap();
    assert_eq!(reopened.status, RentalStatus::Borrowed);
    assert!(reopened.returned_at.is_none());
    assert_eq!(session.catalog()[0].stock, 3);
}

#[tokio::test]
async fn test_undo_return_blocked_when_stock_re_lent() {
    let mut session = open_session().await;

    // Rent out both cameras, return them...
    session.add_to_cart("prop-003").unwrap();
    session.add_to_cart("prop-003").unwrap();
    let first = session.checkout(&checkout_form("Budi")).unwrap();
    session.return_rental(&first.id).unwrap();

    // ...then rent them to someone else
    session.add_to_cart("prop-003").unwrap();
    session.add_to_cart("prop-003").unwrap();
    session.checkout(&checkout_form("Siti")).unwrap();
    assert_eq!(session.catalog()[2].stock, 0);

    // Undoing the first return would need 2 units that are out again
    let err = session.undo_return(&first.id).unwrap_err();
    assert_eq!(err.code(), "INSUFFICIENT_STOCK_FOR_UNDO");

    // Nothing changed: rental stays returned, stock stays at 0
    assert!(session.find_rental(&first.id).unwrap().is_returned());
    assert_eq!(session.catalog()[2].stock, 0);
}

#[tokio::test]
async fn test_undo_return_on_open_rental_rejected() {
    let mut session = open_session().await;

    session.add_to_cart("prop-001").unwrap();
    let rental = session.checkout(&checkout_form("Budi")).unwrap();

    let err = session.undo_return(&rental.id).unwrap_err();
    assert_eq!(err.code(), "INVALID_RENTAL_STATUS");
}

#[tokio::test]
async fn test_return_skips_lines_for_deleted_items() {
    let mut session = open_session().await;

    session.add_to_cart("prop-001").unwrap();
    session.add_to_cart("prop-002").unwrap();
    let rental = session.checkout(&checkout_form("Budi")).unwrap();

    session.delete_inventory_item("prop-002").unwrap();

    // The return still succeeds; only the surviving item's stock is restored
    let returned = session.return_rental(&rental.id).unwrap();
    assert!(returned.is_returned());
    assert_eq!(session.catalog()[0].stock, 5);
    assert!(session.catalog().iter().all(|i| i.id != "prop-002"));

    // The historical record keeps its frozen line for the deleted item
    assert_eq!(returned.items.len(), 2);
}

#[tokio::test]
async fn test_rentals_listed_newest_first() {
    let mut session = open_session().await;

    session.add_to_cart("prop-001").unwrap();
    let first = session.checkout(&checkout_form("Budi")).unwrap();
    session.add_to_cart("prop-001").unwrap();
    let second = session.checkout(&checkout_form("Siti")).unwrap();
    session.add_to_cart("prop-001").unwrap();
    let third = session.checkout(&checkout_form("Agus")).unwrap();

    let ids: Vec<&str> = session.rentals().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec![&third.id, &second.id, &first.id]);
}

#[tokio::test]
async fn test_rental_ids_unique_under_rapid_checkout() {
    let mut session = open_session().await;

    let mut ids = Vec::new();
    for _ in 0..5 {
        session.add_to_cart("prop-004").unwrap();
        ids.push(session.checkout(&checkout_form("Budi")).unwrap().id);
    }

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn test_search_catalog() {
    let session = open_session().await;

    let hits = session.search_catalog("REPLICA");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "prop-001");

    assert_eq!(session.search_catalog("").len(), 4);
    assert!(session.search_catalog("excavator").is_empty());
}

#[tokio::test]
async fn test_upsert_inventory_item_create_and_edit() {
    let mut session = open_session().await;

    let created = session
        .upsert_inventory_item(ItemForm {
            id: None,
            name: "Fog Machine".to_string(),
            price: 75_000,
            stock: 2,
            category: Category::Equipment,
        })
        .unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(session.catalog().len(), 5);

    let edited = session
        .upsert_inventory_item(ItemForm {
            id: Some(created.id.clone()),
            name: "Fog Machine (Large)".to_string(),
            price: 90_000,
            stock: 3,
            category: Category::Equipment,
        })
        .unwrap();
    assert_eq!(edited.id, created.id);

    // Edited in place, not appended
    assert_eq!(session.catalog().len(), 5);
    assert_eq!(session.catalog()[4].name, "Fog Machine (Large)");
}

#[tokio::test]
async fn test_upsert_inventory_item_validation() {
    let mut session = open_session().await;

    let err = session
        .upsert_inventory_item(ItemForm {
            id: None,
            name: "Broken".to_string(),
            price: 10_000,
            stock: -1,
            category: Category::Equipment,
        })
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(session.catalog().len(), 4);
}

#[tokio::test]
async fn test_delete_unknown_item() {
    let mut session = open_session().await;
    let err = session.delete_inventory_item("ghost").unwrap_err();
    assert_eq!(err.code(), "ITEM_NOT_FOUND");
}
