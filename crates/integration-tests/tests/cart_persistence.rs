//! Integration tests for cart slot persistence.
//!
//! Carts must survive process restarts: a second store instance opened on
//! the same slot sees exactly what the first instance persisted.

use sufficius_cart::{CartStore, JsonFileStorage, TracingNotifier};
use sufficius_core::{ProductId, UserId};
use sufficius_integration_tests::{StubCartApi, sample_line};

fn open(
    path: &std::path::Path,
) -> CartStore<StubCartApi, JsonFileStorage, TracingNotifier> {
    CartStore::new(
        StubCartApi::default(),
        JsonFileStorage::new(path),
        TracingNotifier,
    )
    .expect("slot should load")
}

#[test]
fn cart_survives_store_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let slot = dir.path().join("cart-storage.json");

    {
        let mut store = open(&slot);
        store.set_active_user(Some(UserId::new("u-1")));
        store.add_item(sample_line(1, 1250, 10, 2));
        store.add_item(sample_line(2, 399, 4, 1));
    }

    let store = open(&slot);
    assert_eq!(store.active_user(), Some(&UserId::new("u-1")));
    assert_eq!(store.total_items(), 3);
    assert_eq!(
        store.item(ProductId::new(1)).map(|l| l.selected_quantity()),
        Some(2)
    );
}

#[test]
fn slot_layout_matches_declared_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let slot = dir.path().join("cart-storage.json");

    let mut store = open(&slot);
    store.set_active_user(Some(UserId::new("u-1")));
    store.add_item(sample_line(7, 899, 3, 2));
    drop(store);

    let raw = std::fs::read_to_string(&slot).expect("slot file");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");

    assert_eq!(value["currentUserId"], "u-1");
    let lines = value["userCarts"]["u-1"].as_array().expect("cart lines");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["id"], 7);
    assert_eq!(lines[0]["availableQuantity"], 3);
    assert_eq!(lines[0]["selectedQuantity"], 2);
}

#[tokio::test]
async fn failed_remote_delete_leaves_slot_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let slot = dir.path().join("cart-storage.json");

    let mut store = CartStore::new(
        StubCartApi { fail: true },
        JsonFileStorage::new(&slot),
        TracingNotifier,
    )
    .expect("slot should load");
    store.set_active_user(Some(UserId::new("u-1")));
    store.add_item(sample_line(1, 1250, 10, 2));
    let before = std::fs::read_to_string(&slot).expect("slot file");

    store.remove_item(ProductId::new(1)).await;
    store.clear_cart().await;

    let after = std::fs::read_to_string(&slot).expect("slot file");
    assert_eq!(before, after);
    assert_eq!(store.total_items(), 2);
}

#[tokio::test]
async fn successful_remove_reaches_the_slot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let slot = dir.path().join("cart-storage.json");

    let mut store = open(&slot);
    store.set_active_user(Some(UserId::new("u-1")));
    store.add_item(sample_line(1, 1250, 10, 2));
    store.add_item(sample_line(2, 399, 4, 1));

    store.remove_item(ProductId::new(1)).await;
    drop(store);

    let store = open(&slot);
    assert!(store.item(ProductId::new(1)).is_none());
    assert_eq!(store.total_items(), 1);
}
