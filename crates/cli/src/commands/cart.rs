//! Local cart management commands.
//!
//! Each command opens the cart-storage slot, switches the active user, and
//! runs one store operation. Outcomes surface the way the store always
//! surfaces them: as notifications, logged here through the
//! `TracingNotifier`.
//!
//! # Environment Variables
//!
//! - `SUFFICIUS_API_BASE_URL` - Base URL of the commerce backend
//! - `SUFFICIUS_API_TOKEN` - Optional bearer token

use std::path::Path;

use thiserror::Error;

use sufficius_cart::{
    CartApiConfig, CartApiError, CartStore, ConfigError, HttpCartApi, JsonFileStorage,
    StorageError, TracingNotifier,
};
use sufficius_core::{CartLineItem, ProductId, UserId};

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CartCmdError {
    /// Backend configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The backend client could not be built.
    #[error("API client error: {0}")]
    Api(#[from] CartApiError),

    /// The cart-storage slot could not be read.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

type LocalStore = CartStore<HttpCartApi, JsonFileStorage, TracingNotifier>;

/// Open the storage slot and activate the given user.
fn open_store(cart_file: &Path, user: &str) -> Result<LocalStore, CartCmdError> {
    let config = CartApiConfig::from_env()?;
    let api = HttpCartApi::new(&config)?;
    let storage = JsonFileStorage::new(cart_file);
    let mut store = CartStore::new(api, storage, TracingNotifier)?;
    store.set_active_user(Some(UserId::new(user)));
    Ok(store)
}

/// Add an item to the user's cart (local-only).
pub fn add(cart_file: &Path, user: &str, item: CartLineItem) -> Result<(), CartCmdError> {
    let mut store = open_store(cart_file, user)?;
    store.add_item(item);
    Ok(())
}

/// Remove an item, confirming with the backend first.
pub async fn remove(cart_file: &Path, user: &str, id: ProductId) -> Result<(), CartCmdError> {
    let mut store = open_store(cart_file, user)?;
    store.remove_item(id).await;
    Ok(())
}

/// Set an item's quantity (local-only, clamped).
pub fn update(
    cart_file: &Path,
    user: &str,
    id: ProductId,
    quantity: u32,
) -> Result<(), CartCmdError> {
    let mut store = open_store(cart_file, user)?;
    store.update_quantity(id, quantity);
    Ok(())
}

/// List the user's cart lines.
pub fn list(cart_file: &Path, user: &str) -> Result<(), CartCmdError> {
    let store = open_store(cart_file, user)?;
    let items = store.items();

    if items.is_empty() {
        tracing::info!("Cart for {user} is empty");
        return Ok(());
    }

    tracing::info!("Cart for {user}:");
    for item in items {
        tracing::info!(
            "  {} - {} x{} @ {} = {:.2}",
            item.id,
            item.name,
            item.selected_quantity(),
            item.unit_price,
            item.line_total()
        );
    }
    Ok(())
}

/// Show the user's cart total and item count.
pub fn total(cart_file: &Path, user: &str) -> Result<(), CartCmdError> {
    let store = open_store(cart_file, user)?;
    tracing::info!(
        "Cart total for {user}: {:.2} ({} items)",
        store.total(),
        store.total_items()
    );
    Ok(())
}

/// Clear the user's cart, confirming with the backend first.
pub async fn clear(cart_file: &Path, user: &str) -> Result<(), CartCmdError> {
    let mut store = open_store(cart_file, user)?;
    store.clear_cart().await;
    Ok(())
}

/// Push the user's lines to the backend reconciliation endpoint.
pub async fn sync(cart_file: &Path, user: &str) -> Result<(), CartCmdError> {
    let store = open_store(cart_file, user)?;
    store.synchronize().await;
    Ok(())
}
