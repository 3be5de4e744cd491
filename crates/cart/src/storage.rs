//! Durable storage for the cart map.
//!
//! The store persists one named slot containing the full user-cart map and
//! the active-user pointer, rehydrated verbatim on startup. The adapter is
//! injected so tests can substitute an in-memory slot for the JSON file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sufficius_core::{CartLineItem, UserId};

/// Errors from the storage adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the slot failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The slot contents were not valid JSON.
    #[error("Storage decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The persisted slot layout: the full user-cart map plus the active-user
/// pointer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedCart {
    /// User id -> ordered cart lines (insertion order = display order).
    #[serde(default)]
    pub user_carts: HashMap<UserId, Vec<CartLineItem>>,
    /// The currently active user, if any.
    #[serde(default)]
    pub current_user_id: Option<UserId>,
}

/// The durable-slot seam.
pub trait CartStorage {
    /// Load the slot. `Ok(None)` means no slot has been written yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot exists but cannot be read or
    /// decoded.
    fn load(&self) -> Result<Option<PersistedCart>, StorageError>;

    /// Write the slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    fn save(&self, cart: &PersistedCart) -> Result<(), StorageError>;
}

/// File-backed storage: one pretty-printed JSON document per slot.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage adapter backed by the given file path.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The slot path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<PersistedCart>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let cart = serde_json::from_str(&contents)?;
        Ok(Some(cart))
    }

    fn save(&self, cart: &PersistedCart) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(cart)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<PersistedCart>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current slot contents.
    #[must_use]
    pub fn contents(&self) -> Option<PersistedCart> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedCart>, StorageError> {
        Ok(self.contents())
    }

    fn save(&self, cart: &PersistedCart) -> Result<(), StorageError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(cart.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sufficius_core::{Price, ProductId};

    use super::*;

    fn sample_cart() -> PersistedCart {
        let line = CartLineItem::new(
            ProductId::new(1),
            "Filter Paper",
            Price::new(Decimal::new(499, 2)).unwrap(),
            10,
            2,
        )
        .unwrap();
        PersistedCart {
            user_carts: HashMap::from([(UserId::new("u-1"), vec![line])]),
            current_user_id: Some(UserId::new("u-1")),
        }
    }

    #[test]
    fn file_storage_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("cart-storage.json"));

        assert!(storage.load().unwrap().is_none());

        let cart = sample_cart();
        storage.save(&cart).unwrap();
        assert_eq!(storage.load().unwrap(), Some(cart));
    }

    #[test]
    fn file_storage_rejects_corrupt_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart-storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(matches!(
            storage.load().unwrap_err(),
            StorageError::Decode(_)
        ));
    }

    #[test]
    fn persisted_layout_uses_camel_case_keys() {
        let json = serde_json::to_value(sample_cart()).unwrap();
        assert!(json.get("userCarts").is_some());
        assert!(json.get("currentUserId").is_some());
    }

    #[test]
    fn memory_storage_shares_slot_between_clones() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.save(&sample_cart()).unwrap();
        assert_eq!(handle.contents(), Some(sample_cart()));
    }
}
