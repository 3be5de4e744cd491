//! Sufficius Cart - Client-side cart store.
//!
//! Maintains the authoritative client-side view of "what's in the cart" for
//! the active user, mirroring (best-effort, not transactionally) a
//! server-side cart reachable over REST.
//!
//! # Architecture
//!
//! - [`store::CartStore`] owns the per-user cart map and the active-user
//!   pointer. Local operations (`add_item`, `update_quantity`) mutate
//!   immediately; network-backed operations (`remove_item`, `clear_cart`)
//!   are pessimistic and only mutate after the backend confirms.
//! - [`api::CartApi`] is the remote collaborator seam; [`api::HttpCartApi`]
//!   is the production `reqwest` implementation.
//! - [`storage::CartStorage`] is the durable-slot seam; carts survive
//!   process restarts through [`storage::JsonFileStorage`].
//! - [`notify::Notifier`] is the toast seam; outcomes surface as
//!   notifications, never as panics.
//!
//! # Example
//!
//! ```rust,ignore
//! use sufficius_cart::{CartApiConfig, CartStore, HttpCartApi, JsonFileStorage, TracingNotifier};
//! use sufficius_core::UserId;
//!
//! let config = CartApiConfig::from_env()?;
//! let api = HttpCartApi::new(&config)?;
//! let storage = JsonFileStorage::new("cart-storage.json");
//! let mut store = CartStore::new(api, storage, TracingNotifier)?;
//!
//! store.set_active_user(Some(UserId::new("u-1")));
//! store.add_item(item);
//! store.remove_item(item_id).await;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod notify;
pub mod storage;
pub mod store;

pub use api::{CartApi, CartApiError, HttpCartApi};
pub use config::{CartApiConfig, ConfigError};
pub use notify::{Notifier, TracingNotifier};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, PersistedCart, StorageError};
pub use store::CartStore;
