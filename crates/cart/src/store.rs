//! The cart store.
//!
//! Owns the per-user cart map and the active-user pointer. Mutation policy
//! is deliberately asymmetric: `add_item` and `update_quantity` mutate
//! locally with no server round-trip, while `remove_item` and `clear_cart`
//! are pessimistic and only mutate after the backend confirms the delete.
//!
//! Every operation is a no-op with a user-facing warning when no user is
//! active; nothing here panics or propagates an error to the caller.

use rust_decimal::Decimal;

use sufficius_core::{CartLineItem, ProductId, UserId};

use crate::api::CartApi;
use crate::notify::Notifier;
use crate::storage::{CartStorage, PersistedCart, StorageError};

const NO_ITEMS: &[CartLineItem] = &[];

/// Client-side cart store, mirroring the server-side cart best-effort.
#[derive(Debug)]
pub struct CartStore<A, S, N> {
    api: A,
    storage: S,
    notifier: N,
    state: PersistedCart,
}

impl<A, S, N> CartStore<A, S, N>
where
    A: CartApi,
    S: CartStorage,
    N: Notifier,
{
    /// Create a store, rehydrating the persisted slot if one exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot exists but cannot be read or
    /// decoded.
    pub fn new(api: A, storage: S, notifier: N) -> Result<Self, StorageError> {
        let state = storage.load()?.unwrap_or_default();
        Ok(Self {
            api,
            storage,
            notifier,
            state,
        })
    }

    /// Switch the active-user pointer.
    ///
    /// No effect on stored carts; passing `None` disables all mutating
    /// operations until a user is set again.
    pub fn set_active_user(&mut self, user: Option<UserId>) {
        self.state.current_user_id = user;
        self.persist();
    }

    /// The currently active user, if any.
    #[must_use]
    pub fn active_user(&self) -> Option<&UserId> {
        self.state.current_user_id.as_ref()
    }

    /// Add a line item to the active user's cart.
    ///
    /// A same-id add merges by incrementing the selected quantity, clamped
    /// to the stored line's stock ceiling. Local-only: reconciliation with
    /// the backend is a separate, explicitly invoked operation
    /// ([`Self::synchronize`]).
    pub fn add_item(&mut self, item: CartLineItem) {
        let Some(user) = self.state.current_user_id.clone() else {
            self.notifier
                .warning("Please sign in to add items to your cart");
            return;
        };

        let lines = self.state.user_carts.entry(user).or_default();
        if let Some(existing) = lines.iter_mut().find(|line| line.id == item.id) {
            existing.merge_add(item.selected_quantity());
        } else {
            lines.push(item);
        }

        self.notifier.success("Item added to cart");
        self.persist();
    }

    /// Remove a line item, pessimistically.
    ///
    /// Issues the remote delete first; local state only changes once the
    /// backend confirms. On failure the cart is untouched and the user must
    /// retry manually.
    pub async fn remove_item(&mut self, id: ProductId) {
        let Some(user) = self.state.current_user_id.clone() else {
            self.notifier.warning("Please sign in to manage your cart");
            return;
        };

        let exists = self
            .state
            .user_carts
            .get(&user)
            .is_some_and(|lines| lines.iter().any(|line| line.id == id));
        if !exists {
            self.notifier.warning("That item is not in your cart");
            return;
        }

        match self.api.delete_item(id).await {
            Ok(()) => {
                if let Some(lines) = self.state.user_carts.get_mut(&user) {
                    lines.retain(|line| line.id != id);
                    if lines.is_empty() {
                        self.state.user_carts.remove(&user);
                    }
                }
                self.notifier.success("Item removed from cart");
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to remove item {id} from remote cart: {e}");
                self.notifier
                    .error("Could not remove the item, please try again");
            }
        }
    }

    /// Set a line's selected quantity, clamped into
    /// `[1, available_quantity]`.
    ///
    /// Zero floors to one: unlike the backend route, a zero quantity never
    /// deletes the line here. Local-only.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        let Some(user) = self.state.current_user_id.clone() else {
            self.notifier.warning("Please sign in to manage your cart");
            return;
        };

        let Some(line) = self
            .state
            .user_carts
            .get_mut(&user)
            .and_then(|lines| lines.iter_mut().find(|line| line.id == id))
        else {
            self.notifier.warning("That item is not in your cart");
            return;
        };

        line.set_selected_quantity(quantity);
        self.persist();
    }

    /// Empty the active user's cart, pessimistically.
    pub async fn clear_cart(&mut self) {
        let Some(user) = self.state.current_user_id.clone() else {
            self.notifier.warning("Please sign in to manage your cart");
            return;
        };

        match self.api.clear().await {
            Ok(()) => {
                self.state.user_carts.remove(&user);
                self.notifier.success("Cart cleared");
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to clear remote cart: {e}");
                self.notifier
                    .error("Could not clear the cart, please try again");
            }
        }
    }

    /// Push the active user's lines to the backend reconciliation endpoint.
    ///
    /// No local mutation in either outcome.
    pub async fn synchronize(&self) {
        if self.state.current_user_id.is_none() {
            self.notifier.warning("Please sign in to manage your cart");
            return;
        }

        if let Err(e) = self.api.sync(self.items()).await {
            tracing::error!("Failed to synchronize cart: {e}");
            self.notifier
                .error("Could not synchronize the cart, please try again");
        }
    }

    /// `sum(unit_price * selected_quantity)` over the active user's lines;
    /// zero when no user is active.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items().iter().map(CartLineItem::line_total).sum()
    }

    /// `sum(selected_quantity)` over the active user's lines; zero when no
    /// user is active.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items()
            .iter()
            .map(|line| u64::from(line.selected_quantity()))
            .sum()
    }

    /// Item-count badge for an explicitly named user, regardless of the
    /// active-user pointer (multi-tab scenarios).
    #[must_use]
    pub fn total_items_for_user(&self, user: &UserId) -> u64 {
        self.state
            .user_carts
            .get(user)
            .map_or(0, |lines| {
                lines
                    .iter()
                    .map(|line| u64::from(line.selected_quantity()))
                    .sum()
            })
    }

    /// The active user's line with this id, if any.
    #[must_use]
    pub fn item(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items().iter().find(|line| line.id == id)
    }

    /// The active user's full ordered line list; empty when no user is
    /// active.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        self.state
            .current_user_id
            .as_ref()
            .and_then(|user| self.state.user_carts.get(user))
            .map_or(NO_ITEMS, Vec::as_slice)
    }

    /// Write-on-mutate: a failed save keeps the in-memory state and catches
    /// the durable copy up on the next successful write.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.state) {
            tracing::warn!("Failed to persist cart state: {e}");
        }
    }
}
