//! Cart line items.
//!
//! A line item is one product entry within a user's cart, carrying its own
//! selected quantity. The quantity invariant
//! `1 <= selected_quantity <= available_quantity` is enforced at
//! construction and on every mutation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::ProductId;
use super::price::Price;

/// Errors from line item construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineItemError {
    /// The product has no sellable stock.
    #[error("Product {0} has no available stock")]
    OutOfStock(ProductId),
}

/// One product entry within a user's cart.
///
/// Display metadata (`name`, `description`, `category`) is opaque to cart
/// logic; only the price and quantities participate in totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product identifier, unique within a user's cart.
    pub id: ProductId,
    /// Product display name.
    pub name: String,
    /// Optional product description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional product category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Unit price, non-negative.
    pub unit_price: Price,
    /// Stock ceiling sourced from the catalog at add-time.
    available_quantity: u32,
    /// Selected quantity, always in `[1, available_quantity]`.
    selected_quantity: u32,
}

impl CartLineItem {
    /// Create a new line item, clamping `selected_quantity` into
    /// `[1, available_quantity]`.
    ///
    /// # Errors
    ///
    /// Returns `LineItemError::OutOfStock` if `available_quantity` is zero;
    /// a sellable line always carries at least one unit.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Price,
        available_quantity: u32,
        selected_quantity: u32,
    ) -> Result<Self, LineItemError> {
        if available_quantity == 0 {
            return Err(LineItemError::OutOfStock(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            description: None,
            category: None,
            unit_price,
            available_quantity,
            selected_quantity: selected_quantity.clamp(1, available_quantity),
        })
    }

    /// Attach an optional description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an optional category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The stock ceiling captured at add-time.
    #[must_use]
    pub const fn available_quantity(&self) -> u32 {
        self.available_quantity
    }

    /// The currently selected quantity.
    #[must_use]
    pub const fn selected_quantity(&self) -> u32 {
        self.selected_quantity
    }

    /// Set the selected quantity, clamping into `[1, available_quantity]`.
    ///
    /// Zero floors to one: setting a quantity never deletes the line.
    pub fn set_selected_quantity(&mut self, quantity: u32) {
        self.selected_quantity = quantity.clamp(1, self.available_quantity);
    }

    /// Merge another add of the same product: increment the selected
    /// quantity, clamped to not exceed the stock ceiling.
    pub fn merge_add(&mut self, additional: u32) {
        self.selected_quantity = self
            .selected_quantity
            .saturating_add(additional)
            .min(self.available_quantity);
    }

    /// `unit_price * selected_quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.times(self.selected_quantity)
    }
}
