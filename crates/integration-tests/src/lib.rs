//! Integration tests for Sufficius Commerce.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sufficius-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart slot rehydration across store instances
//! - `export_artifacts` - On-disk export artifacts (BOM, filenames, content)
//!
//! This crate also provides shared fixtures: a scriptable remote cart stub
//! and a populated dashboard aggregate.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use sufficius_cart::{CartApi, CartApiError};
use sufficius_core::{
    CartLineItem, DashboardAggregate, Period, Price, ProductId, RecentOrder, SalesSummary,
    TopProduct,
};

/// Remote cart stub: every call succeeds or every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubCartApi {
    /// When set, every call returns a 503-style API error.
    pub fail: bool,
}

impl StubCartApi {
    fn result(self) -> Result<(), CartApiError> {
        if self.fail {
            Err(CartApiError::Api {
                status: 503,
                message: "backend unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl CartApi for StubCartApi {
    async fn delete_item(&self, _id: ProductId) -> Result<(), CartApiError> {
        self.result()
    }

    async fn clear(&self) -> Result<(), CartApiError> {
        self.result()
    }

    async fn sync(&self, _items: &[CartLineItem]) -> Result<(), CartApiError> {
        self.result()
    }
}

/// Build a cart line with a price given in cents.
///
/// # Panics
///
/// Panics on invalid fixture values; fixtures are test-only.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_line(id: i64, cents: i64, available: u32, selected: u32) -> CartLineItem {
    CartLineItem::new(
        ProductId::new(id),
        format!("Product {id}"),
        Price::new(Decimal::new(cents, 2)).unwrap(),
        available,
        selected,
    )
    .unwrap()
}

/// A populated dashboard aggregate covering January 2024.
///
/// # Panics
///
/// Panics on invalid fixture dates; fixtures are test-only.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_aggregate() -> DashboardAggregate {
    DashboardAggregate {
        period: Period {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        },
        summary: SalesSummary {
            total_sales: Decimal::new(150_000, 0),
            total_orders: 150,
            total_items: 300,
        },
        orders_by_status: BTreeMap::from([
            ("delivered".to_string(), 120),
            ("pending".to_string(), 30),
        ]),
        top_products: vec![TopProduct {
            id: ProductId::new(10),
            name: "Moka Pot".to_string(),
            quantity_sold: 40,
            total_revenue: Decimal::new(2000, 0),
        }],
        recent_orders: vec![RecentOrder {
            id: Some("ord-1".to_string()),
            order_number: Some("SUF-0001".to_string()),
            customer_name: Some("Maria Souza".to_string()),
            customer_email: Some("maria@example.com".to_string()),
            status: "delivered".to_string(),
            total: Decimal::new(129_90, 2),
            item_count: 3,
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()),
        }],
    }
}
