//! Dashboard aggregate snapshot.
//!
//! A read-only snapshot of sales/order/product statistics assembled by the
//! reporting backend and consumed by the export encoder. The export logic
//! never mutates it.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// The reporting period covered by an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// First day of the period (inclusive).
    pub start: NaiveDate,
    /// Last day of the period (inclusive).
    pub end: NaiveDate,
}

/// Top-line sales figures for a period.
///
/// The average ticket is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    /// Total sales value over the period.
    pub total_sales: Decimal,
    /// Number of orders over the period.
    pub total_orders: u64,
    /// Number of items sold over the period.
    pub total_items: u64,
}

impl SalesSummary {
    /// `total_sales / total_orders` when there are orders, else zero.
    #[must_use]
    pub fn average_ticket(&self) -> Decimal {
        if self.total_orders == 0 {
            Decimal::ZERO
        } else {
            self.total_sales / Decimal::from(self.total_orders)
        }
    }
}

/// One entry in the top-products ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    /// Product identifier.
    pub id: ProductId,
    /// Product display name.
    pub name: String,
    /// Units sold over the period.
    pub quantity_sold: u64,
    /// Revenue attributed to this product over the period.
    pub total_revenue: Decimal,
}

impl TopProduct {
    /// `total_revenue / quantity_sold` when units were sold, else zero.
    #[must_use]
    pub fn average_ticket(&self) -> Decimal {
        if self.quantity_sold == 0 {
            Decimal::ZERO
        } else {
            self.total_revenue / Decimal::from(self.quantity_sold)
        }
    }
}

/// One entry in the recent-orders listing.
///
/// Most identity fields are optional: the reporting backend backfills what
/// it can and the export encoder renders fallbacks for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    /// Internal order identifier, used as a fallback display number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Customer-facing order number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    /// Customer display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Customer email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Order status label, opaque to export logic.
    pub status: String,
    /// Order total value.
    pub total: Decimal,
    /// Number of items in the order.
    pub item_count: u32,
    /// When the order was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// The full dashboard snapshot consumed by the export encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAggregate {
    /// Reporting period.
    pub period: Period,
    /// Top-line summary figures.
    pub summary: SalesSummary,
    /// Order counts keyed by status label.
    #[serde(default)]
    pub orders_by_status: BTreeMap<String, u64>,
    /// Ranked top products.
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
    /// Most recent orders.
    #[serde(default)]
    pub recent_orders: Vec<RecentOrder>,
}
