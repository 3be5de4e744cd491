//! CSV document builders.
//!
//! Pure functions from an aggregate snapshot to CSV text: all fields
//! double-quoted (embedded quotes doubled), comma-separated, `\n` line
//! endings, monetary values to exactly two decimal places, dates as
//! `DD/MM/YYYY`. The UTF-8 BOM is the exporter's concern, not ours.

use std::fmt::Write as _;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use sufficius_core::{DashboardAggregate, RecentOrder, TopProduct};

/// Fallback for missing order numbers, emails, and dates.
const NOT_AVAILABLE: &str = "N/A";

/// Fallback for a missing customer name.
const FALLBACK_CUSTOMER: &str = "Cliente";

/// Which slice of the aggregate a CSV export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// Recent orders listing.
    Orders,
    /// Top-products ranking.
    Products,
    /// Single-row period summary.
    Summary,
    /// Everything, with section banners.
    Full,
}

impl ExportScope {
    /// The scope's wire name, used in filenames and CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Products => "products",
            Self::Summary => "summary",
            Self::Full => "full",
        }
    }
}

impl std::fmt::Display for ExportScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized scope name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown export scope: {0} (expected orders, products, summary, or full)")]
pub struct ParseScopeError(String);

impl FromStr for ExportScope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orders" => Ok(Self::Orders),
            "products" => Ok(Self::Products),
            "summary" => Ok(Self::Summary),
            "full" => Ok(Self::Full),
            other => Err(ParseScopeError(other.to_string())),
        }
    }
}

/// Build the CSV document for the given scope.
#[must_use]
pub fn document(aggregate: &DashboardAggregate, period_label: &str, scope: ExportScope) -> String {
    let lines = match scope {
        ExportScope::Orders => orders_lines(&aggregate.recent_orders),
        ExportScope::Products => products_lines(&aggregate.top_products),
        ExportScope::Summary => summary_lines(aggregate, period_label),
        ExportScope::Full => full_lines(aggregate, period_label),
    };
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn orders_lines(orders: &[RecentOrder]) -> Vec<String> {
    let mut lines = vec![row(&[
        "Order Number",
        "Customer",
        "Email",
        "Status",
        "Total Value",
        "Items",
        "Order Date",
    ])];
    lines.extend(orders.iter().map(order_row));
    lines
}

fn order_row(order: &RecentOrder) -> String {
    let number = order
        .order_number
        .as_deref()
        .or(order.id.as_deref())
        .unwrap_or(NOT_AVAILABLE);
    let customer = order.customer_name.as_deref().unwrap_or(FALLBACK_CUSTOMER);
    let email = order.customer_email.as_deref().unwrap_or(NOT_AVAILABLE);
    let date = order.created_at.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |at| format_date(at.date_naive()),
    );
    row(&[
        number,
        customer,
        email,
        &order.status,
        &format_money(order.total),
        &order.item_count.to_string(),
        &date,
    ])
}

fn products_lines(products: &[TopProduct]) -> Vec<String> {
    let mut lines = vec![row(&[
        "Product",
        "ID",
        "Quantity Sold",
        "Total Revenue",
        "Average Ticket",
    ])];
    lines.extend(products.iter().map(|product| {
        row(&[
            &product.name,
            &product.id.to_string(),
            &product.quantity_sold.to_string(),
            &format_money(product.total_revenue),
            &format_money(product.average_ticket()),
        ])
    }));
    lines
}

fn summary_lines(aggregate: &DashboardAggregate, period_label: &str) -> Vec<String> {
    let summary = &aggregate.summary;
    vec![
        row(&[
            "Period",
            "Start Date",
            "End Date",
            "Total Sales",
            "Total Orders",
            "Total Items",
            "Average Ticket",
        ]),
        row(&[
            period_label,
            &format_date(aggregate.period.start),
            &format_date(aggregate.period.end),
            &format_money(summary.total_sales),
            &summary.total_orders.to_string(),
            &summary.total_items.to_string(),
            &format_money(summary.average_ticket()),
        ]),
    ]
}

fn full_lines(aggregate: &DashboardAggregate, period_label: &str) -> Vec<String> {
    let mut lines = vec!["=== SUMMARY ===".to_string()];
    lines.extend(summary_lines(aggregate, period_label));

    lines.push(String::new());
    lines.push("=== ORDERS BY STATUS ===".to_string());
    lines.push(row(&["Status", "Count"]));
    lines.extend(
        aggregate
            .orders_by_status
            .iter()
            .map(|(status, count)| row(&[status, &count.to_string()])),
    );

    lines.push(String::new());
    lines.push("=== TOP PRODUCTS ===".to_string());
    lines.extend(products_lines(&aggregate.top_products));

    lines.push(String::new());
    lines.push("=== RECENT ORDERS ===".to_string());
    lines.extend(orders_lines(&aggregate.recent_orders));

    lines
}

/// One CSV row: every field double-quoted, embedded quotes doubled.
fn row(fields: &[&str]) -> String {
    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "\"{}\"", field.replace('"', "\"\""));
    }
    out
}

/// Exactly two decimal places, no currency symbol.
fn format_money(amount: Decimal) -> String {
    format!("{amount:.2}")
}

/// The dashboard's `DD/MM/YYYY` date convention.
fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
