//! Core types for Sufficius Commerce.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod dashboard;
pub mod id;
pub mod price;

pub use cart::{CartLineItem, LineItemError};
pub use dashboard::{DashboardAggregate, Period, RecentOrder, SalesSummary, TopProduct};
pub use id::*;
pub use price::{Price, PriceError};
