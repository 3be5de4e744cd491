//! Sufficius Core - Shared types library.
//!
//! This crate provides common types used across all Sufficius Commerce
//! components:
//! - `cart` - Client-side cart store mirroring the backend cart
//! - `export` - Dashboard export encoder (CSV/JSON artifacts)
//! - `cli` - Command-line tools for local cart management and exports
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, cart line items, and the dashboard
//!   aggregate snapshot

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
