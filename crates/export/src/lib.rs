//! Sufficius Export - Dashboard export encoder.
//!
//! Converts a read-only [`sufficius_core::DashboardAggregate`] snapshot into
//! a downloadable text artifact: CSV (four selectable scopes) or JSON.
//!
//! # Architecture
//!
//! - [`csv`] and [`json`] hold the pure document builders; they produce
//!   strings and never touch the filesystem.
//! - [`sink::FileSink`] is the delivery capability (the platform analogue
//!   of a browser download); [`sink::DirectorySink`] writes into a target
//!   directory.
//! - [`exporter::Exporter`] glues them together: filename assembly, the
//!   UTF-8 BOM prefix for CSV, and the boolean catch-and-log contract.
//!
//! Assembly happens fully in memory before delivery, so a failed export
//! never leaves a partial file behind.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod csv;
pub mod exporter;
pub mod json;
pub mod sink;

pub use csv::{ExportScope, ParseScopeError};
pub use exporter::{ExportError, Exporter, csv_filename, json_filename};
pub use sink::{DirectorySink, FileSink};
