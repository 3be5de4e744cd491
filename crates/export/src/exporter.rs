//! Export facade.
//!
//! Ties the pure document builders to a [`FileSink`]: filename assembly,
//! the UTF-8 BOM prefix for CSV, and the boolean catch-and-log contract.
//! Documents are assembled fully in memory before delivery, so a failure
//! never leaves a partial artifact.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use sufficius_core::DashboardAggregate;

use crate::csv::{self, ExportScope};
use crate::json;
use crate::sink::FileSink;

/// UTF-8 byte-order-mark prefixed to CSV artifacts so spreadsheet tools
/// pick the right encoding.
const UTF8_BOM: &str = "\u{feff}";

const CSV_MIME: &str = "text/csv;charset=utf-8;";
const JSON_MIME: &str = "application/json";

/// Errors that can occur while producing an export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Delivering the artifact failed.
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the aggregate failed.
    #[error("Export serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Filename for a CSV artifact: `<scope>_<periodLabel>_<YYYY-MM-DD>.csv`.
#[must_use]
pub fn csv_filename(scope: ExportScope, period_label: &str, date: NaiveDate) -> String {
    format!("{scope}_{period_label}_{}.csv", date.format("%Y-%m-%d"))
}

/// Filename for a JSON artifact: `dashboard_<periodLabel>_<YYYY-MM-DD>.json`.
#[must_use]
pub fn json_filename(period_label: &str, date: NaiveDate) -> String {
    format!("dashboard_{period_label}_{}.json", date.format("%Y-%m-%d"))
}

/// Dashboard export facade over an injected delivery sink.
#[derive(Debug, Clone)]
pub struct Exporter<S> {
    sink: S,
}

impl<S: FileSink> Exporter<S> {
    /// Create an exporter delivering through `sink`.
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Export one CSV artifact for the given scope.
    ///
    /// Returns `true` on success; any failure is logged and surfaced as
    /// `false`.
    pub fn export_csv(
        &self,
        aggregate: &DashboardAggregate,
        period_label: &str,
        scope: ExportScope,
    ) -> bool {
        match self.try_export_csv(aggregate, period_label, scope) {
            Ok(filename) => {
                tracing::debug!(filename, "Dashboard CSV export complete");
                true
            }
            Err(e) => {
                tracing::error!("Dashboard CSV export failed: {e}");
                false
            }
        }
    }

    /// Export the JSON artifact.
    ///
    /// Returns `true` on success; any failure is logged and surfaced as
    /// `false`.
    pub fn export_json(&self, aggregate: &DashboardAggregate, period_label: &str) -> bool {
        match self.try_export_json(aggregate, period_label) {
            Ok(filename) => {
                tracing::debug!(filename, "Dashboard JSON export complete");
                true
            }
            Err(e) => {
                tracing::error!("Dashboard JSON export failed: {e}");
                false
            }
        }
    }

    fn try_export_csv(
        &self,
        aggregate: &DashboardAggregate,
        period_label: &str,
        scope: ExportScope,
    ) -> Result<String, ExportError> {
        let body = csv::document(aggregate, period_label, scope);
        let mut bytes = Vec::with_capacity(UTF8_BOM.len() + body.len());
        bytes.extend_from_slice(UTF8_BOM.as_bytes());
        bytes.extend_from_slice(body.as_bytes());

        let filename = csv_filename(scope, period_label, Utc::now().date_naive());
        self.sink.save(&filename, CSV_MIME, &bytes)?;
        Ok(filename)
    }

    fn try_export_json(
        &self,
        aggregate: &DashboardAggregate,
        period_label: &str,
    ) -> Result<String, ExportError> {
        let body = json::document(aggregate, period_label, Utc::now())?;

        let filename = json_filename(period_label, Utc::now().date_naive());
        self.sink.save(&filename, JSON_MIME, body.as_bytes())?;
        Ok(filename)
    }
}
