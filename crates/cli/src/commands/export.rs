//! Dashboard export command.
//!
//! Reads an aggregate snapshot from disk, applies the nothing-to-export
//! guard, and delivers the artifact through a [`DirectorySink`]. The guard
//! lives here, not in the encoder: a header-only file is a valid encoder
//! output, but not something a user ever wants to download.

use std::path::Path;

use clap::ValueEnum;
use thiserror::Error;

use sufficius_core::DashboardAggregate;
use sufficius_export::{DirectorySink, ExportScope, Exporter};

/// Export artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// CSV with a UTF-8 BOM.
    Csv,
    /// Pretty-printed JSON.
    Json,
}

/// Errors that can occur during the export command.
#[derive(Debug, Error)]
pub enum ExportCmdError {
    /// The snapshot file could not be read.
    #[error("Failed to read aggregate snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file is not a valid aggregate.
    #[error("Failed to parse aggregate snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// The snapshot has no orders for the period.
    #[error("No orders in the selected period, nothing to export")]
    NothingToExport,

    /// The exporter reported a delivery failure (details in the log).
    #[error("Export failed")]
    Failed,
}

/// Run the export command.
///
/// # Errors
///
/// Returns `ExportCmdError` if the snapshot cannot be read or parsed, has
/// no orders, or the artifact cannot be delivered.
pub fn run(
    input: &Path,
    out_dir: &Path,
    period_label: &str,
    scope: ExportScope,
    format: OutputFormat,
) -> Result<(), ExportCmdError> {
    let raw = std::fs::read_to_string(input)?;
    let aggregate: DashboardAggregate = serde_json::from_str(&raw)?;

    if aggregate.recent_orders.is_empty() {
        return Err(ExportCmdError::NothingToExport);
    }

    let exporter = Exporter::new(DirectorySink::new(out_dir));
    let delivered = match format {
        OutputFormat::Csv => exporter.export_csv(&aggregate, period_label, scope),
        OutputFormat::Json => exporter.export_json(&aggregate, period_label),
    };

    if delivered {
        tracing::info!(
            "Exported {scope} ({format:?}) for period '{period_label}' into {}",
            out_dir.display()
        );
        Ok(())
    } else {
        Err(ExportCmdError::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SNAPSHOT: &str = r#"{
        "period": { "start": "2024-01-01", "end": "2024-01-31" },
        "summary": { "totalSales": "1000.00", "totalOrders": 10, "totalItems": 20 },
        "ordersByStatus": {},
        "topProducts": [],
        "recentOrders": []
    }"#;

    const SNAPSHOT: &str = r#"{
        "period": { "start": "2024-01-01", "end": "2024-01-31" },
        "summary": { "totalSales": "1000.00", "totalOrders": 10, "totalItems": 20 },
        "ordersByStatus": { "delivered": 10 },
        "topProducts": [],
        "recentOrders": [
            {
                "orderNumber": "SUF-0001",
                "status": "delivered",
                "total": "100.00",
                "itemCount": 2
            }
        ]
    }"#;

    #[test]
    fn refuses_to_export_without_orders() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("aggregate.json");
        std::fs::write(&input, EMPTY_SNAPSHOT).unwrap();
        let out = dir.path().join("out");

        let err = run(&input, &out, "mes", ExportScope::Full, OutputFormat::Csv).unwrap_err();

        assert!(matches!(err, ExportCmdError::NothingToExport));
        // The guard fires before any sink work: no output directory, no file.
        assert!(!out.exists());
    }

    #[test]
    fn exports_snapshot_with_orders() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("aggregate.json");
        std::fs::write(&input, SNAPSHOT).unwrap();
        let out = dir.path().join("out");

        run(&input, &out, "mes", ExportScope::Orders, OutputFormat::Csv).unwrap();

        let entries: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn rejects_malformed_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("aggregate.json");
        std::fs::write(&input, "{not json").unwrap();

        let err = run(
            &input,
            dir.path(),
            "mes",
            ExportScope::Summary,
            OutputFormat::Json,
        )
        .unwrap_err();
        assert!(matches!(err, ExportCmdError::Parse(_)));
    }
}
