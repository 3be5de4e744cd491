//! JSON document builder.
//!
//! Wraps the aggregate plus export metadata into a single pretty-printed
//! document (2-space indentation, no BOM).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use sufficius_core::DashboardAggregate;

/// The exported document: metadata plus the flattened aggregate.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope<'a> {
    /// When the export was produced (RFC 3339).
    pub exported_at: String,
    /// The caller-supplied period label.
    pub period_label: &'a str,
    /// The aggregate snapshot, flattened into the envelope.
    #[serde(flatten)]
    pub aggregate: &'a DashboardAggregate,
}

/// Build the JSON document.
///
/// # Errors
///
/// Returns `serde_json::Error` if the aggregate fails to serialize.
pub fn document(
    aggregate: &DashboardAggregate,
    period_label: &str,
    exported_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let envelope = ExportEnvelope {
        exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        period_label,
        aggregate,
    };
    serde_json::to_string_pretty(&envelope)
}
