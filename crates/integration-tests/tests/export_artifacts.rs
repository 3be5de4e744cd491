//! Integration tests for on-disk export artifacts.
//!
//! Exercises the exporter end to end through a real `DirectorySink`:
//! filename patterns, the CSV BOM prefix, and reparseable JSON output.

use chrono::Utc;

use sufficius_export::{DirectorySink, ExportScope, Exporter, csv_filename, json_filename};
use sufficius_integration_tests::sample_aggregate;

#[test]
fn csv_artifact_lands_on_disk_with_bom() {
    let dir = tempfile::tempdir().expect("tempdir");
    let exporter = Exporter::new(DirectorySink::new(dir.path()));
    let aggregate = sample_aggregate();

    assert!(exporter.export_csv(&aggregate, "mes", ExportScope::Full));

    let expected = csv_filename(ExportScope::Full, "mes", Utc::now().date_naive());
    let bytes = std::fs::read(dir.path().join(&expected)).expect("artifact file");

    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    let text = String::from_utf8(bytes).expect("utf-8");
    assert!(text.contains("=== SUMMARY ==="));
    assert!(text.contains("\"SUF-0001\""));
    assert!(text.contains("\"delivered\",\"120\""));
}

#[test]
fn json_artifact_reparses_with_metadata() {
    let dir = tempfile::tempdir().expect("tempdir");
    let exporter = Exporter::new(DirectorySink::new(dir.path()));
    let aggregate = sample_aggregate();

    assert!(exporter.export_json(&aggregate, "mes"));

    let expected = json_filename("mes", Utc::now().date_naive());
    let bytes = std::fs::read(dir.path().join(&expected)).expect("artifact file");

    // JSON artifacts carry no BOM.
    assert!(bytes.starts_with(b"{"));
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).expect("valid JSON");
    assert_eq!(value["periodLabel"], "mes");
    assert!(value["exportedAt"].is_string());
    assert_eq!(value["summary"]["totalOrders"], 150);
    assert_eq!(value["period"]["start"], "2024-01-01");
}

#[test]
fn one_export_produces_exactly_one_artifact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let exporter = Exporter::new(DirectorySink::new(dir.path()));

    assert!(exporter.export_csv(&sample_aggregate(), "semana", ExportScope::Orders));

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .collect::<Result<_, _>>()
        .expect("entries");
    assert_eq!(entries.len(), 1);
}
