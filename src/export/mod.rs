//! Export module for fintrack
//!
//! Writes a snapshot of the ledger to a separate file:
//! - JSON: machine-readable document with metadata (default)
//! - YAML: the same document, human-readable
//! - CSV: one row per record, spreadsheet-compatible
//!
//! Export files are never read back as a load source.

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::error::{LedgerError, LedgerResult};
use crate::storage::Snapshot;

pub use self::csv::export_csv;
pub use json::{export_json, ExportMetadata, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// JSON document with metadata
    #[default]
    Json,
    /// YAML document, human-readable
    Yaml,
    /// CSV, one row per record
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Default export file name, e.g. `financial_data_export_2024-03-01.json`
pub fn default_export_filename(date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "financial_data_export_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Default export path inside `dir` (the current directory when `None`)
pub fn default_export_path(dir: Option<&Path>, date: NaiveDate, format: ExportFormat) -> PathBuf {
    let name = default_export_filename(date, format);
    match dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Write a snapshot in the given format
pub fn write_export<W: Write>(
    snapshot: &Snapshot,
    format: ExportFormat,
    writer: &mut W,
) -> LedgerResult<()> {
    match format {
        ExportFormat::Json => export_json(snapshot, writer, true),
        ExportFormat::Yaml => export_yaml(snapshot, writer),
        ExportFormat::Csv => export_csv(snapshot, writer),
    }
}

/// Write a snapshot to a file, creating its parent directory
pub fn export_to_file(snapshot: &Snapshot, format: ExportFormat, path: &Path) -> LedgerResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    write_export(snapshot, format, &mut writer)?;

    writer
        .flush()
        .map_err(|e| LedgerError::Export(format!("Failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Record, RecordKind};
    use tempfile::TempDir;

    #[test]
    fn test_default_export_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert_eq!(
            default_export_filename(date, ExportFormat::Json),
            "financial_data_export_2024-03-01.json"
        );
        assert_eq!(
            default_export_filename(date, ExportFormat::Csv),
            "financial_data_export_2024-03-01.csv"
        );
    }

    #[test]
    fn test_default_export_path() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert_eq!(
            default_export_path(None, date, ExportFormat::Yaml),
            PathBuf::from("financial_data_export_2024-03-01.yaml")
        );
        assert_eq!(
            default_export_path(Some(Path::new("/tmp/out")), date, ExportFormat::Yaml),
            PathBuf::from("/tmp/out/financial_data_export_2024-03-01.yaml")
        );
    }

    #[test]
    fn test_export_to_file_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exports").join("ledger.json");

        let snapshot = Snapshot {
            active: vec![Record::new(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                "Bus fare",
                Money::from_cents(1300),
                RecordKind::Expense,
            )
            .unwrap()],
            trash: Vec::new(),
        };

        export_to_file(&snapshot, ExportFormat::Json, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: LedgerExport = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.plans, snapshot.active);
    }
}
