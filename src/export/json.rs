//! JSON Export functionality
//!
//! Exports a snapshot of the ledger with schema versioning and metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Record;
use crate::storage::Snapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Active records
    pub plans: Vec<Record>,

    /// Soft-deleted records
    pub trash_bin: Vec<Record>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub plan_count: usize,
    pub trash_count: usize,

    /// Earliest record date among active records
    pub earliest_record: Option<String>,

    /// Latest record date among active records
    pub latest_record: Option<String>,
}

impl LedgerExport {
    /// Build an export from a store snapshot
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let earliest_record = snapshot
            .active
            .iter()
            .map(|r| r.date)
            .min()
            .map(|d| d.to_string());

        let latest_record = snapshot
            .active
            .iter()
            .map(|r| r.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            plan_count: snapshot.active.len(),
            trash_count: snapshot.trash.len(),
            earliest_record,
            latest_record,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            plans: snapshot.active.clone(),
            trash_bin: snapshot.trash.clone(),
            metadata,
        }
    }
}

/// Export a snapshot to JSON
pub fn export_json<W: Write>(snapshot: &Snapshot, writer: &mut W, pretty: bool) -> LedgerResult<()> {
    let export = LedgerExport::from_snapshot(snapshot);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
