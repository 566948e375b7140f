//! YAML Export functionality
//!
//! Same document as the JSON export, preceded by a comment header.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::storage::Snapshot;

/// Export a snapshot to YAML format
pub fn export_yaml<W: Write>(snapshot: &Snapshot, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_snapshot(snapshot);

    write_header(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

fn write_header<W: Write>(writer: &mut W, export: &LedgerExport) -> std::io::Result<()> {
    writeln!(writer, "# fintrack ledger export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer, "#")?;
    writeln!(writer, "# Snapshot only; fintrack never reads this file back.")?;
    writeln!(writer)
}
