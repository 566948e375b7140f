//! CSV Export functionality
//!
//! One row per record across both collections, active records first.

use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Collection, Record};
use crate::storage::Snapshot;

const HEADER: [&str; 6] = [
    "collection",
    "date",
    "description",
    "amount",
    "due_date",
    "record_type",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    collection: &'static str,
    date: String,
    description: &'a str,
    amount: String,
    due_date: &'a str,
    record_type: &'a str,
}

impl<'a> CsvRow<'a> {
    fn new(collection: Collection, record: &'a Record) -> Self {
        Self {
            collection: collection.file_key(),
            date: record.date.format("%Y-%m-%d").to_string(),
            description: &record.description,
            amount: format!("{:.2}", record.amount.as_decimal()),
            due_date: record.due_date.as_deref().unwrap_or(""),
            record_type: record.kind.as_str(),
        }
    }
}

/// Export every record in the snapshot to CSV
pub fn export_csv<W: Write>(snapshot: &Snapshot, writer: &mut W) -> LedgerResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    let rows = snapshot
        .active
        .iter()
        .map(|r| CsvRow::new(Collection::Active, r))
        .chain(snapshot.trash.iter().map(|r| CsvRow::new(Collection::Trash, r)));

    for row in rows {
        csv_writer
            .serialize(row)
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
