//! Record store with a trash bin
//!
//! Owns the active and trash collections and the backing file they live in.
//! Every mutation rewrites the whole file before returning. Positions handed
//! in by callers are 1-based and only valid until the next mutation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Collection, Record};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout, read side: records stay raw until each one is checked
#[derive(Debug, Default, Deserialize)]
struct LedgerFile {
    #[serde(default)]
    plans: Vec<serde_json::Value>,
    #[serde(default)]
    trash_bin: Vec<serde_json::Value>,
}

/// On-disk layout, write side
#[derive(Serialize)]
struct LedgerFileRef<'a> {
    plans: &'a [Record],
    trash_bin: &'a [Record],
}

/// Owned copy of both collections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub active: Vec<Record>,
    pub trash: Vec<Record>,
}

/// The record store
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    active: Vec<Record>,
    trash: Vec<Record>,
    audit: Option<AuditLogger>,
    unsaved: bool,
}

impl Store {
    /// Create a store for `path` without touching the disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            active: Vec::new(),
            trash: Vec::new(),
            audit: None,
            unsaved: false,
        }
    }

    /// Create a store and load its backing file
    ///
    /// A missing file gives an empty store.
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Record every successful mutation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace both collections with the backing file's contents
    ///
    /// Any malformed record fails the whole load and leaves the store as it was.
    pub fn load(&mut self) -> LedgerResult<()> {
        let file: LedgerFile = read_json(&self.path)?;

        let active = self.parse_all(Collection::Active, file.plans)?;
        let trash = self.parse_all(Collection::Trash, file.trash_bin)?;

        self.active = active;
        self.trash = trash;
        self.unsaved = false;
        Ok(())
    }

    /// Like [`Store::load`], but skips malformed records
    ///
    /// Returns one `MalformedRecord` error per skipped record. Skipped records
    /// are dropped from the file on the next write.
    pub fn load_lenient(&mut self) -> LedgerResult<Vec<LedgerError>> {
        let file: LedgerFile = read_json(&self.path)?;
        let mut skipped = Vec::new();

        let active = self.parse_lenient(Collection::Active, file.plans, &mut skipped);
        let trash = self.parse_lenient(Collection::Trash, file.trash_bin, &mut skipped);

        self.active = active;
        self.trash = trash;
        self.unsaved = false;
        Ok(skipped)
    }

    fn parse_all(
        &self,
        collection: Collection,
        values: Vec<serde_json::Value>,
    ) -> LedgerResult<Vec<Record>> {
        values
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                Record::from_value(value).map_err(|e| {
                    LedgerError::Persistence(format!(
                        "{}: {}[{}]: {}",
                        self.path.display(),
                        collection.file_key(),
                        i,
                        e
                    ))
                })
            })
            .collect()
    }

    fn parse_lenient(
        &self,
        collection: Collection,
        values: Vec<serde_json::Value>,
        skipped: &mut Vec<LedgerError>,
    ) -> Vec<Record> {
        let mut records = Vec::with_capacity(values.len());
        for (i, value) in values.into_iter().enumerate() {
            match Record::from_value(value) {
                Ok(record) => records.push(record),
                Err(e) => skipped.push(LedgerError::MalformedRecord(format!(
                    "{}[{}]: {}",
                    collection.file_key(),
                    i,
                    e
                ))),
            }
        }
        records
    }

    /// Write both collections to the backing file
    pub fn save(&mut self) -> LedgerResult<()> {
        let file = LedgerFileRef {
            plans: &self.active,
            trash_bin: &self.trash,
        };
        write_json_atomic(&self.path, &file)?;
        self.unsaved = false;
        Ok(())
    }

    /// True when the last mutation has not been confirmed on disk
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    fn commit(&mut self, entry: AuditEntry) -> LedgerResult<()> {
        self.unsaved = true;
        self.save()?;
        if let Some(logger) = &self.audit {
            logger.log(&entry)?;
        }
        Ok(())
    }

    /// Append a record to the active list and persist
    pub fn add(&mut self, record: Record) -> LedgerResult<()> {
        let entry = AuditEntry::add(&record);
        self.active.push(record);
        self.commit(entry)
    }

    /// Records in `collection`, in insertion order
    pub fn list(&self, collection: Collection) -> &[Record] {
        match collection {
            Collection::Active => &self.active,
            Collection::Trash => &self.trash,
        }
    }

    pub fn active(&self) -> &[Record] {
        &self.active
    }

    pub fn trash(&self) -> &[Record] {
        &self.trash
    }

    /// Move the active record at 1-based `index` to the end of the trash
    pub fn delete(&mut self, index: usize) -> LedgerResult<Record> {
        let position = checked_position(Collection::Active, index, self.active.len())?;

        let record = self.active.remove(position);
        let entry = AuditEntry::trash(index, &record);
        self.trash.push(record.clone());
        self.commit(entry)?;
        Ok(record)
    }

    /// Move the trashed record at 1-based `index` to the end of the active list
    pub fn restore(&mut self, index: usize) -> LedgerResult<Record> {
        let position = checked_position(Collection::Trash, index, self.trash.len())?;

        let record = self.trash.remove(position);
        let entry = AuditEntry::restore(index, &record);
        self.active.push(record.clone());
        self.commit(entry)?;
        Ok(record)
    }

    /// Move every trashed record back, keeping trash order
    ///
    /// Returns the number of restored records. An empty trash writes nothing.
    pub fn restore_all(&mut self) -> LedgerResult<usize> {
        if self.trash.is_empty() {
            return Ok(0);
        }

        let count = self.trash.len();
        self.active.append(&mut self.trash);
        self.commit(AuditEntry::restore_all(count))?;
        Ok(count)
    }

    /// Permanently discard every trashed record
    ///
    /// Returns the number of purged records. An empty trash writes nothing.
    pub fn empty_trash(&mut self) -> LedgerResult<usize> {
        if self.trash.is_empty() {
            return Ok(0);
        }

        let purged = std::mem::take(&mut self.trash);
        self.commit(AuditEntry::empty_trash(&purged))?;
        Ok(purged.len())
    }

    /// Owned copy of both collections, for export
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            active: self.active.clone(),
            trash: self.trash.clone(),
        }
    }
}

fn checked_position(collection: Collection, index: usize, len: usize) -> LedgerResult<usize> {
    if index == 0 || index > len {
        return Err(LedgerError::index_out_of_range(collection, index, len));
    }
    Ok(index - 1)
}
