//! Audit entry data structures
//!
//! Defines the operations that can be audited and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Record;

/// Types of store mutations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Record appended to the active list
    Add,
    /// Record moved from the active list to the trash bin
    Trash,
    /// Record moved from the trash bin back to the active list
    Restore,
    /// Every trashed record moved back to the active list
    RestoreAll,
    /// Trash bin purged
    EmptyTrash,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Trash => write!(f, "TRASH"),
            Operation::Restore => write!(f, "RESTORE"),
            Operation::RestoreAll => write!(f, "RESTORE_ALL"),
            Operation::EmptyTrash => write!(f, "EMPTY_TRASH"),
        }
    }
}

/// A single audit log entry
///
/// Purges keep a copy of every removed record so an emptied trash bin can
/// still be reconstructed by hand from the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// 1-based position the record was taken from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Description of the affected record, for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Records affected by the operation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<serde_json::Value>,

    /// Number of records affected
    pub count: usize,
}

impl AuditEntry {
    fn new(operation: Operation, position: Option<usize>, records: &[Record]) -> Self {
        let description = match records {
            [single] => Some(single.description.clone()),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation,
            position,
            description,
            records: records
                .iter()
                .filter_map(|r| serde_json::to_value(r).ok())
                .collect(),
            count: records.len(),
        }
    }

    /// Entry for a newly added record
    pub fn add(record: &Record) -> Self {
        Self::new(Operation::Add, None, std::slice::from_ref(record))
    }

    /// Entry for a record moved to the trash from `position`
    pub fn trash(position: usize, record: &Record) -> Self {
        Self::new(Operation::Trash, Some(position), std::slice::from_ref(record))
    }

    /// Entry for a record restored from trash `position`
    pub fn restore(position: usize, record: &Record) -> Self {
        Self::new(Operation::Restore, Some(position), std::slice::from_ref(record))
    }

    /// Entry for a bulk restore
    pub fn restore_all(count: usize) -> Self {
        let mut entry = Self::new(Operation::RestoreAll, None, &[]);
        entry.count = count;
        entry
    }

    /// Entry for a purge, keeping the purged records
    pub fn empty_trash(purged: &[Record]) -> Self {
        Self::new(Operation::EmptyTrash, None, purged)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(position) = self.position {
            output.push_str(&format!(" #{}", position));
        }

        match &self.description {
            Some(description) => output.push_str(&format!(" {}", description)),
            None => output.push_str(&format!(
                " {} record{}",
                self.count,
                if self.count == 1 { "" } else { "s" }
            )),
        }

        output
    }
}
