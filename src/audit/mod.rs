//! Audit logging system for fintrack
//!
//! Records every store mutation (add, trash, restore, purge) in an
//! append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one operation with its timestamp, position and the
//!   affected records.
//! - `AuditLogger`: appends entries to the log file using line-delimited
//!   JSON (JSONL) and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::add(&record))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
