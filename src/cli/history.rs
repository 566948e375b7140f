//! History CLI command
//!
//! Shows recent entries from the audit log.

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::LedgerResult;

/// Handle the history command
pub fn handle_history_command(logger: &AuditLogger, limit: usize) -> LedgerResult<()> {
    print!("{}", format_history(&logger.read_recent(limit)?));
    Ok(())
}

/// Format entries oldest first, one per line
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}
