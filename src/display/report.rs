//! Report formatting for terminal output
//!
//! Upcoming due dates, per-kind totals and the receipt printed after a
//! record is moved to the trash.

use std::collections::BTreeMap;

use crate::models::{Money, Record, RecordKind};
use crate::reports::BalanceReport;

/// Format the upcoming due list produced by `reports::upcoming_due`
pub fn format_due_list(due: &[&Record], symbol: &str) -> String {
    if due.is_empty() {
        return "No upcoming due dates.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Upcoming Due Dates\n");
    output.push_str(&"=".repeat(50));
    output.push('\n');

    for record in due {
        output.push_str(&format!(
            "{:10}  {:24}  {:>12}\n",
            record.due_date.as_deref().unwrap_or_default(),
            record.description,
            record.amount.format_with_symbol(symbol)
        ));
    }

    output
}

/// Format per-kind totals, one line per kind
pub fn format_kind_totals(totals: &BTreeMap<RecordKind, Money>, symbol: &str) -> String {
    let mut output = String::new();
    for (kind, total) in totals {
        output.push_str(&format!(
            "{:<14}{:>20}\n",
            format!("{}:", kind.label()),
            total.format_with_symbol(symbol)
        ));
    }
    output
}

/// Receipt shown after a record moves to the trash
pub fn format_deletion_receipt(record: &Record, remaining: &BalanceReport, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&"*".repeat(40));
    output.push('\n');
    output.push_str("Moved to trash bin\n");
    output.push_str(&format!("  {}\n", record.date.format("%Y-%m-%d")));
    output.push_str(&format!("  {}\n", record.description));
    output.push_str(&format!(
        "  {} ({})\n",
        record.amount.format_with_symbol(symbol),
        record.kind.label()
    ));
    output.push_str(&"*".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Remaining balance: {}\n",
        remaining.net.format_with_symbol(symbol)
    ));

    output
}
