//! Record display formatting
//!
//! Numbered tables of records as shown by `list`, the trash views and the
//! interactive menu. Row numbers are the 1-based positions the store accepts.

use crate::models::Record;

const DESCRIPTION_WIDTH: usize = 24;

/// Format a single numbered record row
pub fn format_record_row(position: usize, record: &Record, symbol: &str) -> String {
    format!(
        "{:>3}  {:10}  {}  {:>14}  {:10}  {}",
        position,
        record.date.format("%Y-%m-%d"),
        truncate(&record.description, DESCRIPTION_WIDTH),
        record.signed_amount().format_with_symbol(symbol),
        record.due_date.as_deref().unwrap_or("-"),
        record.kind.label()
    )
}

/// Format records as a numbered table
pub fn format_record_table(records: &[Record], symbol: &str) -> String {
    if records.is_empty() {
        return "No records to display.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:10}  {:width$}  {:>14}  {:10}  {}\n",
        "#",
        "Date",
        "Description",
        "Amount",
        "Due Date",
        "Type",
        width = DESCRIPTION_WIDTH
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for (i, record) in records.iter().enumerate() {
        output.push_str(&format_record_row(i + 1, record, symbol));
        output.push('\n');
    }

    output
}

/// Format one record's fields on separate lines
pub fn format_record_details(record: &Record, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Date:        {}\n", record.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", record.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        record.amount.format_with_symbol(symbol)
    ));
    if let Some(due) = &record.due_date {
        output.push_str(&format!("Due Date:    {}\n", due));
    }
    output.push_str(&format!("Type:        {}\n", record.kind.label()));

    output
}

/// Pad or cut to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
