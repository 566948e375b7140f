//! Display formatting for terminal output
//!
//! Plain-text tables and receipts; nothing here touches the store.

pub mod record;
pub mod report;

pub use record::{format_record_details, format_record_row, format_record_table};
pub use report::{format_deletion_receipt, format_due_list, format_kind_totals};
