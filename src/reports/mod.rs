//! Reports module for fintrack
//!
//! Aggregations over the active records: per-kind totals, the net balance
//! and the list of expenses coming due.

pub mod balance;
pub mod summary;

pub use balance::{BalanceReport, BalanceStatus};
pub use summary::{net_total, totals_by_kind, upcoming_due};
