//! Aggregation over record collections
//!
//! Pure functions; callers decide which slice to pass (the active list by
//! convention).

use std::collections::BTreeMap;

use crate::models::{Money, Record, RecordKind};

/// Sum of amounts per record kind
///
/// Kinds with no records are absent from the map.
pub fn totals_by_kind(records: &[Record]) -> BTreeMap<RecordKind, Money> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.kind.clone()).or_insert_with(Money::zero) += record.amount;
    }
    totals
}

/// Income minus everything else
///
/// Only income counts positively. Expenses and any kind this version does
/// not recognise are subtracted, so an unknown label can never inflate the
/// balance.
pub fn net_total(records: &[Record]) -> Money {
    records.iter().map(Record::signed_amount).sum()
}

/// Expenses that carry a due date, earliest first
///
/// Due dates are compared as strings, which orders ISO dates correctly.
/// Records with equal due dates keep their original order.
pub fn upcoming_due(records: &[Record]) -> Vec<&Record> {
    let mut due: Vec<&Record> = records
        .iter()
        .filter(|r| r.kind.is_expense())
        .filter(|r| r.due_date.as_deref().is_some_and(|d| !d.trim().is_empty()))
        .collect();
    due.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    due
}
