//! Record CLI commands
//!
//! Adding, listing and trashing records.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_deletion_receipt, format_record_details, format_record_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Collection, Money, Record, RecordKind};
use crate::reports::BalanceReport;
use crate::storage::Store;

/// Record subcommands
#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Add a plan or an allowance
    Add {
        /// What the money is for
        description: String,
        /// Amount (e.g., "1500", "1,500.50" or "₱1,500.50")
        amount: String,
        /// Record type: plan or allowance
        #[arg(short, long, default_value = "plan")]
        kind: String,
        /// Record date (MM-DD-YYYY or YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Due date for a plan (MM-DD-YYYY or YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// List records
    List {
        /// Show the trash bin instead of active records
        #[arg(short, long)]
        trash: bool,
    },
    /// Move a record to the trash bin (0 cancels)
    Delete {
        /// Record number as shown by `list`
        index: usize,
    },
}

/// Handle a record command
pub fn handle_record_command(
    store: &mut Store,
    settings: &Settings,
    cmd: RecordCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        RecordCommands::Add {
            description,
            amount,
            kind,
            date,
            due,
        } => {
            let kind: RecordKind = kind.parse()?;
            let record = build_record(
                settings,
                kind,
                &description,
                &amount,
                date.as_deref(),
                due.as_deref(),
            )?;

            let message = format!(
                "{} record added:\n{}",
                record.kind.label(),
                format_record_details(&record, &settings.currency_symbol)
            );
            store.add(record)?;
            print!("{}", message);
        }

        RecordCommands::List { trash } => {
            let collection = if trash {
                Collection::Trash
            } else {
                Collection::Active
            };
            print!("{}", format_record_table(store.list(collection), symbol));
        }

        RecordCommands::Delete { index } => {
            if index == 0 {
                println!("Deletion cancelled.");
                return Ok(());
            }

            let deleted = store.delete(index)?;
            let remaining = BalanceReport::generate(store.active());
            print!("{}", format_deletion_receipt(&deleted, &remaining, symbol));
        }
    }

    Ok(())
}

/// Parse a user-entered amount
pub fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount '{}': {}. Use a number like '1500' or '1,500.50'",
            input.trim(),
            e
        ))
    })
}

/// Build a record from raw user input
///
/// A missing date means today. Due dates are normalized to `YYYY-MM-DD` and
/// only accepted on plans.
pub fn build_record(
    settings: &Settings,
    kind: RecordKind,
    description: &str,
    amount: &str,
    date: Option<&str>,
    due: Option<&str>,
) -> LedgerResult<Record> {
    let amount = parse_amount(amount)?;
    let date = match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => settings.parse_date(d)?,
        None => today(),
    };

    let due = match due.map(str::trim).filter(|d| !d.is_empty()) {
        Some(_) if !kind.is_expense() => {
            return Err(LedgerError::Validation(
                "Due dates only apply to plans".into(),
            ))
        }
        Some(d) => Some(settings.parse_date(d)?.format("%Y-%m-%d").to_string()),
        None => None,
    };

    Ok(Record::new(date, description, amount, kind)?.with_due_date(due))
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path().join("financial_data.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_build_record() {
        let settings = Settings::default();
        let record = build_record(
            &settings,
            RecordKind::Expense,
            "  Rent ",
            "₱1,200",
            Some("01-10-2024"),
            Some("02-01-2024"),
        )
        .unwrap();

        assert_eq!(record.description, "Rent");
        assert_eq!(record.amount, Money::from_cents(120000));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(record.due_date.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn test_build_record_defaults_to_today() {
        let settings = Settings::default();
        let record =
            build_record(&settings, RecordKind::Income, "Allowance", "500", None, Some(" ")).unwrap();

        assert_eq!(record.date, today());
        assert!(record.due_date.is_none());
    }

    #[test]
    fn test_build_record_rejects_due_on_allowance() {
        let settings = Settings::default();
        let err = build_record(
            &settings,
            RecordKind::Income,
            "Allowance",
            "500",
            None,
            Some("2024-02-01"),
        )
        .unwrap_err();

        assert!(err.is_validation());
    }

    #[test]
    fn test_build_record_rejects_bad_input() {
        let settings = Settings::default();

        assert!(build_record(&settings, RecordKind::Expense, "x", "abc", None, None)
            .unwrap_err()
            .is_validation());
        assert!(build_record(&settings, RecordKind::Expense, "x", "0", None, None)
            .unwrap_err()
            .is_validation());
        assert!(build_record(&settings, RecordKind::Expense, "x", "-5", None, None)
            .unwrap_err()
            .is_validation());
        assert!(build_record(&settings, RecordKind::Expense, " ", "5", None, None)
            .unwrap_err()
            .is_validation());
        assert!(build_record(&settings, RecordKind::Expense, "x", "5", Some("13-45-2024"), None)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_add_and_delete_commands() {
        let (_temp, mut store) = create_test_store();
        let settings = Settings::default();

        handle_record_command(
            &mut store,
            &settings,
            RecordCommands::Add {
                description: "Lunch".into(),
                amount: "150".into(),
                kind: "plan".into(),
                date: Some("2024-03-01".into()),
                due: None,
            },
        )
        .unwrap();
        assert_eq!(store.active().len(), 1);

        handle_record_command(&mut store, &settings, RecordCommands::Delete { index: 0 }).unwrap();
        assert_eq!(store.active().len(), 1);

        handle_record_command(&mut store, &settings, RecordCommands::Delete { index: 1 }).unwrap();
        assert!(store.active().is_empty());
        assert_eq!(store.trash().len(), 1);
    }

    #[test]
    fn test_delete_out_of_range() {
        let (_temp, mut store) = create_test_store();
        let settings = Settings::default();

        let err = handle_record_command(&mut store, &settings, RecordCommands::Delete { index: 3 })
            .unwrap_err();
        assert!(err.is_index_out_of_range());
    }
}
