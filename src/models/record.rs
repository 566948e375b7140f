//! Financial record model
//!
//! A record is one dated financial event: a planned expense ("plan") or an
//! allowance ("income"). Amounts are always stored as positive magnitudes;
//! the direction comes from the record kind alone.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Kind of a financial record, persisted under the `record_type` key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum RecordKind {
    /// Money going out (shown to users as a "plan")
    #[default]
    Expense,
    /// Money coming in (shown to users as an "allowance")
    Income,
    /// A label this version does not know; kept verbatim so it survives a
    /// load/save cycle. Counted as a cost in balances.
    Other(String),
}

impl RecordKind {
    /// The persisted label
    pub fn as_str(&self) -> &str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
            Self::Other(label) => label,
        }
    }

    /// The user-facing label
    pub fn label(&self) -> &str {
        match self {
            Self::Expense => "Plan",
            Self::Income => "Allowance",
            Self::Other(label) => label,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl From<String> for RecordKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "expense" => Self::Expense,
            "income" => Self::Income,
            _ => Self::Other(label),
        }
    }
}

impl From<RecordKind> for String {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Parses user input: "plan"/"expense" and "allowance"/"income"
impl FromStr for RecordKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plan" | "expense" => Ok(Self::Expense),
            "allowance" | "income" => Ok(Self::Income),
            other => Err(LedgerError::Validation(format!(
                "Invalid record type '{}'. Use 'plan' or 'allowance'",
                other
            ))),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One financial event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// When the event happened or was planned
    pub date: NaiveDate,

    pub description: String,

    /// Positive magnitude; direction comes from `kind`
    #[serde(deserialize_with = "deserialize_magnitude")]
    pub amount: Money,

    /// Free-form due date, only meaningful for expenses
    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default, rename = "record_type")]
    pub kind: RecordKind,
}

fn deserialize_magnitude<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    let amount = Money::deserialize(deserializer)?;
    if amount.is_negative() {
        return Err(de::Error::custom(format!(
            "amount must not be negative, got {}",
            amount.as_decimal()
        )));
    }
    Ok(amount)
}

impl Record {
    /// Create a new record, validating the description and amount
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        kind: RecordKind,
    ) -> LedgerResult<Self> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(LedgerError::Validation(
                "Description cannot be empty".into(),
            ));
        }
        if !amount.is_positive() {
            return Err(LedgerError::Validation(format!(
                "Amount must be greater than zero, got {}",
                amount
            )));
        }

        Ok(Self {
            date,
            description,
            amount,
            due_date: None,
            kind,
        })
    }

    /// Attach a due date; blank input clears it
    pub fn with_due_date(mut self, due_date: Option<impl Into<String>>) -> Self {
        self.due_date = due_date
            .map(|d| {
                let d: String = d.into();
                d.trim().to_string()
            })
            .filter(|d| !d.is_empty());
        self
    }

    /// The amount with its direction applied (income positive, anything else negative)
    pub fn signed_amount(&self) -> Money {
        if self.kind.is_income() {
            self.amount
        } else {
            -self.amount
        }
    }

    /// Convert to the persisted mapping
    pub fn to_value(&self) -> LedgerResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| {
            LedgerError::MalformedRecord(format!(
                "failed to serialize '{}': {}",
                self.description, e
            ))
        })
    }

    /// Parse a persisted mapping
    pub fn from_value(value: serde_json::Value) -> LedgerResult<Self> {
        serde_json::from_value(value).map_err(|e| LedgerError::MalformedRecord(e.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.kind.is_income() { "+" } else { "-" };
        write!(
            f,
            "{} | {} | {}{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            sign,
            self.amount
        )?;
        if let Some(due) = &self.due_date {
            write!(f, " | Due: {}", due)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_record() {
        let record = Record::new(
            date(2024, 3, 1),
            "  Rent  ",
            Money::from_cents(120000),
            RecordKind::Expense,
        )
        .unwrap()
        .with_due_date(Some("2024-03-05"));

        assert_eq!(record.description, "Rent");
        assert_eq!(record.due_date.as_deref(), Some("2024-03-05"));
        assert_eq!(record.signed_amount().cents(), -120000);
    }

    #[test]
    fn test_new_rejects_blank_description() {
        let err = Record::new(date(2024, 3, 1), "   ", Money::from_cents(100), RecordKind::Income)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_new_rejects_non_positive_amount() {
        for cents in [0, -500] {
            let err = Record::new(
                date(2024, 3, 1),
                "Lunch",
                Money::from_cents(cents),
                RecordKind::Expense,
            )
            .unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_blank_due_date_is_none() {
        let record = Record::new(date(2024, 3, 1), "Bus", Money::from_cents(50), RecordKind::Expense)
            .unwrap()
            .with_due_date(Some("   "));
        assert!(record.due_date.is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let record = Record::new(
            date(2024, 1, 10),
            "Tuition",
            Money::from_cents(250050),
            RecordKind::Expense,
        )
        .unwrap()
        .with_due_date(Some("2024-02-01"));

        let value = record.to_value().unwrap();
        assert_eq!(
            value,
            json!({
                "date": "2024-01-10",
                "description": "Tuition",
                "amount": 2500.5,
                "due_date": "2024-02-01",
                "record_type": "expense"
            })
        );
    }

    #[test]
    fn test_value_round_trip() {
        let records = vec![
            Record::new(date(2024, 1, 10), "Tuition", Money::from_cents(250050), RecordKind::Expense)
                .unwrap()
                .with_due_date(Some("2024-02-01")),
            Record::new(date(2023, 12, 31), "Allowance", Money::from_cents(29), RecordKind::Income)
                .unwrap(),
        ];

        for record in records {
            let restored = Record::from_value(record.to_value().unwrap()).unwrap();
            assert_eq!(restored, record);
        }
    }

    #[test]
    fn test_legacy_record_defaults() {
        let record = Record::from_value(json!({
            "date": "2023-06-15",
            "description": "Groceries",
            "amount": 40
        }))
        .unwrap();

        assert_eq!(record.kind, RecordKind::Expense);
        assert!(record.due_date.is_none());
        assert_eq!(record.amount.cents(), 4000);
    }

    #[test]
    fn test_unknown_kind_is_preserved() {
        let value = json!({
            "date": "2023-06-15",
            "description": "Gift",
            "amount": 5.0,
            "due_date": null,
            "record_type": "saving"
        });
        let record = Record::from_value(value.clone()).unwrap();

        assert_eq!(record.kind, RecordKind::Other("saving".to_string()));
        assert_eq!(record.signed_amount().cents(), -500);
        assert_eq!(record.to_value().unwrap(), value);
    }

    #[test]
    fn test_malformed_records() {
        let cases = vec![
            json!({"date": "06-15-2023", "description": "x", "amount": 1}),
            json!({"date": "2023-06-15", "amount": 1}),
            json!({"date": "2023-06-15", "description": 7, "amount": 1}),
            json!({"date": "2023-06-15", "description": "x"}),
            json!({"date": "2023-06-15", "description": "x", "amount": "12"}),
            json!({"date": "2023-06-15", "description": "x", "amount": -3}),
            json!(["not", "a", "record"]),
        ];

        for case in cases {
            let err = Record::from_value(case.clone()).unwrap_err();
            assert!(err.is_malformed_record(), "expected malformed for {}", case);
        }
    }

    #[test]
    fn test_kind_from_user_input() {
        assert_eq!("plan".parse::<RecordKind>().unwrap(), RecordKind::Expense);
        assert_eq!("Allowance".parse::<RecordKind>().unwrap(), RecordKind::Income);
        assert_eq!(" income ".parse::<RecordKind>().unwrap(), RecordKind::Income);
        assert!("saving".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_display() {
        let expense = Record::new(date(2024, 1, 10), "Rent", Money::from_cents(120000), RecordKind::Expense)
            .unwrap()
            .with_due_date(Some("2024-02-01"));
        assert_eq!(
            expense.to_string(),
            "2024-01-10 | Rent | -₱1,200.00 | Due: 2024-02-01"
        );

        let income = Record::new(date(2024, 1, 1), "Stipend", Money::from_cents(5000), RecordKind::Income)
            .unwrap();
        assert_eq!(income.to_string(), "2024-01-01 | Stipend | +₱50.00");
    }
}
