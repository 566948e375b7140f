//! Balance report
//!
//! Income against costs for a set of records, with a status verdict.

use serde::Serialize;
use std::fmt;

use crate::models::{Money, Record};

use super::summary::net_total;

/// Sign of the net balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    Surplus,
    Deficit,
    Zero,
}

impl BalanceStatus {
    pub fn from_net(net: Money) -> Self {
        if net.is_positive() {
            Self::Surplus
        } else if net.is_negative() {
            Self::Deficit
        } else {
            Self::Zero
        }
    }

    /// Advice shown under the balance
    pub fn message(&self) -> &'static str {
        match self {
            Self::Surplus => "Good. Save more!",
            Self::Deficit => "ALERT!!! YOU'RE OUT OF BALANCE!!!",
            Self::Zero => "Zero Balance, don't forget to save!",
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Income, costs and the resulting net balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub income: Money,
    /// Expenses plus any unrecognised kinds
    pub costs: Money,
    pub net: Money,
    pub status: BalanceStatus,
    pub record_count: usize,
}

impl BalanceReport {
    /// Generate a balance report for the given records
    pub fn generate(records: &[Record]) -> Self {
        let income: Money = records
            .iter()
            .filter(|r| r.kind.is_income())
            .map(|r| r.amount)
            .sum();
        let costs: Money = records
            .iter()
            .filter(|r| !r.kind.is_income())
            .map(|r| r.amount)
            .sum();
        let net = net_total(records);

        Self {
            income,
            costs,
            net,
            status: BalanceStatus::from_net(net),
            record_count: records.len(),
        }
    }

    /// Format for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Balance Report\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        output.push_str(&format!(
            "Allowances:   {:>20}\n",
            self.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Plans:        {:>20}\n",
            self.costs.format_with_symbol(symbol)
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Balance:      {:>20}\n",
            self.net.format_with_symbol(symbol)
        ));
        output.push('\n');
        output.push_str(self.status.message());
        output.push('\n');

        output
    }
}
