//! Report CLI commands
//!
//! Balance and upcoming due dates over the active records.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_due_list, format_kind_totals};
use crate::error::LedgerResult;
use crate::reports::{totals_by_kind, upcoming_due, BalanceReport};
use crate::storage::Store;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show allowances, plans and the net balance
    Balance,
    /// List plans with a due date, earliest first
    Due,
}

/// Handle a report command
pub fn handle_report_command(
    store: &Store,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    print!("{}", render_report(store, settings, &cmd));
    Ok(())
}

/// Render a report as text
pub fn render_report(store: &Store, settings: &Settings, cmd: &ReportCommands) -> String {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Balance => {
            let mut output = BalanceReport::generate(store.active()).format_terminal(symbol);
            let totals = totals_by_kind(store.active());
            if !totals.is_empty() {
                output.push_str("\nBy type:\n");
                output.push_str(&format_kind_totals(&totals, symbol));
            }
            output
        }
        ReportCommands::Due => format_due_list(&upcoming_due(store.active()), symbol),
    }
}
