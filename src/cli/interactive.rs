//! Interactive menu
//!
//! A numbered text menu over the store, driven by any `BufRead`/`Write`
//! pair. End of input leaves the menu cleanly from any prompt.

use std::io::{BufRead, Write};

use clap::ValueEnum;

use super::export::run_export;
use super::prompt::{is_yes, prompt_line};
use super::record::{parse_amount, today};
use super::report::{render_report, ReportCommands};
use crate::config::Settings;
use crate::display::{format_deletion_receipt, format_record_table};
use crate::error::{LedgerError, LedgerResult};
use crate::export::ExportFormat;
use crate::models::{Money, Record, RecordKind};
use crate::reports::BalanceReport;
use crate::storage::Store;

/// Whether the menu keeps running after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Outcome of asking for a record number
enum Pick {
    Done(Record),
    Cancelled,
    Eof,
}

type StoreOp = fn(&mut Store, usize) -> LedgerResult<Record>;

/// The interactive menu
pub struct Menu<'a, R, W> {
    store: &'a mut Store,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut Store, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            store,
            settings,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            self.print_main_menu()?;

            let Some(choice) = self.prompt("Enter your choice (1-7): ")? else {
                break;
            };

            let result = match choice.as_str() {
                "1" => self.add_record(),
                "2" => self.view_records(),
                "3" => self.show_report(ReportCommands::Balance),
                "4" => self.show_report(ReportCommands::Due),
                "5" => self.export(),
                "6" => self.settings_board(),
                "7" => {
                    writeln!(self.output, "Thank you for using fintrack!")?;
                    Ok(Flow::Quit)
                }
                _ => self.say("Invalid choice. Please try again."),
            };

            if self.settle(result)? == Flow::Quit {
                break;
            }
        }

        if self.store.has_unsaved_changes() {
            writeln!(
                self.output,
                "Warning: the latest changes could not be saved to {}",
                self.store.path().display()
            )?;
        }

        Ok(())
    }

    fn print_main_menu(&mut self) -> LedgerResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        writeln!(self.output, "        PERSONAL FINANCE TRACKER")?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        writeln!(self.output, "1. Add Financial Record")?;
        writeln!(self.output, "2. View All Records")?;
        writeln!(self.output, "3. Balance Report")?;
        writeln!(self.output, "4. Upcoming Due Dates")?;
        writeln!(self.output, "5. Export Data into File")?;
        writeln!(self.output, "6. Settings Board")?;
        writeln!(self.output, "7. Exit")?;
        writeln!(self.output, "{}", "-".repeat(50))?;
        Ok(())
    }

    /// Print recoverable errors and keep going; terminal I/O errors end the menu
    fn settle(&mut self, result: LedgerResult<Flow>) -> LedgerResult<Flow> {
        match result {
            Ok(flow) => Ok(flow),
            Err(e @ LedgerError::Io(_)) => Err(e),
            Err(e @ LedgerError::Audit(_)) => {
                writeln!(self.output, "Warning: {}; the change was saved", e)?;
                Ok(Flow::Continue)
            }
            Err(e) => {
                writeln!(self.output, "Error: {}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> LedgerResult<Option<String>> {
        prompt_line(&mut self.input, &mut self.output, text)
    }

    fn say(&mut self, text: &str) -> LedgerResult<Flow> {
        writeln!(self.output, "{}", text)?;
        Ok(Flow::Continue)
    }

    /// Prompt until `parse` accepts the answer; `None` at end of input
    fn ask<T>(
        &mut self,
        text: &str,
        parse: impl Fn(&str) -> LedgerResult<T>,
    ) -> LedgerResult<Option<T>> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e @ LedgerError::Validation(_)) => writeln!(self.output, "{}", e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn add_record(&mut self) -> LedgerResult<Flow> {
        let settings = self.settings;
        writeln!(self.output, "\nAdd New Financial Record")?;

        let Some(kind) = self.ask("Enter record type ('plan' or 'allowance'): ", |s| {
            s.parse::<RecordKind>()
        })?
        else {
            return Ok(Flow::Quit);
        };

        let date_prompt = format!(
            "Enter date ({}, blank for today): ",
            settings.date_format_hint()
        );
        let Some(date) = self.ask(&date_prompt, |s| {
            if s.is_empty() {
                Ok(today())
            } else {
                settings.parse_date(s)
            }
        })?
        else {
            return Ok(Flow::Quit);
        };

        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(Flow::Quit);
        };
        if description.is_empty() {
            return self.say("Description cannot be empty.");
        }

        let Some(amount) = self.ask("Enter amount: ", parse_positive_amount)? else {
            return Ok(Flow::Quit);
        };

        let due = if kind.is_expense() {
            let due_prompt = "Enter due date (optional, press Enter to skip): ";
            let Some(due) = self.ask(due_prompt, |s| {
                if s.is_empty() {
                    Ok(None)
                } else {
                    settings
                        .parse_date(s)
                        .map(|d| Some(d.format("%Y-%m-%d").to_string()))
                }
            })?
            else {
                return Ok(Flow::Quit);
            };
            due
        } else {
            None
        };

        let record = Record::new(date, description, amount, kind)?.with_due_date(due);
        let label = record.kind.label().to_string();
        self.store.add(record)?;

        self.say(&format!("{} record added successfully!", label))
    }

    fn view_records(&mut self) -> LedgerResult<Flow> {
        let table = format_record_table(self.store.active(), &self.settings.currency_symbol);
        write!(self.output, "\n{}", table)?;
        Ok(Flow::Continue)
    }

    fn show_report(&mut self, report: ReportCommands) -> LedgerResult<Flow> {
        let text = render_report(self.store, self.settings, &report);
        write!(self.output, "\n{}", text)?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> LedgerResult<Flow> {
        let Some(format) = self.ask("Export format (json/yaml/csv) [json]: ", |s| {
            if s.is_empty() {
                return Ok(ExportFormat::Json);
            }
            ExportFormat::from_str(s, true).map_err(|_| {
                LedgerError::Validation(format!("Unknown format '{}'. Use json, yaml or csv", s))
            })
        })?
        else {
            return Ok(Flow::Quit);
        };

        let path = run_export(self.store, self.settings, format, None)?;
        self.say(&format!("Data exported to {}", path.display()))
    }

    fn settings_board(&mut self) -> LedgerResult<Flow> {
        loop {
            writeln!(self.output, "\n--- Settings Board ---")?;
            writeln!(self.output, "1. View Trash Bin")?;
            writeln!(self.output, "2. Delete a Plan")?;
            writeln!(self.output, "3. Return to Main Menu")?;

            let Some(choice) = self.prompt("Enter your choice (1-3): ")? else {
                return Ok(Flow::Quit);
            };

            let result = match choice.as_str() {
                "1" => self.trash_bin(),
                "2" => self.delete_plan(),
                "3" => return Ok(Flow::Continue),
                _ => self.say("Invalid choice. Please try again."),
            };

            if self.settle(result)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn trash_bin(&mut self) -> LedgerResult<Flow> {
        if self.store.trash().is_empty() {
            return self.say("Trash bin is empty.");
        }

        let table = format_record_table(self.store.trash(), &self.settings.currency_symbol);
        write!(self.output, "\n--- Trash Bin ---\n{}", table)?;

        loop {
            writeln!(self.output, "\nOptions:")?;
            writeln!(self.output, "1. Restore a specific plan")?;
            writeln!(self.output, "2. Restore all plans")?;
            writeln!(self.output, "3. Empty trash bin")?;
            writeln!(self.output, "4. Back to settings")?;

            let Some(choice) = self.prompt("Enter your choice (1-4): ")? else {
                return Ok(Flow::Quit);
            };

            match choice.as_str() {
                "1" => return self.restore_one(),
                "2" => {
                    let count = self.store.restore_all()?;
                    return self.say(&format!("All items restored ({}).", count));
                }
                "3" => return self.empty_trash(),
                "4" => return Ok(Flow::Continue),
                _ => {
                    self.say("Invalid choice.")?;
                }
            }
        }
    }

    fn restore_one(&mut self) -> LedgerResult<Flow> {
        match self.pick(
            "Enter the number of the plan to restore (or 0 to cancel): ",
            Store::restore,
        )? {
            Pick::Done(record) => self.say(&format!("Restored: {}", record.description)),
            Pick::Cancelled => self.say("Restoration cancelled."),
            Pick::Eof => Ok(Flow::Quit),
        }
    }

    fn empty_trash(&mut self) -> LedgerResult<Flow> {
        let Some(answer) = self.prompt("Permanently delete all items in trash? (yes/no): ")? else {
            return Ok(Flow::Quit);
        };
        if !is_yes(&answer) {
            return self.say("Trash bin kept.");
        }

        let count = self.store.empty_trash()?;
        self.say(&format!("Trash bin emptied ({} record(s) deleted).", count))
    }

    fn delete_plan(&mut self) -> LedgerResult<Flow> {
        let table = format_record_table(self.store.active(), &self.settings.currency_symbol);
        write!(self.output, "\n{}", table)?;
        if self.store.active().is_empty() {
            return Ok(Flow::Continue);
        }

        match self.pick(
            "Enter the number of the plan to delete (or 0 to cancel): ",
            Store::delete,
        )? {
            Pick::Done(record) => {
                let remaining = BalanceReport::generate(self.store.active());
                let receipt =
                    format_deletion_receipt(&record, &remaining, &self.settings.currency_symbol);
                write!(self.output, "\n{}", receipt)?;
                Ok(Flow::Continue)
            }
            Pick::Cancelled => self.say("Deletion cancelled."),
            Pick::Eof => Ok(Flow::Quit),
        }
    }

    /// Ask for a 1-based record number and apply `op`, retrying bad numbers
    fn pick(&mut self, text: &str, op: StoreOp) -> LedgerResult<Pick> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(Pick::Eof);
            };

            let index: usize = match answer.parse() {
                Ok(index) => index,
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                }
            };
            if index == 0 {
                return Ok(Pick::Cancelled);
            }

            match op(self.store, index) {
                Ok(record) => return Ok(Pick::Done(record)),
                Err(e) if e.is_index_out_of_range() => writeln!(self.output, "{}", e)?,
                Err(e) => return Err(e),
            }
        }
    }
}

fn parse_positive_amount(input: &str) -> LedgerResult<Money> {
    let amount = parse_amount(input)?;
    if !amount.is_positive() {
        return Err(LedgerError::Validation("Invalid Amount.".into()));
    }
    Ok(amount)
}
