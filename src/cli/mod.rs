//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store and reports.

pub mod export;
pub mod history;
pub mod interactive;
pub mod prompt;
pub mod record;
pub mod report;
pub mod trash;

pub use export::{handle_export_command, ExportArgs};
pub use history::handle_history_command;
pub use interactive::Menu;
pub use record::{handle_record_command, RecordCommands};
pub use report::{handle_report_command, ReportCommands};
pub use trash::{handle_trash_command, TrashCommands};
