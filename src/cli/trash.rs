//! Trash bin CLI commands

use std::io;

use clap::Subcommand;

use super::prompt::confirm;
use crate::config::Settings;
use crate::display::format_record_table;
use crate::error::LedgerResult;
use crate::storage::Store;

/// Trash bin subcommands
#[derive(Subcommand, Debug)]
pub enum TrashCommands {
    /// List records in the trash bin
    List,
    /// Move a trashed record back to the active list (0 cancels)
    Restore {
        /// Record number as shown by `trash list`
        index: usize,
    },
    /// Restore every trashed record
    RestoreAll,
    /// Permanently delete everything in the trash bin
    Empty {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a trash command
pub fn handle_trash_command(
    store: &mut Store,
    settings: &Settings,
    cmd: TrashCommands,
) -> LedgerResult<()> {
    match cmd {
        TrashCommands::List => {
            if store.trash().is_empty() {
                println!("Trash bin is empty.");
            } else {
                print!(
                    "{}",
                    format_record_table(store.trash(), &settings.currency_symbol)
                );
            }
        }

        TrashCommands::Restore { index } => {
            if index == 0 {
                println!("Restoration cancelled.");
                return Ok(());
            }

            let restored = store.restore(index)?;
            println!("Restored: {}", restored.description);
        }

        TrashCommands::RestoreAll => {
            let count = store.restore_all()?;
            if count == 0 {
                println!("Trash bin is empty.");
            } else {
                println!("Restored {} record(s).", count);
            }
        }

        TrashCommands::Empty { yes } => {
            let pending = store.trash().len();
            if pending == 0 {
                println!("Trash bin is empty.");
                return Ok(());
            }

            let prompt = format!(
                "Permanently delete {} record(s) in the trash bin? (yes/no): ",
                pending
            );
            if !yes && !confirm(&mut io::stdin().lock(), &mut io::stdout(), &prompt)? {
                println!("Aborted.");
                return Ok(());
            }

            let count = store.empty_trash()?;
            println!("Trash bin emptied ({} record(s) deleted).", count);
        }
    }

    Ok(())
}
