//! CLI command for data export

use std::path::PathBuf;

use clap::Args;

use super::record::today;
use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{default_export_path, export_to_file, ExportFormat};
use crate::storage::{same_file, Store};

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Output file path (defaults to financial_data_export_<date>.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(store: &Store, settings: &Settings, args: ExportArgs) -> LedgerResult<()> {
    let path = run_export(store, settings, args.format, args.output)?;
    println!("Data exported to {}", path.display());
    Ok(())
}

/// Write an export and return where it went
pub fn run_export(
    store: &Store,
    settings: &Settings,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> LedgerResult<PathBuf> {
    let path = output
        .unwrap_or_else(|| default_export_path(settings.export_dir.as_deref(), today(), format));

    if same_file(&path, store.path()) {
        return Err(LedgerError::Export(format!(
            "Refusing to overwrite the data file {}",
            path.display()
        )));
    }

    export_to_file(&store.snapshot(), format, &path)?;
    Ok(path)
}
