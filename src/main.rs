use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::audit::AuditLogger;
use fintrack::cli::{
    handle_export_command, handle_history_command, handle_record_command, handle_report_command,
    handle_trash_command, ExportArgs, Menu, RecordCommands, ReportCommands, TrashCommands,
};
use fintrack::config::{FintrackPaths, Settings, DATA_DIR_ENV};
use fintrack::storage::Store;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker for planned expenses and allowances",
    long_about = "fintrack records plans (expenses) and allowances (income), keeps \
                  deleted records in a trash bin until you restore or purge them, \
                  and reports your balance and upcoming due dates. Run without a \
                  command for the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Skip records that fail to load instead of aborting
    #[arg(long, global = true)]
    skip_malformed: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Record(RecordCommands),

    /// Trash bin commands
    #[command(subcommand)]
    Trash(TrashCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Export all data to a file
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,

    /// Launch the interactive menu
    #[command(alias = "ui")]
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let audit = AuditLogger::new(paths.audit_log());

    // Commands that never touch the data file
    match cli.command {
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(());
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&audit, limit)?;
            return Ok(());
        }
        _ => {}
    }

    let mut store = Store::new(paths.data_file());
    if settings.audit_enabled {
        store = store.with_audit(audit);
    }

    if cli.skip_malformed {
        for skipped in store.load_lenient()? {
            eprintln!("Warning: skipped {}", skipped);
        }
    } else {
        store.load()?;
    }

    match cli.command {
        Some(Commands::Record(cmd)) => handle_record_command(&mut store, &settings, cmd)?,
        Some(Commands::Trash(cmd)) => handle_trash_command(&mut store, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&store, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&store, &settings, args)?,
        Some(Commands::Menu) | None => {
            Menu::new(&mut store, &settings, io::stdin().lock(), io::stdout()).run()?;
        }
        Some(Commands::Config) | Some(Commands::History { .. }) => {}
    }

    Ok(())
}

fn print_config(paths: &FintrackPaths, settings: &Settings) {
    println!("fintrack Configuration");
    println!("======================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data file:      {}", paths.data_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!(
        "Settings file:  {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (defaults, not saved)" }
    );
    println!("Override with {} to use another directory.", DATA_DIR_ENV);
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!(
        "  Input date format: {} ({})",
        settings.date_format_hint(),
        settings.input_date_format
    );
    println!(
        "  Export directory:  {}",
        settings
            .export_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "current directory".to_string())
    );
    println!(
        "  Audit log:         {}",
        if settings.audit_enabled { "enabled" } else { "disabled" }
    );
}
