//! User settings for fintrack
//!
//! Display currency, the date format accepted on input, where exports go and
//! whether mutations are written to the audit log.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::DEFAULT_CURRENCY_SYMBOL;
use crate::storage::write_json_atomic;

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format for dates typed by the user; ISO-8601 is always
    /// accepted as well
    #[serde(default = "default_input_date_format")]
    pub input_date_format: String,

    /// Directory for export files; the current directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_input_date_format() -> String {
    "%m-%d-%Y".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            input_date_format: default_input_date_format(),
            export_dir: None,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> LedgerResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller saves
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> LedgerResult<()> {
        paths.ensure_directories()?;
        write_json_atomic(&paths.settings_file(), self)
    }

    /// Parse a user-supplied date
    ///
    /// Tries the configured input format first, then ISO-8601.
    pub fn parse_date(&self, input: &str) -> LedgerResult<NaiveDate> {
        let input = input.trim();
        NaiveDate::parse_from_str(input, &self.input_date_format)
            .or_else(|_| NaiveDate::parse_from_str(input, "%Y-%m-%d"))
            .map_err(|_| {
                LedgerError::Validation(format!(
                    "Invalid date '{}': expected {} or YYYY-MM-DD",
                    input,
                    self.date_format_hint()
                ))
            })
    }

    /// Human-readable form of the input format, e.g. `MM-DD-YYYY`
    pub fn date_format_hint(&self) -> String {
        self.input_date_format
            .replace("%m", "MM")
            .replace("%d", "DD")
            .replace("%Y", "YYYY")
            .replace("%y", "YY")
    }
}
