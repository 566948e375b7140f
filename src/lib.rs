//! fintrack - personal finance tracker for plans and allowances
//!
//! This library provides the core functionality for the fintrack ledger:
//! dated records of planned expenses ("plans") and allowances, kept in a
//! single JSON file with a trash bin for soft-deleted records.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Records, money amounts and record kinds
//! - `storage`: The record store and atomic JSON file I/O
//! - `reports`: Totals, net balance and upcoming due dates
//! - `audit`: Append-only log of store mutations
//! - `config`: Path resolution and user settings
//! - `export`: JSON, YAML and CSV snapshots
//! - `display` / `cli`: Terminal formatting, commands and the interactive menu
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{FintrackPaths, Settings};
//! use fintrack::storage::Store;
//!
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = Store::open(paths.data_file())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
