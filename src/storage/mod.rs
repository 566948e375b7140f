//! Storage layer for fintrack
//!
//! A single JSON backing file holds the active records and the trash bin.
//! Writes go through a temp file and an atomic rename.

pub mod file_io;
pub mod store;

pub use file_io::{read_json, resolve_path, same_file, write_json_atomic};
pub use store::{Snapshot, Store};
