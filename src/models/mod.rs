//! Core data models for fintrack
//!
//! Records, the kinds they come in, the money type they are measured in,
//! and the two collections the store keeps them in.

pub mod collection;
pub mod money;
pub mod record;

pub use collection::Collection;
pub use money::{Money, MoneyParseError, DEFAULT_CURRENCY_SYMBOL};
pub use record::{Record, RecordKind};
