//! The two record collections held by the store

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which store collection an operation or listing refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Live records, displayed and aggregated
    #[default]
    Active,
    /// Soft-deleted records awaiting restore or purge
    Trash,
}

impl Collection {
    /// Key used for this collection in the backing file
    pub fn file_key(&self) -> &'static str {
        match self {
            Self::Active => "plans",
            Self::Trash => "trash_bin",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "plans"),
            Self::Trash => write!(f, "trash bin"),
        }
    }
}
