//! Grouping strategies: how a file path maps to its tally bucket.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LinetallyError;

/// Strategy for deriving a group key from a file path.
///
/// Resolved once at startup and handed to every worker; keys are lowercased
/// at derivation so all downstream comparison is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Grouping {
    /// Group by file extension, including the leading dot (`.txt`)
    #[default]
    Extension,
    /// Group by containing directory path
    Directory,
}

impl Grouping {
    /// Derive the group key for a path.
    ///
    /// Files without an extension map to the empty key under `Extension`
    /// grouping; renderers substitute a placeholder label.
    pub fn key_for(&self, path: &Path) -> String {
        match self {
            Grouping::Extension => match path.extension() {
                Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
                None => String::new(),
            },
            Grouping::Directory => path
                .parent()
                .map(|p| p.to_string_lossy().to_lowercase())
                .unwrap_or_default(),
        }
    }
}

impl FromStr for Grouping {
    type Err = LinetallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extension" | "ext" => Ok(Grouping::Extension),
            "directory" | "dir" => Ok(Grouping::Directory),
            _ => Err(LinetallyError::UnknownGrouping(s.to_string())),
        }
    }
}
