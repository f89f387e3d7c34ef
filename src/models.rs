//! Data Models
//!
//! Plain data types for the list widget.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, opaque, unique within one session
    pub id: String,
    /// Item text, trimmed and never empty
    pub text: String,
    /// Completion status
    pub completed: bool,
    /// Creation time in milliseconds since the Unix epoch, informational only
    pub created_at: i64,
}

/// View restriction applied to the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

/// A filter name outside the three known values reached the string
/// boundary. The UI only ever offers the valid names, so this can only
/// come from a coding mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid filter: {0:?}")]
pub struct InvalidFilter(pub String);

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Whether `item` is visible under this filter
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}

impl FromStr for Filter {
    type Err = InvalidFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(InvalidFilter(other.to_string())),
        }
    }
}
