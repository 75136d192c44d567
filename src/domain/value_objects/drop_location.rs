//! Drop location value object - where a dragged block lands relative to its target

use serde::{Deserialize, Serialize};

/// Placement of dragged items relative to the drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DropLocation {
    /// Sibling, immediately before the target
    Above,
    /// Sibling, immediately after the target
    Below,
    /// First children of the target
    Nested,
}

impl DropLocation {
    /// Parse a location name, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "above" => Some(DropLocation::Above),
            "below" => Some(DropLocation::Below),
            "nested" => Some(DropLocation::Nested),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DropLocation::Above => "above",
            DropLocation::Below => "below",
            DropLocation::Nested => "nested",
        }
    }

    /// Returns true if the block lands beside the target rather than inside it
    pub fn is_sibling(&self) -> bool {
        !matches!(self, DropLocation::Nested)
    }
}

impl std::fmt::Display for DropLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
