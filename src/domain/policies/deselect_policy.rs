//! Deselect policy
//!
//! Selecting a row always cascades to its descendants. Deselecting does not
//! in the legacy list component; `Cascade` makes it symmetric.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DeselectPolicy {
    /// Remove only the toggled id and its parent id
    #[default]
    Legacy,
    /// Also remove every descendant of the toggled row
    Cascade,
}

impl DeselectPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Some(DeselectPolicy::Legacy),
            "cascade" => Some(DeselectPolicy::Cascade),
            _ => None,
        }
    }
}
