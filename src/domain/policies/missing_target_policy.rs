//! Missing drop target policy
//!
//! What a validated move does when the drop target id is not in the tree.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MissingTargetPolicy {
    /// Fail with `MoveError::TargetNotFound`
    #[default]
    Reject,
    /// Return the tree unchanged
    Keep,
    /// Remove the dragged items and insert them nowhere (legacy behavior)
    Drop,
}

impl MissingTargetPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Some(MissingTargetPolicy::Reject),
            "keep" => Some(MissingTargetPolicy::Keep),
            "drop" => Some(MissingTargetPolicy::Drop),
            _ => None,
        }
    }

    /// Returns true if this policy can lose items
    pub fn loses_items(&self) -> bool {
        matches!(self, MissingTargetPolicy::Drop)
    }
}
