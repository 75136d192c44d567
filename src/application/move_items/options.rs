//! Move options

use crate::config::MoveConfig;
use crate::domain::policies::MissingTargetPolicy;

/// Options for a validated move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOptions {
    /// What to do when the drop target is not in the tree
    pub missing_target: MissingTargetPolicy,
    /// Refuse trees that repeat an id
    pub require_unique_ids: bool,
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self {
            missing_target: MissingTargetPolicy::default(),
            require_unique_ids: true,
        }
    }
}

impl MoveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set missing target policy
    pub fn with_missing_target(mut self, policy: MissingTargetPolicy) -> Self {
        self.missing_target = policy;
        self
    }

    /// Set id uniqueness check
    pub fn with_require_unique_ids(mut self, require: bool) -> Self {
        self.require_unique_ids = require;
        self
    }
}

impl From<&MoveConfig> for MoveOptions {
    fn from(config: &MoveConfig) -> Self {
        Self {
            missing_target: config.missing_target,
            require_unique_ids: config.require_unique_ids,
        }
    }
}
