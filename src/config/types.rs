//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::policies::{DeselectPolicy, MissingTargetPolicy};
use crate::error::RowshiftResult;

use super::loader::{self, ConfigProblem, ConfigWarning, LoadedConfig};

/// Move configuration (`[move]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveConfig {
    #[serde(default)]
    pub missing_target: MissingTargetPolicy,

    #[serde(default = "default_true")]
    pub require_unique_ids: bool,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            missing_target: MissingTargetPolicy::default(),
            require_unique_ids: true,
        }
    }
}

/// Selection configuration (`[selection]`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelectionConfig {
    #[serde(default)]
    pub deselect: DeselectPolicy,
}

/// Output configuration (`[output]`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Verbosity for a `-v` count. Flags only ever raise the level.
    pub fn raised_by(self, count: u8) -> Self {
        match count {
            0 => self,
            1 => self.max(Verbosity::Verbose),
            _ => Verbosity::Debug,
        }
    }

    /// Log filter directive for this level
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default, rename = "move")]
    pub moves: MoveConfig,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RowshiftResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> RowshiftResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> LoadedConfig {
        loader::load_or_default(project_root)
    }

    /// Apply `ROWSHIFT_*` environment overrides
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigProblem>) {
        loader::with_env_overrides(self)
    }
}
