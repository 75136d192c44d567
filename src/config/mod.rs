//! Configuration module for rowshift
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ROWSHIFT_*)
//! 3. Explicit `--config` file
//! 4. Project config (./rowshift.toml)
//! 5. User config (<config dir>/rowshift/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    parse_with_warnings, user_config_path, with_overrides_from, ConfigProblem, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{Config, MoveConfig, OutputConfig, SelectionConfig, Verbosity};
