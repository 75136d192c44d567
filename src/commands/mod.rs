//! Command handlers

use std::path::Path;

use anyhow::{Context, Result};
use rowshift::config::{ConfigProblem, ConfigWarning, LoadedConfig};
use rowshift::presentation::JsonStyle;
use rowshift::Config;

pub mod check;
pub mod move_rows;
pub mod rows;
pub mod select;

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub json: JsonStyle,
}

impl CommandContext {
    pub fn new(config: Config, compact: bool) -> Self {
        let json = if compact {
            JsonStyle::Compact
        } else {
            JsonStyle::Auto
        };
        Self { config, json }
    }
}

/// Resolve configuration: explicit file, else project/user/defaults.
///
/// Unknown keys, skipped files and bad `ROWSHIFT_*` values are reported on
/// stderr before any command runs.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loaded = match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            let (config, problems) = config.with_env_overrides();
            LoadedConfig {
                config,
                warnings,
                problems,
            }
        }
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            Config::load_or_default(Some(&cwd))
        }
    };

    print_config_warnings(&loaded.warnings);
    print_config_problems(&loaded.problems);
    Ok(loaded.config)
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w.line {
            Some(line) => eprintln!(
                "⚠ Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            ),
            None => eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display()),
        }
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

fn print_config_problems(problems: &[ConfigProblem]) {
    for problem in problems {
        match problem {
            ConfigProblem::SkippedFile { file, message } => {
                eprintln!("⚠ Ignoring config {}", file.display());
                eprintln!("   {}", message.trim_end());
            }
            ConfigProblem::InvalidEnv { var, value } => {
                eprintln!("⚠ Ignoring {}='{}': unrecognized value", var, value);
            }
        }
    }
}
