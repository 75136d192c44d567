//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::policies::{DeselectPolicy, MissingTargetPolicy};
use crate::error::{RowshiftError, RowshiftResult};

use super::types::{Config, Verbosity};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "rowshift.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RowshiftResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for reporting.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> RowshiftResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RowshiftError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// A config source that was found but not applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigProblem {
    /// The file exists but could not be read or parsed
    SkippedFile { file: PathBuf, message: String },
    /// A `ROWSHIFT_*` variable holds a value that is not recognized
    InvalidEnv { var: &'static str, value: String },
}

/// Resolved configuration plus what the CLI should tell the user about it
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    pub problems: Vec<ConfigProblem>,
}

/// Load from project config, user config, or defaults.
///
/// A file that fails to parse is skipped and reported; the next source is
/// tried.
pub fn load_or_default(project_root: Option<&Path>) -> LoadedConfig {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    let mut problems = Vec::new();
    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                let (config, env_problems) = with_env_overrides(config);
                problems.extend(env_problems);
                return LoadedConfig {
                    config,
                    warnings,
                    problems,
                };
            }
            Err(e) => problems.push(ConfigProblem::SkippedFile {
                file: path,
                message: e.to_string(),
            }),
        }
    }

    let (config, env_problems) = with_env_overrides(Config::default());
    problems.extend(env_problems);
    LoadedConfig {
        config,
        warnings: Vec::new(),
        problems,
    }
}

/// `<config dir>/rowshift/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rowshift").join("config.toml"))
}

/// Apply environment variable overrides (ROWSHIFT_* prefix)
pub fn with_env_overrides(config: Config) -> (Config, Vec<ConfigProblem>) {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup.
///
/// Unrecognized values leave the setting untouched and are returned.
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> (Config, Vec<ConfigProblem>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut problems = Vec::new();
    let mut invalid = |var: &'static str, value: String| {
        problems.push(ConfigProblem::InvalidEnv { var, value });
    };

    if let Some(value) = lookup("ROWSHIFT_MISSING_TARGET") {
        match MissingTargetPolicy::parse(&value) {
            Some(policy) => config.moves.missing_target = policy,
            None => invalid("ROWSHIFT_MISSING_TARGET", value),
        }
    }

    if let Some(value) = lookup("ROWSHIFT_REQUIRE_UNIQUE_IDS") {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" => config.moves.require_unique_ids = true,
            "false" | "0" => config.moves.require_unique_ids = false,
            _ => invalid("ROWSHIFT_REQUIRE_UNIQUE_IDS", value),
        }
    }

    if let Some(value) = lookup("ROWSHIFT_DESELECT") {
        match DeselectPolicy::parse(&value) {
            Some(policy) => config.selection.deselect = policy,
            None => invalid("ROWSHIFT_DESELECT", value),
        }
    }

    if let Some(value) = lookup("ROWSHIFT_VERBOSITY") {
        match Verbosity::parse(&value) {
            Some(verbosity) => config.output.verbosity = verbosity,
            None => invalid("ROWSHIFT_VERBOSITY", value),
        }
    }

    (config, problems)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "move",
        "missing_target",
        "require_unique_ids",
        "selection",
        "deselect",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
