//! Error types for rowshift
//!
//! Library errors use `thiserror`. The CLI wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::MoveError;
use crate::domain::services::TreeError;

/// Result type alias for rowshift operations
pub type RowshiftResult<T> = Result<T, RowshiftError>;

/// Main error type for rowshift operations
#[derive(Error, Debug)]
pub enum RowshiftError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tree file is not valid JSON for a list
    #[error("invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Structural tree problem
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Refused move
    #[error(transparent)]
    Move(#[from] MoveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = RowshiftError::Config {
            file: PathBuf::from("rowshift.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in rowshift.toml: expected a table"
        );
    }

    #[test]
    fn test_error_display_move_is_transparent() {
        let err: RowshiftError = MoveError::TargetNotFound {
            target: "x".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "drop target 'x' not found");
    }
}
