//! Error types for rowsync.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (3=not_found, 4=parse, 7=config, 8=io)
//! - Context-aware recovery hints
//! - Structured JSON output for piped / `--json` consumers

use std::path::PathBuf;
use thiserror::Error;

use crate::sync::SyncError;

/// Result type alias for rowsync operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
///
/// Each code maps to a SCREAMING_SNAKE string and a category-based
/// exit code. Scripts can match on either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Not Found (exit 3)
    GameNotFound,

    // Parse (exit 4)
    InvalidLine,
    InvalidArgument,

    // Config (exit 7)
    ConfigError,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::InvalidLine => "INVALID_LINE",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::GameNotFound => 3,
            Self::InvalidLine | Self::InvalidArgument => 4,
            Self::ConfigError => 7,
            Self::IoError | Self::JsonError => 8,
        }
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in rowsync operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid line in {}:{line}: {content}", path.display())]
    InvalidLine {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Game not found: {name}")]
    GameNotFound { name: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<SyncError> for Error {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Io { path, source } => Self::Io { path, source },
            SyncError::Json { path, source } => Self::Json { path, source },
            SyncError::InvalidLine {
                path,
                line,
                content,
            } => Self::InvalidLine {
                path,
                line,
                content,
            },
            SyncError::GameNotFound(name) => Self::GameNotFound { name },
        }
    }
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidLine { .. } => ErrorCode::InvalidLine,
            Self::GameNotFound { .. } => ErrorCode::GameNotFound,
            Self::Io { .. } => ErrorCode::IoError,
            Self::Json { .. } => ErrorCode::JsonError,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Output(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::InvalidLine { path, .. } => Some(format!(
                "Every line of {} must start with `<row id> <name>` or continue the previous name.",
                path.display()
            )),

            Self::GameNotFound { name } => Some(format!(
                "No directory named '{name}' in either store. Use `rowsync status` to list games."
            )),

            Self::Json { path, .. } => Some(format!(
                "{} is not a valid row name document. Fix or remove it and rerun.",
                path.display()
            )),

            Self::Config(msg) if msg.contains("not set") => Some(
                "Pass both checkouts, e.g.\n  \
                 rowsync --smithbox path/to/Smithbox --paramdex path/to/Paramdex to-paramdex"
                    .to_string(),
            ),

            Self::Io { .. }
            | Self::Output(_)
            | Self::InvalidArgument(_)
            | Self::Config(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    ///
    /// Includes error code, message, exit code, and optional recovery hint.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_line_from_sync_error() {
        let err: Error = SyncError::InvalidLine {
            path: PathBuf::from("ER/Names/Bad.txt"),
            line: 3,
            content: "oops".to_string(),
        }
        .into();

        assert_eq!(err.error_code(), ErrorCode::InvalidLine);
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.to_string(), "Invalid line in ER/Names/Bad.txt:3: oops");
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_game_not_found_from_sync_error() {
        let err: Error = SyncError::GameNotFound("BB".to_string()).into();
        assert_eq!(err.exit_code(), 3);
        assert!(err.hint().unwrap().contains("'BB'"));
    }

    #[test]
    fn test_structured_json() {
        let err = Error::Config("Smithbox path not set (use --smithbox or ROWSYNC_SMITHBOX)".into());
        let json = err.to_structured_json();

        assert_eq!(json["error"]["code"], "CONFIG_ERROR");
        assert_eq!(json["error"]["exit_code"], 7);
        assert!(json["error"]["hint"].is_string());
    }

    #[test]
    fn test_structured_json_without_hint() {
        let err = Error::InvalidArgument("invalid game name: ''".into());
        let json = err.to_structured_json();
        assert_eq!(json["error"]["code"], "INVALID_ARGUMENT");
        assert_eq!(json["error"]["exit_code"], 4);
        assert!(json["error"].get("hint").is_none());
    }
}
