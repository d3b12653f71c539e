use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::settings::ConfigError;

/// Errors that can occur while running git in a repository
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Git command failed: {0}")]
    CommandFailed(String),

    #[error("Failed to execute git: {0}")]
    SpawnFailed(String),
}

/// Errors raised while walking the directory tree
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Cannot read {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Scan root {0} is not a directory")]
    NotADirectory(PathBuf),
}

/// Top-level application error that wraps all module-specific errors
///
/// Only errors that happen before scanning starts reach this type. Failures
/// inside a single repository are rendered into that repository's report.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for git operations
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
