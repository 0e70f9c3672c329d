// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cpl.
//!
//! Lint verdicts are never errors: a failing rule produces a report entry.
//! These types cover everything around the verdict (configuration, git,
//! hooks, I/O) plus the final "lint failed" status used for the exit code.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cpl operations.
#[derive(Error, Debug)]
pub enum CplError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Unknown rule '{name}'")]
    UnknownRule { name: String },

    #[error("Rule '{name}' is registered more than once")]
    DuplicateRule { name: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Validation outcome errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{failed} of {total} commit message(s) failed linting")]
    LintFailed { failed: usize, total: usize },
}

/// Commit message input errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("No commit message given (pass one as an argument, --edit, --from or stdin)")]
    NoInput,
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("Hook not found: {hook}")]
    NotFound { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for cpl operations.
pub type Result<T> = std::result::Result<T, CplError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CplError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
