// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cpl - Commit message policy linter
//!
//! Checks commit messages against a table of named rules, each with a
//! severity, an applicability and an optional parameter.
//!
//! # Features
//!
//! - **Rule Engine**: Conventional-commit rules plus a forbidden-character rule
//! - **Bot Exemptions**: Dependency and release bot commits skip all rules
//! - **Configuration**: `cpl.toml` overlays on the built-in policy
//! - **Git Integration**: Lint single commits or whole ranges
//! - **Git Hooks**: A `commit-msg` hook that runs the linter
//!
//! # Example
//!
//! ```no_run
//! use cpl::config::{EnvContext, PolicyConfig};
//! use cpl::rules::RuleEngine;
//!
//! let config = PolicyConfig::load().unwrap();
//! let engine = RuleEngine::new(config, EnvContext::from_env()).unwrap();
//!
//! let report = engine.lint("feat(api): add token refresh");
//! assert!(report.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod ignores;
pub mod rules;

// Re-exports for convenience
pub use config::PolicyConfig;
pub use error::{CplError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cpl.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let short = GIT_SHA.map(|sha| &sha[..7.min(sha.len())]);
        match (short, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => format!("{} ({} {})", VERSION, sha, date),
            (Some(sha), None) => format!("{} ({})", VERSION, sha),
            _ => VERSION.to_string(),
        }
    }
}
