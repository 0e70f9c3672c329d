// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default message file written by git.
pub const COMMIT_EDITMSG: &str = ".git/COMMIT_EDITMSG";

/// cpl - Commit message policy linter
///
/// Lints commit messages against a configurable rule table. Bot commits
/// (dependency updates, releases) are exempt.
#[derive(Parser, Debug)]
#[command(name = "cpl")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message policy linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to lint if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Identity that created the commit
    #[arg(long, global = true, env = "GITHUB_ACTOR", default_value = "")]
    pub actor: String,

    /// Identity of the release bot
    #[arg(long, global = true, env = "RELEASE_BOT", default_value = "")]
    pub release_bot: String,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint commit messages (default command)
    Lint(LintArgs),

    /// Print the effective rule table
    Rules,

    /// Manage git hooks
    Hooks(HooksArgs),

    /// Print version information
    Version,

    /// Initialize cpl configuration
    Init(InitArgs),
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Default, Clone)]
pub struct LintArgs {
    /// Message to lint (reads stdin when no other source is given)
    #[arg(conflicts_with_all = ["edit", "from", "to"])]
    pub message: Option<String>,

    /// Read the message from a file (default: .git/COMMIT_EDITMSG)
    #[arg(short, long, num_args = 0..=1, default_missing_value = COMMIT_EDITMSG, conflicts_with_all = ["from", "to"])]
    pub edit: Option<PathBuf>,

    /// Lint commits after this revision
    #[arg(long)]
    pub from: Option<String>,

    /// Lint commits up to this revision (default: HEAD)
    #[arg(long)]
    pub to: Option<String>,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Also print reports of valid messages
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install git hooks
    Install {
        /// Specific hook to install
        #[arg(value_name = "HOOK")]
        hook: Option<String>,

        /// Force overwrite existing hooks
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall git hooks
    Uninstall {
        /// Specific hook to uninstall
        #[arg(value_name = "HOOK")]
        hook: Option<String>,
    },

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Lint if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Lint(LintArgs::default()))
    }
}

impl LintArgs {
    /// Whether commits are read from git history.
    pub fn is_range(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lint_message() {
        let args = Cli::parse_from(["cpl", "lint", "feat: x", "--strict"]);
        if let Some(Commands::Lint(lint)) = args.command {
            assert_eq!(lint.message.as_deref(), Some("feat: x"));
            assert!(lint.strict);
            assert!(!lint.is_range());
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_parse_lint_edit_default() {
        let args = Cli::parse_from(["cpl", "lint", "--edit"]);
        if let Some(Commands::Lint(lint)) = args.command {
            assert_eq!(lint.edit, Some(PathBuf::from(COMMIT_EDITMSG)));
        } else {
            panic!("Expected Lint command");
        }

        let args = Cli::parse_from(["cpl", "lint", "--edit", "msg.txt"]);
        if let Some(Commands::Lint(lint)) = args.command {
            assert_eq!(lint.edit, Some(PathBuf::from("msg.txt")));
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_parse_lint_range() {
        let args = Cli::parse_from(["cpl", "lint", "--from", "HEAD~3"]);
        if let Some(Commands::Lint(lint)) = args.command {
            assert_eq!(lint.from.as_deref(), Some("HEAD~3"));
            assert!(lint.is_range());
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_message_conflicts_with_range() {
        assert!(Cli::try_parse_from(["cpl", "lint", "feat: x", "--from", "HEAD~1"]).is_err());
    }

    #[test]
    fn test_identities() {
        let args = Cli::parse_from(["cpl", "--actor", "renovate[bot]", "--release-bot", "rb", "lint"]);
        assert_eq!(args.actor, "renovate[bot]");
        assert_eq!(args.release_bot, "rb");
    }

    #[test]
    fn test_parse_hooks() {
        let args = Cli::parse_from(["cpl", "hooks", "install", "--force"]);
        assert!(matches!(args.command, Some(Commands::Hooks(_))));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["cpl"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Lint(_)));
    }
}
