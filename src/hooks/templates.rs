// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

/// Marker line identifying hooks written by cpl.
pub const HOOK_MARKER: &str = "# cpl Git Hook";

/// Hooks cpl can install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    /// Lints the message file git passes as `$1`.
    CommitMsg,
}

impl HookTemplate {
    /// All known hooks.
    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::CommitMsg]
    }

    /// File name inside the hooks directory.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    /// Generate the hook script.
    pub fn generate(&self) -> String {
        let body = match self {
            HookTemplate::CommitMsg => "exec cpl lint --edit \"$1\"",
        };
        format!(
            "#!/bin/sh\n{}\n# Generated by cpl v{}\n\n{}\n",
            HOOK_MARKER,
            crate::version::VERSION,
            body
        )
    }
}

impl std::str::FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commit-msg" | "commit_msg" => Ok(HookTemplate::CommitMsg),
            _ => Err(()),
        }
    }
}
