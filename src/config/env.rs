// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Process environment captured once at startup.

/// Environment variable naming the identity that triggered the run.
pub const ACTOR_VAR: &str = "GITHUB_ACTOR";

/// Environment variable naming the release automation identity.
pub const RELEASE_BOT_VAR: &str = "RELEASE_BOT";

/// Identities used by the exemption predicate.
///
/// Missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvContext {
    /// Identity that created the commit (CI actor).
    pub actor: String,
    /// Identity of the release bot.
    pub release_bot: String,
}

impl EnvContext {
    /// Create a context from explicit identities.
    pub fn new(actor: impl Into<String>, release_bot: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            release_bot: release_bot.into(),
        }
    }

    /// Capture the identities from the process environment.
    pub fn from_env() -> Self {
        let read = |name: &str| std::env::var(name).unwrap_or_default();
        Self::new(read(ACTOR_VAR), read(RELEASE_BOT_VAR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let ctx = EnvContext::default();
        assert!(ctx.actor.is_empty());
        assert!(ctx.release_bot.is_empty());
    }

    #[test]
    fn test_new() {
        let ctx = EnvContext::new("renovate[bot]", "release-please[bot]");
        assert_eq!(ctx.actor, "renovate[bot]");
        assert_eq!(ctx.release_bot, "release-please[bot]");
    }
}
