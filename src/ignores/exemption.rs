// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Bot commit exemptions.

use crate::config::EnvContext;

/// Sign-off added by the dependency update bot.
pub const DEPENDABOT_SIGNOFF: &str = "Signed-off-by: dependabot[bot]";

/// Header prefix of dependency update commits.
pub const DEPENDENCY_UPDATE_PREFIX: &str = "chore(deps): update";

/// Identity of the dependency update automation.
pub const RENOVATE_ACTOR: &str = "renovate[bot]";

/// Header prefix of release commits.
pub const RELEASE_PREFIX: &str = "chore(master): release";

/// Whether a raw commit message is exempt from all rules.
///
/// Comparisons are exact.
pub fn is_exempt(message: &str, actor: &str, release_bot: &str) -> bool {
    message.contains(DEPENDABOT_SIGNOFF)
        || (message.starts_with(DEPENDENCY_UPDATE_PREFIX) && actor == RENOVATE_ACTOR)
        || (message.starts_with(RELEASE_PREFIX) && actor == release_bot)
}

/// Exemption predicate bound to the identities captured at startup.
#[derive(Debug, Clone, Default)]
pub struct BotExemption {
    env: EnvContext,
}

impl BotExemption {
    /// Create an exemption predicate for the given environment.
    pub fn new(env: EnvContext) -> Self {
        Self { env }
    }

    /// Whether the message is a bot commit.
    pub fn matches(&self, message: &str) -> bool {
        is_exempt(message, &self.env.actor, &self.env.release_bot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependabot_signoff_any_actor() {
        let msg = "build(deps): bump regex\n\nSigned-off-by: dependabot[bot] <support@github.com>";
        assert!(is_exempt(msg, "", ""));
        assert!(is_exempt(msg, "someone", "release-bot"));
    }

    #[test]
    fn test_dependency_update_requires_renovate() {
        let msg = "chore(deps): update module golang.org/x/net to v0.20.0";
        assert!(is_exempt(msg, "renovate[bot]", ""));
        assert!(!is_exempt(msg, "octocat", ""));
        assert!(!is_exempt(msg, "", ""));
        assert!(!is_exempt(msg, "Renovate[bot]", ""));
    }

    #[test]
    fn test_release_requires_release_bot() {
        let msg = "chore(master): release 1.4.0";
        assert!(is_exempt(msg, "release-bot", "release-bot"));
        assert!(!is_exempt(msg, "octocat", "release-bot"));
        assert!(!is_exempt(msg, "", "release-bot"));
        // both identities unset compare equal
        assert!(is_exempt(msg, "", ""));
    }

    #[test]
    fn test_prefix_must_be_at_start() {
        let msg = "docs: mention chore(deps): update in readme";
        assert!(!is_exempt(msg, "renovate[bot]", ""));
    }

    #[test]
    fn test_bot_exemption_uses_captured_env() {
        let exemption = BotExemption::new(EnvContext::new("release-bot", "release-bot"));
        assert!(exemption.matches("chore(master): release 2.0.0"));
        assert!(!exemption.matches("feat: something"));
        // evaluating twice gives the same verdict
        assert_eq!(
            exemption.matches("chore(master): release 2.0.0"),
            exemption.matches("chore(master): release 2.0.0")
        );
    }
}
