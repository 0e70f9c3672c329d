// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ignore predicates.
//!
//! A message matched by any predicate is exempt from every rule. The list
//! is evaluated before the rule table.

mod defaults;
mod exemption;

pub use defaults::is_default_ignored;
pub use exemption::{
    is_exempt, BotExemption, DEPENDABOT_SIGNOFF, DEPENDENCY_UPDATE_PREFIX, RELEASE_PREFIX,
    RENOVATE_ACTOR,
};

use crate::config::{EnvContext, PolicyConfig};

/// A predicate over the raw commit message.
pub trait Ignore: std::fmt::Debug + Send + Sync {
    /// Whether the message should be skipped.
    fn matches(&self, message: &str) -> bool;

    /// Get the predicate name.
    fn name(&self) -> &str;
}

impl Ignore for BotExemption {
    fn matches(&self, message: &str) -> bool {
        BotExemption::matches(self, message)
    }

    fn name(&self) -> &str {
        "bot-commit"
    }
}

/// Predicate wrapping [`is_default_ignored`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIgnores;

impl Ignore for DefaultIgnores {
    fn matches(&self, message: &str) -> bool {
        is_default_ignored(message)
    }

    fn name(&self) -> &str {
        "default-ignores"
    }
}

/// Ordered list of ignore predicates.
#[derive(Debug, Default)]
pub struct IgnoreList {
    predicates: Vec<Box<dyn Ignore>>,
}

impl IgnoreList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the list for a configuration: the bot exemption always, the
    /// default patterns when enabled.
    pub fn from_config(config: &PolicyConfig, env: EnvContext) -> Self {
        let mut list = Self::new();
        list.push(Box::new(BotExemption::new(env)));
        if config.default_ignores {
            list.push(Box::new(DefaultIgnores));
        }
        list
    }

    /// Append a predicate.
    pub fn push(&mut self, predicate: Box<dyn Ignore>) {
        self.predicates.push(predicate);
    }

    /// Name of the first predicate matching the message.
    pub fn find(&self, message: &str) -> Option<&str> {
        self.predicates
            .iter()
            .find(|p| p.matches(message))
            .map(|p| p.name())
    }

    /// Number of predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_without_default_ignores() {
        let config = PolicyConfig::default();
        let list = IgnoreList::from_config(&config, EnvContext::default());
        assert_eq!(list.len(), 1);
        assert_eq!(list.find("Merge branch 'a' into b"), None);
        assert_eq!(
            list.find("x\n\nSigned-off-by: dependabot[bot] <support@github.com>"),
            Some("bot-commit")
        );
    }

    #[test]
    fn test_from_config_with_default_ignores() {
        let config = PolicyConfig {
            default_ignores: true,
            ..PolicyConfig::default()
        };
        let list = IgnoreList::from_config(&config, EnvContext::default());
        assert_eq!(list.len(), 2);
        assert_eq!(list.find("Merge branch 'a' into b"), Some("default-ignores"));
        assert_eq!(list.find("feat: x"), None);
    }
}
