// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitMessageParts;
use crate::config::{EnvContext, PolicyConfig};
use crate::error::{ConfigError, CplError, Result};
use crate::git;
use crate::ignores::IgnoreList;

use super::registry::RuleRegistry;
use super::validator::{LintIssue, LintReport};

/// Rule engine for validating commit messages.
///
/// Every message is first matched against the ignore list; exempt messages
/// get an empty report. Otherwise each enabled rule of the table runs.
#[derive(Debug)]
pub struct RuleEngine {
    config: PolicyConfig,
    registry: RuleRegistry,
    ignores: IgnoreList,
}

impl RuleEngine {
    /// Create a rule engine with the standard registry and ignore list.
    pub fn new(config: PolicyConfig, env: EnvContext) -> Result<Self> {
        let ignores = IgnoreList::from_config(&config, env);
        Self::with_parts(config, RuleRegistry::standard()?, ignores)
    }

    /// Create a rule engine from explicit parts.
    ///
    /// Fails if the rule table names a rule the registry does not know or
    /// gives an enabled rule a parameter of the wrong shape.
    pub fn with_parts(
        config: PolicyConfig,
        registry: RuleRegistry,
        ignores: IgnoreList,
    ) -> Result<Self> {
        for (name, rule_config) in &config.rules {
            let rule = registry.get(name).ok_or_else(|| {
                CplError::Config(ConfigError::UnknownRule { name: name.clone() })
            })?;

            if rule_config.is_enabled() {
                rule.value_kind()
                    .validate(rule_config.value.as_ref())
                    .map_err(|message| {
                        CplError::Config(ConfigError::InvalidValue {
                            key: format!("rules.{}.value", name),
                            message,
                        })
                    })?;
            }
        }

        tracing::debug!(
            "Rule engine ready: {} rule(s), {} ignore predicate(s)",
            config.rules.enabled().count(),
            ignores.len()
        );

        Ok(Self {
            config,
            registry,
            ignores,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Get the rule registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Whether a raw message is exempt from all rules.
    pub fn is_exempt(&self, message: &str) -> bool {
        self.ignores.find(message).is_some()
    }

    /// Lint a raw commit message, every line included.
    pub fn lint(&self, message: &str) -> LintReport {
        self.lint_with(message, false)
    }

    /// Lint a raw commit message, optionally dropping git comment lines
    /// (used for messages read from `COMMIT_EDITMSG`).
    pub fn lint_with(&self, message: &str, strip_comments: bool) -> LintReport {
        let mut report = LintReport::new(message, self.config.fail_on_warnings);

        if let Some(ignore) = self.ignores.find(message) {
            tracing::info!("Skipping message matched by '{}'", ignore);
            report.ignored_by = Some(ignore.to_string());
            return report;
        }

        let parts = CommitMessageParts::parse_with(message, strip_comments);
        self.apply_rules(&parts, &mut report);
        report
    }

    /// Lint a message that is already split into parts.
    pub fn lint_parts(&self, parts: &CommitMessageParts) -> LintReport {
        let mut report = LintReport::new(parts.raw.clone(), self.config.fail_on_warnings);

        if let Some(ignore) = self.ignores.find(&parts.raw) {
            report.ignored_by = Some(ignore.to_string());
            return report;
        }

        self.apply_rules(parts, &mut report);
        report
    }

    fn apply_rules(&self, parts: &CommitMessageParts, report: &mut LintReport) {
        for (name, rule_config) in self.config.rules.enabled() {
            // presence checked in with_parts
            let Some(rule) = self.registry.get(name) else {
                continue;
            };

            let outcome = rule.check(parts, rule_config.when, rule_config.value.as_ref());
            tracing::debug!("Rule '{}': {}", name, if outcome.valid { "pass" } else { "fail" });

            if !outcome.valid {
                report.push(LintIssue {
                    rule: name.clone(),
                    message: outcome
                        .message
                        .unwrap_or_else(|| format!("{} failed", name)),
                    severity: rule_config.level,
                });
            }
        }
    }

    /// Lint every commit reachable from `to` but not from `from`.
    pub fn check_range(&self, from: Option<&str>, to: &str) -> Result<Vec<LintReport>> {
        let commits = git::get_commit_range(from, to)?;
        tracing::debug!("Linting {} commit(s)", commits.len());

        Ok(commits
            .into_iter()
            .map(|(sha, message)| {
                let mut report = self.lint(&message);
                report.commit_sha = Some(sha);
                report
            })
            .collect())
    }
}
