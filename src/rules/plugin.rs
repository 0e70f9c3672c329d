// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Statically linked rule plugins.
//!
//! A plugin is a namespace plus a set of named rule functions. The
//! registry merges its rules into the built-in lookup table at startup.

use lazy_static::lazy_static;
use regex::Regex;

use crate::commit::CommitMessageParts;
use crate::config::{Applicability, RuleValue};

use super::builtin::{FnRule, RuleOutcome, ValueKind};

/// Namespace of the local function-rules plugin.
pub const FUNCTION_RULES: &str = "function-rules";

/// Advisory shown when a forbidden character is found.
pub const FORBIDDEN_CHARACTERS_MESSAGE: &str = "please, avoid special characters like [' \" `]";

lazy_static! {
    static ref FORBIDDEN_REGEX: Regex = Regex::new(r#"['`"]"#).unwrap();

    /// Header GitHub writes when a pull request branch is updated.
    static ref MERGE_BRANCH_REGEX: Regex = Regex::new(r"Merge branch '.*' into").unwrap();
}

/// A named group of rules.
#[derive(Debug, Clone)]
pub struct Plugin {
    /// Plugin namespace.
    pub namespace: &'static str,
    /// Rules provided by the plugin.
    pub rules: Vec<FnRule>,
}

impl Plugin {
    /// Create an empty plugin.
    pub fn new(namespace: &'static str) -> Self {
        Self {
            namespace,
            rules: Vec::new(),
        }
    }

    /// Add a rule to the plugin.
    pub fn with_rule(mut self, rule: FnRule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// The local plugin carrying the repository's custom rules.
pub fn function_rules_plugin() -> Plugin {
    Plugin::new(FUNCTION_RULES).with_rule(FnRule::new(
        "forbidden-characters",
        ValueKind::Unused,
        forbidden_characters,
    ))
}

/// Check header, body and footer for quote characters.
///
/// Headers of GitHub's "update branch" merge commits are allowed through.
pub fn check_forbidden_characters(
    header: &str,
    body: &str,
    footer: &str,
) -> (bool, Option<&'static str>) {
    let found = [header, body, footer]
        .iter()
        .any(|field| FORBIDDEN_REGEX.is_match(field));

    if !found || MERGE_BRANCH_REGEX.is_match(header) {
        (true, None)
    } else {
        (false, Some(FORBIDDEN_CHARACTERS_MESSAGE))
    }
}

/// Applicability is ignored. The raw message is never inspected since it
/// may contain template comments.
fn forbidden_characters(
    message: &CommitMessageParts,
    _when: Applicability,
    _value: Option<&RuleValue>,
) -> RuleOutcome {
    let (valid, advisory) = check_forbidden_characters(
        &message.header,
        message.body.as_deref().unwrap_or(""),
        message.footer.as_deref().unwrap_or(""),
    );
    RuleOutcome {
        valid,
        message: advisory.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    #[test]
    fn test_backtick_in_header_fails() {
        let (pass, message) = check_forbidden_characters("fix: add `x`", "", "");
        assert!(!pass);
        assert_eq!(message, Some(FORBIDDEN_CHARACTERS_MESSAGE));
    }

    #[test]
    fn test_merge_branch_header_passes() {
        assert_eq!(
            check_forbidden_characters("Merge branch 'foo' into main", "", ""),
            (true, None)
        );
    }

    #[test]
    fn test_clean_message_passes() {
        assert_eq!(
            check_forbidden_characters("fix: simple change", "no specials here", ""),
            (true, None)
        );
    }

    #[test]
    fn test_quotes_in_body_or_footer_fail() {
        assert!(!check_forbidden_characters("fix: x", "it's broken", "").0);
        assert!(!check_forbidden_characters("fix: x", "", "Refs: \"abc\"").0);
    }

    #[test]
    fn test_merge_exception_applies_to_body_quotes() {
        assert!(check_forbidden_characters("Merge branch 'a' into b", "it's fine", "").0);
    }

    #[test]
    fn test_rule_ignores_comment_lines() {
        let parts = CommitMessageParts::parse_with(
            "fix: typo\n\n# Lines starting with '#' will be ignored\nplain body",
            true,
        );
        let rule = &function_rules_plugin().rules[0];
        assert_eq!(rule.name(), "forbidden-characters");
        assert!(rule.check(&parts, Applicability::Always, None).valid);
    }

    #[test]
    fn test_rule_reports_advisory() {
        let parts = CommitMessageParts::parse("feat: add \"quoted\" support");
        let rule = &function_rules_plugin().rules[0];
        let outcome = rule.check(&parts, Applicability::Always, None);
        assert!(!outcome.valid);
        assert_eq!(outcome.message.as_deref(), Some(FORBIDDEN_CHARACTERS_MESSAGE));
    }
}
