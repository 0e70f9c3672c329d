// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::{Applicability, RuleConfig, RuleTable, RuleValue, Severity};

/// Commit types accepted by `type-enum`.
pub const ALLOWED_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Scopes accepted by `scope-enum`.
pub const ALLOWED_SCOPES: &[&str] = &[
    "logging",
    "sdk",
    "docs",
    "dependencies",
    "deps",
    "auth",
    "api",
    "pkg",
    "proto",
    "test",
    "master",
    "examples",
];

/// Conventional base rules the repository policy builds on.
pub fn conventional_rule_table() -> RuleTable {
    use Applicability::{Always, Never};
    use Severity::{Error, Warning};

    RuleTable::new()
        .with("body-leading-blank", RuleConfig::new(Warning, Always))
        .with(
            "body-max-line-length",
            RuleConfig::new(Error, Always).with_value(RuleValue::Length(100)),
        )
        .with("footer-leading-blank", RuleConfig::new(Warning, Always))
        .with(
            "footer-max-line-length",
            RuleConfig::new(Error, Always).with_value(RuleValue::Length(100)),
        )
        .with(
            "header-max-length",
            RuleConfig::new(Error, Always).with_value(RuleValue::Length(100)),
        )
        .with("header-trim", RuleConfig::new(Error, Always))
        .with(
            "subject-case",
            RuleConfig::new(Error, Never).with_value(RuleValue::list(&[
                "sentence-case",
                "start-case",
                "pascal-case",
                "upper-case",
            ])),
        )
        .with("subject-empty", RuleConfig::new(Error, Never))
        .with(
            "subject-full-stop",
            RuleConfig::new(Error, Never).with_value(RuleValue::Text(".".to_string())),
        )
        .with(
            "type-case",
            RuleConfig::new(Error, Always).with_value(RuleValue::Text("lower-case".to_string())),
        )
        .with("type-empty", RuleConfig::new(Error, Never))
        .with(
            "type-enum",
            RuleConfig::new(Error, Always).with_value(RuleValue::list(ALLOWED_TYPES)),
        )
}

/// The repository policy: the conventional base with its own limits,
/// vocabulary and the forbidden-character rule.
pub fn default_rule_table() -> RuleTable {
    use Applicability::Always;
    use Severity::Error;

    let policy = RuleTable::new()
        .with(
            "body-max-line-length",
            RuleConfig::new(Error, Always).with_value(RuleValue::Length(72)),
        )
        .with(
            "header-max-length",
            RuleConfig::new(Error, Always).with_value(RuleValue::Length(72)),
        )
        .with(
            "subject-max-length",
            RuleConfig::new(Error, Always).with_value(RuleValue::Length(50)),
        )
        .with("forbidden-characters", RuleConfig::new(Error, Always))
        .with(
            "type-enum",
            RuleConfig::new(Error, Always).with_value(RuleValue::list(ALLOWED_TYPES)),
        )
        .with(
            "scope-enum",
            RuleConfig::new(Error, Always).with_value(RuleValue::list(ALLOWED_SCOPES)),
        );

    conventional_rule_table().overlay(policy)
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cpl configuration file
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Overlay the rules below on the built-in rule table
extends_defaults = true

# Skip merge, revert and fixup commits
default_ignores = false

# Fail on warnings as well as errors
fail_on_warnings = true

# Rules: level = off | warning | error, when = always | never
[rules.body-max-line-length]
level = "error"
when = "always"
value = 72

[rules.header-max-length]
level = "error"
when = "always"
value = 72

[rules.subject-max-length]
level = "error"
when = "always"
value = 50

[rules.forbidden-characters]
level = "error"
when = "always"

[rules.type-enum]
level = "error"
when = "always"
value = ["build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test"]

[rules.scope-enum]
level = "error"
when = "always"
value = ["logging", "sdk", "docs", "dependencies", "deps", "auth", "api", "pkg", "proto", "test", "master", "examples"]

# UI configuration
[ui]
color = true
"#
}
