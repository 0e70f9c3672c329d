// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cpl.toml.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// The main configuration structure for cpl.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Overlay the configured rules on top of the built-in rule table.
    pub extends_defaults: bool,

    /// Skip well-known machine-generated messages (merges, reverts, fixups).
    pub default_ignores: bool,

    /// Treat warnings as failures.
    pub fail_on_warnings: bool,

    /// Rule table.
    pub rules: RuleTable,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            extends_defaults: true,
            default_ignores: false,
            fail_on_warnings: true,
            rules: super::default::default_rule_table(),
            ui: UiConfig::default(),
        }
    }
}

impl PolicyConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "SeverityRepr")]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Violations are reported as warnings.
    Warning,
    /// Violations are reported as errors.
    Error,
}

impl Severity {
    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severities are accepted either by name or as the numeric levels 0, 1, 2.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeverityRepr {
    Level(u8),
    Name(String),
}

impl TryFrom<SeverityRepr> for Severity {
    type Error = String;

    fn try_from(repr: SeverityRepr) -> Result<Self, String> {
        match repr {
            SeverityRepr::Level(0) => Ok(Severity::Off),
            SeverityRepr::Level(1) => Ok(Severity::Warning),
            SeverityRepr::Level(2) => Ok(Severity::Error),
            SeverityRepr::Level(n) => Err(format!("invalid severity level {} (expected 0, 1 or 2)", n)),
            SeverityRepr::Name(name) => match name.to_lowercase().as_str() {
                "off" | "disabled" => Ok(Severity::Off),
                "warning" | "warn" => Ok(Severity::Warning),
                "error" => Ok(Severity::Error),
                other => Err(format!(
                    "invalid severity '{}' (expected off, warning or error)",
                    other
                )),
            },
        }
    }
}

/// Whether a rule's condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }

    /// Apply the applicability to a raw condition.
    pub fn expect(&self, condition: bool) -> bool {
        match self {
            Applicability::Always => condition,
            Applicability::Never => !condition,
        }
    }
}

impl std::fmt::Display for Applicability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule-specific parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// A length limit.
    Length(usize),
    /// A single string (e.g. a case name or a full-stop character).
    Text(String),
    /// A list of strings (e.g. allowed types).
    List(Vec<String>),
}

impl RuleValue {
    /// Build a list value from string slices.
    pub fn list(items: &[&str]) -> Self {
        RuleValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    /// The value as a length limit.
    pub fn as_length(&self) -> Option<usize> {
        match self {
            RuleValue::Length(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as a list of strings; a single string is a one-element list.
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            RuleValue::Length(_) => Vec::new(),
            RuleValue::Text(s) => vec![s.as_str()],
            RuleValue::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// The value as a single string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for RuleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleValue::Length(n) => write!(f, "{}", n),
            RuleValue::Text(s) => write!(f, "{:?}", s),
            RuleValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Configuration of a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Severity of a violation.
    pub level: Severity,

    /// Applicability of the rule condition.
    #[serde(default)]
    pub when: Applicability,

    /// Rule-specific parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RuleValue>,
}

impl RuleConfig {
    /// Create a rule configuration without a parameter.
    pub fn new(level: Severity, when: Applicability) -> Self {
        Self {
            level,
            when,
            value: None,
        }
    }

    /// Set the rule parameter.
    pub fn with_value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Whether the rule is enabled.
    pub fn is_enabled(&self) -> bool {
        self.level != Severity::Off
    }
}

/// Rule name to rule configuration, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable(BTreeMap<String, RuleConfig>);

impl RuleTable {
    /// Create an empty rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a rule.
    pub fn insert(&mut self, name: impl Into<String>, rule: RuleConfig) {
        self.0.insert(name.into(), rule);
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, rule: RuleConfig) -> Self {
        self.insert(name, rule);
        self
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&RuleConfig> {
        self.0.get(name)
    }

    /// Iterate over all rules in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, RuleConfig> {
        self.0.iter()
    }

    /// Iterate over rules whose severity is not `off`.
    pub fn enabled(&self) -> impl Iterator<Item = (&String, &RuleConfig)> {
        self.0.iter().filter(|(_, rule)| rule.is_enabled())
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlay another table on this one; entries of `overlay` replace
    /// entries with the same name.
    pub fn overlay(mut self, overlay: RuleTable) -> Self {
        self.0.extend(overlay.0);
        self
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = (&'a String, &'a RuleConfig);
    type IntoIter = btree_map::Iter<'a, String, RuleConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PolicyConfig::default();
        assert!(config.extends_defaults);
        assert!(!config.default_ignores);
        assert!(config.fail_on_warnings);
        assert!(config.rules.get("header-max-length").is_some());
    }

    #[test]
    fn test_severity_accepts_names_and_levels() {
        let rule: RuleConfig = toml::from_str("level = \"warn\"").unwrap();
        assert_eq!(rule.level, Severity::Warning);

        let rule: RuleConfig = toml::from_str("level = 2\nwhen = \"never\"").unwrap();
        assert_eq!(rule.level, Severity::Error);
        assert_eq!(rule.when, Applicability::Never);

        assert!(toml::from_str::<RuleConfig>("level = 3").is_err());
        assert!(toml::from_str::<RuleConfig>("level = \"fatal\"").is_err());

        assert_eq!(Severity::try_from(SeverityRepr::Level(1)), Ok(Severity::Warning));
        assert_eq!(
            Severity::try_from(SeverityRepr::Name("OFF".to_string())),
            Ok(Severity::Off)
        );
    }

    #[test]
    fn test_rule_value_shapes() {
        let rule: RuleConfig = toml::from_str("level = \"error\"\nvalue = 72").unwrap();
        assert_eq!(rule.value.and_then(|v| v.as_length()), Some(72));

        let rule: RuleConfig = toml::from_str("level = \"error\"\nvalue = \".\"").unwrap();
        assert_eq!(rule.value.as_ref().and_then(|v| v.as_text()), Some("."));

        let rule: RuleConfig =
            toml::from_str("level = \"error\"\nvalue = [\"feat\", \"fix\"]").unwrap();
        assert_eq!(rule.value.unwrap().as_list(), vec!["feat", "fix"]);
    }

    #[test]
    fn test_applicability_expect() {
        assert!(Applicability::Always.expect(true));
        assert!(!Applicability::Always.expect(false));
        assert!(Applicability::Never.expect(false));
    }

    #[test]
    fn test_rule_table_overlay() {
        let base = RuleTable::new()
            .with("a", RuleConfig::new(Severity::Error, Applicability::Always))
            .with("b", RuleConfig::new(Severity::Warning, Applicability::Always));
        let overlay =
            RuleTable::new().with("b", RuleConfig::new(Severity::Off, Applicability::Always));

        let merged = base.overlay(overlay);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("b").map(|r| r.level), Some(Severity::Off));
        assert_eq!(merged.enabled().count(), 1);
    }

    #[test]
    fn test_config_serialization() {
        let config = PolicyConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("fail_on_warnings"));
        assert!(toml_str.contains("type-enum"));
    }
}
