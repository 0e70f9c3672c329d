// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{CplError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::default::default_rule_table;
use super::schema::PolicyConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cpl.toml", ".cpl.toml", ".config/cpl.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = first_existing(&current) {
            return Some(found);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(found) = first_existing(&home) {
            return Some(found);
        }
    }

    // XDG config directory
    let xdg = dirs::config_dir()?.join("cpl").join("config.toml");
    xdg.exists().then_some(xdg)
}

fn first_existing(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<PolicyConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(PolicyConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<PolicyConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CplError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CplError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// With `extends_defaults` set, the parsed rules are overlaid on the
/// built-in rule table.
pub fn parse_config(content: &str) -> Result<PolicyConfig> {
    let parsed: PolicyConfig = toml::from_str(content).map_err(|e| {
        CplError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    if parsed.extends_defaults {
        Ok(merge_configs(
            PolicyConfig {
                rules: default_rule_table(),
                ..parsed.clone()
            },
            parsed,
        ))
    } else {
        Ok(parsed)
    }
}

/// Merge two configurations, with the overlay taking precedence.
///
/// Rules are merged by name; every other setting comes from the overlay.
pub fn merge_configs(base: PolicyConfig, overlay: PolicyConfig) -> PolicyConfig {
    PolicyConfig {
        extends_defaults: overlay.extends_defaults,
        default_ignores: overlay.default_ignores,
        fail_on_warnings: overlay.fail_on_warnings,
        rules: base.rules.overlay(overlay.rules),
        ui: overlay.ui,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RuleValue, Severity};
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.rules, default_rule_table());
        assert!(config.fail_on_warnings);
    }

    #[test]
    fn test_parse_overlays_defaults() {
        let toml = r#"
fail_on_warnings = false

[rules.subject-max-length]
level = "warning"
value = 60

[rules.forbidden-characters]
level = "off"
"#;
        let config = parse_config(toml).unwrap();
        assert!(!config.fail_on_warnings);

        let subject = config.rules.get("subject-max-length").unwrap();
        assert_eq!(subject.level, Severity::Warning);
        assert_eq!(subject.value, Some(RuleValue::Length(60)));
        assert!(!config.rules.get("forbidden-characters").unwrap().is_enabled());
        // untouched defaults survive
        assert!(config.rules.get("scope-enum").is_some());
    }

    #[test]
    fn test_parse_without_defaults() {
        let toml = r#"
extends_defaults = false

[rules.header-max-length]
level = "error"
value = 80
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.rules.len(), 1);
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = parse_config("[rules.type-enum]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, CplError::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config_from(Path::new("/nonexistent/cpl.toml")).unwrap_err();
        assert!(matches!(err, CplError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".cpl.toml"), "default_ignores = true\n").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".cpl.toml"));

        let config = load_config_from(&found).unwrap();
        assert!(config.default_ignores);
    }

    #[test]
    fn test_merge_configs() {
        let base = PolicyConfig::default();
        let overlay = PolicyConfig {
            default_ignores: true,
            rules: crate::config::RuleTable::new(),
            ..PolicyConfig::default()
        };
        let merged = merge_configs(base, overlay);

        assert!(merged.default_ignores);
        assert_eq!(merged.rules, default_rule_table());
    }
}
