// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule lookup table.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{ConfigError, CplError, Result};

use super::builtin::{builtin_rules, Rule};
use super::plugin::{function_rules_plugin, Plugin};

/// Name to rule lookup table.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: BTreeMap<String, Arc<dyn Rule>>,
    plugins: Vec<&'static str>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in rules only.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for rule in builtin_rules() {
            registry.rules.insert(rule.name().to_string(), Arc::new(rule));
        }
        registry
    }

    /// Built-in rules plus the local function-rules plugin.
    pub fn standard() -> Result<Self> {
        let mut registry = Self::with_builtins();
        registry.register_plugin(function_rules_plugin())?;
        Ok(registry)
    }

    /// Register a single rule; names must be unique.
    pub fn register(&mut self, rule: Arc<dyn Rule>) -> Result<()> {
        let name = rule.name().to_string();
        if self.rules.contains_key(&name) {
            return Err(CplError::Config(ConfigError::DuplicateRule { name }));
        }
        self.rules.insert(name, rule);
        Ok(())
    }

    /// Register every rule of a plugin.
    pub fn register_plugin(&mut self, plugin: Plugin) -> Result<()> {
        tracing::debug!(
            "Registering plugin '{}' with {} rule(s)",
            plugin.namespace,
            plugin.rules.len()
        );
        for rule in plugin.rules {
            self.register(Arc::new(rule))?;
        }
        self.plugins.push(plugin.namespace);
        Ok(())
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Rule>> {
        self.rules.get(name)
    }

    /// Whether a rule with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Namespaces of the registered plugins.
    pub fn plugins(&self) -> &[&'static str] {
        &self.plugins
    }
}
