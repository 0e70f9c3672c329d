// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module provides the built-in rules, the plugin mechanism for
//! custom rules, and the engine that evaluates a rule table against
//! commit messages.

mod builtin;
pub mod case;
mod engine;
pub mod plugin;
mod registry;
mod validator;

pub use builtin::{builtin_rules, FnRule, Rule, RuleFn, RuleOutcome, ValueKind};
pub use engine::RuleEngine;
pub use plugin::{check_forbidden_characters, function_rules_plugin, Plugin};
pub use registry::RuleRegistry;
pub use validator::{LintIssue, LintReport};
