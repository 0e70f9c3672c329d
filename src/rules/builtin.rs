// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::commit::CommitMessageParts;
use crate::config::{Applicability, RuleValue};

use super::case::TextCase;

/// Outcome of evaluating one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Whether the message satisfies the rule.
    pub valid: bool,
    /// Advisory shown when the rule fails.
    pub message: Option<String>,
}

impl RuleOutcome {
    /// A passing outcome.
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing outcome with an advisory.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Pass or fail depending on `valid`.
    pub fn check(valid: bool, message: impl FnOnce() -> String) -> Self {
        if valid {
            Self::pass()
        } else {
            Self::fail(message())
        }
    }
}

/// Shape of the parameter a rule expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The rule takes no parameter.
    Unused,
    /// A non-negative length.
    Length,
    /// One string or a list of strings.
    List,
    /// One case name or a list of case names.
    Cases,
    /// An optional single string.
    OptionalText,
}

impl ValueKind {
    /// Check a configured value against the expected shape.
    pub fn validate(&self, value: Option<&RuleValue>) -> Result<(), String> {
        match (self, value) {
            (ValueKind::Unused, _) | (ValueKind::OptionalText, None) => Ok(()),
            (ValueKind::Length, Some(RuleValue::Length(_))) => Ok(()),
            (ValueKind::Length, _) => Err("expected a length".to_string()),
            (ValueKind::OptionalText, Some(RuleValue::Text(_))) => Ok(()),
            (ValueKind::OptionalText, Some(_)) => Err("expected a string".to_string()),
            (ValueKind::List, Some(RuleValue::Text(_) | RuleValue::List(_))) => Ok(()),
            (ValueKind::List, _) => Err("expected a list of strings".to_string()),
            (ValueKind::Cases, Some(value)) if !matches!(value, RuleValue::Length(_)) => {
                match value.as_list().into_iter().find(|c| c.parse::<TextCase>().is_err()) {
                    Some(unknown) => Err(format!("unknown case '{}'", unknown)),
                    None => Ok(()),
                }
            }
            (ValueKind::Cases, _) => Err("expected a case name or list of case names".to_string()),
        }
    }
}

/// Trait for rules.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check the message.
    fn check(
        &self,
        message: &CommitMessageParts,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleOutcome;

    /// Get the rule name.
    fn name(&self) -> &str;

    /// Shape of the parameter the rule expects.
    fn value_kind(&self) -> ValueKind {
        ValueKind::Unused
    }
}

/// Signature of a rule implemented as a plain function.
pub type RuleFn = fn(&CommitMessageParts, Applicability, Option<&RuleValue>) -> RuleOutcome;

/// A named rule function.
#[derive(Clone, Copy)]
pub struct FnRule {
    name: &'static str,
    kind: ValueKind,
    func: RuleFn,
}

impl FnRule {
    /// Create a named rule from a function.
    pub const fn new(name: &'static str, kind: ValueKind, func: RuleFn) -> Self {
        Self { name, kind, func }
    }
}

impl std::fmt::Debug for FnRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Rule for FnRule {
    fn check(
        &self,
        message: &CommitMessageParts,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> RuleOutcome {
        (self.func)(message, when, value)
    }

    fn name(&self) -> &str {
        self.name
    }

    fn value_kind(&self) -> ValueKind {
        self.kind
    }
}

/// All built-in rules.
pub fn builtin_rules() -> Vec<FnRule> {
    use ValueKind::*;

    vec![
        FnRule::new("body-leading-blank", Unused, body_leading_blank),
        FnRule::new("body-max-line-length", Length, body_max_line_length),
        FnRule::new("footer-leading-blank", Unused, footer_leading_blank),
        FnRule::new("footer-max-line-length", Length, footer_max_line_length),
        FnRule::new("header-max-length", Length, header_max_length),
        FnRule::new("header-trim", Unused, header_trim),
        FnRule::new("scope-case", Cases, scope_case),
        FnRule::new("scope-enum", List, scope_enum),
        FnRule::new("subject-case", Cases, subject_case),
        FnRule::new("subject-empty", Unused, subject_empty),
        FnRule::new("subject-full-stop", OptionalText, subject_full_stop),
        FnRule::new("subject-max-length", Length, subject_max_length),
        FnRule::new("type-case", Cases, type_case),
        FnRule::new("type-empty", Unused, type_empty),
        FnRule::new("type-enum", List, type_enum),
    ]
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn max_length(field: &str, text: Option<&str>, value: Option<&RuleValue>) -> RuleOutcome {
    let (Some(text), Some(max)) = (text, value.and_then(RuleValue::as_length)) else {
        return RuleOutcome::pass();
    };
    let len = char_len(text);
    RuleOutcome::check(len <= max, || {
        format!(
            "{} must not be longer than {} characters, current length is {}",
            field, max, len
        )
    })
}

fn max_line_length(field: &str, text: Option<&str>, value: Option<&RuleValue>) -> RuleOutcome {
    let (Some(text), Some(max)) = (text, value.and_then(RuleValue::as_length)) else {
        return RuleOutcome::pass();
    };
    let valid = text.lines().all(|line| char_len(line) <= max);
    RuleOutcome::check(valid, || {
        format!("{}'s lines must not be longer than {} characters", field, max)
    })
}

fn enumeration(field: &str, items: &[&str], when: Applicability, value: Option<&RuleValue>) -> RuleOutcome {
    let Some(value) = value else {
        return RuleOutcome::pass();
    };
    let allowed = value.as_list();
    let valid = items
        .iter()
        .all(|item| when.expect(allowed.contains(item)));
    RuleOutcome::check(valid, || {
        let negated = if when == Applicability::Never { "not " } else { "" };
        format!("{} must {}be one of [{}]", field, negated, allowed.join(", "))
    })
}

fn case(field: &str, text: Option<&str>, when: Applicability, value: Option<&RuleValue>) -> RuleOutcome {
    let (Some(text), Some(value)) = (text, value) else {
        return RuleOutcome::pass();
    };
    // only text starting with a letter has a case
    if !text.starts_with(char::is_alphabetic) {
        return RuleOutcome::pass();
    }
    let cases: Vec<TextCase> = value
        .as_list()
        .into_iter()
        .filter_map(|c| c.parse().ok())
        .collect();
    let any = cases.iter().any(|c| c.matches(text));
    RuleOutcome::check(when.expect(any), || {
        let names: Vec<&str> = cases.iter().map(TextCase::as_str).collect();
        let negated = if when == Applicability::Never { "not " } else { "" };
        format!("{} must {}be {}", field, negated, names.join(", "))
    })
}

fn empty(field: &str, text: Option<&str>, when: Applicability) -> RuleOutcome {
    let is_empty = text.map_or(true, |t| t.trim().is_empty());
    RuleOutcome::check(when.expect(is_empty), || match when {
        Applicability::Always => format!("{} must be empty", field),
        Applicability::Never => format!("{} may not be empty", field),
    })
}

fn body_leading_blank(
    message: &CommitMessageParts,
    when: Applicability,
    _value: Option<&RuleValue>,
) -> RuleOutcome {
    if message.body.is_none() {
        return RuleOutcome::pass();
    }
    RuleOutcome::check(when.expect(message.body_leading_blank), || match when {
        Applicability::Always => "body must have leading blank line".to_string(),
        Applicability::Never => "body must not have leading blank line".to_string(),
    })
}

fn footer_leading_blank(
    message: &CommitMessageParts,
    when: Applicability,
    _value: Option<&RuleValue>,
) -> RuleOutcome {
    if message.footer.is_none() {
        return RuleOutcome::pass();
    }
    RuleOutcome::check(when.expect(message.footer_leading_blank), || match when {
        Applicability::Always => "footer must have leading blank line".to_string(),
        Applicability::Never => "footer must not have leading blank line".to_string(),
    })
}

fn body_max_line_length(
    message: &CommitMessageParts,
    _when: Applicability,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    max_line_length("body", message.body.as_deref(), value)
}

fn footer_max_line_length(
    message: &CommitMessageParts,
    _when: Applicability,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    max_line_length("footer", message.footer.as_deref(), value)
}

fn header_max_length(
    message: &CommitMessageParts,
    _when: Applicability,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    max_length("header", Some(message.header.as_str()), value)
}

fn subject_max_length(
    message: &CommitMessageParts,
    _when: Applicability,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    max_length("subject", message.subject.as_deref(), value)
}

fn header_trim(
    message: &CommitMessageParts,
    _when: Applicability,
    _value: Option<&RuleValue>,
) -> RuleOutcome {
    let header = &message.header;
    RuleOutcome::check(header.trim() == header.as_str(), || {
        "header must not be surrounded by whitespace".to_string()
    })
}

fn scope_case(
    message: &CommitMessageParts,
    when: Applicability,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    message
        .scopes()
        .into_iter()
        .map(|scope| case("scope", Some(scope), when, value))
        .find(|outcome| !outcome.valid)
        .unwrap_or_else(RuleOutcome::pass)
}

fn scope_enum(
    message: &CommitMessageParts,
    when: Applicability,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    enumeration("scope", &message.scopes(), when, value)
}

fn subject_case(
    message: &CommitMessageParts,
    when: Applicability,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    case("subject", message.subject.as_deref(), when, value)
}

fn subject_empty(
    message: &CommitMessageParts,
    when: Applicability,
    _value: Option<&RuleValue>,
) -> RuleOutcome {
    empty("subject", message.subject.as_deref(), when)
}

fn subject_full_stop(
    message: &CommitMessageParts,
    when: Applicability,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    let Some(subject) = message.subject.as_deref() else {
        return RuleOutcome::pass();
    };
    let stop = value.and_then(RuleValue::as_text).unwrap_or(".");
    RuleOutcome::check(when.expect(subject.ends_with(stop)), || match when {
        Applicability::Always => "subject must end with full stop".to_string(),
        Applicability::Never => "subject may not end with full stop".to_string(),
    })
}

fn type_case(
    message: &CommitMessageParts,
    when: Applicability,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    case("type", message.commit_type.as_deref(), when, value)
}

fn type_empty(
    message: &CommitMessageParts,
    when: Applicability,
    _value: Option<&RuleValue>,
) -> RuleOutcome {
    empty("type", message.commit_type.as_deref(), when)
}

fn type_enum(
    message: &CommitMessageParts,
    when: Applicability,
    value: Option<&RuleValue>,
) -> RuleOutcome {
    let types: Vec<&str> = message.commit_type.as_deref().into_iter().collect();
    enumeration("type", &types, when, value)
}
