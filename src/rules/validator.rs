// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint result types.

use crate::config::Severity;
use console::{style, Style};

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    /// Name of the violated rule.
    pub rule: String,
    /// Human-readable message.
    pub message: String,
    /// Severity configured for the rule.
    pub severity: Severity,
}

impl LintIssue {
    /// Whether this issue is an error (as opposed to a warning).
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let (prefix, rule_style) = if self.is_error() {
            (style("✖").red().bold(), Style::new().red())
        } else {
            (style("⚠").yellow().bold(), Style::new().yellow())
        };

        format!(
            "{} {} {}",
            prefix,
            self.message,
            rule_style.apply_to(format!("[{}]", self.rule))
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "rule": self.rule,
            "level": self.severity.as_str(),
            "message": self.message,
        })
    }
}

/// Result of linting one commit message.
#[derive(Debug, Clone)]
pub struct LintReport {
    /// The message as given.
    pub input: String,
    /// Commit SHA if linting an existing commit.
    pub commit_sha: Option<String>,
    /// Name of the ignore predicate that exempted the message.
    pub ignored_by: Option<String>,
    /// Violations with severity `error`.
    pub errors: Vec<LintIssue>,
    /// Violations with severity `warning`.
    pub warnings: Vec<LintIssue>,
    /// Whether warnings make the report invalid.
    pub fail_on_warnings: bool,
}

impl LintReport {
    /// Create an empty report.
    pub fn new(input: impl Into<String>, fail_on_warnings: bool) -> Self {
        Self {
            input: input.into(),
            commit_sha: None,
            ignored_by: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            fail_on_warnings,
        }
    }

    /// Record an issue under its severity.
    pub fn push(&mut self, issue: LintIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Off => {}
        }
    }

    /// Whether the message was exempt from linting.
    pub fn is_exempt(&self) -> bool {
        self.ignored_by.is_some()
    }

    /// Whether the message passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && !(self.fail_on_warnings && !self.warnings.is_empty())
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Print the text rendering to stdout.
    pub fn print(&self, verbose: bool) {
        let text = self.render_text(verbose);
        if !text.is_empty() {
            println!("{}", text);
        }
    }

    /// Render in text format. Valid reports render nothing unless `verbose`.
    pub fn render_text(&self, verbose: bool) -> String {
        if self.issue_count() == 0 && !verbose {
            return String::new();
        }

        let mut lines = Vec::new();

        let first_line = self.input.lines().next().unwrap_or("");
        match self.commit_sha {
            Some(ref sha) => {
                let short_sha = &sha[..7.min(sha.len())];
                lines.push(format!("{} {} {}", style("⧗").dim(), style(short_sha).cyan(), first_line));
            }
            None => lines.push(format!("{} input: {}", style("⧗").dim(), first_line)),
        }

        if let Some(ref ignore) = self.ignored_by {
            lines.push(format!("{} skipped ({})", style("↷").dim(), ignore));
            return lines.join("\n");
        }

        for issue in self.errors.iter().chain(&self.warnings) {
            lines.push(issue.format());
        }

        let status = if self.is_valid() {
            style("✔").green().bold()
        } else {
            style("✖").red().bold()
        };
        lines.push(format!(
            "{} found {} problems, {} warnings",
            status,
            self.errors.len(),
            self.warnings.len()
        ));

        lines.join("\n")
    }

    /// JSON representation of the report.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "commit": self.commit_sha,
            "input": self.input,
            "ignored_by": self.ignored_by,
            "errors": self.errors.iter().map(LintIssue::to_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(LintIssue::to_json).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(rule: &str, severity: Severity) -> LintIssue {
        LintIssue {
            rule: rule.to_string(),
            message: format!("{} failed", rule),
            severity,
        }
    }

    #[test]
    fn test_report_valid() {
        let report = LintReport::new("feat: test", true);
        assert!(report.is_valid());
        assert_eq!(report.issue_count(), 0);
        assert!(report.render_text(false).is_empty());
        assert!(report.render_text(true).contains("found 0 problems"));
    }

    #[test]
    fn test_report_with_errors() {
        let mut report = LintReport::new("test", false);
        report.push(issue("type-empty", Severity::Error));

        assert!(!report.is_valid());
        assert_eq!(report.issue_count(), 1);
        assert!(report.render_text(false).contains("[type-empty]"));
    }

    #[test]
    fn test_warnings_respect_fail_on_warnings() {
        let mut lenient = LintReport::new("x", false);
        lenient.push(issue("body-leading-blank", Severity::Warning));
        assert!(lenient.is_valid());

        let mut strict = LintReport::new("x", true);
        strict.push(issue("body-leading-blank", Severity::Warning));
        assert!(!strict.is_valid());
    }

    #[test]
    fn test_off_issues_are_dropped() {
        let mut report = LintReport::new("x", true);
        report.push(issue("header-trim", Severity::Off));
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn test_to_json() {
        let mut report = LintReport::new("bad", true);
        report.push(issue("type-empty", Severity::Error));

        let json = report.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["rule"], "type-empty");
        assert_eq!(json["errors"][0]["level"], "error");
    }
}
