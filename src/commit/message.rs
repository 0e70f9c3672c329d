// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Conventional header: `type(scope)!: subject`.
    static ref HEADER_REGEX: Regex = Regex::new(r"^(\w*)(?:\((.*)\))?(!)?: (.*)$").unwrap();

    /// A git trailer or issue reference line (`Token: value`, `Token #123`).
    static ref TRAILER_REGEX: Regex =
        Regex::new(r"^(?:BREAKING[ -]CHANGE|[A-Za-z0-9][\w-]*)(?:: | #)\S").unwrap();

    /// A breaking-change note, which always opens the footer.
    static ref BREAKING_REGEX: Regex = Regex::new(r"^BREAKING[ -]CHANGE: ").unwrap();
}

/// Everything below this line is discarded by git.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// Lines starting with this character are comments.
const COMMENT_CHAR: char = '#';

/// A commit message split into header, body and footer.
///
/// When parsed from git's message file, comment lines and everything below
/// the scissors line are excluded from every field except `raw`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessageParts {
    /// The message exactly as given.
    pub raw: String,
    /// First line.
    pub header: String,
    /// Free text between header and footer.
    pub body: Option<String>,
    /// Trailing trailers and notes.
    pub footer: Option<String>,
    /// Conventional type, if the header is conventional.
    pub commit_type: Option<String>,
    /// Conventional scope, if present.
    pub scope: Option<String>,
    /// Conventional subject, if the header is conventional.
    pub subject: Option<String>,
    /// `!` marker or a breaking-change note.
    pub is_breaking: bool,
    /// Whether a blank line separates header and body.
    pub body_leading_blank: bool,
    /// Whether a blank line precedes the footer.
    pub footer_leading_blank: bool,
}

impl CommitMessageParts {
    /// Build parts from an already split message.
    ///
    /// Empty body and footer strings are treated as absent.
    pub fn new(header: impl Into<String>, body: Option<&str>, footer: Option<&str>) -> Self {
        let header = header.into();
        let body = body.filter(|b| !b.is_empty()).map(str::to_string);
        let footer = footer.filter(|f| !f.is_empty()).map(str::to_string);

        let mut raw = header.clone();
        for part in [&body, &footer].into_iter().flatten() {
            raw.push_str("\n\n");
            raw.push_str(part);
        }

        let mut parts = Self {
            raw,
            header,
            body,
            footer,
            body_leading_blank: true,
            footer_leading_blank: true,
            ..Self::default()
        };
        parts.parse_header();
        parts
    }

    /// Parse a raw commit message, keeping every line.
    pub fn parse(raw: &str) -> Self {
        Self::parse_with(raw, false)
    }

    /// Parse a raw commit message.
    ///
    /// With `strip_comments`, lines starting with `#` and everything below
    /// the scissors line are dropped, as git does for `COMMIT_EDITMSG`.
    pub fn parse_with(raw: &str, strip_comments: bool) -> Self {
        let mut lines: Vec<&str> = if strip_comments {
            raw.lines()
                .take_while(|line| *line != SCISSORS)
                .filter(|line| !line.starts_with(COMMENT_CHAR))
                .collect()
        } else {
            raw.lines().collect()
        };

        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        let start = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .unwrap_or(lines.len());
        let lines = &lines[start..];

        let Some((header, rest)) = lines.split_first() else {
            return Self {
                raw: raw.to_string(),
                ..Self::default()
            };
        };

        let footer_start = find_footer_start(rest);
        let body = join_trimmed(&rest[..footer_start]);
        let footer = join_trimmed(&rest[footer_start..]);

        let body_leading_blank = rest.first().map_or(true, |line| line.trim().is_empty());
        let footer_leading_blank = footer_start == rest.len()
            || (footer_start > 0 && rest[footer_start - 1].trim().is_empty());

        let mut parts = Self {
            raw: raw.to_string(),
            header: header.to_string(),
            body,
            footer,
            body_leading_blank,
            footer_leading_blank,
            ..Self::default()
        };
        parts.parse_header();
        parts
    }

    fn parse_header(&mut self) {
        if let Some(captures) = HEADER_REGEX.captures(&self.header) {
            let non_empty = |i: usize| {
                captures
                    .get(i)
                    .map(|m| m.as_str().to_string())
                    .filter(|s| !s.is_empty())
            };
            self.commit_type = non_empty(1);
            self.scope = non_empty(2);
            self.subject = non_empty(4);
            self.is_breaking = captures.get(3).is_some();
        }

        if let Some(ref footer) = self.footer {
            if footer.lines().any(|line| BREAKING_REGEX.is_match(line)) {
                self.is_breaking = true;
            }
        }
    }

    /// Individual scopes; `a,b`, `a/b` and `a\b` list several.
    pub fn scopes(&self) -> Vec<&str> {
        self.scope
            .as_deref()
            .map(|scope| {
                scope
                    .split([',', '/', '\\'])
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the header follows the conventional `type(scope): subject` form.
    pub fn is_conventional(&self) -> bool {
        self.commit_type.is_some() && self.subject.is_some()
    }
}

/// Index into `rest` where the footer begins, `rest.len()` if there is none.
///
/// A paragraph opening with a breaking-change note starts the footer;
/// otherwise the last paragraph is the footer when all of its lines are
/// trailers (indented continuation lines allowed).
fn find_footer_start(rest: &[&str]) -> usize {
    let paragraphs = paragraph_starts(rest);

    if let Some(&start) = paragraphs
        .iter()
        .find(|&&start| BREAKING_REGEX.is_match(rest[start]))
    {
        return start;
    }

    match paragraphs.last() {
        Some(&start) if is_trailer_block(&rest[start..]) => start,
        _ => rest.len(),
    }
}

fn paragraph_starts(lines: &[&str]) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_paragraph = false;
    for (i, line) in lines.iter().enumerate() {
        let blank = line.trim().is_empty();
        if !blank && !in_paragraph {
            starts.push(i);
        }
        in_paragraph = !blank;
    }
    starts
}

fn is_trailer_block(lines: &[&str]) -> bool {
    let mut lines = lines.iter().take_while(|line| !line.trim().is_empty());
    match lines.next() {
        Some(first) if TRAILER_REGEX.is_match(first) => lines.all(|line| {
            TRAILER_REGEX.is_match(line) || line.starts_with(char::is_whitespace)
        }),
        _ => false,
    }
}

fn join_trimmed(lines: &[&str]) -> Option<String> {
    let text = lines.join("\n");
    let text = text.trim_matches('\n').trim_end();
    (!text.trim().is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_only() {
        let msg = CommitMessageParts::parse("feat(api): add endpoint");
        assert_eq!(msg.header, "feat(api): add endpoint");
        assert_eq!(msg.commit_type.as_deref(), Some("feat"));
        assert_eq!(msg.scope.as_deref(), Some("api"));
        assert_eq!(msg.subject.as_deref(), Some("add endpoint"));
        assert!(msg.body.is_none());
        assert!(msg.footer.is_none());
        assert!(!msg.is_breaking);
    }

    #[test]
    fn test_parse_body_and_footer() {
        let raw = "fix(sdk): handle timeouts\n\nRetry once before giving up.\nSecond line.\n\nCloses #42\nSigned-off-by: Jane Doe <jane@example.com>\n";
        let msg = CommitMessageParts::parse(raw);
        assert_eq!(
            msg.body.as_deref(),
            Some("Retry once before giving up.\nSecond line.")
        );
        assert_eq!(
            msg.footer.as_deref(),
            Some("Closes #42\nSigned-off-by: Jane Doe <jane@example.com>")
        );
        assert!(msg.body_leading_blank);
        assert!(msg.footer_leading_blank);
        assert_eq!(msg.raw, raw);
    }

    #[test]
    fn test_parse_footer_only() {
        let msg = CommitMessageParts::parse("chore: bump\n\nRefs: #7");
        assert!(msg.body.is_none());
        assert_eq!(msg.footer.as_deref(), Some("Refs: #7"));
    }

    #[test]
    fn test_parse_breaking_change_note() {
        let raw = "feat!: drop v1\n\nOld clients break.\n\nBREAKING CHANGE: v1 endpoints removed\nthe v2 api replaces them";
        let msg = CommitMessageParts::parse(raw);
        assert!(msg.is_breaking);
        assert_eq!(msg.body.as_deref(), Some("Old clients break."));
        assert!(msg
            .footer
            .as_deref()
            .unwrap()
            .starts_with("BREAKING CHANGE: v1"));
    }

    #[test]
    fn test_parse_strips_comments_and_scissors() {
        let raw = "docs: fix typo\n\n# Please enter the commit message.\n# Lines starting with '#' are ignored.\nBody line\n# ------------------------ >8 ------------------------\ndiff --git a/x b/x\n";
        let msg = CommitMessageParts::parse_with(raw, true);
        assert_eq!(msg.body.as_deref(), Some("Body line"));
        assert!(!msg.body.as_deref().unwrap().contains('\''));
        assert!(msg.raw.contains("Lines starting with '#'"));
    }

    #[test]
    fn test_parse_missing_leading_blanks() {
        let msg = CommitMessageParts::parse("fix: x\nbody right away");
        assert!(!msg.body_leading_blank);

        let msg = CommitMessageParts::parse("fix: x\nCloses #1");
        assert_eq!(msg.footer.as_deref(), Some("Closes #1"));
        assert!(!msg.footer_leading_blank);
    }

    #[test]
    fn test_parse_non_conventional() {
        let msg = CommitMessageParts::parse("Merge branch 'foo' into main");
        assert!(msg.commit_type.is_none());
        assert!(msg.subject.is_none());
        assert!(!msg.is_conventional());
    }

    #[test]
    fn test_parse_empty() {
        let msg = CommitMessageParts::parse_with("\n# only a comment\n", true);
        assert!(msg.header.is_empty());
        assert!(msg.body.is_none());
    }

    #[test]
    fn test_parse_keeps_hash_lines_by_default() {
        let raw = "fix: handle timeout\n\n#123 don't retry forever";
        let msg = CommitMessageParts::parse(raw);
        assert_eq!(msg.body.as_deref(), Some("#123 don't retry forever"));

        let stripped = CommitMessageParts::parse_with(raw, true);
        assert!(stripped.body.is_none());
    }

    #[test]
    fn test_scopes() {
        let msg = CommitMessageParts::parse("feat(api, sdk/auth): x");
        assert_eq!(msg.scopes(), vec!["api", "sdk", "auth"]);
        assert!(CommitMessageParts::parse("feat: x").scopes().is_empty());
    }

    #[test]
    fn test_new_from_parts() {
        let msg = CommitMessageParts::new("fix: simple change", Some("no specials here"), Some(""));
        assert_eq!(msg.body.as_deref(), Some("no specials here"));
        assert!(msg.footer.is_none());
        assert_eq!(msg.commit_type.as_deref(), Some("fix"));
        assert_eq!(msg.raw, "fix: simple change\n\nno specials here");
    }
}
