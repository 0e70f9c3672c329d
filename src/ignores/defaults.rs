// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Machine-generated messages skipped when `default_ignores` is enabled.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DEFAULT_PATTERNS: Vec<Regex> = [
        r"(?m)^((Merge pull request)|(Merge (.*?) into (.*?)|(Merge branch (.*?)))(?:\r?\n)*$)",
        r"(?m)^(Merge tag (.*?))(?:\r?\n)*$",
        r"^(R|r)evert (.*)",
        r"^(amend|fixup|squash)!",
        r"^(Merged (.*?)(in|into) (.*))",
        r"^Merge remote-tracking branch(\s*)(.*)",
        r"^Automatic merge(.*)",
        r"^Auto-merged (.*?) into (.*)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
}

/// Whether the message matches one of the default ignore patterns.
pub fn is_default_ignored(message: &str) -> bool {
    DEFAULT_PATTERNS.iter().any(|re| re.is_match(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_messages() {
        assert!(is_default_ignored("Merge pull request #12 from org/branch"));
        assert!(is_default_ignored("Merge branch 'main' into feature"));
        assert!(is_default_ignored("Merge tag 'v1.0.0'"));
        assert!(is_default_ignored("Merge remote-tracking branch 'origin/main'"));
        assert!(is_default_ignored("Auto-merged a into b"));
    }

    #[test]
    fn test_revert_and_fixup() {
        assert!(is_default_ignored("Revert \"feat: x\""));
        assert!(is_default_ignored("fixup! fix: typo"));
        assert!(is_default_ignored("squash! feat: x"));
    }

    #[test]
    fn test_regular_messages_not_ignored() {
        assert!(!is_default_ignored("feat(api): add merge endpoint"));
        assert!(!is_default_ignored("fix: reverting is hard"));
    }
}
