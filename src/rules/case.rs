// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Text case classification for the `*-case` rules.

/// A named text case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCase {
    Lower,
    Upper,
    Camel,
    Kebab,
    Pascal,
    Sentence,
    Snake,
    Start,
}

impl TextCase {
    /// Get the configuration name of the case.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextCase::Lower => "lower-case",
            TextCase::Upper => "upper-case",
            TextCase::Camel => "camel-case",
            TextCase::Kebab => "kebab-case",
            TextCase::Pascal => "pascal-case",
            TextCase::Sentence => "sentence-case",
            TextCase::Snake => "snake-case",
            TextCase::Start => "start-case",
        }
    }

    /// Whether the text is written in this case.
    pub fn matches(&self, text: &str) -> bool {
        let has_separator = text.contains(|c: char| c.is_whitespace() || c == '-' || c == '_');
        let first_upper = text.chars().next().is_some_and(char::is_uppercase);

        match self {
            TextCase::Lower => text == text.to_lowercase(),
            TextCase::Upper => text == text.to_uppercase(),
            TextCase::Camel => !has_separator && !first_upper,
            TextCase::Pascal => !has_separator && first_upper,
            TextCase::Kebab => {
                text == text.to_lowercase() && !text.contains(|c: char| c.is_whitespace() || c == '_')
            }
            TextCase::Snake => {
                text == text.to_lowercase() && !text.contains(|c: char| c.is_whitespace() || c == '-')
            }
            TextCase::Sentence => {
                let mut chars = text.chars();
                chars.next().is_some_and(char::is_uppercase) && {
                    let rest: String = chars.collect();
                    rest == rest.to_lowercase()
                }
            }
            TextCase::Start => text
                .split_whitespace()
                .all(|word| word.chars().next().is_some_and(|c| !c.is_lowercase())),
        }
    }
}

impl std::str::FromStr for TextCase {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower-case" | "lowercase" => Ok(TextCase::Lower),
            "upper-case" | "uppercase" => Ok(TextCase::Upper),
            "camel-case" => Ok(TextCase::Camel),
            "kebab-case" => Ok(TextCase::Kebab),
            "pascal-case" => Ok(TextCase::Pascal),
            "sentence-case" | "sentencecase" => Ok(TextCase::Sentence),
            "snake-case" => Ok(TextCase::Snake),
            "start-case" => Ok(TextCase::Start),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TextCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
