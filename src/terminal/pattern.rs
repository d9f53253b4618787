//! Whole-word target matching against full command lines

use regex::Regex;

use super::error::PatternError;

/// An application name to look for among descendant command lines.
///
/// The name is matched literally: it must start at a word boundary and be
/// followed by whitespace or the end of the line. `git` therefore matches
/// `git status` and `/usr/bin/git` but not `github-copilot` or `mygit`.
/// Matching is case-sensitive.
///
/// The leading boundary is a regex `\b`, so a name that starts with a
/// non-word character (`.net`, `@scope/cli`) only matches right after a
/// word character: `.net` matches `app.net run` but not `.net run` or
/// `dotnet run .net`. Prefer names that start with a letter or digit.
#[derive(Debug, Clone)]
pub struct TargetPattern {
    name: String,
    regex: Regex,
}

impl TargetPattern {
    pub fn new(name: &str) -> Result<Self, PatternError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PatternError::Empty);
        }

        let regex = Regex::new(&format!(r"\b{}(?:\s|$)", regex::escape(name))).map_err(
            |source| PatternError::Invalid {
                name: name.to_string(),
                source,
            },
        )?;

        Ok(Self {
            name: name.to_string(),
            regex,
        })
    }

    /// Build patterns from raw names, skipping blank entries
    pub fn parse_all<I, S>(names: I) -> Result<Vec<Self>, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter(|n| !n.as_ref().trim().is_empty())
            .map(|n| Self::new(n.as_ref()))
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_match(&self, command_line: &str) -> bool {
        self.regex.is_match(command_line)
    }
}

impl PartialEq for TargetPattern {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TargetPattern {}

impl std::fmt::Display for TargetPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
