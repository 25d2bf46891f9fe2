//! Named-group pattern matching for filenames.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;

use crate::error::PatternError;

/// Group name → captured substring, ordered by group name.
///
/// Every named group of the pattern is present; groups that did not take
/// part in the match map to an empty string.
pub type GroupValues = BTreeMap<String, String>;

/// A compiled regular expression with named capture groups.
#[derive(Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        if source.is_empty() {
            return Err(PatternError::Empty);
        }
        let regex = Regex::new(source)?;
        Ok(Self { regex })
    }

    /// The original regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Names of all named groups, in the order they appear in the pattern.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.regex.capture_names().flatten()
    }

    /// Match `filename` and extract its named groups.
    ///
    /// Returns `None` when the pattern does not match at all; the caller
    /// skips such files.
    pub fn captures(&self, filename: &str) -> Option<GroupValues> {
        let caps = self.regex.captures(filename)?;
        let values = self
            .group_names()
            .map(|name| {
                let value = caps.name(name).map(|m| m.as_str()).unwrap_or("");
                (name.to_string(), value.to_string())
            })
            .collect();
        Some(values)
    }
}

impl fmt::Debug for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NamePattern").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
#[path = "tests/pattern_tests.rs"]
mod tests;
