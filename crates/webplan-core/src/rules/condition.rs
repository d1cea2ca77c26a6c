//! File-pattern conditions for loader rules.

use regex_lite::Regex;
use serde::{Serialize, Serializer};

/// A compiled resource pattern that remembers its source text.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern.
    pub fn new(source: &str) -> Result<Self, regex_lite::Error> {
        Ok(Self {
            source: source.to_string(),
            regex: Regex::new(source)?,
        })
    }

    /// Compile one of the fixed patterns shipped with the default rule set.
    ///
    /// # Panics
    /// Panics if `source` is not a valid pattern. Only literals covered by the
    /// rule set tests go through here.
    pub(crate) fn builtin(source: &'static str) -> Self {
        Self::new(source).expect("built-in rule pattern must compile")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn is_match(&self, resource: &str) -> bool {
        self.regex.is_match(resource)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// Which resources a rule applies to.
///
/// A resource matches when any `test` pattern matches, `include` (if set)
/// matches, and `exclude` (if set) does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCondition {
    pub test: Vec<Pattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Pattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Pattern>,
}

impl RuleCondition {
    #[must_use]
    pub fn test(pattern: Pattern) -> Self {
        Self {
            test: vec![pattern],
            include: None,
            exclude: None,
        }
    }

    #[must_use]
    pub fn include(mut self, pattern: Pattern) -> Self {
        self.include = Some(pattern);
        self
    }

    #[must_use]
    pub fn exclude(mut self, pattern: Pattern) -> Self {
        self.exclude = Some(pattern);
        self
    }

    /// Check a resource path. Backslashes are treated as `/`.
    #[must_use]
    pub fn matches(&self, resource: &str) -> bool {
        let resource = normalize(resource);

        self.test.iter().any(|p| p.is_match(&resource))
            && self.include.iter().all(|p| p.is_match(&resource))
            && !self.exclude.as_ref().is_some_and(|p| p.is_match(&resource))
    }
}

fn normalize(resource: &str) -> String {
    resource.replace('\\', "/")
}
