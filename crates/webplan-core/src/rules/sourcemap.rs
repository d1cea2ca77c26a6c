//! Source-map URL filtering for the pre-stage extraction rules.

use serde::Serialize;

/// Dependency whose embedded source maps are never extracted.
pub const EXCLUDED_DEPENDENCY: &str = "monaco-editor";

/// Decides whether a `sourceMappingURL` reference is followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceMapFilter {
    exclude: String,
}

impl SourceMapFilter {
    #[must_use]
    pub fn new(dependency: impl Into<String>) -> Self {
        Self {
            exclude: dependency.into(),
        }
    }

    #[must_use]
    pub fn excluded(&self) -> &str {
        &self.exclude
    }

    /// `false` (suppress) when the map URL or the resource path mentions the
    /// excluded dependency, `true` (keep) otherwise.
    #[must_use]
    pub fn keep(&self, url: &str, resource_path: &str) -> bool {
        !(resource_path.contains(&self.exclude) || url.contains(&self.exclude))
    }
}

impl Default for SourceMapFilter {
    fn default() -> Self {
        Self::new(EXCLUDED_DEPENDENCY)
    }
}
