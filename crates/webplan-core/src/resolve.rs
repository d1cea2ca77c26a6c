//! Module resolution settings.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Extensions tried, in order, for extensionless imports.
pub const EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx", ".json", ".css", ".scss"];

/// Platform built-ins that have no browser counterpart.
pub const DISABLED_BUILTINS: &[&str] = &["fs", "path", "crypto"];

/// Replacement for a module the browser target cannot provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// Resolve to an empty module (`false`).
    Disabled,
    /// Resolve to another module.
    Module(String),
}

impl Serialize for Fallback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Module(target) => serializer.serialize_str(target),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveConfig {
    pub alias: BTreeMap<String, String>,
    pub extensions: Vec<String>,
    pub fallback: BTreeMap<String, Fallback>,
}

impl ResolveConfig {
    /// Browser-target resolution: no aliases, built-ins disabled.
    #[must_use]
    pub fn browser() -> Self {
        Self {
            alias: BTreeMap::new(),
            extensions: EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            fallback: DISABLED_BUILTINS
                .iter()
                .map(|m| ((*m).to_string(), Fallback::Disabled))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_disabled(&self, module: &str) -> bool {
        matches!(self.fallback.get(module), Some(Fallback::Disabled))
    }
}
