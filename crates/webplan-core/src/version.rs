use serde::Serialize;
use std::fmt;

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build metadata reported by `webplan version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_hash: Option<&'static str>,
}

impl VersionInfo {
    #[must_use]
    pub fn current() -> Self {
        Self {
            version: VERSION,
            git_hash: option_env!("WEBPLAN_BUILD_GIT_HASH").filter(|h| !h.is_empty()),
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "webplan {}", self.version)?;
        if let Some(hash) = self.git_hash {
            write!(f, " ({hash})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_hash() {
        let info = VersionInfo {
            version: "1.2.3",
            git_hash: Some("abc123"),
        };
        assert_eq!(info.to_string(), "webplan 1.2.3 (abc123)");
    }

    #[test]
    fn test_json_omits_missing_hash() {
        let info = VersionInfo {
            version: "1.2.3",
            git_hash: None,
        };
        assert_eq!(info.to_string(), "webplan 1.2.3");
        assert_eq!(
            serde_json::to_value(info).unwrap(),
            serde_json::json!({ "version": "1.2.3" })
        );
    }

    #[test]
    fn test_current_uses_package_version() {
        assert_eq!(VersionInfo::current().version, VERSION);
    }
}
