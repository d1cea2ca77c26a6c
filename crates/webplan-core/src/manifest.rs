//! `package.json` loading.
//!
//! Only the project name is needed: it titles the generated HTML page and
//! names the WASM package output.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Manifest file name, relative to the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// The parts of `package.json` the plan depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectManifest {
    pub name: String,
}

#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    name: Option<String>,
}

impl ProjectManifest {
    /// Load `<root>/package.json`.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILE);
        let source = std::fs::read_to_string(&path).map_err(|source| Error::ManifestRead {
            path: path.clone(),
            source,
        })?;
        Self::parse(&source, &path)
    }

    /// Parse manifest source. `path` is only used for error messages.
    pub fn parse(source: &str, path: &Path) -> Result<Self> {
        let raw: RawManifest =
            serde_json::from_str(source).map_err(|source| Error::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;

        match raw.name.map(|n| n.trim().to_string()) {
            Some(name) if !name.is_empty() => Ok(Self { name }),
            _ => Err(Error::ManifestName {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name() {
        let manifest =
            ProjectManifest::parse(r#"{"name": "cube-viewer", "version": "0.1.0"}"#, Path::new("package.json"))
                .unwrap();
        assert_eq!(manifest.name, "cube-viewer");
    }

    #[test]
    fn test_missing_name() {
        let err = ProjectManifest::parse(r#"{"version": "0.1.0"}"#, Path::new("package.json"))
            .unwrap_err();
        assert!(matches!(err, Error::ManifestName { .. }));
    }

    #[test]
    fn test_blank_name() {
        let err = ProjectManifest::parse(r#"{"name": "  "}"#, Path::new("package.json"))
            .unwrap_err();
        assert!(matches!(err, Error::ManifestName { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = ProjectManifest::parse("{ name: ", Path::new("package.json")).unwrap_err();
        assert!(matches!(err, Error::ManifestParse { .. }));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), r#"{"name":"viewer"}"#).unwrap();

        let manifest = ProjectManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.name, "viewer");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectManifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ManifestRead { .. }));
        assert_eq!(err.code(), "MANIFEST_READ");
    }
}
