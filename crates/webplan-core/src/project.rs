//! Project layout: where the plan expects sources and writes artifacts.

use crate::error::Result;
use crate::manifest::ProjectManifest;
use std::path::{Path, PathBuf};

/// Script entry, relative to the project root.
pub const ENTRY_FILE: &str = "src/main.tsx";
/// HTML template, relative to the project root.
pub const TEMPLATE_FILE: &str = "index.html";
/// Output directory, relative to the project root.
pub const OUTPUT_DIR: &str = "dist";
/// WASM package output directory, relative to the project root.
pub const WASM_OUT_DIR: &str = "pkg";

/// Fixed filesystem layout anchored at a project root.
///
/// The web project lives inside the Rust crate it packages: the crate is the
/// root's parent directory and its sources are `../src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// `root` should be absolute; the CLI canonicalizes it.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn entry(&self) -> PathBuf {
        self.root.join(ENTRY_FILE)
    }

    #[must_use]
    pub fn template(&self) -> PathBuf {
        self.root.join(TEMPLATE_FILE)
    }

    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    /// Directory of the Rust crate packaged to WASM.
    #[must_use]
    pub fn crate_dir(&self) -> PathBuf {
        match self.root.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => self.root.join(".."),
        }
    }

    /// Directories whose changes trigger a WASM rebuild.
    #[must_use]
    pub fn wasm_watch_dirs(&self) -> Vec<PathBuf> {
        vec![self.crate_dir().join("src")]
    }

    #[must_use]
    pub fn wasm_out_dir(&self) -> PathBuf {
        self.root.join(WASM_OUT_DIR)
    }
}

/// A project ready for resolution: its layout and its manifest name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub layout: ProjectLayout,
    pub name: String,
}

impl Project {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            layout: ProjectLayout::new(root),
            name: name.into(),
        }
    }

    /// Read the manifest under `root` and build the project from it.
    pub fn load(root: &Path) -> Result<Self> {
        let manifest = ProjectManifest::load(root)?;
        Ok(Self::new(root, manifest.name))
    }
}
