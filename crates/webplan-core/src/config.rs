use crate::error::Result;
use crate::mode::BuildMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for the webplan CLI.
///
/// The mode is kept as the raw flag or environment value and only parsed when
/// a command actually resolves a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Project root (the directory holding `package.json`).
    pub cwd: PathBuf,

    /// Whether to emit JSON output.
    pub json: bool,

    /// Raw `--mode` / `NODE_ENV` value, unvalidated.
    pub mode: Option<String>,
}

impl Config {
    #[must_use]
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Option<String>) -> Self {
        self.mode = mode;
        self
    }

    /// Parse the configured mode. Absent means production.
    pub fn build_mode(&self) -> Result<BuildMode> {
        BuildMode::from_optional(self.mode.as_deref())
    }
}
