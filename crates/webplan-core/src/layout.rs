//! Filesystem contract checks for a resolved plan.
//!
//! Resolution never touches the disk. These checks run afterwards so a
//! missing file is reported before the engine trips over it.

use crate::plan::BuildPlan;
use crate::plugins::PluginEntry;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Stable issue codes.
pub mod codes {
    pub const ENTRY_MISSING: &str = "ENTRY_MISSING";
    pub const TEMPLATE_MISSING: &str = "TEMPLATE_MISSING";
    pub const CRATE_DIR_MISSING: &str = "CRATE_DIR_MISSING";
    pub const WATCH_DIR_MISSING: &str = "WATCH_DIR_MISSING";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutIssue {
    pub code: &'static str,
    pub message: String,
    pub path: PathBuf,
}

impl LayoutIssue {
    fn new(code: &'static str, what: &str, path: &Path) -> Self {
        Self {
            code,
            message: format!("{what} not found: {}", path.display()),
            path: path.to_path_buf(),
        }
    }
}

/// Check every path the plan reads from. Returns issues in plan order.
#[must_use]
pub fn check(plan: &BuildPlan) -> Vec<LayoutIssue> {
    let mut issues = Vec::new();

    for entry in plan.entry.values() {
        if !entry.is_file() {
            issues.push(LayoutIssue::new(codes::ENTRY_MISSING, "Entry file", entry));
        }
    }

    for plugin in &plan.plugins {
        match plugin {
            PluginEntry::Html(html) if !html.template.is_file() => {
                issues.push(LayoutIssue::new(
                    codes::TEMPLATE_MISSING,
                    "HTML template",
                    &html.template,
                ));
            }
            PluginEntry::WasmPack(wasm) => {
                if !wasm.crate_directory.is_dir() {
                    issues.push(LayoutIssue::new(
                        codes::CRATE_DIR_MISSING,
                        "WASM crate directory",
                        &wasm.crate_directory,
                    ));
                }
                for dir in &wasm.watch_directories {
                    if !dir.is_dir() {
                        issues.push(LayoutIssue::new(
                            codes::WATCH_DIR_MISSING,
                            "WASM watch directory",
                            dir,
                        ));
                    }
                }
            }
            _ => {}
        }
    }

    issues
}
