//! Plugins registered with the build engine, in registration order.

use crate::mode::BuildMode;
use crate::output::FilenameTemplate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where an injected global comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProvideSource {
    /// Default export of a module.
    Module(String),
    /// Named export of a module, serialized as `[module, export]`.
    Export(String, String),
}

/// Free identifiers rewritten into imports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvideOptions {
    pub symbols: BTreeMap<String, ProvideSource>,
}

impl ProvideOptions {
    /// Browser shims for `process` and `Buffer`.
    #[must_use]
    pub fn node_globals() -> Self {
        let mut symbols = BTreeMap::new();
        symbols.insert(
            "process".to_string(),
            ProvideSource::Module("process/browser.js".to_string()),
        );
        symbols.insert(
            "Buffer".to_string(),
            ProvideSource::Export("buffer".to_string(), "Buffer".to_string()),
        );
        Self { symbols }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlOptions {
    pub title: String,
    pub template: PathBuf,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssExtractOptions {
    pub filename: FilenameTemplate,
    pub chunk_filename: FilenameTemplate,
}

/// `wasm-pack` packaging of the Rust crate next to the web project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasmPackOptions {
    pub crate_directory: PathBuf,
    pub watch_directories: Vec<PathBuf>,
    pub out_dir: PathBuf,
    pub out_name: String,
    /// `development` builds debug, `production` builds release.
    pub force_mode: BuildMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCheckOptions {
    /// Report type errors without blocking the compilation.
    #[serde(rename = "async")]
    pub run_async: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginEntry {
    Provide(ProvideOptions),
    HotModuleReplacement,
    Html(HtmlOptions),
    CssExtract(CssExtractOptions),
    WasmPack(WasmPackOptions),
    ForkTsChecker(TypeCheckOptions),
}

impl PluginEntry {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Provide(_) => "provide",
            Self::HotModuleReplacement => "hot-module-replacement",
            Self::Html(_) => "html",
            Self::CssExtract(_) => "css-extract",
            Self::WasmPack(_) => "wasm-pack",
            Self::ForkTsChecker(_) => "fork-ts-checker",
        }
    }
}
