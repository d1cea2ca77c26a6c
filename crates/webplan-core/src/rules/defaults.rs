//! The fixed rule set of a web + WASM project.

use super::{
    LoaderOptions, LoaderRule, LoaderStep, ModuleType, Pattern, RuleCondition, RuleSet,
    SourceMapFilter,
};
use crate::mode::BuildMode;
use serde_json::json;

const NODE_MODULES: &str = "node_modules";

/// Loader used for in-page, hot-swappable styles.
pub const STYLE_INJECT_LOADER: &str = "style-loader";
/// Loader that moves styles into extracted, hashed files.
pub const STYLE_EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";

/// How compiled CSS reaches the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleStrategy {
    /// `<style>` tags injected at runtime.
    Inject,
    /// Static `.css` files written next to the scripts.
    Extract,
}

impl StyleStrategy {
    #[must_use]
    pub fn for_mode(mode: BuildMode) -> Self {
        match mode {
            BuildMode::Development => Self::Inject,
            BuildMode::Production => Self::Extract,
        }
    }

    #[must_use]
    pub fn loader_step(&self) -> LoaderStep {
        match self {
            Self::Inject => LoaderStep::new(STYLE_INJECT_LOADER),
            Self::Extract => LoaderStep::new(STYLE_EXTRACT_LOADER),
        }
    }
}

/// Options shared by every `babel-loader` step.
#[must_use]
pub fn babel_options() -> LoaderOptions {
    let mut options = LoaderOptions::new();
    options.insert("presets".to_string(), json!(["@babel/preset-react"]));
    options.insert(
        "plugins".to_string(),
        json!(["@babel/plugin-syntax-dynamic-import"]),
    );
    options
}

fn babel_step() -> LoaderStep {
    LoaderStep::new("babel-loader").options(babel_options())
}

fn ts_step() -> LoaderStep {
    LoaderStep::new("ts-loader")
        .option("happyPackMode", true)
        .option("configFile", "tsconfig.json")
}

fn test(source: &'static str) -> RuleCondition {
    RuleCondition::test(Pattern::builtin(source))
}

fn source_map_rule(source: &'static str) -> LoaderRule {
    LoaderRule::new(test(source).exclude(Pattern::builtin(NODE_MODULES)))
        .step(LoaderStep::new("source-map-loader").source_map_filter(SourceMapFilter::default()))
        .pre()
}

/// Build the ordered rule list for the given style strategy.
#[must_use]
pub fn default_rules(style: StyleStrategy) -> RuleSet {
    RuleSet::new(vec![
        LoaderRule::new(test(r"\.worker\.(ts|js)$")).step(
            LoaderStep::new("worker-loader")
                .option("filename", "[name].[hash:8].js")
                .option("chunkFilename", "[name].[hash:8].js")
                .option("inline", "no-fallback"),
        ),
        LoaderRule::new(test(r"\.(md)$")).step(LoaderStep::new("raw-loader")),
        LoaderRule::new(test(r"\.demo.tsx?$"))
            .step(babel_step())
            .step(ts_step()),
        LoaderRule::new(test(r"\.tsx?$"))
            .step(babel_step())
            .step(ts_step()),
        LoaderRule::new(test(r"\.jsx?$").exclude(Pattern::builtin(NODE_MODULES)))
            .step(babel_step()),
        LoaderRule::new(test(r"\.css$"))
            .step(style.loader_step())
            .step(
                LoaderStep::new("css-loader")
                    .option("importLoaders", 1)
                    .option("modules", false),
            ),
        LoaderRule::new(test(r"\.wasm$")).module_type(ModuleType::JavascriptAuto),
        LoaderRule::new(test(r"\.hdr$")).module_type(ModuleType::JavascriptAuto),
        LoaderRule::new(test(r"\.mjs$").include(Pattern::builtin(NODE_MODULES)))
            .module_type(ModuleType::JavascriptAuto),
        // limit 1: every asset is emitted as its own hashed file.
        LoaderRule::new(test(r"\.(png|jpg|gif|wasm|ttf|hdr|svg)$")).step(
            LoaderStep::new("url-loader")
                .option("name", "assets/[name].[hash:16].[ext]")
                .option("limit", 1),
        ),
        source_map_rule(r"\.js$"),
        source_map_rule(r"\.mjs$"),
    ])
}
