//! Build plan resolution.
//!
//! [`resolve`] turns a mode and a loaded project into the complete plan the
//! engine consumes. It reads nothing and cannot fail; everything ambient
//! (environment, `package.json`) is gathered by the caller first.

use crate::cache::CacheConfig;
use crate::devserver::DevServerConfig;
use crate::mode::BuildMode;
use crate::output::{Entry, FilenameTemplate, OutputConfig};
use crate::plugins::{
    CssExtractOptions, HtmlOptions, PluginEntry, ProvideOptions, TypeCheckOptions,
    WasmPackOptions,
};
use crate::project::Project;
use crate::resolve::ResolveConfig;
use crate::rules::{default_rules, RuleSet, StyleStrategy};
use serde::Serialize;
use std::path::PathBuf;

pub const SCRIPT_FILENAME: &str = "js/[name].[hash:8].js";
pub const SCRIPT_CHUNK_FILENAME: &str = "js/chunk.[name].[chunkhash:8].js";
pub const STYLE_FILENAME: &str = "css/[name].[hash:8].css";
pub const STYLE_CHUNK_FILENAME: &str = "css/chunk.[id].[chunkhash:8].css";
pub const HTML_FILENAME: &str = "./index.html";
pub const MAIN_ENTRY: &str = "main";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleConfig {
    pub rules: RuleSet,
}

/// Everything the engine needs for one build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPlan {
    pub mode: BuildMode,
    pub entry: Entry,
    pub output: OutputConfig,
    pub resolve: ResolveConfig,
    pub module: ModuleConfig,
    pub dev_server: DevServerConfig,
    pub plugins: Vec<PluginEntry>,
    pub cache: CacheConfig,
    #[serde(skip)]
    pub style: StyleStrategy,
}

impl BuildPlan {
    /// First plugin with the given name.
    #[must_use]
    pub fn plugin(&self, name: &str) -> Option<&PluginEntry> {
        self.plugins.iter().find(|p| p.name() == name)
    }

    #[must_use]
    pub fn wasm_pack(&self) -> Option<&WasmPackOptions> {
        self.plugins.iter().find_map(|p| match p {
            PluginEntry::WasmPack(options) => Some(options),
            _ => None,
        })
    }

    #[must_use]
    pub fn css_extract(&self) -> Option<&CssExtractOptions> {
        self.plugins.iter().find_map(|p| match p {
            PluginEntry::CssExtract(options) => Some(options),
            _ => None,
        })
    }

    /// Entry files in chunk-name order.
    #[must_use]
    pub fn entry_files(&self) -> Vec<&PathBuf> {
        self.entry.values().collect()
    }
}

/// Resolve the build plan for `mode`.
#[must_use]
pub fn resolve(mode: BuildMode, project: &Project) -> BuildPlan {
    let layout = &project.layout;
    let style = StyleStrategy::for_mode(mode);

    let mut plugins = vec![
        PluginEntry::Provide(ProvideOptions::node_globals()),
        PluginEntry::HotModuleReplacement,
        PluginEntry::Html(HtmlOptions {
            title: project.name.clone(),
            template: layout.template(),
            filename: HTML_FILENAME.to_string(),
        }),
        PluginEntry::CssExtract(CssExtractOptions {
            filename: FilenameTemplate::parse(STYLE_FILENAME),
            chunk_filename: FilenameTemplate::parse(STYLE_CHUNK_FILENAME),
        }),
        PluginEntry::WasmPack(WasmPackOptions {
            crate_directory: layout.crate_dir(),
            watch_directories: layout.wasm_watch_dirs(),
            out_dir: layout.wasm_out_dir(),
            out_name: project.name.clone(),
            force_mode: mode,
        }),
    ];

    if mode.is_development() {
        plugins.push(PluginEntry::ForkTsChecker(TypeCheckOptions { run_async: true }));
    }

    let mut entry = Entry::new();
    entry.insert(MAIN_ENTRY.to_string(), layout.entry());

    BuildPlan {
        mode,
        entry,
        output: OutputConfig {
            path: layout.output_dir(),
            filename: FilenameTemplate::parse(SCRIPT_FILENAME),
            chunk_filename: FilenameTemplate::parse(SCRIPT_CHUNK_FILENAME),
            global_object: "this".to_string(),
        },
        resolve: ResolveConfig::browser(),
        module: ModuleConfig {
            rules: default_rules(style),
        },
        dev_server: DevServerConfig::default(),
        plugins,
        cache: CacheConfig::filesystem(),
        style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::defaults::{STYLE_EXTRACT_LOADER, STYLE_INJECT_LOADER};
    use crate::rules::RuleStage;

    const MODES: [BuildMode; 2] = [BuildMode::Development, BuildMode::Production];

    fn project() -> Project {
        Project::new("/work/viewer/web", "viewer")
    }

    fn style_loader(plan: &BuildPlan) -> String {
        plan.module.rules.loader_chain("/work/viewer/web/src/app.css")[0].to_string()
    }

    fn type_checkers(plan: &BuildPlan) -> Vec<&TypeCheckOptions> {
        plan.plugins
            .iter()
            .filter_map(|p| match p {
                PluginEntry::ForkTsChecker(options) => Some(options),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_development_injects_styles_and_type_checks() {
        let plan = resolve(BuildMode::Development, &project());

        assert_eq!(style_loader(&plan), STYLE_INJECT_LOADER);
        assert_eq!(plan.style, StyleStrategy::Inject);
        let checkers = type_checkers(&plan);
        assert_eq!(checkers.len(), 1);
        assert!(checkers[0].run_async);
    }

    #[test]
    fn test_production_extracts_styles_without_type_check() {
        let plan = resolve(BuildMode::Production, &project());

        assert_eq!(style_loader(&plan), STYLE_EXTRACT_LOADER);
        assert!(type_checkers(&plan).is_empty());
        assert!(plan.plugin("fork-ts-checker").is_none());
    }

    #[test]
    fn test_plugin_order() {
        let names = |mode| {
            resolve(mode, &project())
                .plugins
                .iter()
                .map(PluginEntry::name)
                .collect::<Vec<_>>()
        };

        assert_eq!(
            names(BuildMode::Production),
            vec!["provide", "hot-module-replacement", "html", "css-extract", "wasm-pack"]
        );
        assert_eq!(
            names(BuildMode::Development),
            vec![
                "provide",
                "hot-module-replacement",
                "html",
                "css-extract",
                "wasm-pack",
                "fork-ts-checker"
            ]
        );
    }

    #[test]
    fn test_source_map_filter_polarity() {
        let plan = resolve(BuildMode::Development, &project());
        let pre = plan
            .module
            .rules
            .iter()
            .find(|r| r.stage == RuleStage::Pre)
            .unwrap();
        let filter = pre.steps[0].source_map_filter.as_ref().unwrap();

        assert!(!filter.keep("vs/loader.js.map", "/app/node_modules/monaco-editor/min/vs/loader.js"));
        assert!(!filter.keep("/monaco-editor/editor.js.map", "/app/src/editor.js"));
        assert!(filter.keep("main.js.map", "/app/src/main.js"));
    }

    #[test]
    fn test_output_templates_are_hashed_in_both_modes() {
        for mode in MODES {
            let plan = resolve(mode, &project());
            assert!(plan.output.filename.has_content_hash());
            assert!(plan.output.chunk_filename.has_content_hash());

            let css = plan.css_extract().unwrap();
            assert!(css.filename.has_content_hash());
            assert!(css.chunk_filename.has_content_hash());
        }
    }

    #[test]
    fn test_dev_server_is_mode_independent() {
        for mode in MODES {
            let server = resolve(mode, &project()).dev_server;
            assert_eq!(server.header("Cross-Origin-Embedder-Policy"), Some("require-corp"));
            assert_eq!(server.header("Cross-Origin-Opener-Policy"), Some("same-origin"));
            assert_eq!(server.history_api_fallback.index, "/index.html");
        }
    }

    #[test]
    fn test_wasm_force_mode_mirrors_input() {
        for mode in MODES {
            let first = resolve(mode, &project());
            let second = resolve(mode, &project());

            let wasm = first.wasm_pack().unwrap();
            assert_eq!(wasm.force_mode, mode);
            assert_eq!(first.mode, mode);
            assert_eq!(
                serde_json::to_vec(wasm).unwrap(),
                serde_json::to_vec(second.wasm_pack().unwrap()).unwrap()
            );
        }
    }

    #[test]
    fn test_project_metadata_flows_into_plugins() {
        let plan = resolve(BuildMode::Production, &project());
        let wasm = plan.wasm_pack().unwrap();
        assert_eq!(wasm.out_name, "viewer");
        assert_eq!(wasm.crate_directory, PathBuf::from("/work/viewer"));
        assert_eq!(wasm.watch_directories, vec![PathBuf::from("/work/viewer/src")]);
        assert_eq!(wasm.out_dir, PathBuf::from("/work/viewer/web/pkg"));

        match plan.plugin("html").unwrap() {
            PluginEntry::Html(html) => {
                assert_eq!(html.title, "viewer");
                assert_eq!(html.template, PathBuf::from("/work/viewer/web/index.html"));
            }
            other => panic!("unexpected plugin {other:?}"),
        }
    }

    #[test]
    fn test_entry_and_output() {
        let plan = resolve(BuildMode::Production, &project());
        assert_eq!(
            plan.entry_files(),
            vec![&PathBuf::from("/work/viewer/web/src/main.tsx")]
        );
        assert_eq!(plan.output.path, PathBuf::from("/work/viewer/web/dist"));
        assert_eq!(plan.output.global_object, "this");
    }

    #[test]
    fn test_plan_json_shape() {
        let value = serde_json::to_value(resolve(BuildMode::Development, &project())).unwrap();

        assert_eq!(value["mode"], "development");
        assert_eq!(value["output"]["filename"], SCRIPT_FILENAME);
        assert_eq!(value["output"]["chunkFilename"], SCRIPT_CHUNK_FILENAME);
        assert_eq!(value["devServer"]["port"], 3355);
        assert_eq!(value["cache"]["type"], "filesystem");
        assert_eq!(value["module"]["rules"].as_array().unwrap().len(), 12);
        assert!(value.get("style").is_none());
    }
}
