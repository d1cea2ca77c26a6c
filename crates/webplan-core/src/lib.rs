#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]

pub mod cache;
pub mod config;
pub mod devserver;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod mode;
pub mod output;
pub mod plan;
pub mod plugins;
pub mod project;
pub mod resolve;
pub mod rules;
pub mod version;

pub use config::Config;
pub use error::{Error, Result};
pub use mode::BuildMode;
pub use plan::{resolve, BuildPlan};
pub use plugins::PluginEntry;
pub use project::{Project, ProjectLayout};
pub use rules::{LoaderRule, LoaderStep, ModuleType, RuleSet, RuleStage};
pub use version::{VersionInfo, VERSION};
