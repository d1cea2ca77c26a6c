//! Loader rules: file patterns bound to ordered transformation chains.
//!
//! Rules are evaluated the way the build engine evaluates them: every rule
//! whose condition matches contributes its loaders, pre-stage rules first,
//! then normal rules, each group in declaration order.

pub mod condition;
pub mod defaults;
pub mod sourcemap;

pub use condition::{Pattern, RuleCondition};
pub use defaults::{babel_options, default_rules, StyleStrategy};
pub use sourcemap::SourceMapFilter;

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Loader options, keyed by option name.
pub type LoaderOptions = BTreeMap<String, Value>;

/// When a rule runs relative to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStage {
    /// Runs before every normal rule; sees untransformed sources.
    Pre,
    #[default]
    Normal,
}

impl RuleStage {
    fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Module type override for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModuleType {
    /// Hand the file to the engine's generic JS handling, untransformed.
    #[serde(rename = "javascript/auto")]
    JavascriptAuto,
}

impl ModuleType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JavascriptAuto => "javascript/auto",
        }
    }
}

/// One transformation step of a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderStep {
    pub loader: String,
    pub options: LoaderOptions,
    /// Only set on `source-map-loader` steps; serialized as the
    /// `filterSourceMappingUrl` option.
    pub source_map_filter: Option<SourceMapFilter>,
}

impl LoaderStep {
    #[must_use]
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: LoaderOptions::new(),
            source_map_filter: None,
        }
    }

    #[must_use]
    pub fn option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn options(mut self, options: LoaderOptions) -> Self {
        self.options.extend(options);
        self
    }

    #[must_use]
    pub fn source_map_filter(mut self, filter: SourceMapFilter) -> Self {
        self.source_map_filter = Some(filter);
        self
    }
}

impl Serialize for LoaderStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut options = self.options.clone();
        if let Some(filter) = &self.source_map_filter {
            let value = serde_json::to_value(filter).map_err(S::Error::custom)?;
            options.insert("filterSourceMappingUrl".to_string(), value);
        }

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("loader", &self.loader)?;
        if !options.is_empty() {
            map.serialize_entry("options", &options)?;
        }
        map.end()
    }
}

/// A pattern-to-chain binding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderRule {
    #[serde(flatten)]
    pub condition: RuleCondition,
    #[serde(rename = "enforce", skip_serializing_if = "RuleStage::is_normal")]
    pub stage: RuleStage,
    #[serde(rename = "use", skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<LoaderStep>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<ModuleType>,
}

impl LoaderRule {
    #[must_use]
    pub fn new(condition: RuleCondition) -> Self {
        Self {
            condition,
            stage: RuleStage::Normal,
            steps: Vec::new(),
            module_type: None,
        }
    }

    #[must_use]
    pub fn step(mut self, step: LoaderStep) -> Self {
        self.steps.push(step);
        self
    }

    #[must_use]
    pub fn module_type(mut self, module_type: ModuleType) -> Self {
        self.module_type = Some(module_type);
        self
    }

    #[must_use]
    pub fn pre(mut self) -> Self {
        self.stage = RuleStage::Pre;
        self
    }

    #[must_use]
    pub fn matches(&self, resource: &str) -> bool {
        self.condition.matches(resource)
    }

    pub fn loaders(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.loader.as_str())
    }

    /// Short label for listings: the test patterns joined with ` | `.
    #[must_use]
    pub fn label(&self) -> String {
        self.condition
            .test
            .iter()
            .map(Pattern::as_str)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// The ordered rule list of a plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<LoaderRule>,
}

impl RuleSet {
    #[must_use]
    pub fn new(rules: Vec<LoaderRule>) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LoaderRule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules applying to `resource`: matching pre-stage rules, then matching
    /// normal rules, each in declaration order.
    #[must_use]
    pub fn matching(&self, resource: &str) -> Vec<&LoaderRule> {
        self.matching_indexed(resource)
            .into_iter()
            .map(|(_, rule)| rule)
            .collect()
    }

    /// Like [`RuleSet::matching`], paired with each rule's declaration index.
    #[must_use]
    pub fn matching_indexed(&self, resource: &str) -> Vec<(usize, &LoaderRule)> {
        let (mut ordered, normal): (Vec<_>, Vec<_>) = self
            .rules
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matches(resource))
            .partition(|(_, r)| r.stage == RuleStage::Pre);
        ordered.extend(normal);
        ordered
    }

    /// Loader names applied to `resource`, in evaluation order.
    #[must_use]
    pub fn loader_chain(&self, resource: &str) -> Vec<&str> {
        self.matching(resource)
            .into_iter()
            .flat_map(LoaderRule::loaders)
            .collect()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a LoaderRule;
    type IntoIter = std::slice::Iter<'a, LoaderRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
