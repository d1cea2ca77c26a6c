//! `webplan match` command implementation.

use super::{fail, load_plan};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::Path;
use webplan_core::{Config, LoaderRule, ModuleType, RuleStage};

#[derive(Serialize)]
struct MatchJson {
    ok: bool,
    path: String,
    rules: Vec<MatchedRuleJson>,
    chain: Vec<String>,
}

#[derive(Serialize)]
struct MatchedRuleJson {
    index: usize,
    test: String,
    stage: RuleStage,
    loaders: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    module_type: Option<ModuleType>,
}

impl MatchedRuleJson {
    fn new(index: usize, rule: &LoaderRule) -> Self {
        Self {
            index,
            test: rule.label(),
            stage: rule.stage,
            loaders: rule.loaders().map(String::from).collect(),
            module_type: rule.module_type,
        }
    }
}

pub fn run(config: &Config, path: &Path) -> Result<()> {
    let json = config.json;
    let plan = match load_plan(config) {
        Ok(plan) => plan,
        Err(e) => return fail(e, json),
    };

    let resource = if path.is_absolute() {
        path.to_path_buf()
    } else {
        config.cwd.join(path)
    };
    let resource = resource.display().to_string();

    let rules = &plan.module.rules;
    let matched: Vec<MatchedRuleJson> = rules
        .matching_indexed(&resource)
        .into_iter()
        .map(|(index, rule)| MatchedRuleJson::new(index, rule))
        .collect();
    let chain: Vec<String> = rules
        .loader_chain(&resource)
        .into_iter()
        .map(String::from)
        .collect();

    if json {
        let output = MatchJson {
            ok: true,
            path: resource,
            rules: matched,
            chain,
        };
        println!("{}", serde_json::to_string(&output).into_diagnostic()?);
        return Ok(());
    }

    if matched.is_empty() {
        println!("{resource}: no rules apply");
        return Ok(());
    }

    println!("{resource}");
    for rule in &matched {
        let stage = if rule.stage == RuleStage::Pre { " [pre]" } else { "" };
        let what = match rule.module_type {
            Some(t) => format!("type {}", t.as_str()),
            None => rule.loaders.join(" -> "),
        };
        println!("  #{:<2} {}{stage}: {what}", rule.index, rule.test);
    }
    if !chain.is_empty() {
        println!("  chain: {}", chain.join(" -> "));
    }
    Ok(())
}
