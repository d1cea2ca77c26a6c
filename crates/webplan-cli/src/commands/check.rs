//! `webplan check` command implementation.

use super::{fail, load_plan};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tracing::warn;
use webplan_core::layout::{self, LayoutIssue};
use webplan_core::Config;

#[derive(Serialize)]
struct CheckJson<'a> {
    ok: bool,
    mode: &'a str,
    issues: &'a [LayoutIssue],
}

pub fn run(config: &Config) -> Result<()> {
    let json = config.json;
    let plan = match load_plan(config) {
        Ok(plan) => plan,
        Err(e) => return fail(e, json),
    };

    let issues = layout::check(&plan);
    for issue in &issues {
        warn!(code = issue.code, path = %issue.path.display(), "layout issue");
    }

    if json {
        let output = CheckJson {
            ok: issues.is_empty(),
            mode: plan.mode.as_str(),
            issues: &issues,
        };
        println!("{}", serde_json::to_string(&output).into_diagnostic()?);
    } else if issues.is_empty() {
        println!("  ok: project layout matches the {} plan", plan.mode);
    } else {
        for issue in &issues {
            println!("  {}: {}", issue.code, issue.message);
        }
    }

    if !issues.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
