//! `webplan plan` command implementation.

use super::{fail, load_plan};
use miette::{IntoDiagnostic, Result};
use std::path::Path;
use tracing::info;
use webplan_core::{BuildPlan, Config, Error, PluginEntry, RuleStage};
use webplan_util::fs::atomic_write;

pub fn run(config: &Config, out: Option<&Path>) -> Result<()> {
    let json = config.json;
    let plan = match load_plan(config) {
        Ok(plan) => plan,
        Err(e) => return fail(e, json),
    };

    let rendered = serde_json::to_string_pretty(&plan).into_diagnostic()?;

    let written = match out {
        Some(out) => {
            let out = if out.is_absolute() {
                out.to_path_buf()
            } else {
                config.cwd.join(out)
            };
            if let Err(e) = atomic_write(&out, rendered.as_bytes()) {
                return fail(Error::Io(e), json);
            }
            info!(path = %out.display(), "wrote build plan");
            Some(out)
        }
        None => None,
    };

    if json {
        println!("{rendered}");
    } else {
        print_summary(&plan);
        if let Some(out) = written {
            println!("  wrote {}", out.display());
        }
    }
    Ok(())
}

fn print_summary(plan: &BuildPlan) {
    println!("webplan plan ({})", plan.mode);

    for (name, file) in &plan.entry {
        println!("  entry    {name} -> {}", file.display());
    }
    println!(
        "  output   {} ({}, {})",
        plan.output.path.display(),
        plan.output.filename,
        plan.output.chunk_filename
    );

    let pre = plan
        .module
        .rules
        .iter()
        .filter(|r| r.stage == RuleStage::Pre)
        .count();
    println!("  rules    {} ({pre} pre)", plan.module.rules.len());

    let names: Vec<&str> = plan.plugins.iter().map(PluginEntry::name).collect();
    println!("  plugins  {}", names.join(", "));
    println!(
        "  server   {}:{}",
        plan.dev_server.host, plan.dev_server.port
    );
}
