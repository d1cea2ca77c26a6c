pub mod check;
pub mod matching;
pub mod plan;
pub mod version;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use webplan_core::{resolve, BuildPlan, Config, Error, Project};

#[derive(Serialize)]
struct ErrorJson<'a> {
    ok: bool,
    error: ErrorBodyJson<'a>,
}

#[derive(Serialize)]
struct ErrorBodyJson<'a> {
    code: &'a str,
    message: String,
}

/// Parse the mode, load the project under `config.cwd` and resolve its plan.
pub fn load_plan(config: &Config) -> Result<BuildPlan, Error> {
    let mode = config.build_mode()?;
    let project = Project::load(&config.cwd)?;
    let plan = resolve(mode, &project);
    tracing::debug!(
        project = %project.name,
        %mode,
        rules = plan.module.rules.len(),
        plugins = plan.plugins.len(),
        "resolved build plan"
    );
    Ok(plan)
}

/// Report `err` and stop. JSON mode prints a stable error object and exits 1.
pub fn fail(err: Error, json: bool) -> Result<()> {
    if json {
        let body = ErrorJson {
            ok: false,
            error: ErrorBodyJson {
                code: err.code(),
                message: err.to_string(),
            },
        };
        println!("{}", serde_json::to_string(&body).into_diagnostic()?);
        std::process::exit(1);
    }
    Err(err).into_diagnostic()
}
