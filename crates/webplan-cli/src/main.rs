#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::needless_pass_by_value)]

mod commands;
mod logging;

use clap::Parser;
use miette::Result;
use std::path::PathBuf;
use webplan_core::mode::MODE_ENV;
use webplan_core::Config;

#[derive(Parser, Debug)]
#[command(name = "webplan")]
#[command(author, version, about = "Resolve build plans for web + WASM projects", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    /// Build mode: "development" or "production" (defaults to production)
    #[arg(long, short = 'm', global = true, env = MODE_ENV)]
    mode: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Resolve the build plan and print it
    Plan {
        /// Also write the JSON plan to this file
        #[arg(long, short = 'o', value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Show which loader rules apply to a file
    Match {
        /// File path, relative to the project root or absolute
        path: PathBuf,
    },

    /// Check that the files the plan reads from exist
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = cli
        .cwd
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    let cwd = dunce::canonicalize(&cwd).unwrap_or(cwd);

    logging::init(cli.verbose, cli.json);

    // Mode stays raw here; only plan-resolving commands parse it.
    let config = Config::new(cwd).with_json(cli.json).with_mode(cli.mode);

    let span = tracing::info_span!("webplan", cwd = %config.cwd.display());
    let _guard = span.enter();

    match cli.command {
        Some(Commands::Version) | None => commands::version::run(config.json),
        Some(Commands::Plan { out }) => commands::plan::run(&config, out.as_deref()),
        Some(Commands::Match { path }) => commands::matching::run(&config, &path),
        Some(Commands::Check) => commands::check::run(&config),
    }
}
