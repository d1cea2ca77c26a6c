//! Logging initialization for the CLI.
//!
//! Library crates never log; the binary owns the subscriber.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber.
///
/// # Arguments
/// * `verbosity` - 0 = INFO, 1 = DEBUG, 2+ = TRACE for webplan's own events
/// * `json` - If true, write JSON lines to stderr
///
/// A set `RUST_LOG` replaces the default filter. `-v` still raises webplan's
/// own level on top of it.
///
/// # Panics
/// Panics if the subscriber cannot be initialized (e.g., called twice).
pub fn init(verbosity: u8, json: bool) {
    let filter = build_filter(verbosity, EnvFilter::try_from_default_env().ok());
    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

fn level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_filter(verbosity: u8, from_env: Option<EnvFilter>) -> EnvFilter {
    let own = format!("webplan={}", level(verbosity));
    match from_env {
        None => EnvFilter::new(format!("warn,{own}")),
        Some(filter) if verbosity == 0 => filter,
        Some(filter) => match own.parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        },
    }
}
