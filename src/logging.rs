//! Tracing setup for the CLI

use is_terminal::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

/// Environment variable holding a targets filter, e.g. `checkcites_build=debug`
pub const LOG_ENV_VAR: &str = "CHECKCITES_BUILD_LOG";

/// Level used when no filter is given in the environment
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the filter from `env_filter` if it parses, else from `verbose`.
pub fn targets_filter(env_filter: Option<&str>, verbose: u8) -> Targets {
    env_filter
        .and_then(|filter| filter.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(level_for_verbosity(verbose)))
}

/// Initialize tracing. Safe to call more than once; later calls are ignored.
pub fn setup(verbose: u8) {
    let env_filter = std::env::var(LOG_ENV_VAR).ok();
    let targets_layer = targets_filter(env_filter.as_deref(), verbose);

    let format_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(targets_layer)
        .with(format_layer)
        .try_init();
}
