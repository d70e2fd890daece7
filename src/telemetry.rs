//! Tracing initialization. All diagnostics go to stderr; stdout carries event lines only.

use crate::config::{Config, DEFAULT_LOG_FILTER};
use std::io::IsTerminal;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber (fmt layer on stderr + env filter).
pub fn init_tracing(cfg: &Config) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(cfg.verbose)
        .with_level(true);

    let directives = cfg.effective_log_filter();
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid log filter '{directives}': {e}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        // option_env! keeps builds outside a git checkout working
        git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        build_ts = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
        "mice-input starting"
    );

    info!(
        device = %cfg.device,
        input_dir = %cfg.input_dir.display(),
        verbose = cfg.verbose,
        log_filter = %directives,
        "Configuration loaded"
    );
}
