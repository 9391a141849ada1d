//! Logging setup.
//!
//! Events go to stderr so `forensic generate` can print the report on
//! stdout. Without `RUST_LOG`, only this workspace's crates log at the
//! configured level; HTTP and TLS dependencies stay at `warn`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directives used when `RUST_LOG` is unset.
fn default_directives(level: &str) -> String {
    format!("warn,forensic={level},forensic_core={level}")
}

/// Pick the level for our own crates: `--verbose` wins, then the config.
fn effective_level(config_level: &str, verbose: bool) -> &str {
    if verbose {
        return "debug";
    }
    match config_level {
        "trace" | "debug" | "info" | "warn" | "error" => config_level,
        _ => "info",
    }
}

/// Install the global subscriber.
pub fn init(level: &str, json_format: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let registry = tracing_subscriber::registry().with(filter);
    if json_format {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

/// Initialize logging from the `[logging]` config section, with CLI overrides.
pub fn init_from_config(config: &forensic_core::Config, verbose: bool, json_logs: bool) {
    let level = effective_level(&config.logging.level, verbose);
    let json_format = json_logs || config.logging.format == "json";
    init(level, json_format);
}
