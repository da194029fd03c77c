//! Logging initialization and configuration.
//!
//! Uses the `tracing` ecosystem for structured logging with support for
//! both human-readable and JSON output formats.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level names accepted in `logging.level`.
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Initialize the logging subsystem.
///
/// # Notes
///
/// - Log output goes to stderr (stdout is reserved for the per-photo summary)
/// - The RUST_LOG environment variable overrides `level`
pub fn init(level: &str, json_format: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Pick the default level from the config, with `--verbose` forcing at
/// least debug.
pub fn resolve_level(configured: &str, verbose: bool) -> &'static str {
    let configured = LEVELS
        .iter()
        .find(|l| l.eq_ignore_ascii_case(configured.trim()))
        .copied()
        .unwrap_or("info");

    if verbose && configured != "trace" {
        "debug"
    } else {
        configured
    }
}

/// Initialize logging with settings from the exifmark configuration.
pub fn init_from_config(
    config: &exifmark_core::Config,
    verbose_override: bool,
    json_logs_override: bool,
) {
    let level = resolve_level(&config.logging.level, verbose_override);
    let json_format = json_logs_override || config.logging.format == "json";
    init(level, json_format);
}
