//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The library crates only emit events; this module installs the one
//! global subscriber for the `shop-trends` binary.
//!
//! # Log Levels
//!
//! - `error`: Load failures
//! - `warn`: Failed panels, field kind mismatches, odd table shapes
//! - `info`: Report pass and load spans, completion counts
//! - `debug`: Field resolution, per-panel outcomes
//! - `trace`: Category labels (requires the `--log-data` flag)

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, format::FmtSpan, writer::BoxMakeWriter};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Workspace crates that receive the configured level by default.
const WORKSPACE_TARGETS: [&str; 5] = [
    "shop_cli",
    "shop_common",
    "shop_ingest",
    "shop_model",
    "shop_stats",
];

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder logged instead of a customer-level value.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Returns true if customer-level values may be logged.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Returns `value` when data logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level applied to the workspace crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the default filter.
    pub use_env_filter: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// When set, logs are appended to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    /// Whether customer-level values may be logged.
    pub log_data: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Single-line format.
    Compact,
    /// JSON lines with span close events, for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);
    let writer = match &config.log_file {
        Some(path) => open_log_file(path)?,
        None => BoxMakeWriter::new(io::stderr),
    };
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(false)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .without_time()
            .with_writer(writer)
            .with_ansi(config.with_ansi)
            .with_target(false)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .without_time()
            .with_writer(writer)
            .with_ansi(config.with_ansi)
            .with_target(false)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(build_env_filter(config.level_filter, config.use_env_filter))
        .init();
    Ok(())
}

/// Appending writer for `path`, created if missing.
fn open_log_file(path: &Path) -> io::Result<BoxMakeWriter> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(BoxMakeWriter::new(Mutex::new(file)))
}

/// Default filter directive: workspace crates at `level`, external crates
/// at `level` capped to warn.
pub fn default_directive(level: LevelFilter) -> String {
    let external = level.min(LevelFilter::WARN);
    let level = level.to_string().to_lowercase();
    let mut directive = external.to_string().to_lowercase();
    for target in WORKSPACE_TARGETS {
        directive.push_str(&format!(",{target}={level}"));
    }
    directive
}

fn build_env_filter(level: LevelFilter, use_env_filter: bool) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directive(level));
    if use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_default_directive_scopes_workspace() {
        let directive = default_directive(LevelFilter::DEBUG);
        assert!(directive.starts_with("warn,"));
        assert!(directive.contains("shop_stats=debug"));
        assert!(directive.contains("shop_ingest=debug"));
    }

    #[test]
    fn test_default_directive_quiet() {
        let directive = default_directive(LevelFilter::ERROR);
        assert!(directive.starts_with("error,"));
        assert!(directive.ends_with("shop_stats=error"));
    }

    #[test]
    fn test_log_file_created_and_appended() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("shop-trends.log");
        std::fs::write(&path, "earlier run\n").unwrap();

        let writer = open_log_file(&path).unwrap();
        writer.make_writer().write_all(b"report finished\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "earlier run\nreport finished\n"
        );
        assert!(open_log_file(&dir.path().join("missing").join("x.log")).is_err());
    }

    #[test]
    fn test_values_redacted_by_default() {
        assert!(!log_data_enabled());
        assert_eq!(redact_value("Venmo"), REDACTED_VALUE);
    }
}
