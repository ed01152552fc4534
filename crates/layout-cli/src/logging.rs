//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! The library crates emit `tracing` events; this module installs the
//! subscriber that renders them for the CLI.
//!
//! # Log Levels
//!
//! - `error`: Fatal errors
//! - `warn`: Forced loads, duplicate presets, unreadable settings
//! - `info`: Files loaded and saved
//! - `debug`: Decode attempts and clipboard fall-through
//! - `trace`: Per-calculation details
//!
//! # Usage
//!
//! ```ignore
//! use layout_cli::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig::default();
//! init_logging(&config).expect("init logging");
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Crates whose events are shown at the configured level.
const LAYOUT_CRATES: [&str; 5] = [
    "layout_cli",
    "layout_model",
    "layout_persistence",
    "layout_presets",
    "layout_stats",
];

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter for the layout crates.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override `level_filter`.
    pub use_env_filter: bool,
    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Output format: "pretty", "compact", or "json".
    pub format: LogFormat,
    /// Optional log file path. When set, logs are written to the file.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if called more than once or if subscriber initialization fails.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, Mutex::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Initialize logging with a custom writer (useful for testing).
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(build_env_filter(config))
        .with(format_layer(config, writer))
        .init();
}

/// The fmt layer for `config.format`, timestamped only when asked.
fn format_layer<S, W>(config: &LogConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target);

    match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => layer.with_ansi(false).json().boxed(),
        (LogFormat::Compact, true) => layer.compact().boxed(),
        (LogFormat::Compact, false) => layer.compact().without_time().boxed(),
        (LogFormat::Pretty, true) => layer.boxed(),
        (LogFormat::Pretty, false) => layer.without_time().boxed(),
    }
}

/// Directive string: layout crates at `level`, everything else at warn.
fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(LAYOUT_CRATES.iter().map(|name| format!("{name}={level}")));
    directives.join(",")
}

/// Build an `EnvFilter`, letting `RUST_LOG` win when allowed.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        let directives = default_directives(LevelFilter::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("layout_persistence=debug"));
        assert!(directives.contains("layout_stats=debug"));
    }

    #[test]
    fn test_off_level() {
        assert!(default_directives(LevelFilter::OFF).contains("layout_cli=off"));
    }

    /// Emit one event through `config` and return what was written.
    fn render(config: &LogConfig) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.log");
        let file = std::fs::File::create(&path).unwrap();
        let subscriber = tracing_subscriber::registry()
            .with(build_env_filter(config))
            .with(format_layer(config, Mutex::new(file)));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "layout_cli", objects = 3, "Saved layout");
        });
        std::fs::read_to_string(&path).unwrap()
    }

    fn quiet_config(format: LogFormat) -> LogConfig {
        LogConfig {
            level_filter: LevelFilter::INFO,
            use_env_filter: false,
            with_ansi: false,
            format,
            ..LogConfig::default()
        }
    }

    #[test]
    fn test_json_format_writes_fields() {
        let output = render(&quiet_config(LogFormat::Json));
        let event: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(event["fields"]["message"], "Saved layout");
        assert_eq!(event["fields"]["objects"], 3);
    }

    #[test]
    fn test_compact_format_without_timestamps() {
        let output = render(&quiet_config(LogFormat::Compact));
        assert!(output.trim_start().starts_with("INFO"), "{output}");
        assert!(output.contains("objects=3"));
    }

    #[test]
    fn test_level_filter_drops_info() {
        let config = LogConfig {
            level_filter: LevelFilter::WARN,
            ..quiet_config(LogFormat::Compact)
        };
        assert!(render(&config).is_empty());
    }
}
