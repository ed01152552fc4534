//! CLI argument definitions for the layout tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "layout-tool",
    version,
    about = "Inspect, migrate and measure building layout files",
    long_about = "Inspect, migrate and measure building layout (.ad) files.\n\n\
                  Reads every file generation, from bare object lists to the\n\
                  current versioned container, and writes the current one."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: the user config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the version envelope of a layout file.
    Info(InfoArgs),

    /// Compute bounding box, tile efficiency and building counts.
    Stats(StatsArgs),

    /// Re-save a layout in the current file format.
    Migrate(MigrateArgs),

    /// Show the active settings, or write a default settings file.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct InfoArgs {
    /// Layout file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Layout file to measure.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Count road tiles toward the covered area.
    #[arg(long = "include-roads")]
    pub include_roads: bool,

    /// Load even if the file version does not match.
    #[arg(long = "force")]
    pub force: bool,

    /// Building presets (presets.json) used to name buildings.
    #[arg(long = "presets", value_name = "PATH")]
    pub presets: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MigrateArgs {
    /// Layout file to migrate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Where to write the migrated layout (default: overwrite FILE).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Migrate even if the file version does not match.
    ///
    /// Without this flag, only files that are already current (or bare
    /// object lists from the first generation) are rewritten.
    #[arg(long = "force")]
    pub force: bool,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write a settings file with default values if none exists.
    #[arg(long = "init")]
    pub init: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
