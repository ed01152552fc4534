//! Layout tool CLI.

use clap::{ColorChoice, Parser};
use layout_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use layout_cli::commands::{run_config, run_info, run_migrate, run_stats};
use layout_cli::exit::{EXIT_FAILURE, EXIT_SUCCESS, report_error};
use layout_cli::logging::{LogConfig, LogFormat, init_logging};
use layout_cli::settings::Settings;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod summary;

use crate::summary::{print_config, print_info, print_migrate, print_stats};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_FAILURE);
    }
    let settings = Settings::load(cli.config.as_deref());
    let outcome = match &cli.command {
        Command::Info(args) => run_info(args).map(|report| print_info(&report)),
        Command::Stats(args) => run_stats(args, &settings).map(|report| print_stats(&report)),
        Command::Migrate(args) => {
            run_migrate(args, &settings).map(|report| print_migrate(&report))
        }
        Command::Config(args) => {
            run_config(args, cli.config.as_deref()).map(|report| print_config(&report))
        }
    };
    let exit_code = match outcome {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => report_error(&error),
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
