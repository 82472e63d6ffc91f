//! `solar-geojson` command-line entry point.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use solar_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_clean, run_geocode, run_menu, run_merge, run_split};
use crate::summary::{
    print_clean_summary, print_geocode_summary, print_menu_summary, print_merge_summary,
    print_split_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Split(args) => run_split(args).map(|report| print_split_summary(&report)),
        Command::Merge(args) => run_merge(args).map(|report| print_merge_summary(&report)),
        Command::Geocode(args) => run_geocode(args).map(|result| print_geocode_summary(&result)),
        Command::Clean(args) => run_clean(args).map(|result| print_clean_summary(&result)),
        Command::Menu => run_menu().map(|outcome| print_menu_summary(&outcome)),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default()
        .with_level_filter(cli.verbosity.tracing_level_filter())
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_log_file(cli.log_file.clone());
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
