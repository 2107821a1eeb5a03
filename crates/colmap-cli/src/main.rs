//! `colmap` command-line tool.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use colmap_cli::logging::{LogConfig, LogFormat, init_logging};
use colmap_cli::report::suggest_exit_code;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ReportFormatArg};
use crate::commands::{run_rank, run_score, run_suggest};
use crate::summary::{print_rank, print_score, print_suggest};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Suggest(args) => match run_suggest(&args) {
            Ok(outcome) => {
                let printed = match args.format {
                    ReportFormatArg::Table => {
                        print_suggest(&outcome);
                        true
                    }
                    ReportFormatArg::Json => match serde_json::to_string_pretty(&outcome.report) {
                        Ok(json) => {
                            println!("{json}");
                            true
                        }
                        Err(error) => {
                            eprintln!("error: failed to serialize report: {error}");
                            false
                        }
                    },
                };
                suggest_exit_code(&outcome.report, printed)
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Score(args) => {
            print_score(&run_score(&args));
            0
        }
        Command::Rank(args) => match run_rank(&args) {
            Ok(outcome) => {
                print_rank(&args.target, &outcome);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
}
