//! Acid-base interpreter CLI.

use abg_cli::logging::{LogConfig, LogFormat, init_logging};
use abg_cli::report::{report_json, write_report_json};
use abg_cli::summary::print_evaluation;
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::error;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, EvaluateArgs, LogFormatArg, LogLevelArg, OutputFormatArg};
use crate::commands::{EvaluateOutcome, run_evaluate, run_ranges};

/// Exit code for panels turned away at intake.
const EXIT_REJECTED: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Evaluate(args) => match run_evaluate(args) {
            Ok(EvaluateOutcome::Evaluated(evaluation)) => emit(args, &evaluation),
            Ok(EvaluateOutcome::Rejected(rejection)) => {
                eprintln!("{rejection}");
                EXIT_REJECTED
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Ranges => match run_ranges() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn emit(args: &EvaluateArgs, evaluation: &abg_cli::report::Evaluation) -> i32 {
    match args.format {
        OutputFormatArg::Table => print_evaluation(evaluation),
        OutputFormatArg::Json => match report_json(evaluation) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                eprintln!("error: {error:#}");
                return 1;
            }
        },
    }
    if let Some(path) = &args.output
        && let Err(err) = write_report_json(path, evaluation)
    {
        error!(path = %path.display(), "failed to write report");
        eprintln!("error: {err:#}");
        return 1;
    }
    0
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        log_data: cli.log_data,
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
