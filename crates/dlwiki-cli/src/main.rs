//! Wikitext exporter CLI.

use clap::{ColorChoice, Parser};
use std::io::IsTerminal;

use dlwiki_cli::cli::{Cli, Command, LogFormatArg};
use dlwiki_cli::commands;
use dlwiki_cli::logging::{LogConfig, LogFormat, init_logging};
use dlwiki_cli::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Export(args) => match commands::export(&args) {
            Ok(outcome) => {
                print_summary(&outcome);
                i32::from(outcome.has_errors())
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Categories => {
            commands::categories();
            0
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        // An explicit -v/-q beats RUST_LOG; otherwise the env decides.
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stderr().is_terminal(),
        },
    }
}
