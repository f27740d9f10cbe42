//! CLI argument definitions for the wikitext exporter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dlwiki",
    version,
    about = "Convert game-data CSV exports into wiki-ready text",
    long_about = "Convert game-data CSV exports into wiki-ready text.\n\n\
                  Reads the named data tables from an input directory, joins\n\
                  related tables, substitutes localized text, and writes one\n\
                  wikitext file per data category."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a data export folder and generate wikitext outputs.
    Export(ExportArgs),

    /// List all registered data categories.
    Categories,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the folder containing the exported data tables.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output directory for generated files (default: ./data-output).
    #[arg(long = "output-dir", value_name = "DIR", default_value = "./data-output")]
    pub output_dir: PathBuf,

    /// JSON file mapping template names to an explicit field order.
    #[arg(long = "ordering", value_name = "PATH")]
    pub ordering: Option<PathBuf>,

    /// Delete the previous output directory before writing.
    #[arg(long = "delete-old")]
    pub delete_old: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
