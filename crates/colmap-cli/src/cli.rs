//! CLI argument definitions for `colmap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colmap",
    version,
    about = "Map seller CSV columns to marketplace template attributes",
    long_about = "Suggest which column of a seller product file feeds each attribute \
                  of a marketplace template.\n\n\
                  Names are compared after normalization; exact, substring and \
                  edit-distance matches are accepted at a similarity of 0.7 or more."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Suggest a column for every template attribute.
    Suggest(SuggestArgs),

    /// Show the similarity of two names.
    Score(ScoreArgs),

    /// Rank the columns of a seller file for one attribute.
    Rank(RankArgs),
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Marketplace template CSV (one row per attribute).
    #[arg(long = "template", value_name = "CSV")]
    pub template: PathBuf,

    /// Seller product CSV.
    #[arg(long = "seller", value_name = "CSV")]
    pub seller: PathBuf,

    /// Previously saved mapping JSON; its choices are kept.
    ///
    /// Accepts either a full mapping record or a bare
    /// `{"source column": "target attribute"}` object.
    #[arg(long = "existing", value_name = "JSON")]
    pub existing: Option<PathBuf>,

    /// How to print the result.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Marketplace identifier stored in the record (default: template file stem).
    #[arg(long = "marketplace-id", value_name = "ID")]
    pub marketplace_id: Option<String>,

    /// Seller file identifier stored in the record (default: seller file stem).
    #[arg(long = "seller-file-id", value_name = "ID")]
    pub seller_file_id: Option<String>,

    /// Write the mapping record JSON here.
    ///
    /// Refused while a required attribute has no column.
    #[arg(long = "output", value_name = "JSON")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// First name.
    pub a: String,

    /// Second name.
    pub b: String,
}

#[derive(Parser)]
pub struct RankArgs {
    /// Seller product CSV.
    #[arg(long = "seller", value_name = "CSV")]
    pub seller: PathBuf,

    /// Template attribute name to rank columns for.
    #[arg(value_name = "TARGET")]
    pub target: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
