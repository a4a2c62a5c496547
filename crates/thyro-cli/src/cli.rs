//! CLI argument definitions for the thyroid calculator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "thyro",
    version,
    about = "Thyroid panel calculator - classify TSH/T4/T3 results",
    long_about = "Classify a thyroid function panel (TSH, Free T4, Free T3, Total T4, Total T3)\n\
                  into one of seven outcome categories using fixed reference ranges.\n\n\
                  Educational use only. Not a diagnostic tool. Consult a qualified\n\
                  clinician for decisions."
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

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Allow lab values to appear in logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify one panel of lab values.
    Classify(ClassifyArgs),

    /// Show the effective reference ranges.
    Ranges(RangesArgs),

    /// Enter values interactively and follow the next-step dialogs.
    Guide(GuideArgs),
}

/// Reference range override file shared by every subcommand.
#[derive(Args)]
pub struct RangeFileArg {
    /// TOML file overriding reference ranges or TSH-only cutoffs.
    #[arg(long = "ranges", value_name = "PATH")]
    pub ranges: Option<PathBuf>,
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// TSH (mIU/L).
    #[arg(long, value_name = "VALUE")]
    pub tsh: Option<String>,

    /// Free T4 (ng/dL).
    #[arg(long, value_name = "VALUE")]
    pub ft4: Option<String>,

    /// Free T3 (pg/mL).
    #[arg(long, value_name = "VALUE")]
    pub ft3: Option<String>,

    /// Total T4 (µg/dL).
    #[arg(long, value_name = "VALUE")]
    pub tt4: Option<String>,

    /// Total T3 (ng/dL).
    #[arg(long, value_name = "VALUE")]
    pub tt3: Option<String>,

    #[command(flatten)]
    pub range_file: RangeFileArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct RangesArgs {
    #[command(flatten)]
    pub range_file: RangeFileArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct GuideArgs {
    #[command(flatten)]
    pub range_file: RangeFileArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
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
