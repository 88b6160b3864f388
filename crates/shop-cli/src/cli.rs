//! CLI argument definitions for the shopping trends dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use shop_model::{DEFAULT_BIN_COUNT, DEFAULT_DENSITY_GRID, KnownField, ReportOptions};

#[derive(Parser)]
#[command(
    name = "shop-trends",
    version,
    about = "Shopping trends dashboard - descriptive statistics for purchase records",
    long_about = "Summarize a shopping trends purchase dataset.\n\n\
                  Reports the number of purchases, mean customer age, gender ratio,\n\
                  gender and payment-method distributions, an age histogram and\n\
                  descriptive statistics for every column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Allow customer-level values (category labels) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a purchase dataset.
    Report(ReportArgs),

    /// List the columns of a purchase dataset and the fields they back.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the purchase CSV file.
    #[arg(value_name = "CSV")]
    pub path: PathBuf,

    /// Number of equal-width bins in the age histogram.
    #[arg(long = "bins", default_value_t = DEFAULT_BIN_COUNT)]
    pub bins: usize,

    /// Number of points sampled along the age density curve.
    #[arg(long = "density-grid", default_value_t = DEFAULT_DENSITY_GRID)]
    pub density_grid: usize,

    /// Skip the age density curve.
    #[arg(long = "no-density")]
    pub no_density: bool,

    /// Decimal places for displayed statistics.
    #[arg(long = "precision", default_value_t = 1)]
    pub precision: u32,

    /// Column holding customer age (default: detected from the header).
    #[arg(long = "age-column", value_name = "COLUMN")]
    pub age_column: Option<String>,

    /// Column holding customer gender (default: detected from the header).
    #[arg(long = "gender-column", value_name = "COLUMN")]
    pub gender_column: Option<String>,

    /// Column holding the payment method (default: detected from the header).
    #[arg(long = "payment-column", value_name = "COLUMN")]
    pub payment_column: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

impl ReportArgs {
    /// Report options selected by these flags.
    pub fn options(&self) -> ReportOptions {
        let mut options = ReportOptions::new()
            .with_bin_count(self.bins)
            .with_density(!self.no_density)
            .with_density_grid(self.density_grid)
            .with_precision(self.precision);
        let overrides = [
            (KnownField::Age, &self.age_column),
            (KnownField::Gender, &self.gender_column),
            (KnownField::PaymentMethod, &self.payment_column),
        ];
        for (field, column) in overrides {
            if let Some(column) = column {
                options = options.with_column(field, column.clone());
            }
        }
        options
    }
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Path to the purchase CSV file.
    #[arg(value_name = "CSV")]
    pub path: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
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
