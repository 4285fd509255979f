//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::ConfigOverrides;

/// Travel day counter.
///
/// Turns a log of country entries into per-country day totals, a home/abroad
/// split, residency time and a year-by-year report.
#[derive(Debug, Parser)]
#[command(name = "tdc", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (TOML, or JSON with a .json extension).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print travel statistics.
    Report(ReportArgs),

    /// List the stay intervals derived from the history.
    Intervals(IntervalsArgs),
}

/// Options shared by every command that reads the history.
#[derive(Debug, Clone, Args)]
pub struct HistoryArgs {
    /// Measure open stays up to this date instead of today (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// History file with DATE,ENTERED columns.
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub history: HistoryArgs,

    /// Output language: en, ko, ko-hanja or zh.
    #[arg(long)]
    pub lang: Option<String>,

    /// Country table style: short or full.
    #[arg(long)]
    pub table_style: Option<String>,

    /// Year-by-year section: chrono or disabled.
    #[arg(long)]
    pub report_style: Option<String>,

    /// Stays of at most this many days are grouped as OTHER in the short table.
    #[arg(long, value_name = "DAYS")]
    pub threshold: Option<i64>,
}

impl ReportArgs {
    /// Settings given on the command line, for layering over the config.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source: self.history.source.clone(),
            lang: self.lang.clone(),
            table_style: self.table_style.clone(),
            report_style: self.report_style.clone(),
            threshold: self.threshold,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct IntervalsArgs {
    #[command(flatten)]
    pub history: HistoryArgs,
}

impl IntervalsArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source: self.history.source.clone(),
            ..ConfigOverrides::default()
        }
    }
}
