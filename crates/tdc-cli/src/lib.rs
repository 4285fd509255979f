//! Travel day counter CLI library.
//!
//! This crate provides the CLI interface: history ingestion, configuration
//! loading and rendering of the reports computed by `tdc-core`.

mod cli;
pub mod commands;
mod config;
pub mod history;
pub mod lang;

pub use cli::{Cli, Commands, HistoryArgs, IntervalsArgs, ReportArgs};
pub use config::{Config, ConfigOverrides};
