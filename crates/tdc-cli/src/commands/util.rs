//! Shared utilities for CLI commands.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use tdc_core::EntryRecord;

use crate::Config;
use crate::history::load_history;

/// The as-of date for a run: the given date, or today's local date.
pub fn resolve_as_of(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Local::now().date_naive())
}

/// Loads the history file named by the configuration.
pub fn load_records(config: &Config) -> Result<Vec<EntryRecord>> {
    load_history(&config.source).context("failed to load travel history")
}
