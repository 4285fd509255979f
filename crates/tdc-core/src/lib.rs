//! Travel statistics engine.
//!
//! This crate turns a log of country entries into travel statistics:
//! - Intervals: stays between consecutive entries, up to an as-of date
//! - Aggregation: per-country totals, percentages, ranks, visit dates
//! - Home/abroad and residency splits
//! - Table shaping (short/full) and the year-by-year timeline
//!
//! Everything here is pure computation over calendar dates. Reading the
//! history, loading settings and rendering text live in `tdc-cli`.

mod aggregate;
pub mod config;
mod error;
mod home;
mod interval;
mod record;
pub mod report;
mod residency;
mod table;
mod timeline;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use aggregate::{CountryRow, CountryTable, aggregate};
pub use config::{HomeConfig, ReportConfig, ReportStyle, ResidencyConfig};
pub use error::StatsError;
pub use home::{HomeAbroadSplit, split_home_abroad};
pub use interval::{StayInterval, build_intervals};
pub use record::EntryRecord;
pub use report::{HomeReport, ResidencyOutcome, ResidencyReport, TravelReport, build_report};
pub use residency::{ResidencyDuration, residency_duration};
pub use table::{DEFAULT_THRESHOLD, DisplayRow, TableStyle, format_table};
pub use timeline::{ChronoEntry, group_by_year};
pub use types::{CountryCode, ValidationError};
