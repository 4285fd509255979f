//! Errors raised by the statistics engine.

use chrono::NaiveDate;
use thiserror::Error;

/// Fatal conditions that stop a statistics run.
///
/// Degenerate but valid inputs (a home country never visited, a zero-day
/// history) are not errors; they resolve to zero values instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// No entry records were supplied.
    #[error("travel history is empty: at least one entry record is required")]
    EmptyHistory,

    /// The as-of date precedes the most recent entry.
    #[error("as-of date {as_of} is earlier than the latest entry on {last_entry}")]
    InvalidAsOfDate {
        as_of: NaiveDate,
        last_entry: NaiveDate,
    },

    /// The residency start date lies after the as-of date.
    #[error("residency begins on {begin}, after the as-of date {as_of}")]
    InvalidResidencyDate { begin: NaiveDate, as_of: NaiveDate },

    /// Unrecognized table style.
    #[error("invalid table style: {value} (expected \"short\" or \"full\")")]
    InvalidStyle { value: String },

    /// Unrecognized report style.
    #[error("invalid report style: {value} (expected \"chrono\" or \"disabled\")")]
    InvalidReportStyle { value: String },

    /// A setting required by an enabled section is absent.
    #[error("{setting} is required when {section} is enabled")]
    MissingSetting {
        setting: &'static str,
        section: &'static str,
    },
}
