//! Stay interval construction.
//!
//! Entry records only say when the traveler *arrived* somewhere. A stay in a
//! country lasts from its entry date up to the next entry date, and the most
//! recent stay runs until the as-of date. The resulting intervals tile the
//! whole history without gaps or overlaps.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::StatsError;
use crate::record::EntryRecord;
use crate::types::CountryCode;

/// Continuous presence in one country over `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StayInterval {
    pub country: CountryCode,
    /// Arrival date (inclusive).
    pub start: NaiveDate,
    /// Departure date (exclusive); the next arrival or the as-of date.
    pub end: NaiveDate,
    /// `end - start` in days. Zero for same-day duplicates.
    pub days: i64,
}

/// Builds stay intervals from an unordered list of entries.
///
/// Records are stable-sorted by date, so several entries on one day keep
/// their input order; every one of them except the last yields a zero-day
/// interval. The last interval ends on `as_of`.
pub fn build_intervals(
    records: &[EntryRecord],
    as_of: NaiveDate,
) -> Result<Vec<StayInterval>, StatsError> {
    let mut sorted: Vec<&EntryRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.date);

    let Some(last) = sorted.last() else {
        return Err(StatsError::EmptyHistory);
    };
    if as_of < last.date {
        return Err(StatsError::InvalidAsOfDate {
            as_of,
            last_entry: last.date,
        });
    }

    let ends = sorted.iter().skip(1).map(|next| next.date).chain([as_of]);
    let intervals: Vec<StayInterval> = sorted
        .iter()
        .zip(ends)
        .map(|(record, end)| StayInterval {
            country: record.country.clone(),
            start: record.date,
            end,
            days: (end - record.date).num_days(),
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        intervals = intervals.len(),
        %as_of,
        "built stay intervals"
    );
    Ok(intervals)
}
