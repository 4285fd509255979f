//! Per-country aggregation of stay intervals.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::interval::StayInterval;
use crate::types::CountryCode;

/// Statistics for a single country across the whole history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRow {
    pub country: CountryCode,
    /// Sum of all stays in this country.
    pub total_days: i64,
    /// Share of the grand total, in percent (0–100), unrounded.
    pub percentage: f64,
    /// 1-based competition rank by `total_days`; equal totals share a rank.
    pub rank: usize,
    /// Earliest arrival.
    pub first_visit: NaiveDate,
    /// Latest arrival (not the latest departure).
    pub last_visit: NaiveDate,
}

/// All country rows plus the grand total they are measured against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryTable {
    /// Days from the first entry to the as-of date.
    pub grand_total_days: i64,
    /// Ordered by `total_days` descending, then country code ascending.
    pub rows: Vec<CountryRow>,
}

impl CountryTable {
    /// Looks up the row for `country`.
    pub fn row(&self, country: &str) -> Option<&CountryRow> {
        self.rows.iter().find(|row| row.country == country)
    }
}

/// Running totals while folding intervals.
struct Tally {
    days: i64,
    first: NaiveDate,
    last: NaiveDate,
}

/// Percentage of `part` in `whole`; zero when `whole` is zero.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn percent_of(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Aggregates intervals into ranked country rows.
///
/// Intervals are expected in chronological order, as produced by
/// [`build_intervals`](crate::build_intervals).
pub fn aggregate(intervals: &[StayInterval]) -> CountryTable {
    let grand_total_days = match (intervals.first(), intervals.last()) {
        (Some(first), Some(last)) => (last.end - first.start).num_days(),
        _ => 0,
    };

    let mut tallies: HashMap<&CountryCode, Tally> = HashMap::new();
    for interval in intervals {
        tallies
            .entry(&interval.country)
            .and_modify(|tally| {
                tally.days += interval.days;
                tally.first = tally.first.min(interval.start);
                tally.last = tally.last.max(interval.start);
            })
            .or_insert(Tally {
                days: interval.days,
                first: interval.start,
                last: interval.start,
            });
    }

    let mut sorted: Vec<(&CountryCode, Tally)> = tallies.into_iter().collect();
    sorted.sort_by(|(a_code, a), (b_code, b)| {
        b.days.cmp(&a.days).then_with(|| a_code.cmp(b_code))
    });

    let mut rows: Vec<CountryRow> = Vec::with_capacity(sorted.len());
    for (index, (country, tally)) in sorted.into_iter().enumerate() {
        let rank = match rows.last() {
            Some(prev) if prev.total_days == tally.days => prev.rank,
            _ => index + 1,
        };
        rows.push(CountryRow {
            country: country.clone(),
            total_days: tally.days,
            percentage: percent_of(tally.days, grand_total_days),
            rank,
            first_visit: tally.first,
            last_visit: tally.last,
        });
    }

    tracing::debug!(countries = rows.len(), grand_total_days, "aggregated countries");
    CountryTable {
        grand_total_days,
        rows,
    }
}
