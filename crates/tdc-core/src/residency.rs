//! Residency duration as whole calendar years plus remaining days.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::error::StatsError;

/// Elapsed residency time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResidencyDuration {
    /// Whole anniversaries passed.
    pub years: u32,
    /// Days since the last anniversary.
    pub days: i64,
}

/// Splits `[begin, as_of)` into calendar years and leftover days.
///
/// A year is counted on each anniversary (same month and day). A Feb 29
/// start has its anniversary on Feb 28 in common years.
pub fn residency_duration(
    begin: NaiveDate,
    as_of: NaiveDate,
) -> Result<ResidencyDuration, StatsError> {
    if begin > as_of {
        return Err(StatsError::InvalidResidencyDate { begin, as_of });
    }

    let mut years = u32::try_from(as_of.year() - begin.year()).unwrap_or(0);
    let mut anniversary = add_years(begin, years);
    while anniversary > as_of && years > 0 {
        years -= 1;
        anniversary = add_years(begin, years);
    }

    Ok(ResidencyDuration {
        years,
        days: (as_of - anniversary).num_days(),
    })
}

fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MAX)
}
