//! Year-by-year grouping of arrivals for the chronological report.

use std::collections::HashSet;

use chrono::Datelike;
use serde::Serialize;

use crate::interval::StayInterval;
use crate::types::CountryCode;

/// Countries arrived in during one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChronoEntry {
    pub year: i32,
    /// Distinct codes in order of first arrival within the year.
    pub countries: Vec<CountryCode>,
    /// Subset of `countries` never arrived in during an earlier year.
    pub first_visits: Vec<CountryCode>,
}

impl ChronoEntry {
    /// Whether `country` was visited for the first time ever this year.
    pub fn is_first_visit(&self, country: &CountryCode) -> bool {
        self.first_visits.contains(country)
    }
}

/// Groups interval start dates by year, ascending.
///
/// Years without any arrival are omitted.
pub fn group_by_year(intervals: &[StayInterval]) -> Vec<ChronoEntry> {
    let mut by_start: Vec<&StayInterval> = intervals.iter().collect();
    by_start.sort_by_key(|interval| interval.start);

    let mut entries: Vec<ChronoEntry> = Vec::new();
    let mut seen: HashSet<&CountryCode> = HashSet::new();

    for interval in by_start {
        let year = interval.start.year();
        if entries.last().is_none_or(|entry| entry.year != year) {
            entries.push(ChronoEntry {
                year,
                countries: Vec::new(),
                first_visits: Vec::new(),
            });
        }
        let Some(entry) = entries.last_mut() else {
            continue;
        };

        if !entry.countries.contains(&interval.country) {
            entry.countries.push(interval.country.clone());
        }
        if seen.insert(&interval.country) {
            entry.first_visits.push(interval.country.clone());
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{code, date, entries};
    use crate::interval::build_intervals;

    fn codes(list: &[&str]) -> Vec<CountryCode> {
        list.iter().map(|c| code(c)).collect()
    }

    #[test]
    fn test_one_entry_per_arrival_year() {
        let intervals = build_intervals(
            &entries(&[
                ("2000-01-01", "XX"),
                ("2010-01-01", "YY"),
                ("2015-06-01", "ZZ"),
                ("2016-01-01", "YY"),
            ]),
            date("2021-01-01"),
        )
        .unwrap();
        let timeline = group_by_year(&intervals);

        let years: Vec<_> = timeline.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2000, 2010, 2015, 2016]);
        for entry in &timeline {
            assert_eq!(entry.countries.len(), 1);
        }
        assert_eq!(timeline[3].countries, codes(&["YY"]));
        assert!(timeline[3].first_visits.is_empty());
    }

    #[test]
    fn test_repeat_visits_within_year_keep_first_order() {
        let intervals = build_intervals(
            &entries(&[
                ("2019-01-05", "KR"),
                ("2019-02-01", "JP"),
                ("2019-02-10", "KR"),
                ("2019-06-01", "TW"),
                ("2019-07-01", "JP"),
                ("2020-01-03", "TW"),
                ("2020-03-01", "US"),
            ]),
            date("2020-12-31"),
        )
        .unwrap();
        let timeline = group_by_year(&intervals);

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].countries, codes(&["KR", "JP", "TW"]));
        assert_eq!(timeline[0].first_visits, codes(&["KR", "JP", "TW"]));
        assert_eq!(timeline[1].countries, codes(&["TW", "US"]));
        assert_eq!(timeline[1].first_visits, codes(&["US"]));
        assert!(timeline[1].is_first_visit(&code("US")));
        assert!(!timeline[1].is_first_visit(&code("TW")));
    }

    #[test]
    fn test_empty_intervals_give_empty_timeline() {
        assert!(group_by_year(&[]).is_empty());
    }
}
