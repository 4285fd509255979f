//! Display rows for the country table, with short-mode grouping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aggregate::CountryRow;
use crate::error::StatsError;

/// Stays of at most this many days are grouped into `OTHER` in short mode.
pub const DEFAULT_THRESHOLD: i64 = 7;

/// How much of the country table to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Countries above the threshold individually, the rest as `OTHER`.
    #[default]
    Short,
    /// Every country.
    Full,
}

impl TableStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TableStyle {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "full" => Ok(Self::Full),
            _ => Err(StatsError::InvalidStyle {
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for TableStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TableStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One line of the rendered country table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayRow {
    /// A single country with its full statistics.
    Country(CountryRow),
    /// Every country at or below the threshold, summed.
    Other {
        total_days: i64,
        percentage: f64,
        /// How many countries were grouped.
        countries: usize,
    },
}

impl DisplayRow {
    pub const fn total_days(&self) -> i64 {
        match self {
            Self::Country(row) => row.total_days,
            Self::Other { total_days, .. } => *total_days,
        }
    }
}

/// Builds the display rows from ranked country rows.
///
/// In short mode the `OTHER` row is always emitted, even when nothing falls
/// under `threshold`, so the table layout is stable.
pub fn format_table(rows: &[CountryRow], style: TableStyle, threshold: i64) -> Vec<DisplayRow> {
    match style {
        TableStyle::Full => rows.iter().cloned().map(DisplayRow::Country).collect(),
        TableStyle::Short => {
            let (kept, grouped): (Vec<&CountryRow>, Vec<&CountryRow>) =
                rows.iter().partition(|row| row.total_days > threshold);

            let other = DisplayRow::Other {
                total_days: grouped.iter().map(|row| row.total_days).sum(),
                percentage: grouped.iter().fold(0.0, |acc, row| acc + row.percentage),
                countries: grouped.len(),
            };

            kept.into_iter()
                .cloned()
                .map(DisplayRow::Country)
                .chain([other])
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::aggregate::{CountryTable, aggregate};
    use crate::fixtures::{arb_history, date, entries};
    use crate::interval::build_intervals;

    fn sample_table() -> CountryTable {
        // KR 40, JP 7, TW 12, US 3, KR again 8 days.
        aggregate(
            &build_intervals(
                &entries(&[
                    ("2020-01-01", "KR"),
                    ("2020-02-10", "JP"),
                    ("2020-02-17", "TW"),
                    ("2020-02-29", "US"),
                    ("2020-03-03", "KR"),
                ]),
                date("2020-03-11"),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_full_passes_every_row_through() {
        let table = sample_table();
        let display = format_table(&table.rows, TableStyle::Full, DEFAULT_THRESHOLD);

        assert_eq!(display.len(), table.rows.len());
        assert!(matches!(&display[0], DisplayRow::Country(row) if row.country == "KR"));
    }

    #[test]
    fn test_short_groups_rows_at_or_below_threshold() {
        let table = sample_table();
        let display = format_table(&table.rows, TableStyle::Short, DEFAULT_THRESHOLD);

        let kept: Vec<_> = display
            .iter()
            .filter_map(|row| match row {
                DisplayRow::Country(row) => Some(row.country.as_str()),
                DisplayRow::Other { .. } => None,
            })
            .collect();
        assert_eq!(kept, vec!["KR", "TW"]);

        let Some(DisplayRow::Other {
            total_days,
            countries,
            ..
        }) = display.last()
        else {
            panic!("short table must end with OTHER");
        };
        assert_eq!(*total_days, 7 + 3);
        assert_eq!(*countries, 2);
    }

    #[test]
    fn test_short_and_full_sum_to_grand_total() {
        let table = sample_table();
        for threshold in [0, 3, 7, 12, 100] {
            let short: i64 = format_table(&table.rows, TableStyle::Short, threshold)
                .iter()
                .map(DisplayRow::total_days)
                .sum();
            assert_eq!(short, table.grand_total_days, "threshold {threshold}");
        }
        let full: i64 = format_table(&table.rows, TableStyle::Full, DEFAULT_THRESHOLD)
            .iter()
            .map(DisplayRow::total_days)
            .sum();
        assert_eq!(full, table.grand_total_days);
    }

    #[test]
    fn test_short_emits_empty_other_when_nothing_grouped() {
        let table = sample_table();
        let display = format_table(&table.rows, TableStyle::Short, 0);

        assert_eq!(display.len(), table.rows.len() + 1);
        assert_eq!(
            display.last(),
            Some(&DisplayRow::Other {
                total_days: 0,
                percentage: 0.0,
                countries: 0,
            })
        );
    }

    #[test]
    fn test_other_percentage_sums_grouped_rows() {
        let table = sample_table();
        let display = format_table(&table.rows, TableStyle::Short, DEFAULT_THRESHOLD);

        let expected: f64 = table
            .rows
            .iter()
            .filter(|row| row.total_days <= DEFAULT_THRESHOLD)
            .map(|row| row.percentage)
            .sum();
        let Some(DisplayRow::Other { percentage, .. }) = display.last() else {
            panic!("missing OTHER row");
        };
        assert!((percentage - expected).abs() < 1e-9);
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("short".parse::<TableStyle>().unwrap(), TableStyle::Short);
        assert_eq!("full".parse::<TableStyle>().unwrap(), TableStyle::Full);
        assert_eq!(
            "Full".parse::<TableStyle>().unwrap_err(),
            StatsError::InvalidStyle {
                value: "Full".to_string()
            }
        );
    }

    proptest! {
        #[test]
        fn prop_short_table_resums_to_grand_total(
            (records, as_of) in arb_history(),
            threshold in -10i64..500,
        ) {
            let table = aggregate(&build_intervals(&records, as_of).unwrap());
            let display = format_table(&table.rows, TableStyle::Short, threshold);

            let total: i64 = display.iter().map(DisplayRow::total_days).sum();
            prop_assert_eq!(total, table.grand_total_days);

            let Some(DisplayRow::Other { countries, .. }) = display.last() else {
                panic!("short table must end with OTHER");
            };
            prop_assert_eq!(display.len() - 1 + countries, table.rows.len());
            for row in &display[..display.len() - 1] {
                prop_assert!(matches!(row, DisplayRow::Country(row) if row.total_days > threshold));
            }
        }
    }
}
