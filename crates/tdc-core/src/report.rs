//! The complete travel statistics report.
//!
//! [`build_report`] wires the engine together:
//!
//! 1. Build stay intervals from the entry records
//! 2. Aggregate them into ranked country rows
//! 3. Derive the optional home/abroad and residency sections
//! 4. Shape the table rows and the optional year-by-year timeline

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregate::aggregate;
use crate::config::{ReportConfig, ReportStyle};
use crate::error::StatsError;
use crate::home::{HomeAbroadSplit, split_home_abroad};
use crate::interval::build_intervals;
use crate::record::EntryRecord;
use crate::residency::{ResidencyDuration, residency_duration};
use crate::table::{DisplayRow, TableStyle, format_table};
use crate::timeline::{ChronoEntry, group_by_year};
use crate::types::CountryCode;

/// Home/abroad section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeReport {
    pub code: CountryCode,
    pub name: Option<String>,
    #[serde(flatten)]
    pub split: HomeAbroadSplit,
}

/// Result of the residency computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResidencyOutcome {
    Duration(ResidencyDuration),
    /// The configured start lies in the future; only this section is dropped.
    BeginsAfterAsOf { begin: NaiveDate, as_of: NaiveDate },
}

/// Residency section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidencyReport {
    pub code: Option<CountryCode>,
    pub name: Option<String>,
    pub begin: NaiveDate,
    pub outcome: ResidencyOutcome,
}

/// Language-neutral report data, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelReport {
    pub as_of: NaiveDate,
    pub first_entry: NaiveDate,
    pub grand_total_days: i64,
    pub countries_visited: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<HomeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residency: Option<ResidencyReport>,
    pub table_style: TableStyle,
    pub rows: Vec<DisplayRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<ChronoEntry>>,
}

/// Computes the full report for `records` as of `as_of`.
///
/// Fails only on fatal conditions; see [`StatsError`]. A residency start
/// after `as_of` degrades that section to [`ResidencyOutcome::BeginsAfterAsOf`].
pub fn build_report(
    records: &[EntryRecord],
    config: &ReportConfig,
    as_of: NaiveDate,
) -> Result<TravelReport, StatsError> {
    let intervals = build_intervals(records, as_of)?;
    let table = aggregate(&intervals);

    let home = config.home.as_ref().map(|home| HomeReport {
        code: home.code.clone(),
        name: home.name.clone(),
        split: split_home_abroad(&table, home.code.as_str()),
    });

    let residency = config.residency.as_ref().map(|residency| {
        let outcome = match residency_duration(residency.begin, as_of) {
            Ok(duration) => ResidencyOutcome::Duration(duration),
            Err(err) => {
                tracing::warn!(error = %err, "skipping residency section");
                ResidencyOutcome::BeginsAfterAsOf {
                    begin: residency.begin,
                    as_of,
                }
            }
        };
        ResidencyReport {
            code: residency.code.clone(),
            name: residency.name.clone(),
            begin: residency.begin,
            outcome,
        }
    });

    let timeline = match config.report_style {
        ReportStyle::Chrono => Some(group_by_year(&intervals)),
        ReportStyle::Disabled => None,
    };

    let first_entry = intervals.first().map_or(as_of, |interval| interval.start);
    let rows = format_table(&table.rows, config.table_style, config.threshold);

    tracing::debug!(
        rows = rows.len(),
        grand_total_days = table.grand_total_days,
        "report ready"
    );
    Ok(TravelReport {
        as_of,
        first_entry,
        grand_total_days: table.grand_total_days,
        countries_visited: table.rows.len(),
        home,
        residency,
        table_style: config.table_style,
        rows,
        timeline,
    })
}
