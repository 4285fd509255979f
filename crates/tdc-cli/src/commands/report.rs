//! Report command for printing travel statistics.
//!
//! This module implements `tdc report`: it loads the history, runs the
//! engine and renders the result as localized text or JSON.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use tdc_core::{DisplayRow, ResidencyOutcome, TravelReport, build_report};

use super::util::load_records;
use crate::Config;
use crate::lang::{Language, Side};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

// ========== Public Interface ==========

/// Runs the report command.
///
/// `highlight` turns on bold first visits in the year-by-year section.
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    as_of: NaiveDate,
    json: bool,
    highlight: bool,
) -> Result<()> {
    // Validate settings before touching the history
    let report_config = config.report_config().context("invalid configuration")?;
    let lang = config.language()?;

    let records = load_records(config)?;
    let report = build_report(&records, &report_config, as_of)?;

    if json {
        let output = serde_json::to_string_pretty(&report)?;
        writeln!(writer, "{output}")?;
    } else {
        write_report(writer, &report, lang, highlight)?;
    }
    Ok(())
}

// ========== Text Output ==========

/// Formats a percentage for display.
fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Writes the human-readable report.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &TravelReport,
    lang: Language,
    highlight: bool,
) -> io::Result<()> {
    let (title, subtitle) = lang.header(report.countries_visited, report.as_of);
    writeln!(writer, "{title}")?;
    writeln!(writer, "{subtitle}")?;
    writeln!(writer)?;

    if let Some(home) = &report.home {
        let name = home.name.as_deref().unwrap_or_else(|| home.code.as_str());
        let split = &home.split;
        let inside = lang.home_line(
            Side::Inside,
            name,
            split.inside_days,
            &format!("{:.1}", split.inside_years()),
            &format!("{:.1}", split.inside_pct),
        );
        let outside = lang.home_line(
            Side::Outside,
            name,
            split.outside_days,
            &format!("{:.1}", split.outside_years()),
            &format!("{:.1}", split.outside_pct),
        );
        writeln!(writer, "{inside}")?;
        writeln!(writer, "{outside}")?;
    }

    if let Some(residency) = &report.residency {
        let name = residency
            .name
            .as_deref()
            .or_else(|| residency.code.as_ref().map(|code| code.as_str()))
            .unwrap_or("-");
        let line = match residency.outcome {
            ResidencyOutcome::Duration(duration) => {
                lang.residency_line(name, duration.years, duration.days)
            }
            ResidencyOutcome::BeginsAfterAsOf { begin, .. } => {
                lang.residency_pending_line(name, begin)
            }
        };
        writeln!(writer, "{line}")?;
        writeln!(writer)?;
    }

    write_table(writer, &report.rows, lang)?;

    if let Some(timeline) = &report.timeline {
        writeln!(writer)?;
        writeln!(writer, "{}", lang.chrono_title())?;
        for entry in timeline {
            let countries: Vec<String> = entry
                .countries
                .iter()
                .map(|country| {
                    if highlight && entry.is_first_visit(country) {
                        format!("{BOLD}{country}{RESET}")
                    } else {
                        country.to_string()
                    }
                })
                .collect();
            writeln!(writer, "[{}] {}", entry.year, countries.join(" "))?;
        }
    }

    Ok(())
}

/// Writes the tab-separated country table.
fn write_table<W: Write>(writer: &mut W, rows: &[DisplayRow], lang: Language) -> io::Result<()> {
    writeln!(writer, "{}", lang.table_headers().join("\t"))?;
    for row in rows {
        let cells = match row {
            DisplayRow::Country(row) => vec![
                row.country.to_string(),
                row.total_days.to_string(),
                format_percent(row.percentage),
                format!("{}{}", row.rank, lang.rank_suffix()),
                row.first_visit.to_string(),
                row.last_visit.to_string(),
            ],
            DisplayRow::Other {
                total_days,
                percentage,
                ..
            } => vec![
                lang.other_label().to_string(),
                total_days.to_string(),
                format_percent(*percentage),
            ],
        };
        writeln!(writer, "{}", cells.join("\t"))?;
    }
    Ok(())
}
