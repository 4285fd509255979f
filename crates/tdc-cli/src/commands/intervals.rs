//! Intervals command for listing the stays derived from the history.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use tdc_core::{StayInterval, build_intervals};

use super::util::load_records;
use crate::Config;

pub fn run<W: Write>(writer: &mut W, config: &Config, as_of: NaiveDate, json: bool) -> Result<()> {
    let records = load_records(config)?;
    let intervals = build_intervals(&records, as_of)?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&intervals)?)?;
    } else {
        write_intervals(writer, &intervals)?;
    }
    Ok(())
}

fn write_intervals<W: Write>(writer: &mut W, intervals: &[StayInterval]) -> std::io::Result<()> {
    writeln!(writer, "COUNTRY\tFROM\tUNTIL\tDAYS")?;
    for interval in intervals {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            interval.country, interval.start, interval.end, interval.days
        )?;
    }
    Ok(())
}
