//! Read-only reports over a daily temperature CSV.

use crate::read_records;
use anyhow::Context;
use heat_data::aggregate::{bucket_daily, filter_window, retained_window, summarize};
use heat_data::loader::LoadStats;
use heat_data::TemperatureField;
use log::info;
use std::io::Write;

fn write_stats<W: Write>(stats: &LoadStats, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "rows read:     {}", stats.rows_read)?;
    writeln!(
        out,
        "rows accepted: {} ({:.1}%)",
        stats.rows_accepted,
        stats.success_rate()
    )?;
    writeln!(out, "rows rejected: {}", stats.rows_rejected)?;
    writeln!(out, "max < min:     {}", stats.inverted_rows)?;
    for error in &stats.errors {
        writeln!(out, "  {}", error)?;
    }
    Ok(())
}

/// Load the CSV and print its row accounting.
pub fn run_validate<W: Write>(csv_path: &str, out: &mut W) -> anyhow::Result<()> {
    let report = read_records(csv_path)?;
    write_stats(&report.stats, out)?;
    Ok(())
}

/// Print one row per (year, month), chronologically.
pub fn run_summary<W: Write>(csv_path: &str, json: bool, out: &mut W) -> anyhow::Result<()> {
    let report = read_records(csv_path)?;
    let summaries = summarize(&report.records);
    info!("{} monthly summaries from {}", summaries.len(), csv_path);

    if json {
        serde_json::to_writer_pretty(&mut *out, &summaries)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut writer = csv::Writer::from_writer(&mut *out);
    for summary in &summaries {
        writer.serialize(summary)?;
    }
    writer.flush().context("failed to write summaries")?;
    Ok(())
}

/// Print the retained window, then each bucket's day count and extremes.
pub fn run_buckets<W: Write>(csv_path: &str, years: u32, out: &mut W) -> anyhow::Result<()> {
    let report = read_records(csv_path)?;
    let Some(window) = retained_window(&report.records, years) else {
        anyhow::bail!("{} has no records", csv_path);
    };
    let retained = filter_window(&report.records, &window);
    let buckets = bucket_daily(&retained);

    writeln!(
        out,
        "window: {}-{} ({} of {} records)",
        window.first_year,
        window.last_year,
        retained.len(),
        report.records.len()
    )?;
    for bucket in &buckets {
        let max = bucket.aggregate(TemperatureField::Max).unwrap_or(f64::NAN);
        let min = bucket.aggregate(TemperatureField::Min).unwrap_or(f64::NAN);
        writeln!(
            out,
            "{}\t{} days\tmax {:.1}\tmin {:.1}",
            bucket.key(),
            bucket.days.len(),
            max,
            min
        )?;
    }
    Ok(())
}
