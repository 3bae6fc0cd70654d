//! CSV loading for daily temperature series.
//!
//! # CSV Format
//!
//! Headers are required and columns are located by name, so order is free
//! and extra columns are ignored:
//!
//! ```text
//! date,max_temperature,min_temperature
//! 2020-01-15,10,2
//! 2020-01-20,15,-1
//! ```
//!
//! Rows whose date or temperatures fail to parse are dropped and counted in
//! [`LoadStats`] instead of leaking `NaN` into the scales downstream.

use crate::error::LoadError;
use crate::record::{parse_date, DailyRecord};
use serde::Serialize;

pub const DATE_COLUMN: &str = "date";
pub const MAX_COLUMN: &str = "max_temperature";
pub const MIN_COLUMN: &str = "min_temperature";

/// Only the first few row errors are kept for display.
pub const MAX_REPORTED_ERRORS: usize = 20;

/// Parsed records plus what happened to the rows that did not make it.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub records: Vec<DailyRecord>,
    pub stats: LoadStats,
}

/// Row accounting for one CSV load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadStats {
    /// Data rows encountered (header excluded)
    pub rows_read: usize,
    pub rows_accepted: usize,
    pub rows_rejected: usize,
    /// Accepted rows where max_temperature < min_temperature
    pub inverted_rows: usize,
    /// First [`MAX_REPORTED_ERRORS`] rejection reasons
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Accepted rows as a percentage of rows read.
    pub fn success_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.rows_accepted as f64 / self.rows_read as f64) * 100.0
        }
    }

    fn reject(&mut self, row: usize, reason: String) {
        self.rows_rejected += 1;
        if self.errors.len() < MAX_REPORTED_ERRORS {
            self.errors.push(format!("row {}: {}", row, reason));
        }
    }
}

struct Columns {
    date: usize,
    max: usize,
    min: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        Ok(Self {
            date: find(DATE_COLUMN)?,
            max: find(MAX_COLUMN)?,
            min: find(MIN_COLUMN)?,
        })
    }
}

fn parse_temperature(raw: Option<&str>, column: &str) -> Result<f64, String> {
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Err(format!("{} is empty", column));
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(format!("{} is not finite: '{}'", column, raw)),
        Err(_) => Err(format!("{} is not a number: '{}'", column, raw)),
    }
}

/// Parse a temperature CSV into daily records.
///
/// Fails on transport-level CSV errors, on a missing required column, and
/// when no row survives validation.
pub fn load_daily_records(csv_data: &str) -> Result<LoadReport, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let columns = Columns::locate(rdr.headers()?)?;

    let mut records = Vec::new();
    let mut stats = LoadStats::default();
    for (index, result) in rdr.records().enumerate() {
        let r = result?;
        let row = index + 1;
        stats.rows_read += 1;

        let date = match parse_date(r.get(columns.date).unwrap_or("")) {
            Ok(d) => d,
            Err(e) => {
                stats.reject(row, format!("bad date '{}': {}", r.get(columns.date).unwrap_or(""), e));
                continue;
            }
        };
        let max_temperature = match parse_temperature(r.get(columns.max), MAX_COLUMN) {
            Ok(v) => v,
            Err(reason) => {
                stats.reject(row, reason);
                continue;
            }
        };
        let min_temperature = match parse_temperature(r.get(columns.min), MIN_COLUMN) {
            Ok(v) => v,
            Err(reason) => {
                stats.reject(row, reason);
                continue;
            }
        };

        let record = DailyRecord::new(date, max_temperature, min_temperature);
        if record.is_inverted() {
            stats.inverted_rows += 1;
        }
        records.push(record);
        stats.rows_accepted += 1;
    }

    if stats.rows_rejected > 0 {
        log::warn!(
            "loader: rejected {} of {} rows ({:.1}% accepted)",
            stats.rows_rejected,
            stats.rows_read,
            stats.success_rate()
        );
    }
    if stats.inverted_rows > 0 {
        log::warn!(
            "loader: {} rows have max_temperature below min_temperature",
            stats.inverted_rows
        );
    }
    if records.is_empty() {
        return Err(LoadError::NoValidRows {
            read: stats.rows_read,
            rejected: stats.rows_rejected,
        });
    }
    log::info!("loader: Loaded {} daily records", records.len());

    Ok(LoadReport { records, stats })
}
