//! Daily temperature records and their year/month projections.
//!
//! This crate provides:
//! - `record`: the parsed `DailyRecord` and the date format it is read with
//! - `field`: the `TemperatureField` selector shared by every view
//! - `loader`: CSV parsing with per-row validation and load statistics
//! - `aggregate`: monthly summaries, monthly day buckets, windowing and extents
//!
//! # Usage
//!
//! ```rust
//! use heat_data::{aggregate, loader};
//!
//! let csv = "date,max_temperature,min_temperature\n2020-01-15,10,2\n2020-01-20,15,-1\n";
//! let report = loader::load_daily_records(csv).unwrap();
//! let summaries = aggregate::summarize(&report.records);
//! assert_eq!(summaries.len(), 1);
//! assert_eq!(summaries[0].max, 15.0);
//! ```

pub mod aggregate;
pub mod error;
pub mod field;
pub mod loader;
pub mod record;

pub use error::LoadError;
pub use field::TemperatureField;
pub use record::DailyRecord;
