//! Command implementations for the heatmap CLI.
//!
//! Provides subcommands for checking a daily temperature CSV, printing its
//! aggregates, and dumping the frames both heatmaps would draw.

use anyhow::Context;
use clap::Subcommand;
use heat_data::loader::{load_daily_records, LoadReport};
use heat_data::TemperatureField;

pub mod frames;
pub mod inspect;

#[derive(Subcommand)]
pub enum Command {
    /// Load a CSV and report accepted and rejected rows
    Validate {
        /// Path to the daily temperature CSV
        #[arg(short = 'c', long)]
        csv: String,
    },

    /// Print per-month max/min summaries over the whole file
    Summary {
        /// Path to the daily temperature CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// Emit JSON instead of CSV
        #[arg(long)]
        json: bool,
    },

    /// Print the retained year window and the day count of each bucket
    Buckets {
        /// Path to the daily temperature CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// Number of most recent years to retain
        #[arg(short = 'y', long, default_value_t = heat_data::aggregate::RETAINED_YEARS)]
        years: u32,
    },

    /// Render both heatmaps and print every frame as one JSON object per line
    Frames {
        /// Path to the daily temperature CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// Temperature field to color by ("max" or "min")
        #[arg(short = 'f', long, default_value = "max")]
        field: TemperatureField,

        /// Optional view configuration JSON file
        #[arg(long)]
        config: Option<String>,

        /// After the first render, switch to the other field and print those frames too
        #[arg(long)]
        toggle: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Validate { csv } => inspect::run_validate(&csv, &mut out),
        Command::Summary { csv, json } => inspect::run_summary(&csv, json, &mut out),
        Command::Buckets { csv, years } => inspect::run_buckets(&csv, years, &mut out),
        Command::Frames {
            csv,
            field,
            config,
            toggle,
        } => frames::run_frames(&csv, field, config.as_deref(), toggle, &mut out),
    }
}

/// Read and validate a CSV file from disk.
pub(crate) fn read_records(path: &str) -> anyhow::Result<LoadReport> {
    let csv_data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path))?;
    load_daily_records(&csv_data).with_context(|| format!("failed to load {}", path))
}
