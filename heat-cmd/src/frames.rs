//! Dumps the frames both heatmaps produce, one JSON object per line.
//!
//! Each line is `{"kind": "matrix" | "legend", "frame": {...}}`, in the order
//! the coordinator emits them (matrix then legend, summary view first).

use crate::read_records;
use anyhow::Context;
use heat_data::aggregate::summarize;
use heat_data::TemperatureField;
use heat_view::frame::{LegendFrame, MatrixFrame};
use heat_view::{DailyHeatmap, ModeCoordinator, RenderSink, SummaryHeatmap, ViewConfig};
use serde_json::json;
use std::io::Write;

pub const SUMMARY_MOUNT: &str = "summary-heatmap";
pub const DAILY_MOUNT: &str = "daily-heatmap";

/// `RenderSink` writing JSON lines; the first write error is kept and
/// later frames are dropped.
pub struct JsonLinesSink<W: Write> {
    out: W,
    written: usize,
    error: Option<anyhow::Error>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            error: None,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(self) -> anyhow::Result<usize> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.written),
        }
    }

    fn write_line(&mut self, kind: &str, frame: serde_json::Result<serde_json::Value>) {
        if self.error.is_some() {
            return;
        }
        let result = frame
            .context("failed to serialize frame")
            .and_then(|frame| {
                let line = json!({ "kind": kind, "frame": frame });
                writeln!(self.out, "{}", line).context("failed to write frame")
            });
        match result {
            Ok(()) => self.written += 1,
            Err(e) => self.error = Some(e),
        }
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn draw_matrix(&mut self, frame: &MatrixFrame) {
        self.write_line("matrix", serde_json::to_value(frame));
    }

    fn draw_legend(&mut self, frame: &LegendFrame) {
        self.write_line("legend", serde_json::to_value(frame));
    }
}

fn load_config(path: Option<&str>) -> anyhow::Result<ViewConfig> {
    let Some(path) = path else {
        return Ok(ViewConfig::default());
    };
    let json = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    ViewConfig::from_json(&json).with_context(|| format!("invalid view config {}", path))
}

/// Render both heatmaps for `field`, and with `toggle` switch to the other
/// field afterwards, writing every frame to `out`.
pub fn run_frames<W: Write>(
    csv_path: &str,
    field: TemperatureField,
    config_path: Option<&str>,
    toggle: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let report = read_records(csv_path)?;

    let summary = SummaryHeatmap::new(SUMMARY_MOUNT, summarize(&report.records), &config)?;
    let daily = DailyHeatmap::from_records(DAILY_MOUNT, &report.records, &config)?;
    let mut coordinator = ModeCoordinator::new(field)
        .with_view(Box::new(summary))
        .with_view(Box::new(daily));

    let mut sink = JsonLinesSink::new(out);
    coordinator.render(&mut sink);
    if toggle {
        let other = match field {
            TemperatureField::Max => TemperatureField::Min,
            TemperatureField::Min => TemperatureField::Max,
        };
        coordinator.select(other, &mut sink);
    }
    let written = sink.finish()?;
    log::info!("wrote {} frames", written);
    Ok(())
}
