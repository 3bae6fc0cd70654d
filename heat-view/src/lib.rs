//! View controllers for the temperature heatmaps.
//!
//! Nothing in this crate touches the DOM. Each controller turns its
//! aggregated dataset into serializable frames (`frame`) that a
//! [`coordinator::RenderSink`] hands to the charting layer:
//! - `summary`: the year×month summary heatmap over the full dataset
//! - `daily`: the recent-years heatmap with per-cell mini line charts
//! - `coordinator`: fans a temperature-mode selection out to every view
//! - `scale`, `color`: band, linear and sequential color scales
//! - `scene`: keyed enter/update/exit reconciliation of rendered cells
//! - `config`: layout and behavior knobs, deserializable from JSON

pub mod color;
pub mod config;
pub mod coordinator;
pub mod daily;
pub mod error;
pub mod frame;
pub mod legend;
pub mod scale;
pub mod scene;
pub mod summary;
pub mod tooltip;
pub mod transition;

pub use config::ViewConfig;
pub use coordinator::{HeatmapView, ModeCoordinator, RenderSink};
pub use daily::DailyHeatmap;
pub use error::ViewError;
pub use summary::SummaryHeatmap;

/// Abbreviated month names, index 0 = January.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Abbreviated name of a 1-based month, or the number itself when out of range.
pub fn month_label(month: u32) -> String {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_ABBREVIATIONS.get(i as usize))
        .map(|s| s.to_string())
        .unwrap_or_else(|| month.to_string())
}
