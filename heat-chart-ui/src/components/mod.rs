//! Reusable Dioxus RSX components for the heatmap apps.

mod chart_container;
mod chart_header;
mod error_display;
mod load_stats_notice;
mod loading_spinner;
mod temperature_mode_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use load_stats_notice::LoadStatsNotice;
pub use loading_spinner::LoadingSpinner;
pub use temperature_mode_selector::TemperatureModeSelector;
