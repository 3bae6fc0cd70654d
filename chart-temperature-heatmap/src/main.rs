//! Daily Temperature Heatmaps
//!
//! Two heatmaps over one daily temperature series: a year×month grid of
//! monthly extremes over every year in the file, and a grid of the last ten
//! years where each month cell carries a mini line chart of its daily max
//! and min. The "max"/"min" radio group recolors both and rescales both
//! legends.
//!
//! Data flow:
//! 1. On mount, `daily_temperature.csv` (served next to the WASM bundle from
//!    `public/`) is fetched once.
//! 2. The CSV is parsed and validated, then summarized and bucketed into the
//!    two view controllers, owned by a `ModeCoordinator`.
//! 3. Whenever loading finishes or the selected field changes, the
//!    coordinator emits matrix and legend frames for both views, which the
//!    D3.js scripts reconcile into the SVGs.
//!
//! D3.js must be on the page (see `Dioxus.toml`).

use anyhow::Context;
use dioxus::prelude::*;
use heat_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadStatsNotice, LoadingSpinner,
    TemperatureModeSelector,
};
use heat_chart_ui::js_bridge;
use heat_chart_ui::sink::JsRenderSink;
use heat_chart_ui::state::AppState;
use heat_data::loader::{load_daily_records, LoadStats};
use heat_data::{aggregate, TemperatureField};
use heat_view::{DailyHeatmap, ModeCoordinator, SummaryHeatmap, ViewConfig};
use std::cell::RefCell;
use std::rc::Rc;

/// Daily max/min temperatures, fetched at runtime.
const TEMPERATURE_CSV_URL: &str = "./daily_temperature.csv";

/// Chart container DOM element IDs used by D3.js to render into.
const SUMMARY_CHART_ID: &str = "summary-heatmap";
const DAILY_CHART_ID: &str = "daily-heatmap";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("temperature-heatmap-root"))
        .launch(App);
}

/// Parse the CSV and build both views behind one coordinator.
fn build_coordinator(
    csv_data: &str,
    field: TemperatureField,
    config: &ViewConfig,
) -> anyhow::Result<(ModeCoordinator, LoadStats)> {
    let report = load_daily_records(csv_data).context("failed to parse temperature CSV")?;

    let summaries = aggregate::summarize(&report.records);
    let summary = SummaryHeatmap::new(SUMMARY_CHART_ID, summaries, config)?;
    let daily = DailyHeatmap::from_records(DAILY_CHART_ID, &report.records, config)?;

    let coordinator = ModeCoordinator::new(field)
        .with_view(Box::new(summary))
        .with_view(Box::new(daily));
    Ok((coordinator, report.stats))
}

fn daily_caption(config: &ViewConfig) -> String {
    format!("Last {} years: daily max and min per month", config.retained_years)
}

fn error_details(e: &anyhow::Error) -> Vec<String> {
    e.chain().skip(1).map(|cause| cause.to_string()).collect()
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(ViewConfig::default);
    let daily_title = daily_caption(&config);
    let mut error_chain = use_signal(Vec::<String>::new);

    // Fetch and aggregate once on mount
    use_effect(move || {
        let config = config.clone();
        spawn(async move {
            js_bridge::init_charts();

            let csv_data = match js_bridge::fetch_text(TEMPERATURE_CSV_URL).await {
                Ok(text) => text,
                Err(e) => {
                    log::error!("Failed to fetch temperatures: {}", e);
                    state.error_msg.set(Some(e.to_string()));
                    state.loading.set(false);
                    return;
                }
            };

            let field = *state.field.peek();
            match build_coordinator(&csv_data, field, &config) {
                Ok((coordinator, stats)) => {
                    let shared = Rc::new(RefCell::new(coordinator));
                    let hover = Rc::clone(&shared);
                    js_bridge::register_hover_handler(move |mount, key, fraction| {
                        hover
                            .try_borrow()
                            .ok()?
                            .hover(mount, key, fraction)
                            .map(|tip| tip.to_html())
                    });

                    state.load_stats.set(Some(stats));
                    state.coordinator.set(Some(shared));
                    state.loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load temperatures: {:#}", e);
                    error_chain.set(error_details(&e));
                    state.error_msg.set(Some(e.to_string()));
                    state.loading.set(false);
                    js_bridge::destroy_chart(SUMMARY_CHART_ID);
                    js_bridge::destroy_chart(DAILY_CHART_ID);
                }
            }
        });
    });

    // Re-render both heatmaps when loading finishes or the field changes
    use_effect(move || {
        let field = (state.field)();
        if (state.loading)() {
            return;
        }
        let Some(shared) = state.coordinator.peek().clone() else {
            return;
        };

        let mut sink = JsRenderSink;
        match shared.try_borrow_mut() {
            Ok(mut coordinator) => coordinator.select(field, &mut sink),
            Err(_) => log::warn!("coordinator busy, skipping '{}' render", field),
        };
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Daily Temperature Heatmaps".to_string(),
                subtitle: "Monthly extremes for every year, and daily max/min lines for recent years".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err, details: error_chain() }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                TemperatureModeSelector {}
                LoadStatsNotice {}

                ChartContainer {
                    id: SUMMARY_CHART_ID.to_string(),
                    caption: "All years: monthly max / min".to_string(),
                    min_height: 420,
                }
                ChartContainer {
                    id: DAILY_CHART_ID.to_string(),
                    caption: daily_title.clone(),
                    min_height: 820,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
date,max_temperature,min_temperature
2009-05-02,18,9
2020-01-15,10,2
2020-01-20,15,-1
2020-02-01,5,-5
";

    #[test]
    fn builds_both_views() {
        let (coordinator, stats) =
            build_coordinator(CSV, TemperatureField::Max, &ViewConfig::default()).unwrap();
        assert_eq!(coordinator.mounts(), vec![SUMMARY_CHART_ID, DAILY_CHART_ID]);
        assert_eq!(stats.rows_accepted, 4);

        // 2009 is outside the retained window of the daily view only
        assert!(coordinator.hover(SUMMARY_CHART_ID, "2009-5", 0.0).is_some());
        assert!(coordinator.hover(DAILY_CHART_ID, "2009-5", 0.0).is_none());
    }

    #[test]
    fn caption_and_daily_view_share_one_window() {
        let config = ViewConfig {
            retained_years: 3,
            ..ViewConfig::default()
        };
        assert_eq!(daily_caption(&config), "Last 3 years: daily max and min per month");

        let csv = "date,max_temperature,min_temperature\n2017-06-01,20,10\n2018-06-01,21,11\n2020-06-01,22,12\n";
        let (coordinator, _) = build_coordinator(csv, TemperatureField::Max, &config).unwrap();
        assert!(coordinator.hover(DAILY_CHART_ID, "2017-6", 0.0).is_none());
        assert!(coordinator.hover(DAILY_CHART_ID, "2018-6", 0.0).is_some());
    }

    #[test]
    fn load_errors_carry_context() {
        let err = build_coordinator(
            "date,max_temperature\n",
            TemperatureField::Max,
            &ViewConfig::default(),
        )
        .err()
        .unwrap();
        assert_eq!(err.to_string(), "failed to parse temperature CSV");
        assert_eq!(error_details(&err).len(), 1);
    }
}
