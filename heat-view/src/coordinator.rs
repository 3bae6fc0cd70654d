//! Fans temperature-mode selections out to every registered heatmap.

use crate::frame::{LegendFrame, MatrixFrame};
use crate::tooltip::Tooltip;
use heat_data::TemperatureField;

/// A heatmap bound to one mount point.
pub trait HeatmapView {
    fn mount_id(&self) -> &str;

    /// Re-color (and re-draw) every cell for `field`.
    fn update_matrix(&mut self, field: TemperatureField) -> MatrixFrame;

    /// Rescale the legend for `field`.
    fn update_legend(&self, field: TemperatureField) -> LegendFrame;

    /// Tooltip for the cell `key` with the pointer at `fraction` of the cell
    /// width. `None` suppresses the tooltip update.
    fn hover(&self, key: &str, fraction: f64) -> Option<Tooltip>;
}

/// Receives frames in the order the coordinator produces them.
pub trait RenderSink {
    fn draw_matrix(&mut self, frame: &MatrixFrame);
    fn draw_legend(&mut self, frame: &LegendFrame);
}

pub struct ModeCoordinator {
    views: Vec<Box<dyn HeatmapView>>,
    field: TemperatureField,
}

impl ModeCoordinator {
    pub fn new(field: TemperatureField) -> Self {
        Self {
            views: Vec::new(),
            field,
        }
    }

    pub fn with_view(mut self, view: Box<dyn HeatmapView>) -> Self {
        self.views.push(view);
        self
    }

    pub fn field(&self) -> TemperatureField {
        self.field
    }

    pub fn mounts(&self) -> Vec<&str> {
        self.views.iter().map(|v| v.mount_id()).collect()
    }

    /// Draw every view with the current field.
    pub fn render(&mut self, sink: &mut dyn RenderSink) {
        self.select(self.field, sink);
    }

    /// Switch to `field`: matrix then legend for each view, in registration
    /// order. Selecting the current field again re-renders anyway.
    pub fn select(&mut self, field: TemperatureField, sink: &mut dyn RenderSink) {
        log::info!("coordinator: selecting '{}' for {} views", field, self.views.len());
        self.field = field;
        for view in self.views.iter_mut() {
            let matrix = view.update_matrix(field);
            sink.draw_matrix(&matrix);
            let legend = view.update_legend(field);
            sink.draw_legend(&legend);
        }
    }

    /// Route a hover to the view that owns `mount`.
    pub fn hover(&self, mount: &str, key: &str, fraction: f64) -> Option<Tooltip> {
        self.views
            .iter()
            .find(|v| v.mount_id() == mount)
            .and_then(|v| v.hover(key, fraction))
    }
}

/// Sink that keeps every frame, for tests and the CLI.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub matrices: Vec<MatrixFrame>,
    pub legends: Vec<LegendFrame>,
}

impl RenderSink for RecordingSink {
    fn draw_matrix(&mut self, frame: &MatrixFrame) {
        self.matrices.push(frame.clone());
    }

    fn draw_legend(&mut self, frame: &LegendFrame) {
        self.legends.push(frame.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::daily::DailyHeatmap;
    use crate::summary::SummaryHeatmap;
    use chrono::NaiveDate;
    use heat_data::aggregate::summarize;
    use heat_data::DailyRecord;

    fn records() -> Vec<DailyRecord> {
        let mut out = Vec::new();
        for (year, offset) in [(2008, -2.0), (2015, 0.0), (2019, 1.5), (2020, 3.0)] {
            for month in 1..=12u32 {
                for day in [2u32, 14, 25] {
                    let base = offset + month as f64 * 2.0 + day as f64 / 10.0;
                    out.push(DailyRecord::new(
                        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
                        base + 5.0,
                        base - 6.0,
                    ));
                }
            }
        }
        out
    }

    fn coordinator() -> ModeCoordinator {
        let records = records();
        let config = ViewConfig::default();
        let summary = SummaryHeatmap::new("summary-heatmap", summarize(&records), &config).unwrap();
        let daily = DailyHeatmap::from_records("daily-heatmap", &records, &config).unwrap();
        ModeCoordinator::new(TemperatureField::Max)
            .with_view(Box::new(summary))
            .with_view(Box::new(daily))
    }

    #[test]
    fn render_draws_matrix_then_legend_per_view() {
        let mut coordinator = coordinator();
        let mut sink = RecordingSink::default();
        coordinator.render(&mut sink);

        assert_eq!(coordinator.mounts(), vec!["summary-heatmap", "daily-heatmap"]);
        assert_eq!(sink.matrices.len(), 2);
        assert_eq!(sink.legends.len(), 2);
        assert_eq!(sink.matrices[0].mount, "summary-heatmap");
        assert_eq!(sink.matrices[1].mount, "daily-heatmap");
        assert!(sink.matrices.iter().all(|m| m.field == TemperatureField::Max));
    }

    #[test]
    fn toggling_to_min_updates_fills_and_legends_of_both_views() {
        let mut coordinator = coordinator();
        let mut sink = RecordingSink::default();
        coordinator.select(TemperatureField::Max, &mut sink);
        coordinator.select(TemperatureField::Min, &mut sink);
        assert_eq!(coordinator.field(), TemperatureField::Min);

        for view in 0..2 {
            let before = &sink.matrices[view];
            let after = &sink.matrices[view + 2];
            assert_eq!(after.field, TemperatureField::Min);
            assert!(after.exit.is_empty());
            assert_eq!(before.cells.len(), after.cells.len());
            let recolored = before
                .cells
                .iter()
                .filter(|c| after.cell(&c.key).map(|a| a.visual.fill != c.visual.fill).unwrap_or(false))
                .count();
            assert!(recolored > 0, "view {} should recolor cells", before.mount);

            assert_ne!(sink.legends[view].domain, sink.legends[view + 2].domain);
        }
    }

    #[test]
    fn selection_leaves_aggregated_data_untouched() {
        let records = records();
        let config = ViewConfig::default();
        let summaries = summarize(&records);
        let mut summary = SummaryHeatmap::new("summary-heatmap", summaries.clone(), &config).unwrap();
        let mut daily = DailyHeatmap::from_records("daily-heatmap", &records, &config).unwrap();
        let buckets = daily.buckets().to_vec();

        summary.update_matrix(TemperatureField::Min);
        daily.update_matrix(TemperatureField::Min);

        assert_eq!(summary.summaries(), summaries.as_slice());
        assert_eq!(daily.buckets(), buckets.as_slice());
    }

    #[test]
    fn hover_routes_by_mount() {
        let coordinator = coordinator();
        let summary_tip = coordinator.hover("summary-heatmap", "2020-3", 0.0).unwrap();
        assert_eq!(summary_tip.value("Year"), Some("2020"));
        assert_eq!(summary_tip.value("Month"), Some("Mar"));

        let daily_tip = coordinator.hover("daily-heatmap", "2020-3", 0.99).unwrap();
        assert_eq!(daily_tip.value("Date"), Some("2020-03-25"));

        assert!(coordinator.hover("nowhere", "2020-3", 0.0).is_none());
        assert!(coordinator.hover("daily-heatmap", "2008-3", 0.5).is_none());
    }
}
