//! Year×month summary heatmap over the full dataset.
//!
//! The cell color domain is [min of mins, max of maxes] and is fixed at
//! construction, so toggling the field moves cells along one shared color
//! scale while the legend rescales to the selected field's extent. Set
//! [`ViewConfig::summary_color_follows_field`] to rescale the cells too.

use crate::color::{ColorRamp, SequentialColorScale};
use crate::config::{Layout, ViewConfig};
use crate::coordinator::HeatmapView;
use crate::error::ViewError;
use crate::frame::{AxisLabel, CellVisual, LegendFrame, MatrixFrame};
use crate::legend::legend_frame;
use crate::month_label;
use crate::scale::BandScale;
use crate::scene::Scene;
use crate::tooltip::{format_temperature, Tooltip};
use crate::transition::Transition;
use heat_data::aggregate::{summary_color_domain, summary_extent, Extent, MonthlySummary};
use heat_data::TemperatureField;
use std::collections::BTreeMap;

pub struct SummaryHeatmap {
    mount: String,
    summaries: Vec<MonthlySummary>,
    /// cell key -> index into `summaries`
    index: BTreeMap<String, usize>,
    years: BandScale<i32>,
    months: BandScale<u32>,
    color_domain: Extent,
    ramp: ColorRamp,
    layout: Layout,
    config: ViewConfig,
    scene: Scene<CellVisual>,
}

impl SummaryHeatmap {
    pub fn new(
        mount: &str,
        summaries: Vec<MonthlySummary>,
        config: &ViewConfig,
    ) -> Result<Self, ViewError> {
        let color_domain = summary_color_domain(&summaries)
            .ok_or_else(|| ViewError::EmptyDataset(mount.to_string()))?;

        let layout = config.summary;
        let years = BandScale::new(
            summaries.iter().map(|s| s.year),
            (0.0, layout.inner_width()),
            config.cell_padding,
        );
        let months = BandScale::new(
            summaries.iter().map(|s| s.month),
            (0.0, layout.inner_height()),
            config.cell_padding,
        );
        let index = summaries
            .iter()
            .enumerate()
            .map(|(i, s)| (s.key().to_string(), i))
            .collect();

        log::info!(
            "summary: {} cells over {} years, color domain [{}, {}]",
            summaries.len(),
            years.domain().len(),
            color_domain.min,
            color_domain.max
        );

        Ok(Self {
            mount: mount.to_string(),
            summaries,
            index,
            years,
            months,
            color_domain,
            ramp: ColorRamp::temperature(),
            layout,
            config: config.clone(),
            scene: Scene::new(),
        })
    }

    pub fn summaries(&self) -> &[MonthlySummary] {
        &self.summaries
    }

    pub fn color_domain(&self) -> Extent {
        self.color_domain
    }

    fn color_scale(&self, field: TemperatureField) -> SequentialColorScale {
        let domain = if self.config.summary_color_follows_field {
            summary_extent(&self.summaries, field).unwrap_or(self.color_domain)
        } else {
            self.color_domain
        };
        SequentialColorScale::new(domain, self.ramp.clone())
    }

    fn axes(&self) -> (Vec<AxisLabel>, Vec<AxisLabel>) {
        let x = self
            .years
            .domain()
            .iter()
            .filter_map(|&y| {
                self.years.center(y).map(|position| AxisLabel {
                    label: y.to_string(),
                    position,
                })
            })
            .collect();
        let y = self
            .months
            .domain()
            .iter()
            .filter_map(|&m| {
                self.months.center(m).map(|position| AxisLabel {
                    label: month_label(m),
                    position,
                })
            })
            .collect();
        (x, y)
    }
}

impl HeatmapView for SummaryHeatmap {
    fn mount_id(&self) -> &str {
        &self.mount
    }

    fn update_matrix(&mut self, field: TemperatureField) -> MatrixFrame {
        let color = self.color_scale(field);
        let next = self
            .summaries
            .iter()
            .filter_map(|s| {
                let x = self.years.position(s.year)?;
                let y = self.months.position(s.month)?;
                Some((
                    s.key().to_string(),
                    CellVisual {
                        x,
                        y,
                        width: self.years.bandwidth(),
                        height: self.months.bandwidth(),
                        fill: color.fill(s.value(field)),
                        lines: Vec::new(),
                    },
                ))
            })
            .collect();

        let reconciliation = self.scene.reconcile(next);
        log::debug!(
            "summary: '{}' enter={} update={} changed={} exit={}",
            field,
            reconciliation.entered.len(),
            reconciliation.updated.len(),
            reconciliation.changed(),
            reconciliation.exited.len()
        );
        let (cells, exit) = MatrixFrame::cells_from(reconciliation);
        let (x_axis, y_axis) = self.axes();

        MatrixFrame {
            mount: self.mount.clone(),
            field,
            width: self.layout.width,
            height: self.layout.height,
            margin: self.layout.margin,
            transition: Transition::for_layer(&self.mount, "cells", self.config.transition_ms),
            x_axis,
            y_axis,
            cells,
            exit,
        }
    }

    fn update_legend(&self, field: TemperatureField) -> LegendFrame {
        let domain = summary_extent(&self.summaries, field).unwrap_or(self.color_domain);
        legend_frame(&self.mount, field, domain, &self.ramp, &self.config)
    }

    fn hover(&self, key: &str, _fraction: f64) -> Option<Tooltip> {
        let summary = self.summaries.get(*self.index.get(key)?)?;
        Some(
            Tooltip::new()
                .row("Year", summary.year)
                .row("Month", month_label(summary.month))
                .row("Max", format_temperature(summary.max))
                .row("Min", format_temperature(summary.min)),
        )
    }
}
