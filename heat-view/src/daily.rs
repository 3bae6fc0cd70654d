//! Recent-years heatmap: one cell per month of the retained window, each
//! holding a mini line chart of its daily max and min temperatures.
//!
//! Unlike the summary view, the cell color domain is recomputed from the
//! selected field on every update. The mini charts share one vertical scale
//! (the extent over both fields) so line shapes compare across cells; their
//! horizontal scale is per cell, [1, day count] over the cell width.

use crate::color::{ColorRamp, SequentialColorScale};
use crate::config::{Layout, ViewConfig};
use crate::coordinator::HeatmapView;
use crate::error::ViewError;
use crate::frame::{AxisLabel, CellVisual, LegendFrame, LinePath, MatrixFrame};
use crate::legend::legend_frame;
use crate::month_label;
use crate::scale::{BandScale, LinearScale};
use crate::scene::Scene;
use crate::tooltip::{format_temperature, Tooltip};
use crate::transition::Transition;
use heat_data::aggregate::{
    bucket_daily, field_extent, filter_window, retained_window, temperature_extent, Extent,
    MonthlyDayBucket, YearWindow,
};
use heat_data::record::format_date;
use heat_data::{DailyRecord, TemperatureField};
use std::collections::BTreeMap;

pub const MAX_LINE_STROKE: &str = "#67000d";
pub const MIN_LINE_STROKE: &str = "#08306b";

/// Index of the day under the pointer: `floor(fraction × day_count)`.
///
/// `None` when the index falls outside the sequence.
pub fn day_index_at(fraction: f64, day_count: usize) -> Option<usize> {
    if !fraction.is_finite() || fraction < 0.0 {
        return None;
    }
    let index = (fraction * day_count as f64).floor() as usize;
    (index < day_count).then_some(index)
}

pub struct DailyHeatmap {
    mount: String,
    buckets: Vec<MonthlyDayBucket>,
    /// Windowed records, the source of every extent
    records: Vec<DailyRecord>,
    window: Option<YearWindow>,
    index: BTreeMap<String, usize>,
    years: BandScale<i32>,
    months: BandScale<u32>,
    /// Shared by every mini line chart
    line_domain: Extent,
    ramp: ColorRamp,
    layout: Layout,
    config: ViewConfig,
    scene: Scene<CellVisual>,
}

impl DailyHeatmap {
    /// Build from already windowed buckets and records.
    pub fn new(
        mount: &str,
        buckets: Vec<MonthlyDayBucket>,
        records: Vec<DailyRecord>,
        config: &ViewConfig,
    ) -> Result<Self, ViewError> {
        let line_domain = temperature_extent(&records)
            .ok_or_else(|| ViewError::EmptyDataset(mount.to_string()))?;

        let layout = config.daily;
        let years = BandScale::new(
            buckets.iter().map(|b| b.year),
            (0.0, layout.inner_width()),
            config.cell_padding,
        );
        let months = BandScale::new(
            buckets.iter().map(|b| b.month),
            (0.0, layout.inner_height()),
            config.cell_padding,
        );
        let index = buckets
            .iter()
            .enumerate()
            .map(|(i, b)| (b.key().to_string(), i))
            .collect();

        log::info!(
            "daily: {} cells over {} years from {} records",
            buckets.len(),
            years.domain().len(),
            records.len()
        );

        Ok(Self {
            mount: mount.to_string(),
            buckets,
            records,
            window: None,
            index,
            years,
            months,
            line_domain,
            ramp: ColorRamp::temperature(),
            layout,
            config: config.clone(),
            scene: Scene::new(),
        })
    }

    /// Window the full record set to the last `config.retained_years` years
    /// and bucket what remains.
    pub fn from_records(
        mount: &str,
        records: &[DailyRecord],
        config: &ViewConfig,
    ) -> Result<Self, ViewError> {
        let window = retained_window(records, config.retained_years)
            .ok_or_else(|| ViewError::EmptyDataset(mount.to_string()))?;
        let windowed = filter_window(records, &window);
        log::info!(
            "daily: retained {}..={} ({} of {} records)",
            window.first_year,
            window.last_year,
            windowed.len(),
            records.len()
        );
        let buckets = bucket_daily(&windowed);
        let mut view = Self::new(mount, buckets, windowed, config)?;
        view.window = Some(window);
        Ok(view)
    }

    pub fn buckets(&self) -> &[MonthlyDayBucket] {
        &self.buckets
    }

    pub fn window(&self) -> Option<YearWindow> {
        self.window
    }

    pub fn line_domain(&self) -> Extent {
        self.line_domain
    }

    fn field_domain(&self, field: TemperatureField) -> Extent {
        field_extent(&self.records, field).unwrap_or(self.line_domain)
    }

    fn line_path(
        days: &[DailyRecord],
        series: TemperatureField,
        x: &LinearScale,
        y: &LinearScale,
    ) -> LinePath {
        let mut d = String::new();
        for (i, day) in days.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            d.push_str(&format!(
                "{}{:.2},{:.2}",
                cmd,
                x.scale((i + 1) as f64),
                y.scale(series.of(day))
            ));
        }
        LinePath {
            series,
            stroke: match series {
                TemperatureField::Max => MAX_LINE_STROKE,
                TemperatureField::Min => MIN_LINE_STROKE,
            }
            .to_string(),
            d,
        }
    }

    fn cell(&self, bucket: &MonthlyDayBucket, field: TemperatureField, color: &SequentialColorScale) -> Option<CellVisual> {
        let x = self.years.position(bucket.year)?;
        let y = self.months.position(bucket.month)?;
        let width = self.years.bandwidth();
        let height = self.months.bandwidth();

        let day_scale = LinearScale::new((1.0, bucket.days.len() as f64), (0.0, width));
        let temperature_scale = LinearScale::from_extent(self.line_domain, (height, 0.0));
        let lines = TemperatureField::ALL
            .iter()
            .map(|&series| Self::line_path(&bucket.days, series, &day_scale, &temperature_scale))
            .collect();

        Some(CellVisual {
            x,
            y,
            width,
            height,
            fill: color.fill(bucket.aggregate(field)?),
            lines,
        })
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

impl HeatmapView for DailyHeatmap {
    fn mount_id(&self) -> &str {
        &self.mount
    }

    fn update_matrix(&mut self, field: TemperatureField) -> MatrixFrame {
        let color = SequentialColorScale::new(self.field_domain(field), self.ramp.clone());
        let next = self
            .buckets
            .iter()
            .filter_map(|b| self.cell(b, field, &color).map(|v| (b.key().to_string(), v)))
            .collect();

        let reconciliation = self.scene.reconcile(next);
        log::debug!(
            "daily: '{}' enter={} update={} changed={} exit={}",
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
        legend_frame(&self.mount, field, self.field_domain(field), &self.ramp, &self.config)
    }

    fn hover(&self, key: &str, fraction: f64) -> Option<Tooltip> {
        let bucket = self.buckets.get(*self.index.get(key)?)?;
        let day = bucket.days.get(day_index_at(fraction, bucket.days.len())?)?;
        Some(
            Tooltip::new()
                .row("Date", format_date(&day.date))
                .row("Max", format_temperature(day.max_temperature))
                .row("Min", format_temperature(day.min_temperature)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::CellOp;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32, max: f64, min: f64) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), max, min)
    }

    fn records() -> Vec<DailyRecord> {
        vec![
            day(2005, 6, 1, 40.0, 30.0),
            day(2019, 1, 20, 4.0, -8.0),
            day(2019, 1, 5, 2.0, -3.0),
            day(2019, 1, 11, 6.0, -1.0),
            day(2020, 7, 4, 30.0, 18.0),
            day(2020, 7, 1, 27.0, 16.0),
        ]
    }

    fn view() -> DailyHeatmap {
        DailyHeatmap::from_records("daily-heatmap", &records(), &ViewConfig::default()).unwrap()
    }

    #[test]
    fn day_index_mapping() {
        assert_eq!(day_index_at(0.0, 30), Some(0));
        assert_eq!(day_index_at(0.5, 30), Some(15));
        assert_eq!(day_index_at(0.999, 30), Some(29));
        assert_eq!(day_index_at(1.0, 30), None);
        assert_eq!(day_index_at(-0.1, 30), None);
        assert_eq!(day_index_at(f64::NAN, 30), None);
        assert_eq!(day_index_at(0.5, 0), None);
    }

    #[test]
    fn window_drops_old_years() {
        let view = view();
        assert_eq!(view.window(), Some(YearWindow { first_year: 2011, last_year: 2020 }));
        let keys: Vec<String> = view.buckets().iter().map(|b| b.key().to_string()).collect();
        assert_eq!(keys, vec!["2019-1", "2020-7"]);
        // 2005's 40° no longer stretches the shared line scale
        assert_eq!(view.line_domain(), Extent { min: -8.0, max: 30.0 });
    }

    #[test]
    fn buckets_are_chronological_within_cells() {
        let view = view();
        let dates: Vec<u32> = view.buckets()[0]
            .days
            .iter()
            .map(|d| chrono::Datelike::day(&d.date))
            .collect();
        assert_eq!(dates, vec![5, 11, 20]);
    }

    #[test]
    fn cells_carry_two_mini_lines() {
        let mut view = view();
        let frame = view.update_matrix(TemperatureField::Max);
        assert_eq!(frame.cells.len(), 2);
        let cell = frame.cell("2019-1").unwrap();
        assert_eq!(cell.op, CellOp::Enter);
        assert_eq!(cell.visual.lines.len(), 2);
        assert_eq!(cell.visual.lines[0].series, TemperatureField::Max);
        assert_eq!(cell.visual.lines[1].series, TemperatureField::Min);

        let d = &cell.visual.lines[0].d;
        assert!(d.starts_with("M0.00,"));
        assert_eq!(d.matches('L').count(), 2);
        let last_x: f64 = d
            .rsplit('L')
            .next()
            .and_then(|p| p.split(',').next())
            .and_then(|x| x.parse().ok())
            .unwrap();
        assert!((last_x - cell.visual.width).abs() < 0.01);
    }

    #[test]
    fn shared_vertical_scale_puts_domain_max_at_top() {
        let mut view = view();
        let frame = view.update_matrix(TemperatureField::Max);
        let cell = frame.cell("2020-7").unwrap();
        // the 30° max on Jul 4 is the top of the shared domain: y = 0
        assert!(cell.visual.lines[0].d.ends_with(",0.00"));
    }

    #[test]
    fn color_domain_follows_field() {
        let mut view = view();
        let max_frame = view.update_matrix(TemperatureField::Max);
        // hottest cell by max-of-max is the top of the max extent [2, 30]
        assert_eq!(max_frame.cell("2020-7").unwrap().visual.fill, "#a50026");

        let min_frame = view.update_matrix(TemperatureField::Min);
        // coldest cell by min-of-min is the bottom of the min extent [-8, 18]
        assert_eq!(min_frame.cell("2019-1").unwrap().visual.fill, "#313695");
        assert_ne!(
            min_frame.cell("2020-7").unwrap().visual.fill,
            max_frame.cell("2020-7").unwrap().visual.fill
        );

        assert_eq!(view.update_legend(TemperatureField::Max).domain, [2.0, 30.0]);
        assert_eq!(view.update_legend(TemperatureField::Min).domain, [-8.0, 18.0]);
    }

    #[test]
    fn repeated_update_is_idempotent() {
        let mut view = view();
        let first = view.update_matrix(TemperatureField::Max);
        let second = view.update_matrix(TemperatureField::Max);
        assert!(second.exit.is_empty());
        for cell in &first.cells {
            let again = second.cell(&cell.key).unwrap();
            assert_eq!(again.op, CellOp::Update);
            assert_eq!(again.visual, cell.visual);
        }
    }

    #[test]
    fn single_day_cell_draws_at_midpoint() {
        let records = vec![day(2015, 4, 9, 12.0, 3.0)];
        let mut view = DailyHeatmap::from_records("daily-heatmap", &records, &ViewConfig::default()).unwrap();
        let frame = view.update_matrix(TemperatureField::Max);
        let cell = frame.cell("2015-4").unwrap();
        let expected = format!("M{:.2},", cell.visual.width / 2.0);
        assert!(cell.visual.lines[0].d.starts_with(&expected));
    }

    #[test]
    fn hover_picks_day_by_pointer_fraction() {
        let view = view();
        let tip = view.hover("2019-1", 0.5).unwrap();
        assert_eq!(tip.value("Date"), Some("2019-01-11"));
        assert_eq!(tip.value("Max"), Some("6.0°"));
        assert_eq!(tip.value("Min"), Some("-1.0°"));

        assert!(view.hover("2019-1", 1.0).is_none());
        assert!(view.hover("2005-6", 0.0).is_none());
    }

    #[test]
    fn empty_records_are_rejected() {
        assert!(DailyHeatmap::from_records("daily-heatmap", &[], &ViewConfig::default()).is_err());
    }
}
