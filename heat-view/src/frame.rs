//! Serializable render passes handed to the chart scripts.
//!
//! Coordinates are relative to the chart's inner area; the scripts translate
//! by the margin.

use crate::color::Rgb;
use crate::config::Margin;
use crate::scene::Reconciliation;
use crate::transition::Transition;
use heat_data::TemperatureField;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellOp {
    Enter,
    Update,
}

/// One mini line chart path, in the cell's local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePath {
    pub series: TemperatureField,
    pub stroke: String,
    /// SVG path data, e.g. "M0.00,12.50L3.20,10.10"
    pub d: String,
}

/// Everything that is drawn for one cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellVisual {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<LinePath>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellFrame {
    pub key: String,
    pub op: CellOp,
    #[serde(flatten)]
    pub visual: CellVisual,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub label: String,
    /// Band center along the axis
    pub position: f64,
}

/// One `update_matrix` render pass for a heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixFrame {
    pub mount: String,
    pub field: TemperatureField,
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub transition: Transition,
    pub x_axis: Vec<AxisLabel>,
    pub y_axis: Vec<AxisLabel>,
    /// Entering and updating cells, in data order
    pub cells: Vec<CellFrame>,
    /// Keys of cells to remove
    pub exit: Vec<String>,
}

impl MatrixFrame {
    /// Cells carried by a reconciliation: enters first, then updates.
    pub fn cells_from(reconciliation: Reconciliation<CellVisual>) -> (Vec<CellFrame>, Vec<String>) {
        let mut cells = Vec::with_capacity(reconciliation.entered.len() + reconciliation.updated.len());
        for (key, visual) in reconciliation.entered {
            cells.push(CellFrame {
                key,
                op: CellOp::Enter,
                visual,
            });
        }
        for (key, visual, _) in reconciliation.updated {
            cells.push(CellFrame {
                key,
                op: CellOp::Update,
                visual,
            });
        }
        (cells, reconciliation.exited)
    }

    pub fn cell(&self, key: &str) -> Option<&CellFrame> {
        self.cells.iter().find(|c| c.key == key)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgb,
}

/// One `update_legend` render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendFrame {
    pub mount: String,
    pub field: TemperatureField,
    pub title: String,
    /// [min, max] shown on the legend axis
    pub domain: [f64; 2],
    pub width: f64,
    pub height: f64,
    pub stops: Vec<GradientStop>,
    pub transition: Transition,
}

impl LegendFrame {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
