//! Layout and behavior settings for both heatmaps.
//!
//! Every field has a default, so a JSON config file only needs the keys it
//! overrides:
//!
//! ```json
//! { "transition_ms": 750, "daily": { "height": 900 } }
//! ```

use heat_data::aggregate::RETAINED_YEARS;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 40.0,
        }
    }
}

/// Size of one chart's SVG.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Layout {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 360.0,
            margin: Margin::default(),
        }
    }
}

/// A `Layout` as written in a config file, applied on top of a per-chart
/// base so unset keys keep that chart's default rather than `Layout::default()`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LayoutOverride {
    width: Option<f64>,
    height: Option<f64>,
    margin: Option<Margin>,
}

impl LayoutOverride {
    fn apply(self, base: Layout) -> Layout {
        Layout {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            margin: self.margin.unwrap_or(base.margin),
        }
    }
}

fn summary_layout<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Layout, D::Error> {
    Ok(LayoutOverride::deserialize(deserializer)?.apply(ViewConfig::default().summary))
}

fn daily_layout<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Layout, D::Error> {
    Ok(LayoutOverride::deserialize(deserializer)?.apply(ViewConfig::default().daily))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendLayout {
    pub width: f64,
    pub height: f64,
    /// Number of gradient stops sampled from the color ramp.
    pub stops: usize,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 12.0,
            stops: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    #[serde(deserialize_with = "summary_layout")]
    pub summary: Layout,
    #[serde(deserialize_with = "daily_layout")]
    pub daily: Layout,
    pub legend: LegendLayout,
    /// Inner band padding between cells, as a fraction of the band step.
    pub cell_padding: f64,
    pub transition_ms: u32,
    pub retained_years: u32,
    /// When false the summary heatmap keeps one color domain for both
    /// fields and only its legend follows the selected field.
    pub summary_color_follows_field: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            summary: Layout::default(),
            daily: Layout {
                height: 760.0,
                ..Layout::default()
            },
            legend: LegendLayout::default(),
            cell_padding: 0.05,
            transition_ms: 500,
            retained_years: RETAINED_YEARS,
            summary_color_follows_field: false,
        }
    }
}

impl ViewConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
