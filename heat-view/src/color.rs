//! Sequential color scale for temperatures: cold blues through pale yellow
//! to hot reds.

use crate::scale::LinearScale;
use heat_data::aggregate::Extent;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
    }
}

/// Serialized as the hex string the SVG attributes expect.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Evenly spaced color stops, linearly interpolated in RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<Rgb>,
}

impl ColorRamp {
    pub fn new(stops: Vec<Rgb>) -> Self {
        Self { stops }
    }

    /// Reversed RdYlBu: low temperatures blue, high temperatures red.
    pub fn temperature() -> Self {
        Self::new(vec![
            Rgb(49, 54, 149),   // #313695
            Rgb(69, 117, 180),  // #4575b4
            Rgb(116, 173, 209), // #74add1
            Rgb(171, 217, 233), // #abd9e9
            Rgb(224, 243, 248), // #e0f3f8
            Rgb(255, 255, 191), // #ffffbf
            Rgb(254, 224, 144), // #fee090
            Rgb(253, 174, 97),  // #fdae61
            Rgb(244, 109, 67),  // #f46d43
            Rgb(215, 48, 39),   // #d73027
            Rgb(165, 0, 38),    // #a50026
        ])
    }

    /// Color at `t`, clamped to [0, 1].
    pub fn at(&self, t: f64) -> Rgb {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => return Rgb(0, 0, 0),
        };
        if t.is_nan() || t <= 0.0 || self.stops.len() == 1 {
            return first;
        }
        if t >= 1.0 {
            return last;
        }
        let segments = (self.stops.len() - 1) as f64;
        let pos = t * segments;
        let i = pos.floor() as usize;
        Rgb::lerp(self.stops[i], self.stops[i + 1], pos - i as f64)
    }
}

/// Maps a temperature domain onto a [`ColorRamp`].
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialColorScale {
    position: LinearScale,
    ramp: ColorRamp,
    domain: Extent,
}

impl SequentialColorScale {
    pub fn new(domain: Extent, ramp: ColorRamp) -> Self {
        Self {
            position: LinearScale::from_extent(domain, (0.0, 1.0)),
            ramp,
            domain,
        }
    }

    pub fn domain(&self) -> Extent {
        self.domain
    }

    pub fn color(&self, value: f64) -> Rgb {
        self.ramp.at(self.position.scale(value))
    }

    /// Hex color string for SVG fills.
    pub fn fill(&self, value: f64) -> String {
        self.color(value).to_string()
    }
}
