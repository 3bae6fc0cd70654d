use crate::record::DailyRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which temperature column a view is colored by.
///
/// The wire names `"max"` and `"min"` are the values of the
/// `temperature-type` radio group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureField {
    #[default]
    Max,
    Min,
}

impl TemperatureField {
    pub const ALL: [TemperatureField; 2] = [TemperatureField::Max, TemperatureField::Min];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureField::Max => "max",
            TemperatureField::Min => "min",
        }
    }

    /// Human readable label used by radio buttons and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureField::Max => "Max temperature",
            TemperatureField::Min => "Min temperature",
        }
    }

    /// The value of this field on a single day.
    pub fn of(&self, record: &DailyRecord) -> f64 {
        match self {
            TemperatureField::Max => record.max_temperature,
            TemperatureField::Min => record.min_temperature,
        }
    }

    /// Fold two values the way this field aggregates: max keeps the
    /// larger, min keeps the smaller.
    pub fn combine(&self, a: f64, b: f64) -> f64 {
        match self {
            TemperatureField::Max => a.max(b),
            TemperatureField::Min => a.min(b),
        }
    }
}

impl fmt::Display for TemperatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParseError(pub String);

impl fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown temperature field '{}' (expected 'max' or 'min')", self.0)
    }
}

impl std::error::Error for FieldParseError {}

impl FromStr for TemperatureField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "max" => Ok(TemperatureField::Max),
            "min" => Ok(TemperatureField::Min),
            other => Err(FieldParseError(other.to_string())),
        }
    }
}
