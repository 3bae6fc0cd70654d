//! Tooltip content for hovered cells.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub rows: Vec<(String, String)>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn row(mut self, label: &str, value: impl ToString) -> Self {
        self.rows.push((label.to_string(), value.to_string()));
        self
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Markup for the shared tooltip element, one `label: value` per line.
    pub fn to_html(&self) -> String {
        self.rows
            .iter()
            .map(|(label, value)| format!("<strong>{}</strong>: {}", label, value))
            .collect::<Vec<_>>()
            .join("<br>")
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}

/// Temperature shown with one decimal, e.g. "15.0°".
pub fn format_temperature(value: f64) -> String {
    format!("{:.1}°", value)
}
