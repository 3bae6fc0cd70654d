//! Load failure banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Extra lines listed under the message
    #[props(default = Vec::new())]
    pub details: Vec<String>,
}

/// Shown instead of the heatmaps when the CSV could not be loaded.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Could not load temperatures: " }
            "{props.message}"
            if !props.details.is_empty() {
                ul {
                    style: "margin: 8px 0 0 0; font-size: 12px;",
                    for line in props.details.iter() {
                        li { "{line}" }
                    }
                }
            }
        }
    }
}
