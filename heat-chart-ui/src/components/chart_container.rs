//! Mount point for one D3.js heatmap.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into; equals the view's mount id
    pub id: String,
    /// Optional caption shown above the chart
    #[props(default = String::new())]
    pub caption: String,
    /// Minimum height in pixels, reserved before the SVG exists
    #[props(default = 400)]
    pub min_height: u32,
}

/// A captioned container div for one heatmap SVG.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; margin-bottom: 24px;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if !props.caption.is_empty() {
                h4 {
                    style: "margin: 0 0 4px 0; font-size: 14px; color: #333;",
                    "{props.caption}"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
