//! Forwards view frames to the D3.js chart scripts.

use crate::js_bridge;
use heat_view::frame::{LegendFrame, MatrixFrame};
use heat_view::RenderSink;

/// Each frame is drawn into the container whose DOM id equals its mount.
#[derive(Debug, Default)]
pub struct JsRenderSink;

impl RenderSink for JsRenderSink {
    fn draw_matrix(&mut self, frame: &MatrixFrame) {
        match frame.to_json() {
            Ok(json) => js_bridge::render_matrix(&frame.mount, &json),
            Err(e) => log::error!("failed to serialize matrix for '{}': {}", frame.mount, e),
        }
    }

    fn draw_legend(&mut self, frame: &LegendFrame) {
        match frame.to_json() {
            Ok(json) => js_bridge::render_legend(&frame.mount, &json),
            Err(e) => log::error!("failed to serialize legend for '{}': {}", frame.mount, e),
        }
    }
}
