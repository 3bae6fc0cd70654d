//! Shared Dioxus components and D3.js bridge for the temperature heatmap apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart functions via `js_sys::eval()`,
//!   the runtime CSV fetch and the hover callback
//! - `sink`: a `RenderSink` that forwards view frames to the chart scripts
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (mode selector, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod sink;
pub mod state;
