//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js heatmap functions live in `assets/js/*.js`, are embedded at
//! compile time and evaluated as globals (no ES modules) once D3 is on the
//! page. This module provides safe Rust wrappers that serialize frames and
//! call those globals, plus the two places where JS calls back into Rust or
//! Rust waits on JS: the hover callback and the CSV fetch.

use heat_data::LoadError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static HEATMAP_JS: &str = include_str!("../assets/js/heatmap.js");
static LEGEND_JS: &str = include_str!("../assets/js/legend.js");

/// Global the chart scripts call on mouse move: `(mount, key, fraction) -> html | null`.
pub const HOVER_CALLBACK: &str = "__heatHover";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Heatmap JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderHeatmapMatrix(...)` via
/// `function` declarations. They are evaluated at global scope via an
/// indirect `eval()` once D3 is ready, then promoted to `window.*`.
/// Safe to call more than once; only the first call installs the scripts.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, HEATMAP_JS, LEGEND_JS].join("\n");

    let store_js = format!(
        "if (!window.__heatChartScripts && !window.__heatChartsReady) {{ window.__heatChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__heatChartsPolling || window.__heatChartsReady) return;
            window.__heatChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__heatChartScripts);
                    delete window.__heatChartScripts;
                    if (typeof renderHeatmapMatrix !== 'undefined') window.renderHeatmapMatrix = renderHeatmapMatrix;
                    if (typeof renderHeatmapLegend !== 'undefined') window.renderHeatmapLegend = renderHeatmapLegend;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.initTooltip();
                    window.__heatChartsReady = true;
                    console.log('Heatmap charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.<function>(container_id, payload)` as soon as the scripts
/// are initialized and the container exists, polling until then.
///
/// Calls queued while polling fire in the order they were made.
fn call_when_ready(function: &str, container_id: &str, payload_json: &str) {
    let payload = serde_json::to_string(payload_json).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var ready = function() {{
                return window.__heatChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}');
            }};
            var draw = function() {{
                try {{
                    window.{function}('{container_id}', {payload});
                }} catch(e) {{ console.error('[Heatmap] {function} error:', e); }}
            }};
            if (ready()) {{ draw(); return; }}
            var poll = setInterval(function() {{
                if (ready()) {{
                    clearInterval(poll);
                    draw();
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Draw (or reconcile) the heatmap cells of one mount.
pub fn render_matrix(container_id: &str, frame_json: &str) {
    call_when_ready("renderHeatmapMatrix", container_id, frame_json);
}

/// Draw (or rescale) the legend of one mount.
pub fn render_legend(container_id: &str, frame_json: &str) {
    call_when_ready("renderHeatmapLegend", container_id, frame_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Install `window.__heatHover` so the chart scripts can ask Rust for
/// tooltip markup. Returning `None` leaves the tooltip as it is.
///
/// The closure lives for the rest of the page session.
pub fn register_hover_handler<F>(handler: F)
where
    F: Fn(&str, &str, f64) -> Option<String> + 'static,
{
    let closure = Closure::<dyn Fn(String, String, f64) -> JsValue>::new(
        move |mount: String, key: String, fraction: f64| match handler(&mount, &key, fraction) {
            Some(html) => JsValue::from_str(&html),
            None => JsValue::NULL,
        },
    );
    match web_sys::window() {
        Some(window) => {
            if js_sys::Reflect::set(&window, &JsValue::from_str(HOVER_CALLBACK), closure.as_ref()).is_err() {
                log::error!("failed to install {}", HOVER_CALLBACK);
            }
        }
        None => log::error!("no window to install {} on", HOVER_CALLBACK),
    }
    closure.forget();
}

/// Fetch a text resource (the temperature CSV) relative to the page.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let fail = |reason: String| LoadError::Fetch {
        url: url.to_string(),
        reason,
    };

    let window = web_sys::window().ok_or_else(|| fail("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fail(format!("{:?}", e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| fail("fetch did not return a Response".to_string()))?;
    if !response.ok() {
        return Err(fail(format!("HTTP {} {}", response.status(), response.status_text())));
    }
    let body = response.text().map_err(|e| fail(format!("{:?}", e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| fail(format!("{:?}", e)))?;
    let text = text
        .as_string()
        .ok_or_else(|| fail("response body is not text".to_string()))?;
    log::info!("fetched {} bytes from {}", text.len(), url);
    Ok(text)
}
