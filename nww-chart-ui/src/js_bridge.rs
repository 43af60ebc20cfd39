//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart function lives in `assets/js/watershed-chart.js` and is
//! evaluated as a global (no ES modules) exposed via `window.*`. This module
//! serializes render specs and calls that global.

use nww_core::render::RenderSpec;

// Embed the D3 chart JS at compile time
static WATERSHED_CHART_JS: &str = include_str!("../assets/js/watershed-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('NWW JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The chart script is stored on `window` and evaluated at global scope once
/// D3 is ready, then `renderWatershedChart` is promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__nwwChartScripts = {};",
        serde_json::to_string(WATERSHED_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__nwwChartScripts);
                    delete window.__nwwChartScripts;
                    if (typeof renderWatershedChart !== 'undefined') window.renderWatershedChart = renderWatershedChart;
                    window.__nwwChartsReady = true;
                    console.log('NWW charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// JS that queues one draw. Only the latest queued spec is kept and at most
/// one poll runs, however many highlight changes arrive before D3 is ready.
fn queue_render_js(container_id: &str, escaped_spec: &str) -> String {
    format!(
        r#"
        window.__nwwPendingChart = {{ id: '{container_id}', spec: '{escaped_spec}' }};
        if (!window.__nwwChartPoll) {{
            window.__nwwChartPoll = setInterval(function() {{
                var pending = window.__nwwPendingChart;
                if (!pending) {{
                    clearInterval(window.__nwwChartPoll);
                    window.__nwwChartPoll = null;
                    return;
                }}
                if (window.__nwwChartsReady &&
                    typeof window.renderWatershedChart !== 'undefined' &&
                    document.getElementById(pending.id)) {{
                    clearInterval(window.__nwwChartPoll);
                    window.__nwwChartPoll = null;
                    window.__nwwPendingChart = null;
                    try {{
                        window.renderWatershedChart(pending.id, pending.spec);
                    }} catch(e) {{ console.error('[NWW] renderWatershedChart error:', e); }}
                }}
            }}, 100);
        }}
        "#,
    )
}

/// Render (or re-render) the watershed multi-line chart.
///
/// Waits until D3.js has loaded, the chart script is initialized and the
/// container DOM element exists. Called on every highlight change with a
/// freshly resolved spec.
pub fn render_watershed_chart(container_id: &str, spec: &RenderSpec) {
    let data_json = match serde_json::to_string(spec) {
        Ok(json) => json,
        Err(e) => {
            log::error!("failed to serialize render spec: {}", e);
            return;
        }
    };
    call_js(&queue_render_js(container_id, &escape_for_js(&data_json)));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "window.__nwwPendingChart = null; var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_for_js() {
        assert_eq!(
            escape_for_js(r#"{"label":"Queens' \"East\""}"#),
            r#"{"label":"Queens\' \\"East\\""}"#
        );
        assert_eq!(escape_for_js("a\nb"), "ab");
    }

    #[test]
    fn test_chart_script_defines_entry_point() {
        assert!(WATERSHED_CHART_JS.contains("function renderWatershedChart"));
    }

    #[test]
    fn test_queued_render_reuses_single_poll() {
        let js = queue_render_js("watershed-chart", "{}");
        assert!(js.contains("window.__nwwPendingChart = { id: 'watershed-chart', spec: '{}' };"));
        assert!(js.contains("if (!window.__nwwChartPoll)"));
        assert_eq!(js.matches("setInterval").count(), 1);
    }
}
