//! NYC Covid Wastewater Tracker
//!
//! Shows the at-a-glance summary for all NYC watersheds above a D3.js
//! multi-line chart of every watershed's percentile.
//!
//! Data flow:
//! 1. On mount: one GET of the published dataset (no retry, no timeout).
//! 2. `AppState::install` transforms it, summarizes the primary series and
//!    binds a fresh highlight state.
//! 3. Legend hover/click updates the highlight signal; the render effect
//!    resolves emphasis again and redraws via D3.js.

use dioxus::prelude::*;
use log::{error, info};
use nww_chart_ui::components::{AtAGlance, ChartContainer, ChartHeader, WatershedLegend};
use nww_chart_ui::js_bridge;
use nww_chart_ui::state::AppState;
use nww_core::loader::{self, DEFAULT_DATA_URL};
use nww_core::session::SummaryState;
use nww_core::watershed::WatershedRegistry;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "watershed-chart";

const PAGE_TITLE: &str = "NYC Covid Wastewater Tracker";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("wastewater-root"))
        .launch(App);
}

/// Put the headline percentile in the tab title once it is known.
fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: fetch once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
        spawn(async move {
            let registry = match WatershedRegistry::nyc() {
                Ok(registry) => registry,
                Err(e) => {
                    error!("watershed registry: {}", e);
                    state.summary.set(SummaryState::from_outcome(Err(e)));
                    return;
                }
            };
            let client = reqwest::Client::new();
            let loaded = loader::load(&client, DEFAULT_DATA_URL).await;
            state.install(loaded, &registry);
        });
    });

    // ─── Effect 2: redraw on every dataset or highlight change ───
    use_effect(move || {
        let Some(spec) = state.render_spec() else {
            return;
        };
        info!("rendering chart, active series: {}", spec.active);
        js_bridge::render_watershed_chart(CHART_CONTAINER_ID, &spec);
    });

    // ─── Effect 3: tab title follows the summary ───
    use_effect(move || {
        if let Some(summary) = state.summary.read().summary() {
            set_document_title(&format!(
                "{} - {}",
                PAGE_TITLE,
                summary.percentile_text()
            ));
        }
    });

    use_drop(|| js_bridge::destroy_chart(CHART_CONTAINER_ID));

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 40px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "margin-bottom: 48px; font-size: 48px; text-transform: uppercase;",
                h1 { style: "text-decoration: underline; margin: 0;", "New York City" }
                h1 {
                    style: "margin: 0;",
                    "Covid "
                    span { style: "color: #3b82f6;", "Waste-water" }
                    " tracker"
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 48px;",
                AtAGlance {}

                div {
                    ChartHeader {
                        title: "Wastewater COVID percentile by watershed".to_string(),
                    }
                    WatershedLegend {}
                    ChartContainer { id: CHART_CONTAINER_ID.to_string() }
                }
            }
        }
    }
}
