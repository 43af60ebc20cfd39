//! Title row above the chart: axis range and the series in focus.

use crate::state::AppState;
use dioxus::prelude::*;
use nww_core::highlight::HighlightState;
use nww_core::render::ChartConfig;

fn axis_caption(config: &ChartConfig) -> String {
    format!(
        "Percentile, {} to {}, by {}",
        config.y_min, config.y_max, config.time_unit
    )
}

fn focus_caption(state: &HighlightState) -> String {
    if state.is_hovering() {
        format!("Previewing {}", state.active())
    } else {
        format!("Showing {}", state.active())
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    #[props(default)]
    pub config: ChartConfig,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let state = use_context::<AppState>();
    let axis = axis_caption(&props.config);

    let focus = state.highlight.read().as_ref().map(|h| h.state().clone());
    let focus = focus.map(|focus| {
        let dataset = state.dataset.read();
        let color = dataset
            .as_ref()
            .and_then(|d| d.by_label(focus.active()))
            .map(|s| s.color.clone())
            .unwrap_or_default();
        let caption = focus_caption(&focus);
        rsx! {
            div {
                style: "display: flex; align-items: center; gap: 6px; font-size: 12px;",
                span { style: "display: inline-block; width: 10px; height: 10px; background: {color};" }
                "{caption}"
            }
        }
    });

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: flex-end; margin-bottom: 8px;",
            div {
                h3 { style: "margin: 0 0 4px 0; font-size: 16px;", "{props.title}" }
                p { style: "margin: 0; font-size: 12px; color: #666;", "Y-axis: {axis}" }
            }
            {focus}
        }
    }
}
