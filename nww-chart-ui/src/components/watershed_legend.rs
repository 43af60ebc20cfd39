//! Legend that drives the highlight state.
//!
//! Hovering an entry emphasizes its series until the pointer leaves; clicking
//! selects it as the series shown when nothing is hovered.

use crate::state::AppState;
use dioxus::prelude::*;
use nww_core::highlight::{Emphasis, Interaction};

#[derive(Props, Clone, PartialEq)]
pub struct LegendItemProps {
    pub label: String,
    pub color: String,
    pub emphasized: bool,
}

#[component]
fn LegendItem(props: LegendItemProps) -> Element {
    let mut state = use_context::<AppState>();
    let hover_label = props.label.clone();
    let click_label = props.label.clone();
    let weight = if props.emphasized { "bold" } else { "normal" };

    rsx! {
        li {
            style: "display: flex; align-items: center; gap: 6px; cursor: pointer; font-weight: {weight};",
            onmouseenter: move |_| state.interact(Interaction::Hover(hover_label.clone())),
            onmouseleave: move |_| state.interact(Interaction::Unhover),
            onclick: move |_| state.interact(Interaction::Click(click_label.clone())),
            span {
                style: "display: inline-block; width: 24px; height: 10px; background: {props.color};",
            }
            "{props.label}"
        }
    }
}

/// One entry per series, in dataset order.
#[component]
pub fn WatershedLegend() -> Element {
    let state = use_context::<AppState>();
    let styles = state.styles();

    rsx! {
        ul {
            style: "display: flex; flex-wrap: wrap; gap: 12px; list-style: none; padding: 0; margin: 8px 0;",
            for series in styles {
                LegendItem {
                    key: "{series.label}",
                    label: series.label.clone(),
                    color: series.color.clone(),
                    emphasized: series.emphasis == Emphasis::Full,
                }
            }
        }
    }
}
