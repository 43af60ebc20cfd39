//! The box D3 draws into, with a status overlay until there is data.

use crate::state::AppState;
use dioxus::prelude::*;
use nww_core::session::SummaryState;

/// Matches the SVG height in `watershed-chart.js`.
const CHART_HEIGHT_PX: u32 = 420;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartStatus {
    Loading,
    Unavailable(String),
    Drawn,
}

/// A transformed dataset is always drawn, even when the summary could not be
/// computed. Without one the chart mirrors the headline panel.
pub fn chart_status(summary: &SummaryState, has_dataset: bool) -> ChartStatus {
    if has_dataset {
        return ChartStatus::Drawn;
    }
    match summary {
        SummaryState::Unavailable(reason) => ChartStatus::Unavailable(reason.clone()),
        _ => ChartStatus::Loading,
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id passed to `renderWatershedChart`
    pub id: String,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let state = use_context::<AppState>();
    let status = chart_status(&state.summary.read(), state.dataset.read().is_some());

    let overlay = match status {
        ChartStatus::Drawn => None,
        ChartStatus::Loading => Some(("#666", "Loading chart...".to_string())),
        ChartStatus::Unavailable(reason) => {
            Some(("#8D6E00", format!("Chart unavailable: {}", reason)))
        }
    }
    .map(|(color, text)| {
        rsx! {
            div {
                style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: {color};",
                "{text}"
            }
        }
    });

    rsx! {
        div {
            style: "min-height: {CHART_HEIGHT_PX}px; position: relative; width: 100%; border: 4px solid #20104d; padding: 16px; box-sizing: border-box;",
            {overlay}
            div { id: "{props.id}", style: "width: 100%;" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_waits_while_summary_loads() {
        assert_eq!(chart_status(&SummaryState::Loading, false), ChartStatus::Loading);
    }

    #[test]
    fn test_chart_reports_unavailable_without_dataset() {
        let summary = SummaryState::Unavailable("unknown series: Yonkers".to_string());
        assert_eq!(
            chart_status(&summary, false),
            ChartStatus::Unavailable("unknown series: Yonkers".to_string())
        );
    }

    #[test]
    fn test_chart_drawn_when_only_summary_failed() {
        let summary = SummaryState::Unavailable("insufficient history".to_string());
        assert_eq!(chart_status(&summary, true), ChartStatus::Drawn);
    }
}
