//! The "At a glance" headline panel.

use super::{ErrorDisplay, LoadingSpinner};
use crate::state::AppState;
use dioxus::prelude::*;
use nww_core::session::SummaryState;
use nww_core::summary::PercentileBand;

fn band_color(band: PercentileBand) -> &'static str {
    match band {
        PercentileBand::Elevated => "#e11d48",
        PercentileBand::Moderate => "#4ade80",
    }
}

/// Current percentile, two-week trend and last-updated date for the
/// all-watersheds series.
#[component]
pub fn AtAGlance() -> Element {
    let state = use_context::<AppState>();
    let summary_state = state.summary.read().clone();

    let body = match summary_state {
        SummaryState::Loading => rsx! { LoadingSpinner {} },
        SummaryState::Unavailable(message) => rsx! { ErrorDisplay { message } },
        SummaryState::Ready(summary) => {
            let color = band_color(summary.band());
            let percentile = summary.percentile_text();
            let trend = summary.trend.describe();
            let updated = summary.last_updated_text();
            rsx! {
                div {
                    style: "position: relative; padding: 48px; border: 4px solid #20104d;",
                    ul {
                        style: "list-style: none; padding: 0; margin: 0;",
                        li {
                            "– Covid Percentile: "
                            span { style: "color: {color};", "{percentile}" }
                            "."
                        }
                        li {
                            "– Covid rates over the last two weeks: "
                            span { style: "color: #e11d48;", "{trend}." }
                        }
                    }
                    div {
                        style: "position: absolute; right: 16px; bottom: 16px; color: rgba(0, 0, 0, 0.3);",
                        "Data last updated: {updated}"
                    }
                }
            }
        }
    };

    rsx! {
        div {
            h2 { "At a glance:" }
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_colors_differ() {
        assert_ne!(
            band_color(PercentileBand::Elevated),
            band_color(PercentileBand::Moderate)
        );
    }
}
