//! Reusable Dioxus RSX components for the wastewater dashboard.

mod at_a_glance;
mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod watershed_legend;

pub use at_a_glance::AtAGlance;
pub use chart_container::{chart_status, ChartContainer, ChartStatus};
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use watershed_legend::WatershedLegend;
