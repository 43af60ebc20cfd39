//! Render instructions handed to the charting layer.
//!
//! The chart library only needs this struct: it never reads highlight state
//! directly. Rebuild it after every highlight change.

use crate::highlight::{resolve_emphasis, Emphasis, HighlightState};
use crate::series::SeriesDataset;
use chrono::NaiveDate;
use serde::Serialize;

/// Y axis bounds for percentile charts.
pub const Y_MIN: f64 = 0.0;
pub const Y_MAX: f64 = 100.0;

/// X axis tick unit.
pub const TIME_UNIT: &str = "month";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSeries {
    pub label: String,
    pub color: String,
    pub emphasis: Emphasis,
    pub points: Vec<RenderPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub y_min: f64,
    pub y_max: f64,
    pub time_unit: String,
    /// Draw lines only, no per-point markers.
    pub show_points: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            y_min: Y_MIN,
            y_max: Y_MAX,
            time_unit: TIME_UNIT.to_string(),
            show_points: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSpec {
    pub labels: Vec<NaiveDate>,
    pub series: Vec<RenderSeries>,
    pub active: String,
    pub config: ChartConfig,
}

/// Combine a dataset with the current highlight state.
pub fn render_spec(dataset: &SeriesDataset, state: &HighlightState) -> RenderSpec {
    let styles = resolve_emphasis(state, &dataset.series);
    let series = dataset
        .series
        .iter()
        .zip(styles)
        .map(|(s, style)| RenderSeries {
            label: style.label,
            color: style.color,
            emphasis: style.emphasis,
            points: s
                .points
                .iter()
                .map(|p| RenderPoint {
                    date: p.date,
                    value: p.value,
                })
                .collect(),
        })
        .collect();

    RenderSpec {
        labels: dataset.labels.clone(),
        series,
        active: state.active().to_string(),
        config: ChartConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawDataset;
    use crate::series::transform;
    use crate::watershed::WatershedRegistry;

    const BODY: &str = r#"{
        "test_date": {"0": "2023-01-01", "1": "2023-01-02"},
        "NYC_percentile": {"0": 50, "1": null},
        "Queens_w_percentile": {"0": 40, "1": 45}
    }"#;

    fn dataset() -> SeriesDataset {
        let raw = RawDataset::from_json_str(BODY).unwrap();
        transform(&raw, &WatershedRegistry::nyc().unwrap()).unwrap()
    }

    #[test]
    fn test_render_spec_applies_emphasis() {
        let state = HighlightState {
            selected: "All Watersheds".to_string(),
            hovered: Some("Queens".to_string()),
        };
        let spec = render_spec(&dataset(), &state);
        assert_eq!(spec.active, "Queens");
        assert_eq!(spec.series[0].color, "#20104d10");
        assert_eq!(spec.series[0].emphasis, Emphasis::Dimmed);
        assert_eq!(spec.series[1].color, "#507fff");
        assert_eq!(spec.series[1].emphasis, Emphasis::Full);
        assert_eq!(spec.series[0].points[1].value, None);
    }

    #[test]
    fn test_render_spec_json_shape() {
        let spec = render_spec(&dataset(), &HighlightState::new("All Watersheds"));
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["labels"][0], "2023-01-01");
        assert_eq!(json["series"][0]["emphasis"], "full");
        assert_eq!(json["series"][0]["points"][1]["value"], serde_json::Value::Null);
        assert_eq!(json["config"]["yMax"], 100.0);
        assert_eq!(json["config"]["timeUnit"], "month");
    }
}
