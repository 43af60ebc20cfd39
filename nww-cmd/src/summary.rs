//! `summary` subcommand: the "at a glance" panel as text or JSON.

use crate::source::{self, SourceArgs};
use chrono::NaiveDate;
use log::warn;
use nww_core::series::{transform, SeriesDataset};
use nww_core::summary::{latest_reading, trend_between, PercentileBand, Trend};
use nww_core::watershed::WatershedRegistry;
use nww_core::WastewaterError;
use serde::Serialize;

/// Headline figures, with the trend optional so a short history still
/// reports the current percentile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlanceReport {
    pub series: String,
    pub percentile: f64,
    pub band: PercentileBand,
    pub trend: Option<Trend>,
    pub last_updated: NaiveDate,
}

impl GlanceReport {
    pub fn build(dataset: &SeriesDataset, registry: &WatershedRegistry) -> anyhow::Result<Self> {
        let primary = registry.primary();
        let series = dataset
            .by_id(&primary.id)
            .ok_or_else(|| WastewaterError::NoData(primary.label.clone()))?;
        let latest = latest_reading(series)?;
        let trend = match trend_between(series, &latest) {
            Ok(trend) => Some(trend),
            Err(e @ WastewaterError::InsufficientHistory { .. }) => {
                warn!("{}", e);
                None
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            series: series.label.clone(),
            percentile: latest.percentile,
            band: PercentileBand::for_percentile(latest.percentile),
            trend,
            last_updated: latest.date,
        })
    }

    pub fn render_text(&self) -> String {
        let trend = self.trend.map_or("trend unavailable", |t| t.describe());
        format!(
            "At a glance ({}):\n\
             - Covid Percentile: {} out of 100.\n\
             - Covid rates over the last two weeks: {}.\n\
             Data last updated: {}",
            self.series,
            self.percentile,
            trend,
            nww_utils::dates::format_day_string(&self.last_updated)
        )
    }
}

pub async fn run_summary(source: &SourceArgs, json: bool) -> anyhow::Result<()> {
    let registry = WatershedRegistry::nyc()?;
    let raw = source::load_raw(source).await?;
    let dataset = transform(&raw, &registry)?;
    let report = GlanceReport::build(&dataset, &registry)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nww_core::raw::RawDataset;

    fn report(body: &str) -> anyhow::Result<GlanceReport> {
        let registry = WatershedRegistry::nyc()?;
        let raw = RawDataset::from_json_str(body)?;
        let dataset = transform(&raw, &registry)?;
        GlanceReport::build(&dataset, &registry)
    }

    #[test]
    fn test_report_text() {
        let report = report(
            r#"{
                "test_date": {"0": "2023-01-01", "14": "2023-01-15"},
                "NYC_percentile": {"0": 50, "14": 70}
            }"#,
        )
        .unwrap();
        assert_eq!(report.trend, Some(Trend::Up));
        assert_eq!(
            report.render_text(),
            "At a glance (All Watersheds):\n\
             - Covid Percentile: 70 out of 100.\n\
             - Covid rates over the last two weeks: trending up.\n\
             Data last updated: Sun Jan 15 2023"
        );
    }

    #[test]
    fn test_short_history_reports_trend_unavailable() {
        let report = report(
            r#"{
                "test_date": {"0": "2023-01-01", "14": "2023-01-15"},
                "NYC_percentile": {"0": 50, "14": null}
            }"#,
        )
        .unwrap();
        assert_eq!(report.trend, None);
        assert_eq!(report.percentile, 50.0);
        assert!(report.render_text().contains("trend unavailable"));
    }

    #[test]
    fn test_no_data_is_an_error() {
        let err = report(
            r#"{
                "test_date": {"0": "2023-01-01"},
                "NYC_percentile": {"0": null}
            }"#,
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<WastewaterError>(),
            Some(&WastewaterError::NoData("All Watersheds".to_string()))
        );
    }

    #[tokio::test]
    async fn test_run_summary_from_file() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../fixtures/sample_wastewater.json");
        let source = SourceArgs {
            url: String::new(),
            file: Some(path),
        };
        run_summary(&source, true).await.unwrap();
    }
}
