//! "At a glance" summary for the headline panel.
//!
//! The trend compares the latest measured row of the primary series against
//! the row [`TREND_WINDOW`] raw indices earlier. Rows are daily in the
//! published data, so this reads as "over the last two weeks". Equal values
//! count as [`Trend::Down`].

use crate::error::{Result, WastewaterError};
use crate::series::{Series, SeriesDataset};
use crate::watershed::WatershedRegistry;
use chrono::NaiveDate;
use serde::Serialize;

/// Raw-index distance between the latest reading and the comparison reading.
pub const TREND_WINDOW: usize = 14;

/// Percentiles above this are shown as elevated.
pub const ELEVATED_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn describe(&self) -> &'static str {
        match self {
            Trend::Up => "trending up",
            Trend::Down => "trending down",
        }
    }
}

/// Colour band for the headline percentile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentileBand {
    Elevated,
    Moderate,
}

impl PercentileBand {
    pub fn for_percentile(percentile: f64) -> Self {
        if percentile > ELEVATED_THRESHOLD {
            PercentileBand::Elevated
        } else {
            PercentileBand::Moderate
        }
    }
}

/// Most recent measured row of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub index: usize,
    pub date: NaiveDate,
    pub percentile: f64,
}

/// Headline numbers plus the chart data they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CovidSummary {
    pub percentile: f64,
    pub trend: Trend,
    pub last_updated: NaiveDate,
    pub labels: Vec<NaiveDate>,
    pub series: Vec<Series>,
}

impl CovidSummary {
    /// e.g. "75 out of 100"
    pub fn percentile_text(&self) -> String {
        format!("{} out of 100", self.percentile)
    }

    /// e.g. "Sun Jan 15 2023"
    pub fn last_updated_text(&self) -> String {
        nww_utils::dates::format_day_string(&self.last_updated)
    }

    pub fn band(&self) -> PercentileBand {
        PercentileBand::for_percentile(self.percentile)
    }
}

/// Scan from the highest raw index down to the first non-null value.
pub fn latest_reading(series: &Series) -> Result<Reading> {
    series
        .points
        .iter()
        .rev()
        .find_map(|p| {
            p.value.map(|percentile| Reading {
                index: p.index,
                date: p.date,
                percentile,
            })
        })
        .ok_or_else(|| WastewaterError::NoData(series.label.clone()))
}

/// Compare `latest` with the row [`TREND_WINDOW`] indices before it.
pub fn trend_between(series: &Series, latest: &Reading) -> Result<Trend> {
    let insufficient = || WastewaterError::InsufficientHistory {
        latest_index: latest.index,
        window: TREND_WINDOW,
    };
    let prior_index = latest.index.checked_sub(TREND_WINDOW).ok_or_else(insufficient)?;
    let prior = series
        .point_at(prior_index)
        .and_then(|p| p.value)
        .ok_or_else(insufficient)?;

    if prior < latest.percentile {
        Ok(Trend::Up)
    } else {
        Ok(Trend::Down)
    }
}

/// Summarize a dataset around the registry's primary series.
pub fn summarize(dataset: SeriesDataset, registry: &WatershedRegistry) -> Result<CovidSummary> {
    let primary = registry.primary();
    let series = dataset
        .by_id(&primary.id)
        .ok_or_else(|| WastewaterError::NoData(primary.label.clone()))?;

    let latest = latest_reading(series)?;
    let trend = trend_between(series, &latest)?;

    log::info!(
        "summary: {} at {} on {}, {}",
        series.label,
        latest.percentile,
        latest.date,
        trend.describe()
    );

    Ok(CovidSummary {
        percentile: latest.percentile,
        trend,
        last_updated: latest.date,
        labels: dataset.labels,
        series: dataset.series,
    })
}
