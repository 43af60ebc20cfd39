//! Conversion of the raw dataset into chart-ready series.
//!
//! Every series shares the same row order as `labels`, so position `i` of any
//! series lines up with `labels[i]`. Missing measurements stay `None` so the
//! renderer can draw a gap.

use crate::error::{Result, WastewaterError};
use crate::raw::RawDataset;
use crate::watershed::WatershedRegistry;
use chrono::NaiveDate;
use serde::Serialize;

/// A single row of one series.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Point {
    /// Row index as published in the raw dataset.
    pub index: usize,
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// One watershed line of the chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: String,
    /// Raw series key this line was built from.
    #[serde(skip)]
    pub id: String,
    pub points: Vec<Point>,
}

impl Series {
    /// Point at a raw row index, if that row exists.
    pub fn point_at(&self, index: usize) -> Option<&Point> {
        self.points
            .binary_search_by_key(&index, |p| p.index)
            .ok()
            .map(|pos| &self.points[pos])
    }
}

/// Labels plus series, as handed to the chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesDataset {
    pub labels: Vec<NaiveDate>,
    pub series: Vec<Series>,
}

impl SeriesDataset {
    /// Series built from a raw key.
    pub fn by_id(&self, raw_key: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.id == raw_key)
    }

    /// Series behind a legend label.
    pub fn by_label(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Legend labels in render order.
    pub fn series_labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.label.as_str())
    }
}

/// Build the series dataset for a raw dataset.
///
/// Fails on the first raw key missing from `registry`; no partial dataset is
/// produced.
pub fn transform(raw: &RawDataset, registry: &WatershedRegistry) -> Result<SeriesDataset> {
    let rows: Vec<(usize, NaiveDate)> = raw
        .dates()
        .iter()
        .map(|(index, date)| {
            nww_utils::dates::parse_date(date)
                .map(|d| (*index, d))
                .map_err(|e| WastewaterError::Parse(format!("row {}: {}", index, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut series = Vec::with_capacity(raw.columns().len());
    for column in raw.columns() {
        let watershed = registry.resolve(&column.key)?;
        let points = rows
            .iter()
            .map(|(index, date)| Point {
                index: *index,
                date: *date,
                value: column.values.get(index).copied().flatten(),
            })
            .collect();
        series.push(Series {
            label: watershed.label.clone(),
            color: watershed.color.clone(),
            id: watershed.id.clone(),
            points,
        });
    }

    log::debug!(
        "transform: built {} series over {} rows",
        series.len(),
        rows.len()
    );

    Ok(SeriesDataset {
        labels: rows.into_iter().map(|(_, d)| d).collect(),
        series,
    })
}
