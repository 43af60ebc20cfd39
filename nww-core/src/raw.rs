//! The raw wastewater dataset as published: one JSON object whose keys are
//! series identifiers, each mapping a stringified row index to a value.
//!
//! ```text
//! {
//!   "test_date":      { "0": "2023-01-01", "14": "2023-01-15" },
//!   "NYC_percentile": { "0": 50, "14": null }
//! }
//! ```
//!
//! Key order is captured as written in the document. Row indices are parsed
//! into integers and kept in ascending order.

use crate::error::{Result, WastewaterError};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::marker::PhantomData;

/// Reserved key holding the ISO date of every row.
pub const DATE_KEY: &str = "test_date";

/// Lowest valid percentile value.
pub const PERCENTILE_MIN: f64 = 0.0;

/// Highest valid percentile value.
pub const PERCENTILE_MAX: f64 = 100.0;

/// One non-date series from the raw dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RawColumn {
    pub key: String,
    /// `None` means no measurement for that row.
    pub values: BTreeMap<usize, Option<f64>>,
}

/// Validated raw dataset with an explicit series order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDataset {
    dates: BTreeMap<usize, String>,
    columns: Vec<RawColumn>,
}

impl RawDataset {
    /// Build a dataset, checking that every column shares the date index
    /// domain and every value is a finite percentile.
    pub fn new(dates: BTreeMap<usize, String>, columns: Vec<RawColumn>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for column in &columns {
            if column.key == DATE_KEY || !seen.insert(column.key.as_str()) {
                return Err(WastewaterError::Parse(format!(
                    "duplicate series key {:?}",
                    column.key
                )));
            }
            if !column.values.keys().eq(dates.keys()) {
                return Err(WastewaterError::Parse(format!(
                    "series {:?} does not share the {} index domain",
                    column.key, DATE_KEY
                )));
            }
            for (index, value) in &column.values {
                if let Some(v) = value {
                    if !v.is_finite() || *v < PERCENTILE_MIN || *v > PERCENTILE_MAX {
                        return Err(WastewaterError::Parse(format!(
                            "series {:?} row {} holds {} outside [{}, {}]",
                            column.key, index, v, PERCENTILE_MIN, PERCENTILE_MAX
                        )));
                    }
                }
            }
        }
        Ok(Self { dates, columns })
    }

    /// Parse a response body into a dataset.
    pub fn from_json_str(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Row index to raw date string, ascending by index.
    pub fn dates(&self) -> &BTreeMap<usize, String> {
        &self.dates
    }

    /// Series columns in document order.
    pub fn columns(&self) -> &[RawColumn] {
        &self.columns
    }

    /// Series keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.key.as_str())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// One index-keyed object, entries in document order with repeats kept so
/// they can be rejected.
struct IndexedEntries<T>(Vec<(String, T)>);

struct IndexedEntriesVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for IndexedEntriesVisitor<T> {
    type Value = IndexedEntries<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object keyed by row index")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, T>()? {
            entries.push(entry);
        }
        Ok(IndexedEntries(entries))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for IndexedEntries<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(IndexedEntriesVisitor(PhantomData))
    }
}

/// Two spellings of one row ("0" and "00") or a repeated key are an error.
fn parse_indexed<T, E: de::Error>(
    key: &str,
    raw: IndexedEntries<T>,
) -> std::result::Result<BTreeMap<usize, T>, E> {
    let mut indexed = BTreeMap::new();
    for (index, value) in raw.0 {
        let i = index.trim().parse::<usize>().map_err(|_| {
            E::custom(format!(
                "series {:?} has non-integer index {:?}",
                key, index
            ))
        })?;
        if indexed.insert(i, value).is_some() {
            return Err(E::custom(format!(
                "series {:?} has duplicate index {:?}",
                key, index
            )));
        }
    }
    Ok(indexed)
}

struct RawDatasetVisitor;

impl<'de> Visitor<'de> for RawDatasetVisitor {
    type Value = RawDataset;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object of index-keyed series including test_date")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dates: Option<BTreeMap<usize, String>> = None;
        let mut columns: Vec<RawColumn> = Vec::new();

        while let Some(key) = map.next_key::<String>()? {
            if key == DATE_KEY {
                if dates.is_some() {
                    return Err(de::Error::duplicate_field(DATE_KEY));
                }
                let raw: IndexedEntries<String> = map.next_value()?;
                dates = Some(parse_indexed::<_, A::Error>(&key, raw)?);
            } else {
                let raw: IndexedEntries<Option<f64>> = map.next_value()?;
                let values = parse_indexed::<_, A::Error>(&key, raw)?;
                columns.push(RawColumn { key, values });
            }
        }

        let dates = dates.ok_or_else(|| de::Error::missing_field(DATE_KEY))?;
        RawDataset::new(dates, columns).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for RawDataset {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RawDatasetVisitor)
    }
}
