use crate::error::{Result, WastewaterError};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV table of the NYC watersheds published in the dataset.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/watersheds.csv");

/// Display metadata for one raw series of the wastewater dataset.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Watershed {
    /// Raw series key, e.g. "Queens_w_percentile"
    pub id: String,
    /// Legend label
    pub label: String,
    /// Hex color, e.g. "#507fff"
    pub color: String,
    /// True for the all-watersheds aggregate driving the headline summary
    pub is_primary: bool,
}

/// Fixed mapping from raw series keys to watershed metadata.
///
/// Built once, never mutated. Holds exactly one primary watershed.
#[derive(Debug, Clone, PartialEq)]
pub struct WatershedRegistry {
    watersheds: Vec<Watershed>,
    primary: usize,
}

fn parse_flag(ess: &str) -> Option<bool> {
    match ess.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Some(true),
        "no" | "n" | "false" | "0" | "" => Some(false),
        _ => None,
    }
}

impl WatershedRegistry {
    /// Registry of the six series published for New York City.
    pub fn nyc() -> Result<Self> {
        Self::parse_watershed_csv(CSV_OBJECT)
    }

    /// Parse a CSV string of watershed rows into a registry.
    ///
    /// Expected CSV columns: id, label, color, primary (yes/no)
    pub fn parse_watershed_csv(csv_object: &str) -> Result<Self> {
        let mut watersheds: Vec<Watershed> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let rho = row.map_err(|e| WastewaterError::InvalidRegistry(e.to_string()))?;
            let field = |i: usize, name: &str| -> Result<String> {
                rho.get(i)
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| WastewaterError::InvalidRegistry(format!("row missing {}", name)))
            };
            let id = field(0, "id")?;
            let label = field(1, "label")?;
            let color = field(2, "color")?;
            let is_primary = parse_flag(rho.get(3).unwrap_or("")).ok_or_else(|| {
                WastewaterError::InvalidRegistry(format!("bad primary flag for {}", id))
            })?;
            if watersheds.iter().any(|w| w.id == id || w.label == label) {
                return Err(WastewaterError::InvalidRegistry(format!(
                    "duplicate watershed {} / {}",
                    id, label
                )));
            }
            watersheds.push(Watershed {
                id,
                label,
                color,
                is_primary,
            });
        }
        Self::new(watersheds)
    }

    /// Build a registry from watersheds; exactly one must be primary.
    pub fn new(watersheds: Vec<Watershed>) -> Result<Self> {
        let primaries: Vec<usize> = watersheds
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_primary)
            .map(|(i, _)| i)
            .collect();
        match primaries.as_slice() {
            [primary] => Ok(Self {
                primary: *primary,
                watersheds,
            }),
            other => Err(WastewaterError::InvalidRegistry(format!(
                "expected exactly one primary watershed, found {}",
                other.len()
            ))),
        }
    }

    /// Look up the watershed for a raw series key.
    pub fn resolve(&self, raw_key: &str) -> Result<&Watershed> {
        self.watersheds
            .iter()
            .find(|w| w.id == raw_key)
            .ok_or_else(|| WastewaterError::UnknownSeries(raw_key.to_string()))
    }

    /// Look up the watershed for a legend label.
    pub fn by_label(&self, label: &str) -> Result<&Watershed> {
        self.watersheds
            .iter()
            .find(|w| w.label == label)
            .ok_or_else(|| WastewaterError::UnknownSeries(label.to_string()))
    }

    /// The all-watersheds aggregate.
    pub fn primary(&self) -> &Watershed {
        &self.watersheds[self.primary]
    }

    pub fn watersheds(&self) -> &[Watershed] {
        &self.watersheds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nyc_registry() {
        let registry = WatershedRegistry::nyc().unwrap();
        assert_eq!(registry.watersheds().len(), 6);
        let primary = registry.primary();
        assert_eq!(primary.id, "NYC_percentile");
        assert_eq!(primary.label, "All Watersheds");
        assert_eq!(primary.color, "#20104d");
    }

    #[test]
    fn test_resolve_known_keys() {
        let registry = WatershedRegistry::nyc().unwrap();
        let queens = registry.resolve("Queens_w_percentile").unwrap();
        assert_eq!(queens.label, "Queens");
        assert_eq!(queens.color, "#507fff");
        assert!(!queens.is_primary);

        let manhattan = registry.resolve("New York_w_percentile").unwrap();
        assert_eq!(manhattan.label, "New York");
        assert_eq!(manhattan.color, "#fff950");
    }

    #[test]
    fn test_resolve_unknown_key() {
        let registry = WatershedRegistry::nyc().unwrap();
        assert_eq!(
            registry.resolve("Staten_w_percentile"),
            Err(WastewaterError::UnknownSeries(
                "Staten_w_percentile".to_string()
            ))
        );
    }

    #[test]
    fn test_by_label() {
        let registry = WatershedRegistry::nyc().unwrap();
        assert_eq!(registry.by_label("Kings").unwrap().id, "Kings_w_percentile");
        assert!(registry.by_label("Brooklyn").is_err());
    }

    #[test]
    fn test_requires_single_primary() {
        let none = "ID,LABEL,COLOR,PRIMARY\nA,Alpha,#000000,no\n";
        assert!(matches!(
            WatershedRegistry::parse_watershed_csv(none),
            Err(WastewaterError::InvalidRegistry(_))
        ));

        let two = "ID,LABEL,COLOR,PRIMARY\nA,Alpha,#000000,yes\nB,Beta,#ffffff,yes\n";
        assert!(matches!(
            WatershedRegistry::parse_watershed_csv(two),
            Err(WastewaterError::InvalidRegistry(_))
        ));
    }

    #[test]
    fn test_rejects_bad_flag_and_duplicates() {
        let flag = "ID,LABEL,COLOR,PRIMARY\nA,Alpha,#000000,maybe\n";
        assert!(WatershedRegistry::parse_watershed_csv(flag).is_err());

        let dup = "ID,LABEL,COLOR,PRIMARY\nA,Alpha,#000000,yes\nA,Beta,#ffffff,no\n";
        assert!(WatershedRegistry::parse_watershed_csv(dup).is_err());
    }
}
