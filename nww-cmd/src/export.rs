//! `export` subcommand: render JSON for an external chart.

use crate::source::{self, SourceArgs};
use log::info;
use nww_core::highlight::{Highlighter, Interaction};
use nww_core::raw::RawDataset;
use nww_core::render::{render_spec, RenderSpec};
use nww_core::series::transform;
use nww_core::watershed::WatershedRegistry;
use std::path::Path;

/// Accept a watershed by legend label ("Queens") or raw key
/// ("Queens_w_percentile").
fn legend_label(registry: &WatershedRegistry, name: &str) -> nww_core::Result<String> {
    registry
        .by_label(name)
        .or_else(|_| registry.resolve(name))
        .map(|w| w.label.clone())
}

/// Build the render spec after replaying an optional click then hover.
pub fn build_export(
    raw: &RawDataset,
    selected: Option<String>,
    hovered: Option<String>,
) -> anyhow::Result<RenderSpec> {
    let registry = WatershedRegistry::nyc()?;
    let dataset = transform(raw, &registry)?;
    let mut highlighter = Highlighter::new(&dataset, &registry)?;
    if let Some(name) = selected {
        highlighter.apply(&Interaction::Click(legend_label(&registry, &name)?))?;
    }
    if let Some(name) = hovered {
        highlighter.apply(&Interaction::Hover(legend_label(&registry, &name)?))?;
    }
    Ok(render_spec(&dataset, highlighter.state()))
}

pub async fn run_export(
    source: &SourceArgs,
    output: &Path,
    selected: Option<String>,
    hovered: Option<String>,
) -> anyhow::Result<()> {
    let raw = source::load_raw(source).await?;
    let spec = build_export(&raw, selected, hovered)?;
    let json = serde_json::to_string_pretty(&spec)?;
    tokio::fs::write(output, json).await?;
    info!(
        "Wrote {} series over {} dates (active: {}) to {}",
        spec.series.len(),
        spec.labels.len(),
        spec.active,
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nww_core::highlight::Emphasis;
    use nww_core::WastewaterError;

    static SAMPLE: &str = include_str!("../../fixtures/sample_wastewater.json");

    #[test]
    fn test_default_export_highlights_primary() {
        let raw = RawDataset::from_json_str(SAMPLE).unwrap();
        let spec = build_export(&raw, None, None).unwrap();
        assert_eq!(spec.active, "All Watersheds");
        assert_eq!(spec.series.len(), 6);
        assert_eq!(spec.series[0].emphasis, Emphasis::Full);
        assert!(spec.series[1..]
            .iter()
            .all(|s| s.emphasis == Emphasis::Dimmed));
    }

    #[test]
    fn test_hover_wins_over_selection() {
        let raw = RawDataset::from_json_str(SAMPLE).unwrap();
        let spec = build_export(
            &raw,
            Some("Richmond".to_string()),
            Some("Queens".to_string()),
        )
        .unwrap();
        assert_eq!(spec.active, "Queens");
        let full: Vec<&str> = spec
            .series
            .iter()
            .filter(|s| s.emphasis == Emphasis::Full)
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(full, vec!["Queens"]);
    }

    #[test]
    fn test_selection_accepts_raw_series_key() {
        let raw = RawDataset::from_json_str(SAMPLE).unwrap();
        let spec = build_export(&raw, Some("New York_w_percentile".to_string()), None).unwrap();
        assert_eq!(spec.active, "New York");
    }

    #[test]
    fn test_unknown_selection_fails() {
        let raw = RawDataset::from_json_str(SAMPLE).unwrap();
        let err = build_export(&raw, Some("Yonkers".to_string()), None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WastewaterError>(),
            Some(WastewaterError::UnknownSeries(_))
        ));
    }

    #[tokio::test]
    async fn test_run_export_writes_file() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
        let source = SourceArgs {
            url: String::new(),
            file: Some(manifest.join("../fixtures/sample_wastewater.json")),
        };
        let output = std::env::temp_dir().join(format!("nww-export-{}.json", std::process::id()));
        run_export(&source, &output, None, Some("Bronx".to_string()))
            .await
            .unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["active"], "Bronx");
        assert_eq!(written["labels"].as_array().unwrap().len(), 30);
        std::fs::remove_file(&output).unwrap();
    }
}
