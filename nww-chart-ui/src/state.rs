//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Effects that read these signals re-run on every change, which is how the
//! chart learns about new data and highlight transitions.

use dioxus::prelude::*;
use log::warn;
use nww_core::highlight::{Highlighter, Interaction, SeriesStyle};
use nww_core::raw::RawDataset;
use nww_core::render::{render_spec, RenderSpec};
use nww_core::series::{transform, SeriesDataset};
use nww_core::session::SummaryState;
use nww_core::summary::summarize;
use nww_core::watershed::WatershedRegistry;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Headline panel state (Loading until the one fetch completes)
    pub summary: Signal<SummaryState>,
    /// Chart series (None until a dataset transforms cleanly)
    pub dataset: Signal<Option<SeriesDataset>>,
    /// Legend highlight state bound to `dataset`
    pub highlight: Signal<Option<Highlighter>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            summary: Signal::new(SummaryState::Loading),
            dataset: Signal::new(None),
            highlight: Signal::new(None),
        }
    }

    /// Replace everything derived from the dataset with the result of one load.
    pub fn install(&mut self, loaded: nww_core::Result<RawDataset>, registry: &WatershedRegistry) {
        let dataset = match loaded.and_then(|raw| transform(&raw, registry)) {
            Ok(dataset) => dataset,
            Err(e) => {
                self.dataset.set(None);
                self.highlight.set(None);
                self.summary.set(SummaryState::from_outcome(Err(e)));
                return;
            }
        };

        let highlighter = Highlighter::new(&dataset, registry)
            .map_err(|e| warn!("highlight disabled: {}", e))
            .ok();
        self.highlight.set(highlighter);
        self.summary
            .set(SummaryState::from_outcome(summarize(dataset.clone(), registry)));
        self.dataset.set(Some(dataset));
    }

    /// Feed a legend event into the highlight state.
    pub fn interact(&mut self, interaction: Interaction) {
        let mut highlight = self.highlight.write();
        if let Some(highlighter) = highlight.as_mut() {
            if let Err(e) = highlighter.apply(&interaction) {
                warn!("ignored legend event {:?}: {}", interaction, e);
            }
        }
    }

    /// Legend styles in series order; empty until a dataset is installed.
    pub fn styles(&self) -> Vec<SeriesStyle> {
        let dataset = self.dataset.read();
        let highlight = self.highlight.read();
        match (dataset.as_ref(), highlight.as_ref()) {
            (Some(dataset), Some(highlighter)) => highlighter.emphasis(&dataset.series),
            _ => Vec::new(),
        }
    }

    /// Current render instructions, if there is anything to draw.
    pub fn render_spec(&self) -> Option<RenderSpec> {
        let dataset = self.dataset.read();
        let highlight = self.highlight.read();
        match (dataset.as_ref(), highlight.as_ref()) {
            (Some(dataset), Some(highlighter)) => Some(render_spec(dataset, highlighter.state())),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
