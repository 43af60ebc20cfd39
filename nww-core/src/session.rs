//! What the headline panel shows for one session.

use crate::error::Result;
use crate::raw::RawDataset;
use crate::series::transform;
use crate::summary::{summarize, CovidSummary};
use crate::watershed::WatershedRegistry;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "lowercase")]
pub enum SummaryState {
    /// Fetch pending, or failed at the network/parse step.
    #[default]
    Loading,
    Ready(CovidSummary),
    /// Data arrived but has the wrong shape for a summary.
    Unavailable(String),
}

impl SummaryState {
    /// Map the outcome of one load attempt.
    ///
    /// Network and parse failures stay `Loading`: there is no error banner for
    /// them yet, only the log line.
    pub fn from_outcome(outcome: Result<CovidSummary>) -> Self {
        match outcome {
            Ok(summary) => SummaryState::Ready(summary),
            Err(e) if e.is_fetch_failure() => {
                log::error!("dataset load failed: {}", e);
                SummaryState::Loading
            }
            Err(e) => {
                log::warn!("summary unavailable: {}", e);
                SummaryState::Unavailable(e.to_string())
            }
        }
    }

    pub fn summary(&self) -> Option<&CovidSummary> {
        match self {
            SummaryState::Ready(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SummaryState::Loading)
    }
}

/// Transform and summarize a loaded dataset in one step.
pub fn build_summary(raw: &RawDataset, registry: &WatershedRegistry) -> Result<CovidSummary> {
    summarize(transform(raw, registry)?, registry)
}

/// Fold a load result straight into a [`SummaryState`].
pub fn summary_state(loaded: Result<RawDataset>, registry: &WatershedRegistry) -> SummaryState {
    SummaryState::from_outcome(loaded.and_then(|raw| build_summary(&raw, registry)))
}
