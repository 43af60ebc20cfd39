//! Hover/click highlight state for the chart legend.
//!
//! The active series is the hovered one if any, otherwise the selected one.
//! It keeps its registry colour; every other series gets the same colour with
//! [`DIMMED_ALPHA_SUFFIX`] appended as a hex alpha byte.

use crate::error::{Result, WastewaterError};
use crate::series::{Series, SeriesDataset};
use crate::watershed::WatershedRegistry;
use serde::{Deserialize, Serialize};

/// Hex alpha appended to dimmed series colours (`#507fff` -> `#507fff10`).
pub const DIMMED_ALPHA_SUFFIX: &str = "10";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightState {
    pub selected: String,
    pub hovered: Option<String>,
}

impl HighlightState {
    pub fn new(selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            hovered: None,
        }
    }

    /// `hovered` if set, else `selected`.
    pub fn active(&self) -> &str {
        self.hovered.as_deref().unwrap_or(&self.selected)
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }
}

/// Legend events accepted from the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "label", rename_all = "lowercase")]
pub enum Interaction {
    Hover(String),
    Unhover,
    Click(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Full,
    Dimmed,
}

/// How the renderer should draw one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesStyle {
    pub label: String,
    /// Colour to use for both line and fill.
    pub color: String,
    pub emphasis: Emphasis,
}

/// Style every series for the given state, in series order.
pub fn resolve_emphasis(state: &HighlightState, series: &[Series]) -> Vec<SeriesStyle> {
    let active = state.active();
    series
        .iter()
        .map(|s| {
            if s.label == active {
                SeriesStyle {
                    label: s.label.clone(),
                    color: s.color.clone(),
                    emphasis: Emphasis::Full,
                }
            } else {
                SeriesStyle {
                    label: s.label.clone(),
                    color: format!("{}{}", s.color, DIMMED_ALPHA_SUFFIX),
                    emphasis: Emphasis::Dimmed,
                }
            }
        })
        .collect()
}

/// Highlight state bound to the labels of one dataset.
///
/// Events naming a label outside the dataset are rejected, so exactly one
/// series is always at full emphasis.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlighter {
    labels: Vec<String>,
    state: HighlightState,
}

impl Highlighter {
    /// Start with the registry's primary watershed selected and nothing hovered.
    pub fn new(dataset: &SeriesDataset, registry: &WatershedRegistry) -> Result<Self> {
        let labels: Vec<String> = dataset.series_labels().map(String::from).collect();
        let primary = &registry.primary().label;
        if !labels.iter().any(|l| l == primary) {
            return Err(WastewaterError::UnknownSeries(primary.clone()));
        }
        Ok(Self {
            labels,
            state: HighlightState::new(primary.clone()),
        })
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    pub fn active(&self) -> &str {
        self.state.active()
    }

    fn check(&self, label: &str) -> Result<()> {
        if self.labels.iter().any(|l| l == label) {
            Ok(())
        } else {
            Err(WastewaterError::UnknownSeries(label.to_string()))
        }
    }

    /// Returns whether the state changed.
    pub fn on_hover(&mut self, label: &str) -> Result<bool> {
        self.check(label)?;
        if self.state.hovered.as_deref() == Some(label) {
            return Ok(false);
        }
        self.state.hovered = Some(label.to_string());
        Ok(true)
    }

    pub fn on_leave_hover(&mut self) -> bool {
        self.state.hovered.take().is_some()
    }

    /// Select a series; any hover in progress stays in effect.
    pub fn on_click(&mut self, label: &str) -> Result<bool> {
        self.check(label)?;
        if self.state.selected == label {
            return Ok(false);
        }
        self.state.selected = label.to_string();
        Ok(true)
    }

    pub fn apply(&mut self, interaction: &Interaction) -> Result<bool> {
        let changed = match interaction {
            Interaction::Hover(label) => self.on_hover(label)?,
            Interaction::Unhover => self.on_leave_hover(),
            Interaction::Click(label) => self.on_click(label)?,
        };
        if changed {
            log::debug!("highlight: {:?} -> active {}", interaction, self.active());
        }
        Ok(changed)
    }

    pub fn emphasis(&self, series: &[Series]) -> Vec<SeriesStyle> {
        resolve_emphasis(&self.state, series)
    }
}
