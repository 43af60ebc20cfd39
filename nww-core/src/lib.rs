//! Core of the NYC wastewater dashboard.
//!
//! - `raw`: the published JSON dataset, validated and with explicit series order
//! - `watershed`: registry of series keys to labels and colours
//! - `series`: raw dataset to chart series
//! - `summary`: headline percentile, trend and last-updated date
//! - `highlight`: legend hover/click state and per-series emphasis
//! - `render`: chart-ready series with emphasis applied
//! - `session`: loading / ready / unavailable state for the headline panel
//! - `loader`: HTTP fetch of the dataset (feature `api`)

pub mod error;
pub mod highlight;
pub mod loader;
pub mod raw;
pub mod render;
pub mod series;
pub mod session;
pub mod summary;
pub mod watershed;

pub use error::{Result, WastewaterError};
