//! Where a command reads the raw dataset from.

use clap::Args;
use log::info;
use nww_core::loader::{self, DEFAULT_DATA_URL};
use nww_core::raw::RawDataset;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// URL of the published dataset
    #[arg(long, default_value = DEFAULT_DATA_URL, conflicts_with = "file")]
    pub url: String,

    /// Read the dataset from a local JSON file instead of fetching it
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,
}

/// Load the raw dataset from the file if given, otherwise from the URL.
pub async fn load_raw(source: &SourceArgs) -> anyhow::Result<RawDataset> {
    match &source.file {
        Some(path) => {
            info!("Reading wastewater dataset from {}", path.display());
            let body = tokio::fs::read_to_string(path).await?;
            Ok(RawDataset::from_json_str(&body)?)
        }
        None => {
            let client = reqwest::Client::new();
            Ok(loader::load(&client, &source.url).await?)
        }
    }
}
