//! Command implementations for the NWW CLI.
//!
//! Provides subcommands for printing the at-a-glance summary and exporting
//! chart render data from the published wastewater dataset.

use clap::Subcommand;
use std::path::PathBuf;

pub mod export;
pub mod source;
pub mod summary;

pub use source::SourceArgs;

#[derive(Subcommand)]
pub enum Command {
    /// Print the current percentile, two-week trend and last-updated date
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write labels, series and emphasis styles as chart JSON
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output path for the render JSON
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Watershed to select, by legend label or raw key (defaults to the
        /// all-watersheds series)
        #[arg(long)]
        selected: Option<String>,

        /// Watershed being hovered, by legend label or raw key
        #[arg(long)]
        hovered: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { source, json } => summary::run_summary(&source, json).await,
        Command::Export {
            source,
            output,
            selected,
            hovered,
        } => {
            export::run_export(&source, &output, selected, hovered).await
        }
    }
}
