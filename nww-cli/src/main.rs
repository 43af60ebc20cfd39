//! NWW CLI - Command line tool for NYC wastewater COVID data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "nww-cli",
    version,
    about = "NYC wastewater COVID tracker toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: nww_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    nww_cmd::run(cli.command).await
}
