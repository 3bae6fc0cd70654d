//! Heat CLI - Command line tool for daily temperature CSVs.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "heat-cli",
    version,
    about = "Daily temperature heatmap toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: heat_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    heat_cmd::run(cli.command)
}
