//! WDI CLI - Command line tool for querying world development indicator data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wdi-cli",
    version,
    about = "World development indicators dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wdi_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wdi_cmd::run(cli.command)
}
