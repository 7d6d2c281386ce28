mod commands;
mod terminal;

use anyhow::Context;
use commands::{CommandLine, Commands, classify, heuristics};
use screener_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    print::banner(commands.no_banner);

    match commands.command {
        Commands::Classify(args) => {
            let cfg = Config::from_env().context("configuration error")?;
            print::header("starting classification");
            classify::classify(args, cfg).await?;
        }
        Commands::Heuristics { input } => {
            print::header("evaluating heuristics");
            heuristics::heuristics(&input)?;
        }
    }

    print::fat_separator();
    Ok(())
}
