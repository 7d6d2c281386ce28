pub mod classify;
pub mod heuristics;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

const DEFAULT_INPUT: &str = "data/data.csv";
const DEFAULT_OUTPUT: &str = "classified_companies_detailed.csv";

#[derive(Parser)]
#[command(name = "screener")]
#[command(about = "Screens early-stage companies against an investment thesis.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify every company and write the detailed results
    #[command(alias = "c")]
    Classify(ClassifyArgs),
    /// Evaluate only the offline heuristics, without calling the provider
    #[command(alias = "h")]
    Heuristics {
        /// Company CSV to read
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// Company CSV to read
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the detailed results
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Maximum provider calls in flight, overrides SCREENER_CONCURRENCY
    #[arg(short, long)]
    pub concurrency: Option<NonZeroUsize>,

    /// Provider model, overrides SCREENER_MODEL
    #[arg(short, long)]
    pub model: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
