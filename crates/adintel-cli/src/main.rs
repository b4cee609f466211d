mod analyze;
mod classify;
mod compare;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "adintel-cli")]
#[command(about = "Ad creative intelligence command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify raw captures into ad records and append them to the corpus.
    Classify {
        /// JSON file holding an array of raw captures.
        #[arg(long)]
        input: PathBuf,
        /// Corpus file to append to; defaults to the configured corpus path.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Aggregate a corpus into competitive insights.
    Analyze {
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Write the full insights structure as JSON to this path.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Profile two advertisers side by side.
    Compare {
        #[arg(long)]
        corpus: Option<PathBuf>,
        first: String,
        second: String,
    },
    /// Profile every watchlist advertiser present in the corpus.
    Report {
        #[arg(long)]
        corpus: Option<PathBuf>,
        #[arg(long)]
        watchlist: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = adintel_core::load_app_config_from_env()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { input, output } => {
            classify::run(&config, &input, output.as_deref()).await
        }
        Commands::Analyze { corpus, output } => {
            analyze::run(&config, corpus.as_deref(), output.as_deref())
        }
        Commands::Compare {
            corpus,
            first,
            second,
        } => compare::run(&config, corpus.as_deref(), &first, &second),
        Commands::Report { corpus, watchlist } => {
            report::run(&config, corpus.as_deref(), watchlist.as_deref())
        }
    }
}
