use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waybill::{config::Config, error::Error, ingest::loader::ReferenceDataLoader, startup};

#[derive(Debug, Parser)]
#[command(
    name = "waybill",
    about = "Load UN/LOCODE and airport reference files into the facility catalog"
)]
struct Cli {
    /// Path to a UN/LOCODE code-list CSV
    #[arg(long, required_unless_present = "airports")]
    unlocode: Option<PathBuf>,

    /// Path to an airport reference file
    #[arg(long, required_unless_present = "unlocode")]
    airports: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waybill=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, &cli).await {
        error!("Import failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config, cli: &Cli) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;
    let loader = ReferenceDataLoader::new(&db);

    if let Some(path) = &cli.unlocode {
        loader.load_unlocode_file(path).await?;
    }

    if let Some(path) = &cli.airports {
        loader.load_airports_file(path).await?;
    }

    Ok(())
}
