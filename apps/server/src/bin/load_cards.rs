//! Card data loader
//!
//! Reads a JSON export of the form `{"sets": [...], "cards": [...]}` and upserts every
//! set and card in one transaction.
//!
//! Usage:
//!   deckbrew-load --file cards.json [--database-url <url>] [--migrate]

use anyhow::{Context, Result};
use clap::Parser;
use deckbrew::{
    config::Config,
    db::{self, CardImport, PgCardStore},
    logging,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[clap(name = "deckbrew-load")]
#[clap(about = "Load sets and cards into the Deckbrew database")]
struct Args {
    /// Path to the JSON export
    #[clap(short, long)]
    file: PathBuf,

    /// Database connection URL (defaults to the configured database)
    #[clap(short, long)]
    database_url: Option<String>,

    /// Apply pending migrations before loading
    #[clap(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_simple_logging();

    let args = Args::parse();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(url) = args.database_url {
        config.database.url = url;
    }

    let raw = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let import: CardImport = serde_json::from_slice(&raw)
        .with_context(|| format!("Failed to parse {}", args.file.display()))?;

    info!(
        file = %args.file.display(),
        sets = import.sets.len(),
        cards = import.cards.len(),
        "Parsed card data"
    );

    let pool = db::create_pool(&config.database)
        .await
        .context("Failed to connect to database")?;

    if args.migrate {
        db::run_migrations(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let store = PgCardStore::new(pool.clone());
    let summary = store.import(&import).await.context("Import failed")?;

    info!(sets = summary.sets, cards = summary.cards, "Load complete");
    pool.close().await;
    Ok(())
}
