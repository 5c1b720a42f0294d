//! `faal-import`: load ghazal and quote exports into the catalog.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faal_api::import::{import_ghazals_file, import_quotes_file};

/// Import ghazals and quotes from JSON exports.
#[derive(Debug, Parser)]
#[command(name = "faal-import", version)]
struct Cli {
    /// Postgres connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Path to a `ghazals.json` export.
    #[arg(long)]
    ghazals: Option<PathBuf>,

    /// Path to a `quotes.json` export.
    #[arg(long)]
    quotes: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faal_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if cli.ghazals.is_none() && cli.quotes.is_none() {
        anyhow::bail!("Nothing to import: pass --ghazals and/or --quotes");
    }

    let pool = faal_db::create_pool(&cli.database_url)
        .await
        .context("Failed to connect to database")?;
    faal_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    if let Some(path) = &cli.ghazals {
        let report = import_ghazals_file(&pool, path).await?;
        println!(
            "ghazals: {} created, {} already present, {} skipped",
            report.created, report.existing, report.skipped
        );
    }

    if let Some(path) = &cli.quotes {
        let report = import_quotes_file(&pool, path).await?;
        println!(
            "quotes: {} created, {} already present, {} skipped",
            report.created, report.existing, report.skipped
        );
    }

    pool.close().await;
    Ok(())
}
