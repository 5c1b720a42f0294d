//! Catalog import: load cleaned ghazals and quotes into the database.
//!
//! Inserts are get-or-create, so re-running an import is harmless. Existing
//! ghazals are never removed or rewritten because ledger rows point at them.

use std::path::Path;

use anyhow::Context;
use faal_core::import::{parse_ghazals, parse_quotes, prepare_ghazals, prepare_quotes};
use faal_core::import::{GhazalRecord, QuoteRecord};
use faal_db::models::ghazal::CreateGhazal;
use faal_db::models::quote::CreateQuote;
use faal_db::repositories::{GhazalRepo, QuoteRepo};
use faal_db::DbPool;

/// Counts for one imported file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows inserted by this run.
    pub created: usize,
    /// Clean records that matched a row already stored.
    pub existing: usize,
    /// Records dropped while cleaning (empty or repeated within the file).
    pub skipped: usize,
}

/// Insert ghazal records, keyed by `ghazal_number`.
pub async fn import_ghazals(
    pool: &DbPool,
    records: Vec<GhazalRecord>,
) -> Result<ImportReport, sqlx::Error> {
    let prepared = prepare_ghazals(records);
    let mut report = ImportReport {
        skipped: prepared.skipped,
        ..ImportReport::default()
    };

    for ghazal in prepared.records {
        let number = ghazal.ghazal_number;
        match GhazalRepo::create_if_absent(pool, &CreateGhazal::from(ghazal)).await? {
            Some(_) => report.created += 1,
            None => {
                tracing::debug!(ghazal_number = number, "Ghazal already stored");
                report.existing += 1;
            }
        }
    }

    tracing::info!(
        created = report.created,
        existing = report.existing,
        skipped = report.skipped,
        "Ghazal import finished",
    );
    Ok(report)
}

/// Insert quote records, keyed by text.
pub async fn import_quotes(
    pool: &DbPool,
    records: Vec<QuoteRecord>,
) -> Result<ImportReport, sqlx::Error> {
    let prepared = prepare_quotes(records);
    let mut report = ImportReport {
        skipped: prepared.skipped,
        ..ImportReport::default()
    };

    for quote in prepared.records {
        match QuoteRepo::create_if_absent(pool, &CreateQuote::from(quote)).await? {
            Some(_) => report.created += 1,
            None => report.existing += 1,
        }
    }

    tracing::info!(
        created = report.created,
        existing = report.existing,
        skipped = report.skipped,
        "Quote import finished",
    );
    Ok(report)
}

/// Read and import a `ghazals.json` export.
pub async fn import_ghazals_file(pool: &DbPool, path: &Path) -> anyhow::Result<ImportReport> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records = parse_ghazals(&raw).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(import_ghazals(pool, records).await?)
}

/// Read and import a `quotes.json` export.
pub async fn import_quotes_file(pool: &DbPool, path: &Path) -> anyhow::Result<ImportReport> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records = parse_quotes(&raw).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(import_quotes(pool, records).await?)
}
