//! Integration tests for the catalog importer.

use std::io::Write;

use assert_matches::assert_matches;
use faal_api::import::{import_ghazals, import_ghazals_file, import_quotes_file, ImportReport};
use faal_core::import::GhazalRecord;
use faal_db::repositories::{GhazalRepo, QuoteRepo};
use sqlx::PgPool;
use tempfile::NamedTempFile;

fn write_json(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const GHAZALS_JSON: &str = r#"[
    {"persian_text": "الا یا ایها الساقی_x000D_\r\nادر کاسا", "english_translation": "O cupbearer"},
    {"ghazal_number": 5, "persian_text": "صلاح کار کجا", "english_translation": ""},
    {"persian_text": "  ", "english_translation": "  "}
]"#;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_ghazal_file_import_cleans_and_numbers(pool: PgPool) {
    let file = write_json(GHAZALS_JSON);

    let report = import_ghazals_file(&pool, file.path()).await.unwrap();
    assert_eq!(
        report,
        ImportReport {
            created: 2,
            existing: 0,
            skipped: 1,
        }
    );

    let first = GhazalRepo::find_by_number(&pool, 1).await.unwrap().unwrap();
    assert_eq!(first.persian_text, "الا یا ایها الساقی\nادر کاسا");
    assert_eq!(first.english_translation.as_deref(), Some("O cupbearer"));

    let fifth = GhazalRepo::find_by_number(&pool, 5).await.unwrap().unwrap();
    assert!(fifth.english_translation.is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reimport_keeps_existing_ghazals(pool: PgPool) {
    let file = write_json(GHAZALS_JSON);
    import_ghazals_file(&pool, file.path()).await.unwrap();
    let before = GhazalRepo::find_by_number(&pool, 1).await.unwrap().unwrap();

    let changed = vec![GhazalRecord {
        ghazal_number: Some(1),
        persian_text: "متن دیگر".to_string(),
        english_translation: "Other text".to_string(),
    }];
    let report = import_ghazals(&pool, changed).await.unwrap();

    assert_eq!(report.created, 0);
    assert_eq!(report.existing, 1);
    let after = GhazalRepo::find_by_number(&pool, 1).await.unwrap().unwrap();
    assert_eq!(after, before);
    assert_eq!(GhazalRepo::count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_quote_file_import_defaults_author_and_dedupes(pool: PgPool) {
    let file = write_json(
        r#"[
            {"text": "Quote A", "author": "Rumi", "is_daily_quote": true},
            {"text": "Quote B"},
            {"text": "Quote B", "author": "Someone"},
            {"text": ""}
        ]"#,
    );

    let report = import_quotes_file(&pool, file.path()).await.unwrap();
    assert_eq!(report.created, 2);
    assert_eq!(report.skipped, 2);

    let quotes = QuoteRepo::list(&pool, 10, 0).await.unwrap();
    assert_eq!(quotes[0].author, "Rumi");
    assert!(quotes[0].is_daily_quote);
    assert_eq!(quotes[1].author, "حافظ شیرازی");

    // A second run finds everything already stored.
    let again = import_quotes_file(&pool, file.path()).await.unwrap();
    assert_eq!(again.created, 0);
    assert_eq!(again.existing, 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_or_missing_file_is_an_error(pool: PgPool) {
    let file = write_json("{ not json");
    assert_matches!(import_ghazals_file(&pool, file.path()).await, Err(_));

    let missing = std::path::Path::new("/definitely/not/here.json");
    assert_matches!(import_quotes_file(&pool, missing).await, Err(_));
}
