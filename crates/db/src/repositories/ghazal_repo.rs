//! Repository for the `ghazals` table.
//!
//! Catalog order is `ghazal_number` ascending everywhere, so an index into
//! the catalog (as used by random selection) is stable between reads.

use sqlx::PgPool;

use crate::models::ghazal::{CreateGhazal, Ghazal, GhazalSearch};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, ghazal_number, persian_text, english_translation, created_at, updated_at";

/// Provides read access to the catalog plus idempotent inserts for the importer.
pub struct GhazalRepo;

impl GhazalRepo {
    /// Insert a ghazal unless its number already exists.
    ///
    /// Returns `None` when a row with the same `ghazal_number` was present;
    /// the stored row is left untouched.
    pub async fn create_if_absent(
        pool: &PgPool,
        input: &CreateGhazal,
    ) -> Result<Option<Ghazal>, sqlx::Error> {
        let query = format!(
            "INSERT INTO ghazals (ghazal_number, persian_text, english_translation)
             VALUES ($1, $2, $3)
             ON CONFLICT (ghazal_number) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ghazal>(&query)
            .bind(input.ghazal_number)
            .bind(&input.persian_text)
            .bind(&input.english_translation)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_number(
        pool: &PgPool,
        ghazal_number: i32,
    ) -> Result<Option<Ghazal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ghazals WHERE ghazal_number = $1");
        sqlx::query_as::<_, Ghazal>(&query)
            .bind(ghazal_number)
            .fetch_optional(pool)
            .await
    }

    /// Total number of ghazals in the catalog.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ghazals")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// The ghazal at zero-based `index` in catalog order.
    pub async fn find_at_index(pool: &PgPool, index: i64) -> Result<Option<Ghazal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ghazals
             ORDER BY ghazal_number
             OFFSET $1 LIMIT 1"
        );
        sqlx::query_as::<_, Ghazal>(&query)
            .bind(index)
            .fetch_optional(pool)
            .await
    }

    /// List ghazals in catalog order, filtered by text and number range.
    ///
    /// With [`SearchIn::All`](faal_core::search::SearchIn::All) the pattern is
    /// also matched against the ghazal number rendered as text.
    pub async fn search(pool: &PgPool, params: &GhazalSearch) -> Result<Vec<Ghazal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ghazals
             WHERE ($1::TEXT IS NULL OR (
                        ($2::BOOLEAN AND persian_text ILIKE $1)
                     OR ($3::BOOLEAN AND english_translation ILIKE $1)
                     OR ($2::BOOLEAN AND $3::BOOLEAN AND ghazal_number::TEXT LIKE $1)))
               AND ($4::INTEGER IS NULL OR ghazal_number >= $4)
               AND ($5::INTEGER IS NULL OR ghazal_number <= $5)
             ORDER BY ghazal_number
             LIMIT $6 OFFSET $7"
        );
        sqlx::query_as::<_, Ghazal>(&query)
            .bind(&params.pattern)
            .bind(params.search_in.includes_persian())
            .bind(params.search_in.includes_translation())
            .bind(params.min_number)
            .bind(params.max_number)
            .bind(params.limit)
            .bind(params.offset)
            .fetch_all(pool)
            .await
    }
}
