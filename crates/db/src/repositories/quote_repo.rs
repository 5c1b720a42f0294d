//! Repository for the `quotes` table.

use sqlx::PgPool;

use crate::models::quote::{CreateQuote, Quote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, text, author, is_daily_quote, added_at";

/// Provides quote listing, quote-of-the-day lookups, and importer inserts.
pub struct QuoteRepo;

impl QuoteRepo {
    /// Insert a quote unless one with the same text exists.
    pub async fn create_if_absent(
        pool: &PgPool,
        input: &CreateQuote,
    ) -> Result<Option<Quote>, sqlx::Error> {
        let query = format!(
            "INSERT INTO quotes (text, author, is_daily_quote)
             VALUES ($1, $2, $3)
             ON CONFLICT (md5(text)) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(&input.text)
            .bind(&input.author)
            .bind(input.is_daily_quote)
            .fetch_optional(pool)
            .await
    }

    /// List quotes in id order.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Quote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quotes ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Quote>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Return `(flagged, total)` quote counts in one round trip.
    pub async fn counts(pool: &PgPool) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as(
            "SELECT COUNT(*) FILTER (WHERE is_daily_quote), COUNT(*) FROM quotes",
        )
        .fetch_one(pool)
        .await
    }

    /// The flagged quote at zero-based `index`, in id order.
    pub async fn find_daily_at_index(
        pool: &PgPool,
        index: i64,
    ) -> Result<Option<Quote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quotes WHERE is_daily_quote ORDER BY id OFFSET $1 LIMIT 1"
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(index)
            .fetch_optional(pool)
            .await
    }

    /// Any quote at zero-based `index`, in id order.
    pub async fn find_at_index(pool: &PgPool, index: i64) -> Result<Option<Quote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quotes ORDER BY id OFFSET $1 LIMIT 1");
        sqlx::query_as::<_, Quote>(&query)
            .bind(index)
            .fetch_optional(pool)
            .await
    }
}
