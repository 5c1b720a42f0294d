//! Repository for the `daily_faals` ledger.
//!
//! Rows are only ever inserted. The `uq_daily_faals_user_date` constraint
//! guarantees one row per user per day; [`DailyFaalRepo::create_if_absent`]
//! relies on it to resolve concurrent inserts.

use chrono::NaiveDate;
use faal_core::types::DbId;
use sqlx::PgPool;

use crate::models::daily_faal::{FaalAssignment, FaalAssignmentRow};

/// Select list for a ledger row joined with its ghazal (`f` / `g` aliases).
const JOINED_COLUMNS: &str = "f.id, f.user_id, f.faal_date, f.created_at AS assigned_at, \
    g.id AS ghazal_id, g.ghazal_number, g.persian_text, g.english_translation, \
    g.created_at AS ghazal_created_at, g.updated_at AS ghazal_updated_at";

/// Provides ledger lookups and the atomic insert-or-fetch.
pub struct DailyFaalRepo;

impl DailyFaalRepo {
    /// The assignment for `user_id` on `date`, if any.
    pub async fn find_for_day(
        pool: &PgPool,
        user_id: DbId,
        date: NaiveDate,
    ) -> Result<Option<FaalAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM daily_faals f
             JOIN ghazals g ON g.id = f.ghazal_id
             WHERE f.user_id = $1 AND f.faal_date = $2"
        );
        let row = sqlx::query_as::<_, FaalAssignmentRow>(&query)
            .bind(user_id)
            .bind(date)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(FaalAssignment::from))
    }

    /// Store `ghazal_id` for `(user_id, date)` unless a row already exists.
    ///
    /// Returns the row now stored for the pair and whether this call created
    /// it. A losing writer re-reads in a fresh statement so that it observes
    /// the winner's committed row.
    pub async fn create_if_absent(
        pool: &PgPool,
        user_id: DbId,
        date: NaiveDate,
        ghazal_id: DbId,
    ) -> Result<(FaalAssignment, bool), sqlx::Error> {
        let query = format!(
            "WITH f AS (
                 INSERT INTO daily_faals (user_id, ghazal_id, faal_date)
                 VALUES ($1, $2, $3)
                 ON CONFLICT (user_id, faal_date) DO NOTHING
                 RETURNING id, user_id, ghazal_id, faal_date, created_at
             )
             SELECT {JOINED_COLUMNS}
             FROM f
             JOIN ghazals g ON g.id = f.ghazal_id"
        );
        let inserted = sqlx::query_as::<_, FaalAssignmentRow>(&query)
            .bind(user_id)
            .bind(ghazal_id)
            .bind(date)
            .fetch_optional(pool)
            .await?;

        if let Some(row) = inserted {
            return Ok((row.into(), true));
        }

        tracing::debug!(user_id, %date, "Faal insert conflicted; reading stored row");
        let existing = Self::find_for_day(pool, user_id, date)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        Ok((existing, false))
    }

    /// A user's assignments, newest day first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FaalAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM daily_faals f
             JOIN ghazals g ON g.id = f.ghazal_id
             WHERE f.user_id = $1
             ORDER BY f.faal_date DESC
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, FaalAssignmentRow>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(FaalAssignment::from).collect())
    }

    /// Number of ledger rows for `(user_id, date)`: 0 or 1.
    pub async fn count_for_day(
        pool: &PgPool,
        user_id: DbId,
        date: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM daily_faals WHERE user_id = $1 AND faal_date = $2")
                .bind(user_id)
                .bind(date)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
