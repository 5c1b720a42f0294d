//! Daily faal ledger rows.

use chrono::NaiveDate;
use faal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::ghazal::Ghazal;

/// One ledger entry together with the ghazal it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaalAssignment {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    #[serde(rename = "date")]
    pub faal_date: NaiveDate,
    pub assigned_at: Timestamp,
    pub ghazal: Ghazal,
}

/// Flat join row of `daily_faals` and `ghazals`.
#[derive(Debug, FromRow)]
pub(crate) struct FaalAssignmentRow {
    pub id: DbId,
    pub user_id: DbId,
    pub faal_date: NaiveDate,
    pub assigned_at: Timestamp,
    pub ghazal_id: DbId,
    pub ghazal_number: i32,
    pub persian_text: String,
    pub english_translation: Option<String>,
    pub ghazal_created_at: Timestamp,
    pub ghazal_updated_at: Timestamp,
}

impl From<FaalAssignmentRow> for FaalAssignment {
    fn from(row: FaalAssignmentRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            faal_date: row.faal_date,
            assigned_at: row.assigned_at,
            ghazal: Ghazal {
                id: row.ghazal_id,
                ghazal_number: row.ghazal_number,
                persian_text: row.persian_text,
                english_translation: row.english_translation,
                created_at: row.ghazal_created_at,
                updated_at: row.ghazal_updated_at,
            },
        }
    }
}
