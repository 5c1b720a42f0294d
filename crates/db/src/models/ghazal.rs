//! Ghazal catalog entries.

use faal_core::import::CleanGhazal;
use faal_core::search::SearchIn;
use faal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `ghazals` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Ghazal {
    pub id: DbId,
    pub ghazal_number: i32,
    pub persian_text: String,
    pub english_translation: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a ghazal.
#[derive(Debug, Clone)]
pub struct CreateGhazal {
    pub ghazal_number: i32,
    pub persian_text: String,
    pub english_translation: Option<String>,
}

impl From<CleanGhazal> for CreateGhazal {
    fn from(g: CleanGhazal) -> Self {
        Self {
            ghazal_number: g.ghazal_number,
            persian_text: g.persian_text,
            english_translation: g.english_translation,
        }
    }
}

/// Resolved filters for a ghazal listing. Limits are already clamped.
#[derive(Debug, Clone)]
pub struct GhazalSearch {
    /// `ILIKE` pattern, or `None` for no text filter.
    pub pattern: Option<String>,
    pub search_in: SearchIn,
    pub min_number: Option<i32>,
    pub max_number: Option<i32>,
    pub limit: i64,
    pub offset: i64,
}
