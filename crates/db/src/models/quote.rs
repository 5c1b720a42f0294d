//! Quote catalog entries.

use faal_core::import::CleanQuote;
use faal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `quotes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Quote {
    pub id: DbId,
    pub text: String,
    pub author: String,
    pub is_daily_quote: bool,
    pub added_at: Timestamp,
}

/// DTO for inserting a quote.
#[derive(Debug, Clone)]
pub struct CreateQuote {
    pub text: String,
    pub author: String,
    pub is_daily_quote: bool,
}

impl From<CleanQuote> for CreateQuote {
    fn from(q: CleanQuote) -> Self {
        Self {
            text: q.text,
            author: q.author,
            is_daily_quote: q.is_daily_quote,
        }
    }
}
