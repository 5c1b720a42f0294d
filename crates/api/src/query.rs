//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped in the handlers via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for `GET /ghazals`.
#[derive(Debug, Deserialize)]
pub struct GhazalListParams {
    /// Free-text search term.
    pub q: Option<String>,
    /// `all` (default), `persian`, or `translation`.
    pub search_in: Option<String>,
    pub min_number: Option<i32>,
    pub max_number: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
