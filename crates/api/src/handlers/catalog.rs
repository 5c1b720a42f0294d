//! Public read-only handlers for quotes and ghazals.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use faal_core::quote_of_day::{pick_daily_quote, QuotePick};
use faal_core::search::{
    clamp_limit, clamp_offset, contains_pattern, validate_number_range, SearchIn,
    DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
};
use faal_db::models::ghazal::{Ghazal, GhazalSearch};
use faal_db::models::quote::Quote;
use faal_db::repositories::{GhazalRepo, QuoteRepo};

use crate::error::{AppError, AppResult};
use crate::query::{GhazalListParams, PaginationParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/quote
///
/// Quote of the day. Flagged quotes rotate by local calendar day; without
/// any flagged quote a random one is served.
pub async fn quote_of_the_day(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Quote>>> {
    let today = state.config.faal.local_date(Utc::now());
    let (flagged, total) = QuoteRepo::counts(&state.pool).await?;

    let quote = match pick_daily_quote(today, flagged, total) {
        QuotePick::Rotating(index) => QuoteRepo::find_daily_at_index(&state.pool, index).await?,
        QuotePick::Random(index) => QuoteRepo::find_at_index(&state.pool, index).await?,
        QuotePick::Nothing => None,
    };

    let quote = quote.ok_or_else(|| AppError::NotFound("No quotes available".into()))?;
    Ok(Json(DataResponse { data: quote }))
}

/// GET /api/v1/quotes
pub async fn list_quotes(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Quote>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);
    let quotes = QuoteRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: quotes }))
}

/// GET /api/v1/ghazals
///
/// List ghazals ordered by number, optionally filtered by a search term and
/// an inclusive number range.
pub async fn list_ghazals(
    State(state): State<AppState>,
    Query(params): Query<GhazalListParams>,
) -> AppResult<Json<DataResponse<Vec<Ghazal>>>> {
    let search_in = SearchIn::parse(params.search_in.as_deref())?;
    validate_number_range(params.min_number, params.max_number)?;

    let search = GhazalSearch {
        pattern: params.q.as_deref().and_then(contains_pattern),
        search_in,
        min_number: params.min_number,
        max_number: params.max_number,
        limit: clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
        offset: clamp_offset(params.offset),
    };
    let ghazals = GhazalRepo::search(&state.pool, &search).await?;
    Ok(Json(DataResponse { data: ghazals }))
}

/// GET /api/v1/ghazals/{number}
pub async fn get_ghazal(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> AppResult<Json<DataResponse<Ghazal>>> {
    let ghazal = GhazalRepo::find_by_number(&state.pool, number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ghazal number {number} not found")))?;
    Ok(Json(DataResponse { data: ghazal }))
}
