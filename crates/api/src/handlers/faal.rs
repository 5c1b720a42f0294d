//! Handlers for the signed-in user's daily faal.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use faal_core::faal::FaalStatus;
use faal_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use faal_db::models::daily_faal::FaalAssignment;
use faal_db::repositories::DailyFaalRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::ActiveUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `GET /dashboard`.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Today's assignment, if one exists.
    pub faal: Option<FaalAssignment>,
    pub faal_available: bool,
    pub status: FaalStatus,
    pub message: Option<String>,
}

/// GET /api/v1/dashboard
///
/// Return today's faal for the caller, assigning one if the gate has opened.
/// Deleted accounts get 401 and deactivated ones 403; neither is assigned.
pub async fn dashboard(
    State(state): State<AppState>,
    ActiveUser(user): ActiveUser,
) -> AppResult<Json<DataResponse<DashboardResponse>>> {
    let outcome = state.assigner.get_or_assign(user.id, Utc::now()).await?;

    match (&outcome.status, &outcome.assignment) {
        (FaalStatus::NewlyAssigned, Some(faal)) => tracing::info!(
            user_id = user.id,
            faal_date = %faal.faal_date,
            ghazal_number = faal.ghazal.ghazal_number,
            "Daily faal assigned",
        ),
        (FaalStatus::CatalogEmpty, _) => {
            tracing::warn!(user_id = user.id, "Daily faal requested with an empty catalog")
        }
        (status, _) => tracing::debug!(user_id = user.id, ?status, "Daily faal served"),
    }

    Ok(Json(DataResponse {
        data: DashboardResponse {
            faal_available: outcome.status.is_available(),
            status: outcome.status,
            faal: outcome.assignment,
            message: outcome.message,
        },
    }))
}

/// GET /api/v1/faal/history
///
/// The caller's past assignments, newest day first.
pub async fn history(
    State(state): State<AppState>,
    ActiveUser(user): ActiveUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<FaalAssignment>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);
    let faals = DailyFaalRepo::list_for_user(&state.pool, user.id, limit, offset).await?;
    Ok(Json(DataResponse { data: faals }))
}
