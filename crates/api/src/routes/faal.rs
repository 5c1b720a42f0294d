use axum::routing::get;
use axum::Router;

use crate::handlers::faal;
use crate::state::AppState;

/// Daily faal routes. Every handler requires a bearer token.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(faal::dashboard))
        .route("/faal/history", get(faal::history))
}
