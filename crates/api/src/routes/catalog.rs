use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Public catalog routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", get(catalog::quote_of_the_day))
        .route("/quotes", get(catalog::list_quotes))
        .route("/ghazals", get(catalog::list_ghazals))
        .route("/ghazals/{number}", get(catalog::get_ghazal))
}
