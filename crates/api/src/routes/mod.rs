pub mod auth;
pub mod catalog;
pub mod faal;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/user                                       current user (requires auth)
///
/// /quote                                           quote of the day (public)
/// /quotes                                          list quotes (public)
/// /ghazals                                         list, search ghazals (public)
/// /ghazals/{number}                                one ghazal (public)
///
/// /dashboard                                       today's faal (requires auth)
/// /faal/history                                    past faals (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(catalog::router())
        .merge(faal::router())
}
