//! Hafez faal API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, the
//! catalog importer) so integration tests and both binaries can share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod import;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
