//! Request extractors shared by protected handlers.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::ActiveUser`] -- Same, and loads the account, rejecting deleted or deactivated users.

pub mod auth;
