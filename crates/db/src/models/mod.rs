//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts

pub mod daily_faal;
pub mod ghazal;
pub mod quote;
pub mod session;
pub mod user;
