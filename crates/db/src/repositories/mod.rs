//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod daily_faal_repo;
pub mod ghazal_repo;
pub mod quote_repo;
pub mod session_repo;
pub mod user_repo;

pub use daily_faal_repo::DailyFaalRepo;
pub use ghazal_repo::GhazalRepo;
pub use quote_repo::QuoteRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
