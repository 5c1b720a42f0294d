pub mod accounts;
pub mod error;
pub mod faal;
pub mod import;
pub mod quote_of_day;
pub mod schedule;
pub mod search;
pub mod types;
