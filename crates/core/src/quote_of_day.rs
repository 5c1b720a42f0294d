//! Quote-of-the-day selection.
//!
//! Quotes flagged `is_daily_quote` take turns, one per local calendar day, in
//! id order. When nothing is flagged the pick falls back to a uniform random
//! draw over every quote.

use chrono::{Datelike, NaiveDate};

use crate::faal::random_index;

/// Which quote row to serve, as a zero-based index into an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotePick {
    /// Index into the flagged quotes ordered by id.
    Rotating(i64),
    /// Index into all quotes ordered by id.
    Random(i64),
    /// There are no quotes at all.
    Nothing,
}

/// Decide which quote to show on `date`.
pub fn pick_daily_quote(date: NaiveDate, flagged_count: i64, total_count: i64) -> QuotePick {
    if flagged_count > 0 {
        let day = i64::from(date.num_days_from_ce());
        return QuotePick::Rotating(day.rem_euclid(flagged_count));
    }
    match random_index(total_count) {
        Some(index) => QuotePick::Random(index),
        None => QuotePick::Nothing,
    }
}
