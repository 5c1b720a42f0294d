//! Local calendar and time-of-day gate for the daily faal.
//!
//! All instants enter the system as UTC [`Timestamp`]s. The schedule converts
//! them into the operator's local wall time (a fixed UTC offset) to derive the
//! calendar date an assignment belongs to and to decide whether the daily gate
//! has opened.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default local time-of-day at which a new faal becomes available.
pub const DEFAULT_GATE_TIME: NaiveTime = match NaiveTime::from_hms_opt(8, 0, 0) {
    Some(t) => t,
    None => panic!("default gate time out of range"),
};

/// Default offset from UTC in minutes (Asia/Tehran, +03:30).
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 210;

const DEFAULT_OFFSET: FixedOffset = match FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60) {
    Some(o) => o,
    None => panic!("default UTC offset out of range"),
};

/// Largest offset chrono accepts, exclusive (24 hours).
const MAX_OFFSET_MINUTES: i32 = 24 * 60;

// ---------------------------------------------------------------------------
// FaalSchedule
// ---------------------------------------------------------------------------

/// The gate time plus the local offset used to interpret "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaalSchedule {
    gate: NaiveTime,
    offset: FixedOffset,
}

impl Default for FaalSchedule {
    fn default() -> Self {
        Self {
            gate: DEFAULT_GATE_TIME,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl FaalSchedule {
    pub fn new(gate: NaiveTime, offset: FixedOffset) -> Self {
        Self { gate, offset }
    }

    /// Build a schedule from a gate time and an offset expressed in minutes
    /// east of UTC. Offsets must lie strictly within +/- 24 hours.
    pub fn from_offset_minutes(gate: NaiveTime, offset_minutes: i32) -> Result<Self, CoreError> {
        if offset_minutes.abs() >= MAX_OFFSET_MINUTES {
            return Err(CoreError::Validation(format!(
                "UTC offset must be within +/-{MAX_OFFSET_MINUTES} minutes, got {offset_minutes}"
            )));
        }
        let offset = FixedOffset::east_opt(offset_minutes * 60).ok_or_else(|| {
            CoreError::Validation(format!("Invalid UTC offset: {offset_minutes} minutes"))
        })?;
        Ok(Self::new(gate, offset))
    }

    /// Parse a gate time in `HH:MM` or `HH:MM:SS` form.
    pub fn parse_gate(value: &str) -> Result<NaiveTime, CoreError> {
        let value = value.trim();
        NaiveTime::parse_from_str(value, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
            .map_err(|_| {
                CoreError::Validation(format!("Gate time must be HH:MM or HH:MM:SS, got '{value}'"))
            })
    }

    pub fn gate(&self) -> NaiveTime {
        self.gate
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Local wall-clock reading of `now`.
    pub fn local(&self, now: Timestamp) -> NaiveDateTime {
        now.with_timezone(&self.offset).naive_local()
    }

    /// Local calendar date of `now`.
    pub fn local_date(&self, now: Timestamp) -> NaiveDate {
        self.local(now).date()
    }

    /// Whether the gate has opened for the local day containing `now`.
    /// The gate instant itself counts as open.
    pub fn is_open(&self, now: Timestamp) -> bool {
        self.local(now).time() >= self.gate
    }

    /// Human-readable gate time, e.g. `8 A.M.`, `1:30 P.M.` or
    /// `11:59:59 P.M.`. Seconds appear only when non-zero.
    pub fn gate_label(&self) -> String {
        let (is_pm, hour) = self.gate.hour12();
        let suffix = if is_pm { "P.M." } else { "A.M." };
        match (self.gate.minute(), self.gate.second()) {
            (0, 0) => format!("{hour} {suffix}"),
            (minute, 0) => format!("{hour}:{minute:02} {suffix}"),
            (minute, second) => format!("{hour}:{minute:02}:{second:02} {suffix}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn default_is_eight_am_tehran() {
        let schedule = FaalSchedule::default();
        assert_eq!(schedule.gate(), hm(8, 0));
        assert_eq!(schedule.offset().local_minus_utc(), 210 * 60);
    }

    #[test]
    fn gate_closed_one_minute_before_local_eight() {
        let schedule = FaalSchedule::default();
        // 04:29 UTC == 07:59 in +03:30.
        assert!(!schedule.is_open(utc(2024, 5, 1, 4, 29, 59)));
    }

    #[test]
    fn gate_open_exactly_at_local_eight() {
        let schedule = FaalSchedule::default();
        // 04:30 UTC == 08:00 in +03:30.
        assert!(schedule.is_open(utc(2024, 5, 1, 4, 30, 0)));
    }

    #[test]
    fn local_date_rolls_over_before_utc_midnight() {
        let schedule = FaalSchedule::default();
        // 21:00 UTC on Apr 30 is 00:30 on May 1 locally.
        let date = schedule.local_date(utc(2024, 4, 30, 21, 0, 0));
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn zero_offset_schedule_uses_utc_date() {
        let schedule = FaalSchedule::from_offset_minutes(hm(8, 0), 0).unwrap();
        let date = schedule.local_date(utc(2024, 4, 30, 23, 59, 0));
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        assert!(FaalSchedule::from_offset_minutes(hm(8, 0), 24 * 60).is_err());
        assert!(FaalSchedule::from_offset_minutes(hm(8, 0), -24 * 60).is_err());
        assert!(FaalSchedule::from_offset_minutes(hm(8, 0), -300).is_ok());
    }

    #[test]
    fn parse_gate_accepts_both_forms() {
        assert_eq!(FaalSchedule::parse_gate("08:00").unwrap(), hm(8, 0));
        assert_eq!(FaalSchedule::parse_gate(" 13:45:00 ").unwrap(), hm(13, 45));
        assert!(FaalSchedule::parse_gate("8am").is_err());
        assert!(FaalSchedule::parse_gate("25:00").is_err());
    }

    #[test]
    fn gate_label_formats() {
        let label = |t| FaalSchedule::new(t, FixedOffset::east_opt(0).unwrap()).gate_label();
        assert_eq!(label(hm(8, 0)), "8 A.M.");
        assert_eq!(label(hm(13, 30)), "1:30 P.M.");
        assert_eq!(label(hm(0, 0)), "12 A.M.");
        assert_eq!(label(hm(12, 5)), "12:05 P.M.");
    }

    #[test]
    fn gate_label_keeps_seconds() {
        let label = |t| FaalSchedule::new(t, FixedOffset::east_opt(0).unwrap()).gate_label();
        let gate = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        assert_eq!(label(gate), "11:59:59 P.M.");
        assert_eq!(label(NaiveTime::from_hms_opt(8, 0, 30).unwrap()), "8:00:30 A.M.");
    }
}
