//! # Julian Day Conversion
//!
//! All astronomy in this crate runs on a continuous Julian Day axis. Two routes lead
//! there and agree to well under a second:
//!
//! - [`julian_day`]: any `chrono` instant, via the Unix epoch
//!   (`2440587.5` is 1970-01-01 00:00 UT)
//! - [`julian_day_from_civil`]: raw calendar fields plus a UTC offset, via the
//!   proleptic-Gregorian day-number algorithm

use crate::error::MoonError;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};

/// Julian Day of 1970-01-01 12:00 UT
const J1970: f64 = 2_440_588.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Civil date and time-of-day fields, as supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilDateTime {
    /// Midnight at the start of the given date.
    pub fn midnight(year: i32, month: u32, day: u32) -> Self {
        CivilDateTime {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Reject fields that do not name a real calendar instant.
    fn validate(&self) -> Result<(), MoonError> {
        if !(1..=12).contains(&self.month) {
            return Err(MoonError::InvalidCalendarField {
                field: "month",
                value: self.month as i64,
            });
        }
        if NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(MoonError::InvalidCalendarField {
                field: "day",
                value: self.day as i64,
            });
        }
        if NaiveTime::from_hms_opt(self.hour, self.minute, self.second).is_none() {
            let (field, value) = if self.hour > 23 {
                ("hour", self.hour)
            } else if self.minute > 59 {
                ("minute", self.minute)
            } else {
                ("second", self.second)
            };
            return Err(MoonError::InvalidCalendarField {
                field,
                value: value as i64,
            });
        }
        Ok(())
    }
}

/// Julian Day for any time-zone-aware instant.
///
/// The fractional part encodes UT time of day, with `.0` at noon and `.5` at midnight.
pub fn julian_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    instant.timestamp_millis() as f64 / MILLIS_PER_DAY - 0.5 + J1970
}

/// Julian Day for civil fields observed at `utc_offset_seconds` east of Greenwich.
///
/// Uses the standard proleptic-Gregorian day-number algorithm, then subtracts the
/// offset so the result is on the UT axis.
pub fn julian_day_from_civil(
    civil: CivilDateTime,
    utc_offset_seconds: i32,
) -> Result<f64, MoonError> {
    civil.validate()?;

    let month = civil.month as i64;
    let a = (14 - month) / 12;
    let y = civil.year as i64 + 4800 - a;
    let m = month + 12 * a - 3;
    let jdn = civil.day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;

    let day_fraction = (civil.hour as f64 - 12.0) / 24.0
        + civil.minute as f64 / 1440.0
        + civil.second as f64 / 86_400.0;

    Ok(jdn as f64 + day_fraction - utc_offset_seconds as f64 / 86_400.0)
}
