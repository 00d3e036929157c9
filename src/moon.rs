//! # Moon Records
//!
//! The two public answers the library gives, both built on a [`MoonDetail`]:
//!
//! - [`CalendarMoon`]: "what is the Moon doing today?" The civil day in the caller's time
//!   zone reports a major phase if one occurs at any moment of it, plus the countdowns to
//!   the next new and full moon days.
//! - [`ExactMoon`]: "what is the Moon doing right now?" Narrow bands around the major
//!   phases, no day-level priority.
//!
//! For example, the full moon of 2024-08-19 happened at 18:26 UT. Queried at 00:00 UT
//! that day, the calendar moon is a full moon while the exact moon is still waxing gibbous.

use crate::day_phase::day_outlook;
use crate::error::MoonError;
use crate::julian::julian_day;
use crate::moon_phase::{classify_exact, MoonPhase};
use crate::phase::moon_detail;
use crate::MoonDetail;
use chrono::{DateTime, NaiveDate, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Moon phase for a civil day, prioritising major phases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarMoon {
    /// Instant the detail was computed for
    pub instant: DateTime<Utc>,
    /// Civil date of `instant` in the queried time zone
    pub date: NaiveDate,
    /// Offset of the queried time zone from UTC at `instant`, in seconds
    pub utc_offset_seconds: i32,
    pub detail: MoonDetail,
    pub moon_phase: MoonPhase,
    /// `0` if `date` is a full moon day
    pub days_till_full_moon: u32,
    /// `0` if `date` is a new moon day
    pub days_till_new_moon: u32,
}

impl CalendarMoon {
    /// Resolve the calendar moon for `instant` as seen from `tz`.
    pub fn new<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> Result<Self, MoonError> {
        let local = instant.with_timezone(tz);
        let date = local.date_naive();
        let utc_offset_seconds = local.offset().fix().local_minus_utc();
        let outlook = day_outlook(date, tz)?;

        Ok(CalendarMoon {
            instant,
            date,
            utc_offset_seconds,
            detail: moon_detail(julian_day(&instant)),
            moon_phase: outlook.phase,
            days_till_full_moon: outlook.days_till_full_moon,
            days_till_new_moon: outlook.days_till_new_moon,
        })
    }

    pub fn is_full_moon(&self) -> bool {
        self.moon_phase == MoonPhase::FullMoon
    }

    pub fn is_new_moon(&self) -> bool {
        self.moon_phase == MoonPhase::NewMoon
    }
}

/// Moon phase at a precise instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExactMoon {
    pub instant: DateTime<Utc>,
    pub detail: MoonDetail,
    pub exact_moon_phase: MoonPhase,
}

impl ExactMoon {
    pub fn new(instant: DateTime<Utc>) -> Self {
        let detail = moon_detail(julian_day(&instant));
        ExactMoon {
            instant,
            detail,
            exact_moon_phase: classify_exact(detail.phase_fraction),
        }
    }
}

/// Calendar moon for `instant` in the time zone `tz`.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use moon_phase_lib::{calculate_moon_phase, MoonPhase};
///
/// let instant = Utc.with_ymd_and_hms(2024, 6, 22, 0, 0, 0).unwrap();
/// let moon = calculate_moon_phase(instant, &Utc).unwrap();
/// assert_eq!(moon.moon_phase, MoonPhase::FullMoon);
/// assert_eq!(moon.days_till_full_moon, 0);
/// ```
pub fn calculate_moon_phase<Tz: TimeZone>(
    instant: DateTime<Utc>,
    tz: &Tz,
) -> Result<CalendarMoon, MoonError> {
    CalendarMoon::new(instant, tz)
}

/// Exact moon for `instant`.
pub fn calculate_exact_moon_phase(instant: DateTime<Utc>) -> ExactMoon {
    ExactMoon::new(instant)
}
